//! Session state for the sandbox GUI

use std::time::{Duration, Instant};

use log::{info, warn};

use crate::board::{Bitboard, Board, Piece, PieceKind, Pos, Side};
use crate::error::{SandboxError, SandboxResult};
use crate::search::{CandidateMove, MoveOptions, MoveResult};
use crate::{Engine, EngineConfig};

/// How long captured pieces fade before they are purged
const CAPTURE_FADE: Duration = Duration::from_millis(400);

/// Fading capture; pieces are marked when it starts and purged when it ends
pub struct CaptureAnimation {
    pub positions: Vec<Pos>,
    start: Instant,
    duration: Duration,
}

impl CaptureAnimation {
    pub fn new(positions: Vec<Pos>) -> Self {
        Self {
            positions,
            start: Instant::now(),
            duration: CAPTURE_FADE,
        }
    }

    /// 0.0 at start, 1.0 when done
    pub fn progress(&self) -> f32 {
        (self.start.elapsed().as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_complete(&self) -> bool {
        self.start.elapsed() >= self.duration
    }
}

/// Engine output for the current board
pub struct Analysis {
    pub danger_zones: Bitboard,
    pub safe_moves: Vec<CandidateMove>,
    pub result: SandboxResult<MoveResult>,
    /// Enemies attacking the mobile piece where it stands now
    pub mobile_attackers: Vec<Piece>,
}

impl Analysis {
    fn compute(engine: &Engine, board: &Board, options: MoveOptions) -> Self {
        Self {
            danger_zones: engine.compute_danger_zones(board),
            safe_moves: engine.compute_safe_moves(board, options),
            result: engine.analyze(board, options),
            mobile_attackers: board
                .mobile()
                .map(|m| engine.compute_attackers(board, m.pos))
                .unwrap_or_default(),
        }
    }

    /// Squares the mobile piece can move to safely
    pub fn safe_squares(&self) -> Bitboard {
        self.safe_moves.iter().map(|c| c.destination).collect()
    }

    pub fn best_move(&self) -> Option<&CandidateMove> {
        self.result.as_ref().ok().map(|r| &r.best_move)
    }
}

/// Everything one sandbox session owns. Every mutation re-runs the engine.
pub struct SandboxState {
    pub board: Board,
    pub options: MoveOptions,
    /// Kind placed by clicks and "Add random"
    pub selected_kind: PieceKind,
    pub show_zones: bool,
    pub show_safe: bool,
    pub capture_animation: Option<CaptureAnimation>,
    pub analysis: Analysis,
    pub last_move: Option<Pos>,
    pub message: Option<String>,
    engine: Engine,
}

impl SandboxState {
    pub fn new(config: EngineConfig) -> Self {
        let engine = Engine::with_config(config);
        let board = engine.reset_board();
        let options = MoveOptions::default();
        let analysis = Analysis::compute(&engine, &board, options);
        Self {
            board,
            options,
            selected_kind: PieceKind::Rook,
            show_zones: true,
            show_safe: true,
            capture_animation: None,
            analysis,
            last_move: None,
            message: None,
            engine,
        }
    }

    #[inline]
    pub fn config(&self) -> EngineConfig {
        self.engine.config()
    }

    pub fn set_config(&mut self, config: EngineConfig) {
        if config != self.engine.config() {
            info!("engine config changed to {:?}", config);
            self.engine = Engine::with_config(config);
            self.refresh();
        }
    }

    pub fn set_options(&mut self, options: MoveOptions) {
        if options != self.options {
            self.options = options;
            self.refresh();
        }
    }

    /// Re-run the engine on the current board
    pub fn refresh(&mut self) {
        self.analysis = Analysis::compute(&self.engine, &self.board, self.options);
    }

    /// Report the outcome of a user action
    fn report<T>(&mut self, result: SandboxResult<T>) -> Option<T> {
        match result {
            Ok(value) => {
                self.message = None;
                self.refresh();
                Some(value)
            }
            Err(err) => {
                warn!("{err}");
                self.message = Some(err.to_string());
                None
            }
        }
    }

    /// Place the selected kind on `pos`
    pub fn place_selected(&mut self, pos: Pos) {
        let result = self.board.place(self.selected_kind, pos);
        self.report(result);
    }

    /// Place the selected kind on a random free square
    pub fn add_random(&mut self) -> Option<Pos> {
        let mut rng = rand::rng();
        let result = self.board.place_random(self.selected_kind, &mut rng);
        let placed = self.report(result);
        if let Some(pos) = placed {
            info!("added {} at {}", self.selected_kind.name(), pos);
        }
        placed
    }

    /// Take an enemy off the board
    pub fn remove_at(&mut self, pos: Pos) {
        let result = match self.board.piece_at(pos).map(|p| p.side) {
            Some(Side::Enemy) => Ok(self.board.remove(pos)),
            Some(Side::Friendly) => Err(SandboxError::MobileCannotBeCaptured),
            None => Err(SandboxError::NoPieceAt(pos)),
        };
        self.report(result);
    }

    /// Drag-and-drop of any piece
    pub fn drop_piece(&mut self, from: Pos, to: Pos) {
        let is_mobile = self.board.mobile().is_some_and(|m| m.pos == from);
        if is_mobile {
            self.move_mobile(to);
        } else {
            let result = self.board.relocate(from, to);
            self.report(result);
        }
    }

    /// Move the mobile piece, applying capture and item effects.
    ///
    /// Removed pieces are marked straight away and purged by `tick` once the
    /// capture animation has finished.
    pub fn move_mobile(&mut self, dest: Pos) {
        self.finish_animation();
        let removed = self.engine.removals_for(&self.board, dest, self.options);
        let result = self.board.move_mobile(dest, &removed);
        if self.report(result).is_none() {
            return;
        }

        if !removed.is_empty() {
            info!("captured {} piece(s)", removed.len());
            self.capture_animation = Some(CaptureAnimation::new(removed.iter().map(|p| p.pos).collect()));
        }
        self.last_move = Some(dest);
    }

    /// Play the recommended move, if any
    pub fn play_best(&mut self) {
        match self.analysis.best_move().map(|m| m.destination) {
            Some(dest) => self.move_mobile(dest),
            None => {
                let reason = match &self.analysis.result {
                    Err(err) => err.to_string(),
                    Ok(_) => SandboxError::NoSafeMove.to_string(),
                };
                self.message = Some(reason);
            }
        }
    }

    /// Purge captured pieces once their animation is over
    pub fn tick(&mut self) {
        if self.capture_animation.as_ref().is_some_and(|a| a.is_complete()) {
            self.finish_animation();
        }
    }

    fn finish_animation(&mut self) {
        if self.capture_animation.take().is_some() || self.board.has_marked() {
            self.board.purge_marked();
        }
    }

    /// Remove every enemy, keeping the mobile piece where it is
    pub fn clear_enemies(&mut self) {
        self.capture_animation = None;
        self.board.clear_enemies();
        self.last_move = None;
        self.message = None;
        self.refresh();
    }

    /// Start over with only the mobile piece on its start square
    pub fn new_board(&mut self) {
        self.capture_animation = None;
        self.board = self.engine.reset_board();
        self.last_move = None;
        self.message = None;
        self.refresh();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::MOBILE_START;

    #[test]
    fn test_capture_is_two_phase() {
        let mut state = SandboxState::new(EngineConfig::default());
        state.board.place(PieceKind::Horse, Pos::new(4, 3)).unwrap();
        state.refresh();

        state.move_mobile(Pos::new(4, 3));
        // Marked: gone from every query, still stored
        assert_eq!(state.board.enemy_count(), 0);
        assert_eq!(state.board.all_pieces_including_marked().len(), 2);
        assert!(state.capture_animation.is_some());

        state.finish_animation();
        assert_eq!(state.board.all_pieces_including_marked().len(), 1);
        assert_eq!(state.board.mobile().map(|p| p.pos), Some(Pos::new(4, 3)));
    }

    #[test]
    fn test_failed_move_keeps_pieces() {
        let mut state = SandboxState::new(EngineConfig::default());
        state.board = Board::empty();
        state.board.place(PieceKind::Horse, Pos::new(4, 3)).unwrap();
        state.refresh();

        state.move_mobile(Pos::new(4, 3));
        assert!(state.message.is_some());
        assert!(state.capture_animation.is_none());
        assert!(!state.board.has_marked());
        assert_eq!(state.board.enemy_count(), 1);
        assert_eq!(state.last_move, None);
    }

    #[test]
    fn test_mobile_attackers_listed() {
        let mut state = SandboxState::new(EngineConfig::default());
        assert!(state.analysis.mobile_attackers.is_empty());

        state.board.place(PieceKind::Rook, Pos::new(4, 1)).unwrap();
        state.refresh();
        let attackers: Vec<Pos> = state.analysis.mobile_attackers.iter().map(|p| p.pos).collect();
        assert_eq!(attackers, vec![Pos::new(4, 1)]);
    }

    #[test]
    fn test_item_toggle_refreshes_analysis() {
        let mut state = SandboxState::new(EngineConfig::default());
        state.board.place(PieceKind::Pawn, Pos::new(4, 4)).unwrap();
        state.refresh();
        let before = state.analysis.safe_moves.len();

        state.set_options(MoveOptions {
            remove_cross: false,
            remove_path: true,
        });
        assert!(state.analysis.safe_moves.len() > before);
    }

    #[test]
    fn test_drop_enemy_on_mobile_reports_error() {
        let mut state = SandboxState::new(EngineConfig::default());
        state.board.place(PieceKind::Pawn, Pos::new(1, 1)).unwrap();
        state.drop_piece(Pos::new(1, 1), MOBILE_START);
        assert!(state.message.is_some());
        assert_eq!(state.board.mobile().map(|p| p.pos), Some(MOBILE_START));
    }

    #[test]
    fn test_clear_and_new_board() {
        let mut state = SandboxState::new(EngineConfig::default());
        state.move_mobile(Pos::new(4, 2));
        state.board.place(PieceKind::General, Pos::new(8, 8)).unwrap();

        state.clear_enemies();
        assert_eq!(state.board.enemy_count(), 0);
        assert_eq!(state.board.mobile().map(|p| p.pos), Some(Pos::new(4, 2)));

        state.new_board();
        assert_eq!(state.board.mobile().map(|p| p.pos), Some(MOBILE_START));
    }
}
