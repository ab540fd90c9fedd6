//! Main engine integrating rules, scoring and selection
//!
//! The engine is a thin, stateless façade over the rule and search modules.
//! Every call is pure with respect to the board it receives, so the UI can
//! call it again after each board change.
//!
//! # Example
//!
//! ```
//! use xiangqi::{Board, Engine, MoveOptions, PieceKind, Pos};
//!
//! let engine = Engine::new();
//! let mut board = Board::new(); // mobile rook at (4, 7)
//! board.place(PieceKind::General, Pos::new(4, 3)).unwrap();
//!
//! let best = engine.compute_best_move(&board, MoveOptions::default());
//! assert_eq!(best.map(|m| m.destination), Some(Pos::new(4, 3)));
//! ```

use log::{debug, info};

use crate::board::{Bitboard, Board, Piece, Pos};
use crate::error::{SandboxError, SandboxResult};
use crate::eval::ScoringProfile;
use crate::rules::{attackers_of, danger_zones, AttackRules};
use crate::search::{generate_candidates, safe_moves, select_best, CandidateMove, MoveOptions, MoveResult};

/// Rule and scoring variant for an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngineConfig {
    pub rules: AttackRules,
    pub profile: ScoringProfile,
}

impl EngineConfig {
    /// Unobstructed rook, lenient cannon, general worth 100
    pub const fn simple() -> Self {
        Self {
            rules: AttackRules::simple(),
            profile: ScoringProfile::Simple,
        }
    }
}

/// Move recommendation engine for the mobile piece.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the blocking rook, strict cannon and refined scoring
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Every empty square attacked by at least one enemy
    pub fn compute_danger_zones(&self, board: &Board) -> Bitboard {
        danger_zones(board, self.config.rules)
    }

    /// Enemies attacking `square`, as seen by the mobile piece standing there
    pub fn compute_attackers(&self, board: &Board, square: Pos) -> Vec<Piece> {
        attackers_of(board, square, self.config.rules)
    }

    /// Safe candidates, best first
    pub fn compute_safe_moves(&self, board: &Board, options: MoveOptions) -> Vec<CandidateMove> {
        safe_moves(board, options, self.config.rules, self.config.profile)
    }

    /// Recommended move, or `None` when there is no mobile piece or no safe move
    pub fn compute_best_move(&self, board: &Board, options: MoveOptions) -> Option<CandidateMove> {
        self.analyze(board, options).ok().map(|result| result.best_move)
    }

    /// Recommended move with selection details
    pub fn analyze(&self, board: &Board, options: MoveOptions) -> SandboxResult<MoveResult> {
        let result = select_best(board, options, self.config.rules, self.config.profile);
        if let Err(err) = &result {
            debug!("no recommendation: {err}");
        }
        result
    }

    /// Pieces a move of the mobile piece to `dest` would take off.
    ///
    /// A reachable destination uses its candidate's removal set, item effects
    /// included. Any other square is a free drop that only takes its occupant.
    pub fn removals_for(&self, board: &Board, dest: Pos, options: MoveOptions) -> Vec<Piece> {
        generate_candidates(board, options)
            .into_iter()
            .find(|c| c.destination == dest)
            .map(|c| c.pieces_removed)
            .unwrap_or_else(|| board.piece_at(dest).filter(|p| p.is_enemy()).copied().into_iter().collect())
    }

    /// Move the mobile piece to `dest`, returning the new board and every
    /// piece taken off.
    ///
    /// # Errors
    /// * `NoMobilePiece` - the board has no friendly piece
    pub fn apply_move(&self, board: &Board, dest: Pos, options: MoveOptions) -> SandboxResult<(Board, Vec<Piece>)> {
        let removed = self.removals_for(board, dest, options);
        let next = board
            .with_mobile_moved(dest, &removed)
            .ok_or(SandboxError::NoMobilePiece)?;
        info!("mobile piece to {} removing {} piece(s)", dest, removed.len());
        Ok((next, removed))
    }

    /// Fresh board with only the mobile piece on its start square
    pub fn reset_board(&self) -> Board {
        Board::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceKind, MOBILE_START};
    use crate::rules::{is_attacked_after_removal, CannonRule};
    use crate::search::Selection;

    fn board_with(mobile: Pos, enemies: &[(PieceKind, u8, u8)]) -> Board {
        let mut board = Board::with_mobile_at(mobile);
        for &(kind, col, row) in enemies {
            board.place(kind, Pos::new(col, row)).unwrap();
        }
        board
    }

    #[test]
    fn test_engine_creation() {
        let engine = Engine::new();
        assert_eq!(engine.config(), EngineConfig::default());
        let simple = Engine::with_config(EngineConfig::simple());
        assert_eq!(simple.config().profile, ScoringProfile::Simple);
    }

    #[test]
    fn test_general_scenario() {
        let engine = Engine::new();
        let board = board_with(Pos::new(4, 7), &[(PieceKind::General, 4, 3)]);

        let zones = engine.compute_danger_zones(&board);
        for (c, r) in [(4, 2), (4, 4), (3, 3), (5, 3)] {
            assert!(zones.get(Pos::new(c, r)));
        }
        assert_eq!(zones.count(), 4);

        let safe: Vec<Pos> = engine
            .compute_safe_moves(&board, MoveOptions::default())
            .iter()
            .map(|c| c.destination)
            .collect();
        assert!(safe.contains(&Pos::new(4, 5)));
        assert!(safe.contains(&Pos::new(4, 6)));
        assert!(!safe.contains(&Pos::new(4, 4)));
    }

    #[test]
    fn test_cannon_scenario_strict_and_lenient() {
        let strict = Engine::new();
        let lenient = Engine::with_config(EngineConfig {
            rules: AttackRules {
                cannon: CannonRule::Lenient,
                ..AttackRules::default()
            },
            ..EngineConfig::default()
        });
        let board = board_with(Pos::new(8, 1), &[(PieceKind::Cannon, 1, 5), (PieceKind::Pawn, 1, 3)]);
        let corner = Pos::new(1, 1);

        assert!(!strict.compute_danger_zones(&board).get(corner));
        assert!(lenient.compute_danger_zones(&board).get(corner));

        let reaches = |engine: &Engine| {
            engine
                .compute_safe_moves(&board, MoveOptions::default())
                .iter()
                .any(|c| c.destination == corner)
        };
        assert!(reaches(&strict));
        assert!(!reaches(&lenient));

        let blocked = board_with(
            Pos::new(8, 9),
            &[(PieceKind::Cannon, 1, 5), (PieceKind::Pawn, 1, 3), (PieceKind::Advisor, 1, 2)],
        );
        assert!(!lenient.compute_danger_zones(&blocked).get(corner));
    }

    #[test]
    fn test_cross_item_scenario() {
        let engine = Engine::new();
        let board = board_with(Pos::new(6, 8), &[(PieceKind::Horse, 6, 2), (PieceKind::Pawn, 2, 6)]);
        let options = MoveOptions {
            remove_cross: true,
            remove_path: false,
        };
        let (next, removed) = engine.apply_move(&board, Pos::new(6, 6), options).unwrap();
        let removed: Vec<Pos> = removed.iter().map(|p| p.pos).collect();
        assert!(removed.contains(&Pos::new(6, 2)));
        assert!(removed.contains(&Pos::new(2, 6)));
        assert_eq!(next.enemy_count(), 0);
        assert_eq!(next.mobile().map(|p| p.pos), Some(Pos::new(6, 6)));
    }

    #[test]
    fn test_best_move_prefers_general() {
        let engine = Engine::new();
        let board = board_with(
            Pos::new(1, 9),
            &[(PieceKind::General, 1, 1), (PieceKind::Rook, 5, 9), (PieceKind::Cannon, 8, 5)],
        );
        let result = engine.analyze(&board, MoveOptions::default()).unwrap();
        assert_eq!(result.selection, Selection::GeneralCapture);
        assert_eq!(result.best_move.destination, Pos::new(1, 1));
    }

    #[test]
    fn test_safe_moves_respect_oracle() {
        let engine = Engine::new();
        let board = board_with(
            Pos::new(3, 6),
            &[
                (PieceKind::Rook, 3, 1),
                (PieceKind::Cannon, 7, 6),
                (PieceKind::Horse, 5, 4),
                (PieceKind::General, 1, 6),
                (PieceKind::Advisor, 4, 8),
            ],
        );
        let options = MoveOptions {
            remove_cross: true,
            remove_path: true,
        };
        for c in engine.compute_safe_moves(&board, options) {
            assert!(!is_attacked_after_removal(
                &board,
                c.destination,
                &c.pieces_removed,
                engine.config().rules
            ));
        }
    }

    #[test]
    fn test_apply_free_drop() {
        let engine = Engine::new();
        let board = board_with(MOBILE_START, &[(PieceKind::Horse, 1, 1)]);
        // (1,1) is not on the rook's lines: a plain drop that takes the horse
        let (next, removed) = engine.apply_move(&board, Pos::new(1, 1), MoveOptions::default()).unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(next.enemy_count(), 0);

        let (next, removed) = engine.apply_move(&board, Pos::new(2, 2), MoveOptions::default()).unwrap();
        assert!(removed.is_empty());
        assert_eq!(next.enemy_count(), 1);
    }

    #[test]
    fn test_no_mobile_piece() {
        let engine = Engine::new();
        let board = Board::empty();
        assert_eq!(engine.compute_best_move(&board, MoveOptions::default()), None);
        assert_eq!(
            engine.analyze(&board, MoveOptions::default()),
            Err(SandboxError::NoMobilePiece)
        );
        assert!(engine.apply_move(&board, Pos::new(1, 1), MoveOptions::default()).is_err());
    }

    #[test]
    fn test_reset_board() {
        let engine = Engine::new();
        let board = engine.reset_board();
        assert_eq!(board.pieces().count(), 1);
        assert_eq!(board.mobile().map(|p| p.pos), Some(MOBILE_START));
    }
}
