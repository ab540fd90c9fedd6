//! Best-move selection
//!
//! 1. Generate candidates and keep only the safe ones
//! 2. Score and sort them, best first (ties keep generation order)
//! 3. Prefer any safe capture of a general over the top score
//! 4. After a general capture, look one step ahead from the general's
//!    square and credit part of the best follow-up to the chosen move

use log::debug;

use crate::board::{Board, PieceKind, Pos};
use crate::error::{SandboxError, SandboxResult};
use crate::eval::{score_move, ScoreWeight, ScoringProfile};
use crate::rules::{is_attacked_after_removal, AttackRules};

use super::movegen::{generate_candidates, CandidateMove, MoveOptions};

/// How the recommended move was chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// A safe capture of a general
    GeneralCapture,
    /// Highest-scored safe candidate
    TopScore,
}

/// Recommended move with selection metadata
#[derive(Debug, Clone, PartialEq)]
pub struct MoveResult {
    /// Chosen move; its score includes any follow-up credit
    pub best_move: CandidateMove,
    pub selection: Selection,
    /// Follow-up square after a general capture
    pub follow_up: Option<Pos>,
    /// Number of safe candidates considered
    pub safe_moves: usize,
}

/// Safe candidates, scored and sorted best first.
pub fn safe_moves(
    board: &Board,
    options: MoveOptions,
    rules: AttackRules,
    profile: ScoringProfile,
) -> Vec<CandidateMove> {
    let mut moves: Vec<CandidateMove> = generate_candidates(board, options)
        .into_iter()
        .filter(|c| !is_attacked_after_removal(board, c.destination, &c.pieces_removed, rules))
        .map(|mut c| {
            c.score = score_move(board, c.destination, c.is_capture, &c.pieces_removed, rules, profile);
            c
        })
        .collect();

    // Stable: equal scores stay in generation order
    moves.sort_by(|a, b| b.score.total_cmp(&a.score));
    moves
}

/// Pick the recommended move.
///
/// # Errors
/// * `NoMobilePiece` - the board has no friendly piece
/// * `NoSafeMove` - every candidate is attacked
pub fn select_best(
    board: &Board,
    options: MoveOptions,
    rules: AttackRules,
    profile: ScoringProfile,
) -> SandboxResult<MoveResult> {
    if board.mobile().is_none() {
        return Err(SandboxError::NoMobilePiece);
    }

    let moves = safe_moves(board, options, rules, profile);
    let safe_count = moves.len();

    let general_capture = moves.iter().position(|c| c.captures(PieceKind::General));
    let (index, selection) = match general_capture {
        Some(i) => (i, Selection::GeneralCapture),
        None if safe_count > 0 => (0, Selection::TopScore),
        None => return Err(SandboxError::NoSafeMove),
    };
    let mut best_move = moves.into_iter().nth(index).ok_or(SandboxError::NoSafeMove)?;

    let mut follow_up = None;
    if selection == Selection::GeneralCapture {
        if let Some((square, notional)) = best_follow_up(board, &best_move, options, rules, profile) {
            best_move.score += notional * ScoreWeight::FOLLOW_UP_SHARE;
            follow_up = Some(square);
        }
    }

    debug!(
        "best move {} ({:?}) score {:.1} from {} safe candidates",
        best_move.destination, selection, best_move.score, safe_count
    );

    Ok(MoveResult {
        best_move,
        selection,
        follow_up,
        safe_moves: safe_count,
    })
}

/// Follow-up after capturing a general.
///
/// From the general's former square, expand the four rays the same way the
/// move generator does (flying through pieces when the path item is on) and
/// return the square whose row and column hold the most remaining enemies,
/// with its notional score. `None` if no enemy is left in reach of any such
/// line.
fn best_follow_up(
    board: &Board,
    chosen: &CandidateMove,
    options: MoveOptions,
    rules: AttackRules,
    profile: ScoringProfile,
) -> Option<(Pos, f64)> {
    let after = board.with_mobile_moved(chosen.destination, &chosen.pieces_removed)?;
    let follow_options = MoveOptions {
        remove_cross: true,
        ..options
    };

    let mut best: Option<(usize, CandidateMove)> = None;
    for candidate in generate_candidates(&after, follow_options) {
        let on_lines = after
            .enemies()
            .filter(|e| e.pos.shares_line(candidate.destination))
            .count();
        if on_lines > best.as_ref().map_or(0, |(n, _)| *n) {
            best = Some((on_lines, candidate));
        }
    }

    let (_, next) = best?;
    let notional = score_move(&after, next.destination, next.is_capture, &next.pieces_removed, rules, profile);
    Some((next.destination, notional))
}
