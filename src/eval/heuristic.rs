//! Heuristic scoring of a candidate destination for the mobile piece
//!
//! The score is a weighted sum of:
//! - Centrality (distance to (5,5))
//! - Threat potential (rays whose first occupant is an enemy)
//! - Capture value of the piece on the destination
//! - Damped value of every other piece the move clears
//! - A fixed bonus when the destination is safe after all removals

use crate::board::{Board, Piece, PieceKind, Pos, Side, ORTHOGONAL};
use crate::rules::{is_attacked_after_removal, AttackRules};

use super::values::{capture_value, ScoreWeight, ScoringProfile};

/// Centre square used for centrality
const CENTER: Pos = Pos::new(5, 5);

/// Distance at which centrality reaches zero
const CENTRALITY_RADIUS: i32 = 10;

/// Score a destination for the mobile piece.
///
/// # Arguments
/// * `board` - Current board
/// * `dest` - Destination square
/// * `is_capture` - Whether an enemy stands on `dest`
/// * `removed` - Every piece the move takes off, the captured one included
/// * `rules` - Attack rules for the safety check
/// * `profile` - Scoring family
#[must_use]
pub fn score_move(
    board: &Board,
    dest: Pos,
    is_capture: bool,
    removed: &[Piece],
    rules: AttackRules,
    profile: ScoringProfile,
) -> f64 {
    let centrality =
        (CENTRALITY_RADIUS - dest.manhattan(CENTER)) as f64 * ScoreWeight::CENTRALITY * profile.centrality_damping();

    let threat = threat_potential(board, dest, removed) as f64 * ScoreWeight::THREAT_POTENTIAL;

    let capture = if is_capture {
        board
            .piece_at(dest)
            .filter(|p| p.is_enemy())
            .map_or(0.0, |target| {
                let value = capture_value(target.kind, profile);
                if target.kind == PieceKind::General {
                    value * ScoreWeight::GENERAL_CAPTURE_MULTIPLIER
                } else {
                    value
                }
            })
    } else {
        0.0
    };

    let removal: f64 = removed
        .iter()
        .filter(|p| p.pos != dest)
        .map(|p| capture_value(p.kind, profile) * ScoreWeight::REMOVAL_DAMPING)
        .sum();

    let safety = if is_attacked_after_removal(board, dest, removed, rules) {
        0.0
    } else {
        ScoreWeight::SAFETY_BONUS
    };

    centrality + threat + capture + removal + safety
}

/// Count rays from `dest` whose first remaining occupant is an enemy.
///
/// Pieces in `removed` and the piece on `dest` itself are ignored, as is
/// the mobile piece (it will have left its square).
pub fn threat_potential(board: &Board, dest: Pos, removed: &[Piece]) -> u32 {
    let mut count = 0;
    for &(dc, dr) in &ORTHOGONAL {
        let mut cur = dest;
        while let Some(next) = cur.offset(dc, dr) {
            cur = next;
            let Some(piece) = board.piece_at(next) else { continue };
            if piece.side == Side::Friendly || removed.iter().any(|r| r.pos == next) {
                continue;
            }
            count += 1;
            break;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> AttackRules {
        AttackRules::default()
    }

    #[test]
    fn test_centrality_on_empty_board() {
        let board = Board::new();
        let centre = score_move(&board, Pos::new(5, 5), false, &[], rules(), ScoringProfile::Simple);
        let corner = score_move(&board, Pos::new(1, 1), false, &[], rules(), ScoringProfile::Simple);
        // 10 * 2 + safety vs (10 - 8) * 2 + safety
        assert_eq!(centre, 20.0 + ScoreWeight::SAFETY_BONUS);
        assert_eq!(corner, 4.0 + ScoreWeight::SAFETY_BONUS);
    }

    #[test]
    fn test_refined_damps_centrality() {
        let board = Board::new();
        let score = score_move(&board, Pos::new(5, 5), false, &[], rules(), ScoringProfile::Refined);
        assert!((score - (16.0 + ScoreWeight::SAFETY_BONUS)).abs() < 1e-9);
    }

    #[test]
    fn test_threat_potential_counts_first_occupant() {
        let mut board = Board::new();
        board.place(PieceKind::Pawn, Pos::new(5, 1)).unwrap();
        board.place(PieceKind::Pawn, Pos::new(5, 2)).unwrap();
        board.place(PieceKind::Horse, Pos::new(8, 5)).unwrap();
        assert_eq!(threat_potential(&board, Pos::new(5, 5), &[]), 2);

        // Clearing the nearer pawn still leaves one behind it
        let removed = [Piece::enemy(PieceKind::Pawn, Pos::new(5, 2))];
        assert_eq!(threat_potential(&board, Pos::new(5, 5), &removed), 2);
    }

    #[test]
    fn test_threat_potential_ignores_mobile() {
        let mut board = Board::with_mobile_at(Pos::new(5, 7));
        board.place(PieceKind::Rook, Pos::new(5, 9)).unwrap();
        assert_eq!(threat_potential(&board, Pos::new(5, 5), &[]), 1);
    }

    #[test]
    fn test_general_capture_dominates() {
        let mut board = Board::new();
        board.place(PieceKind::General, Pos::new(1, 1)).unwrap();
        board.place(PieceKind::Rook, Pos::new(5, 5)).unwrap();
        let general = [Piece::enemy(PieceKind::General, Pos::new(1, 1))];
        let rook = [Piece::enemy(PieceKind::Rook, Pos::new(5, 5))];
        let g = score_move(&board, Pos::new(1, 1), true, &general, rules(), ScoringProfile::Simple);
        let r = score_move(&board, Pos::new(5, 5), true, &rook, rules(), ScoringProfile::Simple);
        assert!(g > r);
        assert!(g >= 100.0 * ScoreWeight::GENERAL_CAPTURE_MULTIPLIER);
    }

    #[test]
    fn test_removal_bonus_is_damped() {
        let mut board = Board::new();
        board.place(PieceKind::Horse, Pos::new(1, 5)).unwrap();
        let removed = [Piece::enemy(PieceKind::Horse, Pos::new(1, 5))];
        let with = score_move(&board, Pos::new(3, 5), false, &removed, rules(), ScoringProfile::Simple);

        let clean = Board::new();
        let without = score_move(&clean, Pos::new(3, 5), false, &[], rules(), ScoringProfile::Simple);
        assert_eq!(with - without, 50.0 * ScoreWeight::REMOVAL_DAMPING);
    }

    #[test]
    fn test_attacked_destination_loses_safety_bonus() {
        let mut board = Board::new();
        board.place(PieceKind::Pawn, Pos::new(5, 4)).unwrap();
        let attacked = score_move(&board, Pos::new(5, 5), false, &[], rules(), ScoringProfile::Simple);
        // Centrality 20, one ray threatened, no safety
        assert_eq!(attacked, 20.0 + ScoreWeight::THREAT_POTENTIAL);
    }
}
