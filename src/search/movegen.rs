//! Candidate destinations for the mobile piece
//!
//! The mobile piece moves like a rook: outward along the four orthogonal
//! rays, nearest square first, stopping on the first occupied square. The
//! path item lets it fly through occupied squares instead.

use crate::board::{Board, Piece, Pos, ORTHOGONAL};

/// Item effects toggled by the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOptions {
    /// Clear every enemy on the destination's row and column
    pub remove_cross: bool,
    /// Clear every enemy strictly between origin and destination, and let
    /// the mobile piece pass through occupied squares
    pub remove_path: bool,
}

/// A destination the mobile piece can reach
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateMove {
    pub destination: Pos,
    pub is_capture: bool,
    /// Enemy standing on `destination`, if any
    pub captured: Option<Piece>,
    /// Every piece the move takes off, `captured` first, no duplicates
    pub pieces_removed: Vec<Piece>,
    /// Filled in by the scorer
    pub score: f64,
}

impl CandidateMove {
    /// True when the captured piece is of the given kind
    #[inline]
    pub fn captures(&self, kind: crate::board::PieceKind) -> bool {
        self.captured.is_some_and(|p| p.kind == kind)
    }
}

/// Generate every candidate for the mobile piece, unscored.
///
/// Returns an empty list when there is no mobile piece.
pub fn generate_candidates(board: &Board, options: MoveOptions) -> Vec<CandidateMove> {
    let Some(mobile) = board.mobile() else {
        return Vec::new();
    };
    let origin = mobile.pos;
    let mut candidates = Vec::with_capacity(16);

    for &(dc, dr) in &ORTHOGONAL {
        let mut passed: Vec<Piece> = Vec::new();
        let mut cur = origin;
        while let Some(dest) = cur.offset(dc, dr) {
            cur = dest;
            let captured = board.piece_at(dest).filter(|p| p.is_enemy()).copied();
            candidates.push(build_candidate(board, dest, captured, &passed, options));

            if let Some(occupant) = captured {
                if !options.remove_path {
                    break;
                }
                passed.push(occupant);
            }
        }
    }

    candidates
}

/// Assemble the removal set for one destination
fn build_candidate(
    board: &Board,
    dest: Pos,
    captured: Option<Piece>,
    passed: &[Piece],
    options: MoveOptions,
) -> CandidateMove {
    let mut removed: Vec<Piece> = captured.into_iter().collect();

    if options.remove_cross {
        for enemy in board.enemies().filter(|e| e.pos.shares_line(dest)) {
            push_unique(&mut removed, *enemy);
        }
    }
    if options.remove_path {
        for &enemy in passed {
            push_unique(&mut removed, enemy);
        }
    }

    CandidateMove {
        destination: dest,
        is_capture: captured.is_some(),
        captured,
        pieces_removed: removed,
        score: 0.0,
    }
}

#[inline]
fn push_unique(removed: &mut Vec<Piece>, piece: Piece) {
    if !removed.iter().any(|r| r.pos == piece.pos) {
        removed.push(piece);
    }
}
