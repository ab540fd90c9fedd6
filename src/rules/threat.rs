//! Threat oracle: is a square attacked by any enemy?
//!
//! Queries ask whether the mobile piece would be safe standing on a square.
//! So the mobile piece never blocks or screens for its own destination. The
//! queried square counts as occupied only when something stands there now:
//! a capture target or the mobile piece itself. An empty destination stays
//! empty, so a strict cannon does not reach it.

use crate::board::{Bitboard, Board, Piece, Pos, Side};

use super::attacks::attacked_squares;
use super::AttackRules;

/// True iff any live enemy attacks `square`.
#[inline]
pub fn is_attacked(board: &Board, square: Pos, rules: AttackRules) -> bool {
    is_attacked_after_removal(board, square, &[], rules)
}

/// Same as [`is_attacked`], evaluated with `removed` taken off the board.
///
/// Used to judge a move that captures or clears pieces as it lands.
pub fn is_attacked_after_removal(board: &Board, square: Pos, removed: &[Piece], rules: AttackRules) -> bool {
    let occupied = hypothetical_occupancy(board, square, removed);
    remaining_enemies(board, square, removed)
        .any(|enemy| attacked_squares(enemy.kind, enemy.pos, &occupied, rules).get(square))
}

/// Enemies that attack `square`, in board order
pub fn attackers_of(board: &Board, square: Pos, rules: AttackRules) -> Vec<Piece> {
    let occupied = hypothetical_occupancy(board, square, &[]);
    remaining_enemies(board, square, &[])
        .filter(|enemy| attacked_squares(enemy.kind, enemy.pos, &occupied, rules).get(square))
        .copied()
        .collect()
}

/// Every empty square attacked by at least one enemy
pub fn danger_zones(board: &Board, rules: AttackRules) -> Bitboard {
    Pos::all()
        .filter(|&pos| !board.is_occupied(pos))
        .filter(|&pos| is_attacked(board, pos, rules))
        .collect()
}

/// Occupancy without the mobile piece and `removed`.
/// An occupied `square` stays filled: the mobile piece lands there.
fn hypothetical_occupancy(board: &Board, square: Pos, removed: &[Piece]) -> Bitboard {
    let mut occupied = Bitboard::new();
    for piece in board.pieces() {
        if piece.side == Side::Friendly || is_removed(piece, removed) {
            continue;
        }
        occupied.set(piece.pos);
    }
    if board.is_occupied(square) {
        occupied.set(square);
    }
    occupied
}

fn remaining_enemies<'a>(board: &'a Board, square: Pos, removed: &'a [Piece]) -> impl Iterator<Item = &'a Piece> {
    board
        .enemies()
        .filter(move |enemy| enemy.pos != square && !is_removed(enemy, removed))
}

#[inline]
fn is_removed(piece: &Piece, removed: &[Piece]) -> bool {
    removed.iter().any(|r| r.pos == piece.pos)
}
