//! Board structure: the occupancy model

use log::debug;
use rand::Rng;

use super::bitboard::Bitboard;
use super::{Piece, PieceKind, PieceState, Pos, Side, BOARD_COLS, BOARD_ROWS};
use crate::error::{SandboxError, SandboxResult};

/// Square the mobile rook starts on
pub const MOBILE_START: Pos = Pos::new(4, 7);

/// Attempts made by `place_random` before giving up
pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

/// Occupancy for one session: a collection of pieces, at most one per square.
///
/// Marked pieces are kept only so the renderer can fade them out; every
/// query below treats them as absent.
#[derive(Debug, Clone)]
pub struct Board {
    pieces: Vec<Piece>,
}

impl Board {
    /// Fresh board holding only the mobile piece on its start square
    pub fn new() -> Self {
        Self::with_mobile_at(MOBILE_START)
    }

    pub fn with_mobile_at(pos: Pos) -> Self {
        Self {
            pieces: vec![Piece::new(PieceKind::Rook, Side::Friendly, pos)],
        }
    }

    /// Board with no pieces at all
    pub fn empty() -> Self {
        Self { pieces: Vec::new() }
    }

    /// Live piece at position
    #[inline]
    pub fn piece_at(&self, pos: Pos) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.is_alive() && p.pos == pos)
    }

    #[inline]
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.piece_at(pos).is_some()
    }

    /// Occupancy mask of live pieces
    pub fn occupied(&self) -> Bitboard {
        self.pieces().map(|p| p.pos).collect()
    }

    /// All live pieces
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter().filter(|p| p.is_alive())
    }

    /// Live pieces of one side
    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> {
        self.pieces().filter(move |p| p.side == side)
    }

    pub fn enemies(&self) -> impl Iterator<Item = &Piece> {
        self.pieces_of(Side::Enemy)
    }

    #[inline]
    pub fn enemy_count(&self) -> usize {
        self.enemies().count()
    }

    /// The friendly piece, if any
    #[inline]
    pub fn mobile(&self) -> Option<&Piece> {
        self.pieces_of(Side::Friendly).next()
    }

    /// Every stored piece, including those waiting for removal (rendering only)
    pub fn all_pieces_including_marked(&self) -> &[Piece] {
        &self.pieces
    }

    /// Add an enemy piece at `pos`
    pub fn place(&mut self, kind: PieceKind, pos: Pos) -> SandboxResult<()> {
        if self.is_occupied(pos) {
            return Err(SandboxError::Occupied(pos));
        }
        // A marked piece on this square is finished with
        self.pieces.retain(|p| p.pos != pos);
        self.pieces.push(Piece::enemy(kind, pos));
        debug!("placed {} at {}", kind.name(), pos);
        Ok(())
    }

    /// Add an enemy piece on a uniformly sampled unoccupied square.
    ///
    /// Samples at most `MAX_PLACEMENT_ATTEMPTS` times.
    pub fn place_random<R: Rng + ?Sized>(&mut self, kind: PieceKind, rng: &mut R) -> SandboxResult<Pos> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let col = rng.random_range(1..=BOARD_COLS as u8);
            let row = rng.random_range(1..=BOARD_ROWS as u8);
            let pos = Pos::new(col, row);
            if !self.is_occupied(pos) {
                self.place(kind, pos)?;
                return Ok(pos);
            }
        }
        Err(SandboxError::NoFreeSquare {
            attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    /// Move any live piece from `from` to `to`, replacing an enemy on `to`.
    ///
    /// Returns the replaced piece. Enemies cannot land on the mobile piece.
    pub fn relocate(&mut self, from: Pos, to: Pos) -> SandboxResult<Option<Piece>> {
        self.piece_at(from).ok_or(SandboxError::NoPieceAt(from))?;
        if from == to {
            return Ok(None);
        }

        let captured = match self.piece_at(to) {
            Some(target) if target.side == Side::Friendly => {
                return Err(SandboxError::MobileCannotBeCaptured);
            }
            Some(target) => Some(*target),
            None => None,
        };

        self.pieces.retain(|p| p.pos != to);
        if let Some(piece) = self.pieces.iter_mut().find(|p| p.is_alive() && p.pos == from) {
            piece.pos = to;
        }
        Ok(captured)
    }

    /// Put the mobile piece on `dest`, marking `removed` for the second
    /// phase of the capture. A refused move leaves the board untouched.
    ///
    /// Marked pieces on `dest` stay in place so they can finish fading.
    ///
    /// # Errors
    /// * `NoMobilePiece` - the board has no friendly piece
    /// * `Occupied` - `dest` holds a live piece that is not in `removed`
    pub fn move_mobile(&mut self, dest: Pos, removed: &[Piece]) -> SandboxResult<()> {
        let origin = self.mobile().ok_or(SandboxError::NoMobilePiece)?.pos;
        let cleared = removed.iter().any(|r| r.pos == dest);
        if origin != dest && !cleared && self.is_occupied(dest) {
            return Err(SandboxError::Occupied(dest));
        }

        for piece in removed {
            self.mark_for_removal(piece.pos);
        }
        if let Some(piece) = self
            .pieces
            .iter_mut()
            .find(|p| p.is_alive() && p.side == Side::Friendly)
        {
            piece.pos = dest;
        }
        Ok(())
    }

    /// Physically remove the live piece at `pos`
    pub fn remove(&mut self, pos: Pos) -> Option<Piece> {
        let idx = self.pieces.iter().position(|p| p.is_alive() && p.pos == pos)?;
        Some(self.pieces.remove(idx))
    }

    /// First phase of a capture: the piece stays stored but leaves every query
    pub fn mark_for_removal(&mut self, pos: Pos) -> Option<Piece> {
        let piece = self.pieces.iter_mut().find(|p| p.is_alive() && p.pos == pos)?;
        piece.state = PieceState::MarkedForRemoval;
        Some(*piece)
    }

    /// Second phase of a capture: drop everything marked
    pub fn purge_marked(&mut self) -> usize {
        let before = self.pieces.len();
        self.pieces.retain(|p| p.is_alive());
        before - self.pieces.len()
    }

    #[inline]
    pub fn has_marked(&self) -> bool {
        self.pieces.iter().any(|p| !p.is_alive())
    }

    /// Remove every enemy; the mobile piece keeps its square
    pub fn clear_enemies(&mut self) {
        self.pieces.retain(|p| p.side == Side::Friendly && p.is_alive());
    }

    /// Move the mobile piece to `dest` and drop `removed` outright.
    ///
    /// Used for hypothetical boards; returns `None` when there is no mobile piece.
    pub fn with_mobile_moved(&self, dest: Pos, removed: &[Piece]) -> Option<Board> {
        let origin = self.mobile()?.pos;
        let mut next = self.clone();
        next.pieces.retain(|p| {
            if !p.is_alive() {
                return false;
            }
            p.side == Side::Friendly || (p.pos != dest && !removed.iter().any(|r| r.pos == p.pos))
        });
        for piece in next.pieces.iter_mut().filter(|p| p.pos == origin) {
            piece.pos = dest;
        }
        Some(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
