//! Bitboard square sets

use super::{Pos, TOTAL_CELLS};

/// Square set over the 72 cells, one bit per cell in a single `u128`.
/// Bits at index >= 72 are never set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Bitboard {
    bits: u128,
}

impl Bitboard {
    /// Create empty bitboard
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    #[inline]
    pub fn set(&mut self, pos: Pos) {
        self.bits |= 1u128 << pos.to_index();
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> bool {
        (self.bits >> pos.to_index()) & 1 == 1
    }

    /// Count total set bits (popcount)
    #[inline]
    pub fn count(&self) -> u32 {
        self.bits.count_ones()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Iterate over set positions in index order
    pub fn iter_ones(&self) -> BitboardIter {
        BitboardIter { bits: self.bits }
    }
}

impl FromIterator<Pos> for Bitboard {
    fn from_iter<I: IntoIterator<Item = Pos>>(iter: I) -> Self {
        let mut bb = Bitboard::new();
        for pos in iter {
            bb.set(pos);
        }
        bb
    }
}

/// Iterator over set bits in a Bitboard
pub struct BitboardIter {
    bits: u128,
}

impl Iterator for BitboardIter {
    type Item = Pos;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let idx = self.bits.trailing_zeros() as usize;
        // Clear the bit we just found
        self.bits &= self.bits - 1;

        if idx < TOTAL_CELLS {
            Some(Pos::from_index(idx))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get() {
        let mut bb = Bitboard::new();
        let pos = Pos::new(8, 9);
        assert!(bb.is_empty());
        assert!(!bb.get(pos));
        bb.set(pos);
        bb.set(pos);
        assert!(bb.get(pos));
        assert_eq!(bb.count(), 1);
    }

    #[test]
    fn test_iter_ones_in_index_order() {
        let bb: Bitboard = [Pos::new(3, 4), Pos::new(1, 1), Pos::new(8, 9)]
            .into_iter()
            .collect();
        let positions: Vec<Pos> = bb.iter_ones().collect();
        assert_eq!(positions, vec![Pos::new(1, 1), Pos::new(3, 4), Pos::new(8, 9)]);
    }

    #[test]
    fn test_collect_dedups() {
        let bb: Bitboard = [Pos::new(1, 1), Pos::new(2, 2), Pos::new(1, 1)].into_iter().collect();
        assert_eq!(bb.count(), 2);
    }
}
