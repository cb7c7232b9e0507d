//! Bitboard type and operations.

use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

use super::piece::Color;
use super::square::Square;

/// A 64-bit set of squares, bit `n` being square index `n` (a1 = bit 0).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Bitboard(pub u64);

impl Bitboard {
    pub const FILE_A: Bitboard = Bitboard(0x0101_0101_0101_0101);
    pub const FILE_H: Bitboard = Bitboard(0x8080_8080_8080_8080);

    pub const RANK_1: Bitboard = Bitboard(0x0000_0000_0000_00FF);
    pub const RANK_8: Bitboard = Bitboard(0xFF00_0000_0000_0000);

    pub const EMPTY: Bitboard = Bitboard(0);
    pub const ALL: Bitboard = Bitboard(!0);

    /// d4, e4, d5, e5
    pub const CENTER: Bitboard = Bitboard(0x0000_0018_1800_0000);
    /// c3-f6 block
    pub const EXTENDED_CENTER: Bitboard = Bitboard(0x0000_3C3C_3C3C_0000);
}

impl Bitboard {
    #[inline]
    #[must_use]
    pub const fn from_square(sq: Square) -> Self {
        Bitboard(1 << sq.index())
    }

    #[inline]
    #[must_use]
    pub fn iter(self) -> BitboardIter {
        BitboardIter(self.0)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn any(self) -> bool {
        self.0 != 0
    }

    /// Number of set squares.
    #[inline]
    #[must_use]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, sq: Square) -> bool {
        self.0 & (1 << sq.index()) != 0
    }

    #[inline]
    pub fn set(&mut self, sq: Square) {
        self.0 |= 1 << sq.index();
    }

    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.0 &= !(1 << sq.index());
    }

    /// Lowest set square, if any.
    #[inline]
    #[must_use]
    pub const fn lsb(self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            Some(Square::from_index(self.0.trailing_zeros() as usize))
        }
    }

    #[inline]
    #[must_use]
    pub const fn file_mask(file: usize) -> Self {
        Bitboard(Self::FILE_A.0 << file)
    }

    #[inline]
    #[must_use]
    pub const fn rank_mask(rank: usize) -> Self {
        Bitboard(Self::RANK_1.0 << (rank * 8))
    }

    /// Files directly left and right of `file`.
    #[must_use]
    pub const fn adjacent_files(file: usize) -> Self {
        let mut mask = 0;
        if file > 0 {
            mask |= Self::FILE_A.0 << (file - 1);
        }
        if file < 7 {
            mask |= Self::FILE_A.0 << (file + 1);
        }
        Bitboard(mask)
    }

    /// Every rank strictly in front of `rank` from `color`'s point of view.
    #[must_use]
    pub const fn ranks_ahead(color: Color, rank: usize) -> Self {
        match color {
            Color::White => {
                if rank >= 7 {
                    Bitboard(0)
                } else {
                    Bitboard(!0u64 << (8 * (rank + 1)))
                }
            }
            Color::Black => {
                if rank == 0 {
                    Bitboard(0)
                } else {
                    Bitboard(!0u64 >> (8 * (8 - rank)))
                }
            }
        }
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitXor for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn bitxor(self, rhs: Self) -> Self {
        Bitboard(self.0 ^ rhs.0)
    }
}

impl Not for Bitboard {
    type Output = Bitboard;

    #[inline]
    fn not(self) -> Self {
        Bitboard(!self.0)
    }
}

impl BitAndAssign for Bitboard {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl BitOrAssign for Bitboard {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitXorAssign for Bitboard {
    #[inline]
    fn bitxor_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

/// Iterates the set squares of a bitboard, lowest first.
pub struct BitboardIter(u64);

impl Iterator for BitboardIter {
    type Item = Square;

    #[inline]
    fn next(&mut self) -> Option<Square> {
        if self.0 == 0 {
            return None;
        }
        let idx = self.0.trailing_zeros() as usize;
        self.0 &= self.0 - 1;
        Some(Square::from_index(idx))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl IntoIterator for Bitboard {
    type Item = Square;
    type IntoIter = BitboardIter;

    fn into_iter(self) -> BitboardIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_yields_squares_in_order() {
        let bb = Bitboard(0b1000_0101);
        let squares: Vec<usize> = bb.iter().map(Square::index).collect();
        assert_eq!(squares, vec![0, 2, 7]);
    }

    #[test]
    fn ranks_ahead_masks() {
        assert_eq!(
            Bitboard::ranks_ahead(Color::White, 6),
            Bitboard::rank_mask(7)
        );
        assert_eq!(
            Bitboard::ranks_ahead(Color::Black, 1),
            Bitboard::rank_mask(0)
        );
        assert!(Bitboard::ranks_ahead(Color::White, 7).is_empty());
        assert!(Bitboard::ranks_ahead(Color::Black, 0).is_empty());
    }

    #[test]
    fn center_masks() {
        assert_eq!(Bitboard::CENTER.popcount(), 4);
        assert_eq!(Bitboard::EXTENDED_CENTER.popcount(), 16);
        assert!(Bitboard::CENTER.contains("e4".parse().unwrap()));
        assert!(Bitboard::EXTENDED_CENTER.contains("c3".parse().unwrap()));
        assert!(Bitboard::EXTENDED_CENTER.contains("f6".parse().unwrap()));
    }
}
