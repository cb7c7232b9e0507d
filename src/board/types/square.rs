//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, stored as a 0..64 index (a1 = 0, h8 = 63).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(u8);

impl Square {
    /// Create a square from rank and file with bounds checking.
    #[must_use]
    pub const fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Create a square from a 0..64 index.
    ///
    /// # Panics
    /// Debug builds panic on an out-of-range index.
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        debug_assert!(index < 64);
        Square(index as u8)
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Rank, 0-7 where 0 = rank 1.
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        (self.0 >> 3) as usize
    }

    /// File, 0-7 where 0 = file a.
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        (self.0 & 7) as usize
    }

    /// The square `(rank_delta, file_delta)` away, or `None` off the board.
    #[inline]
    #[must_use]
    pub const fn offset(self, rank_delta: i32, file_delta: i32) -> Option<Self> {
        let rank = self.rank() as i32 + rank_delta;
        let file = self.file() as i32 + file_delta;
        if rank >= 0 && rank < 8 && file >= 0 && file < 8 {
            Some(Square((rank * 8 + file) as u8))
        } else {
            None
        }
    }

    /// Mirror across the horizontal center line (a1 <-> a8).
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(self.0 ^ 56)
    }

    /// Manhattan distance between two squares.
    #[must_use]
    pub fn manhattan_distance(self, other: Square) -> i32 {
        let dr = (self.rank() as i32 - other.rank() as i32).abs();
        let df = (self.file() as i32 - other.file() as i32).abs();
        dr + df
    }

    /// Manhattan distance to the nearest of the four center squares.
    #[must_use]
    pub fn center_distance(self) -> i32 {
        let rank = self.rank() as i32;
        let file = self.file() as i32;
        let dr = (rank - 3).max(4 - rank);
        let df = (file - 3).max(4 - file);
        dr + df - 2
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.file() as u8) as char;
        let rank = (b'1' + self.rank() as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(SquareError::InvalidLength(s.len()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) {
            return Err(SquareError::InvalidFile(file as char));
        }
        if !(b'1'..=b'8').contains(&rank) {
            return Err(SquareError::InvalidRank(rank as char));
        }
        Ok(Square::from_index(
            usize::from(rank - b'1') * 8 + usize::from(file - b'a'),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        let sq: Square = "e4".parse().unwrap();
        assert_eq!(sq.rank(), 3);
        assert_eq!(sq.file(), 4);
        assert_eq!(sq.to_string(), "e4");
        assert!("i1".parse::<Square>().is_err());
        assert!("a9".parse::<Square>().is_err());
        assert!("a".parse::<Square>().is_err());
    }

    #[test]
    fn offset_rejects_wraparound() {
        let h4: Square = "h4".parse().unwrap();
        assert_eq!(h4.offset(0, 1), None);
        assert_eq!(h4.offset(1, -1), Some("g5".parse().unwrap()));
        let a1 = Square::from_index(0);
        assert_eq!(a1.offset(-1, 0), None);
    }

    #[test]
    fn center_distance_is_zero_in_center() {
        for name in ["d4", "e4", "d5", "e5"] {
            assert_eq!(name.parse::<Square>().unwrap().center_distance(), 0);
        }
        assert_eq!("a1".parse::<Square>().unwrap().center_distance(), 6);
    }
}
