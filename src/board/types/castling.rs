//! Castling rights type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

const ALL_CASTLING_RIGHTS: u8 = CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Rights that survive a move touching each square. A king or rook leaving
/// its home square, or a rook captured there, clears the matching bits.
const RIGHTS_MASK: [u8; 64] = {
    let mut mask = [ALL_CASTLING_RIGHTS; 64];
    mask[0] = ALL_CASTLING_RIGHTS & !CASTLE_WHITE_Q; // a1
    mask[4] = ALL_CASTLING_RIGHTS & !(CASTLE_WHITE_K | CASTLE_WHITE_Q); // e1
    mask[7] = ALL_CASTLING_RIGHTS & !CASTLE_WHITE_K; // h1
    mask[56] = ALL_CASTLING_RIGHTS & !CASTLE_BLACK_Q; // a8
    mask[60] = ALL_CASTLING_RIGHTS & !(CASTLE_BLACK_K | CASTLE_BLACK_Q); // e8
    mask[63] = ALL_CASTLING_RIGHTS & !CASTLE_BLACK_K; // h8
    mask
};

/// Castling rights represented as a bitmask.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & castle_bit(color, kingside) != 0
    }

    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= castle_bit(color, kingside);
    }

    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Rights left after a move from `from` to `to`.
    #[inline]
    #[must_use]
    pub const fn after_move(self, from: Square, to: Square) -> Self {
        CastlingRights(self.0 & RIGHTS_MASK[from.index()] & RIGHTS_MASK[to.index()])
    }

    /// Same rights with the colors exchanged.
    #[must_use]
    pub const fn swap_colors(self) -> Self {
        CastlingRights(((self.0 & 0b0011) << 2) | ((self.0 & 0b1100) >> 2))
    }
}

#[inline]
pub(crate) const fn castle_bit(color: Color, kingside: bool) -> u8 {
    match (color, kingside) {
        (Color::White, true) => CASTLE_WHITE_K,
        (Color::White, false) => CASTLE_WHITE_Q,
        (Color::Black, true) => CASTLE_BLACK_K,
        (Color::Black, false) => CASTLE_BLACK_Q,
    }
}

/// FEN castling field ("KQkq", "-" when empty).
impl fmt::Display for CastlingRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "-");
        }
        for (bit, c) in [
            (CASTLE_WHITE_K, 'K'),
            (CASTLE_WHITE_Q, 'Q'),
            (CASTLE_BLACK_K, 'k'),
            (CASTLE_BLACK_Q, 'q'),
        ] {
            if self.0 & bit != 0 {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rook_and_king_moves_clear_rights() {
        let rights = CastlingRights::all();
        let e1 = Square::from_index(4);
        let e2 = Square::from_index(12);
        let after = rights.after_move(e1, e2);
        assert!(!after.has(Color::White, true));
        assert!(!after.has(Color::White, false));
        assert!(after.has(Color::Black, true));

        // a rook captured on h8
        let after = rights.after_move(Square::from_index(47), Square::from_index(63));
        assert!(!after.has(Color::Black, true));
        assert!(after.has(Color::Black, false));
    }

    #[test]
    fn swap_colors_exchanges_sides() {
        let mut rights = CastlingRights::none();
        rights.set(Color::White, true);
        let swapped = rights.swap_colors();
        assert!(swapped.has(Color::Black, true));
        assert!(!swapped.has(Color::White, true));
        assert_eq!(swapped.to_string(), "k");
    }
}
