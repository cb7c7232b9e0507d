//! Zobrist hashing keys.
//!
//! Keys are drawn once from a fixed-seed generator so hashes are reproducible
//! across runs.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Color, Piece, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[color][piece][square]
    piece_keys: [[[u64; 64]; 6]; 2],
    black_to_move_key: u64,
    // castling_keys[color][0 = kingside, 1 = queenside]
    castling_keys: [[u64; 2]; 2],
    // only the file of the en passant target is hashed
    en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1_234_567_890);
        let mut piece_keys = [[[0; 64]; 6]; 2];
        let mut castling_keys = [[0; 2]; 2];
        let mut en_passant_keys = [0; 8];

        for color in &mut piece_keys {
            for piece in color.iter_mut() {
                for key in piece.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }

    #[inline]
    pub(crate) fn piece(&self, color: Color, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[color.index()][piece.index()][sq.index()]
    }

    #[inline]
    pub(crate) fn black_to_move(&self) -> u64 {
        self.black_to_move_key
    }

    #[inline]
    pub(crate) fn castling(&self, color: Color, kingside: bool) -> u64 {
        self.castling_keys[color.index()][usize::from(!kingside)]
    }

    /// XOR of the keys for every right set in `bits`.
    pub(crate) fn castling_bits(&self, bits: u8) -> u64 {
        let mut key = 0;
        for color in Color::ALL {
            for kingside in [true, false] {
                if bits & crate::board::castle_bit(color, kingside) != 0 {
                    key ^= self.castling(color, kingside);
                }
            }
        }
        key
    }

    #[inline]
    pub(crate) fn en_passant(&self, sq: Square) -> u64 {
        self.en_passant_keys[sq.file()]
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CastlingRights;

    #[test]
    fn keys_are_distinct() {
        let a = ZOBRIST.piece(Color::White, Piece::Pawn, Square::from_index(12));
        let b = ZOBRIST.piece(Color::Black, Piece::Pawn, Square::from_index(12));
        assert_ne!(a, b);
        assert_ne!(ZOBRIST.black_to_move(), 0);
        assert_ne!(ZOBRIST.castling(Color::White, true), ZOBRIST.castling(Color::White, false));
    }

    #[test]
    fn castling_bits_combines_keys() {
        let both = ZOBRIST.castling_bits(0b0011);
        assert_eq!(
            both,
            ZOBRIST.castling(Color::White, true) ^ ZOBRIST.castling(Color::White, false)
        );
        assert_eq!(ZOBRIST.castling_bits(0), 0);
    }

    #[test]
    fn castling_bits_of_full_rights_covers_every_key() {
        let mut expected = 0;
        for color in Color::ALL {
            for kingside in [true, false] {
                assert_ne!(crate::board::castle_bit(color, kingside), 0);
                expected ^= ZOBRIST.castling(color, kingside);
            }
        }
        assert_eq!(ZOBRIST.castling_bits(CastlingRights::all().bits()), expected);
    }
}
