//! Piece-specific bonuses: bishop pair, knight outposts, rooks on open files.

use crate::board::attack_tables::pawn_attacks;
use crate::board::{Bitboard, Color, Piece, Position};

use super::tables::{
    BISHOP_PAIR_EG, BISHOP_PAIR_MG, KNIGHT_OUTPOST_EG, KNIGHT_OUTPOST_MG, ROOK_OPEN_FILE_EG,
    ROOK_OPEN_FILE_MG, ROOK_SEMI_OPEN_FILE_EG, ROOK_SEMI_OPEN_FILE_MG,
};

impl Position {
    /// Returns `(middlegame_score, endgame_score)` from white's perspective.
    #[must_use]
    pub fn eval_pieces(&self) -> (i32, i32) {
        let mut mg = 0;
        let mut eg = 0;

        for color in Color::ALL {
            let sign = color.sign();
            let own_pawns = self.pieces(color, Piece::Pawn);
            let enemy_pawns = self.pieces(!color, Piece::Pawn);

            if self.pieces(color, Piece::Bishop).popcount() >= 2 {
                mg += sign * BISHOP_PAIR_MG;
                eg += sign * BISHOP_PAIR_EG;
            }

            // Outpost: ranks 4-6 from our side, defended by a pawn, and no
            // enemy pawn left on a neighbouring file that could chase it off.
            for sq in self.pieces(color, Piece::Knight) {
                let rel = color.relative_rank(sq.rank());
                if !(3..=5).contains(&rel) {
                    continue;
                }
                let defended = (pawn_attacks(!color, sq) & own_pawns).any();
                let chasers = enemy_pawns
                    & Bitboard::adjacent_files(sq.file())
                    & Bitboard::ranks_ahead(color, sq.rank());
                if defended && chasers.is_empty() {
                    mg += sign * KNIGHT_OUTPOST_MG;
                    eg += sign * KNIGHT_OUTPOST_EG;
                }
            }

            for sq in self.pieces(color, Piece::Rook) {
                let file = Bitboard::file_mask(sq.file());
                if (own_pawns & file).any() {
                    continue;
                }
                if (enemy_pawns & file).is_empty() {
                    mg += sign * ROOK_OPEN_FILE_MG;
                    eg += sign * ROOK_OPEN_FILE_EG;
                } else {
                    mg += sign * ROOK_SEMI_OPEN_FILE_MG;
                    eg += sign * ROOK_SEMI_OPEN_FILE_EG;
                }
            }
        }

        (mg, eg)
    }
}
