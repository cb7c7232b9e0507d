//! Pawn structure evaluation.
//!
//! Doubled, isolated and backward pawns are penalized; passed pawns earn a
//! bonus that grows as they advance. Every pawn island past the first costs
//! a little.

use crate::board::attack_tables::pawn_attacks;
use crate::board::{Bitboard, Color, Piece, Position};

use super::tables::{
    BACKWARD_PAWN_EG, BACKWARD_PAWN_MG, DOUBLED_PAWN_EG, DOUBLED_PAWN_MG, ISOLATED_PAWN_EG,
    ISOLATED_PAWN_MG, PASSED_PAWN_EG, PASSED_PAWN_MG, PAWN_ISLAND_EG, PAWN_ISLAND_MG,
};

impl Position {
    /// Returns `(middlegame_score, endgame_score)` from white's perspective.
    #[must_use]
    pub fn eval_pawn_structure(&self) -> (i32, i32) {
        let mut mg = 0;
        let mut eg = 0;

        for color in Color::ALL {
            let sign = color.sign();
            let own = self.pieces(color, Piece::Pawn);
            let enemy = self.pieces(!color, Piece::Pawn);

            let mut islands = 0;
            let mut in_island = false;
            for file in 0..8 {
                let count = (own & Bitboard::file_mask(file)).popcount() as i32;
                if count > 1 {
                    mg += sign * DOUBLED_PAWN_MG * (count - 1);
                    eg += sign * DOUBLED_PAWN_EG * (count - 1);
                }
                if count > 0 && !in_island {
                    islands += 1;
                }
                in_island = count > 0;
            }
            if islands > 1 {
                mg += sign * PAWN_ISLAND_MG * (islands - 1);
                eg += sign * PAWN_ISLAND_EG * (islands - 1);
            }

            for sq in own {
                let file = sq.file();
                let rank = sq.rank();
                let adjacent = Bitboard::adjacent_files(file);
                let ahead = Bitboard::ranks_ahead(color, rank);

                if (own & adjacent).is_empty() {
                    mg += sign * ISOLATED_PAWN_MG;
                    eg += sign * ISOLATED_PAWN_EG;
                } else if (own & adjacent & !ahead).is_empty() {
                    // every neighbour has already advanced past it; backward
                    // if an enemy pawn also guards the square in front
                    let stop_guarded = sq
                        .offset(color.pawn_direction(), 0)
                        .is_some_and(|stop| (pawn_attacks(color, stop) & enemy).any());
                    if stop_guarded {
                        mg += sign * BACKWARD_PAWN_MG;
                        eg += sign * BACKWARD_PAWN_EG;
                    }
                }

                let front_span = (Bitboard::file_mask(file) | adjacent) & ahead;
                if (enemy & front_span).is_empty() {
                    let rel = color.relative_rank(rank);
                    mg += sign * PASSED_PAWN_MG[rel];
                    eg += sign * PASSED_PAWN_EG[rel];
                }
            }
        }

        (mg, eg)
    }
}
