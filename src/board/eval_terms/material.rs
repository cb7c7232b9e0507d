//! Material and piece-square tables.

use crate::board::{Color, Piece, Position};

use super::tables::{MATERIAL, MAX_PHASE, PHASE_WEIGHTS, PST_EG, PST_MG};

impl Position {
    /// Material plus piece-square bonuses.
    /// Returns `(middlegame_score, endgame_score)` from white's perspective.
    #[must_use]
    pub fn eval_material(&self) -> (i32, i32) {
        let mut mg = 0;
        let mut eg = 0;
        for color in Color::ALL {
            let sign = color.sign();
            for piece in Piece::ALL {
                let p = piece.index();
                for sq in self.pieces(color, piece) {
                    let idx = match color {
                        Color::White => sq.index(),
                        Color::Black => sq.index() ^ 56,
                    };
                    mg += sign * (MATERIAL[p] + PST_MG[p][idx]);
                    eg += sign * (MATERIAL[p] + PST_EG[p][idx]);
                }
            }
        }
        (mg, eg)
    }

    /// Tapering phase: `24` with all minor and major pieces on the board,
    /// falling to `0` as they come off.
    #[must_use]
    pub fn phase(&self) -> i32 {
        let mut phase = 0;
        for color in Color::ALL {
            for piece in Piece::ALL {
                phase += PHASE_WEIGHTS[piece.index()] * self.pieces(color, piece).popcount() as i32;
            }
        }
        phase.min(MAX_PHASE)
    }

    /// Material of `color`'s knights, bishops, rooks and queens.
    #[must_use]
    pub(crate) fn non_pawn_material(&self, color: Color) -> i32 {
        [Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen]
            .into_iter()
            .map(|piece| MATERIAL[piece.index()] * self.pieces(color, piece).popcount() as i32)
            .sum()
    }

    /// All material of `color`, pawns included.
    #[must_use]
    pub(crate) fn material(&self, color: Color) -> i32 {
        self.non_pawn_material(color)
            + MATERIAL[Piece::Pawn.index()] * self.pieces(color, Piece::Pawn).popcount() as i32
    }
}
