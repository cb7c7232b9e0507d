//! Hanging piece detection.

use crate::board::eval::EvalContext;
use crate::board::{Color, Piece, Position};

use super::tables::{HANGING_CHEAPER_DIVISOR, HANGING_UNDEFENDED_DIVISOR, MATERIAL};

impl Position {
    /// Penalize pieces that are attacked and either undefended or attacked
    /// by something cheaper. Applied to both sides regardless of who moves.
    /// Returns `(middlegame_score, endgame_score)` from white's perspective.
    pub(crate) fn eval_hanging(&self, ctx: &EvalContext) -> (i32, i32) {
        let mut score = 0;

        for color in Color::ALL {
            let threatened = ctx.attacks(!color);
            let defended = ctx.attacks(color);
            let mut penalty = 0;
            for piece in [Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen] {
                let value = MATERIAL[piece.index()];
                for sq in self.pieces(color, piece) & threatened {
                    if !defended.contains(sq) {
                        penalty += value / HANGING_UNDEFENDED_DIVISOR;
                    } else if let Some(attacker) = self.lowest_attacker(sq, !color) {
                        let cheaper_by = value - MATERIAL[attacker.index()];
                        if attacker != Piece::King && cheaper_by > 0 {
                            penalty += cheaper_by / HANGING_CHEAPER_DIVISOR;
                        }
                    }
                }
            }
            score -= color.sign() * penalty;
        }

        (score, score)
    }
}
