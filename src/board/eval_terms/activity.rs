//! Center control and piece coordination.

use crate::board::eval::EvalContext;
use crate::board::{Bitboard, Color, Piece, Position};

use super::tables::{
    CENTER_ATTACK_MG, CENTER_OCCUPY_MG, COORDINATION_EG, COORDINATION_MG,
    EXTENDED_CENTER_ATTACK_MG,
};

impl Position {
    /// Returns `(middlegame_score, endgame_score)` from white's perspective.
    pub(crate) fn eval_activity(&self, ctx: &EvalContext) -> (i32, i32) {
        let mut mg = 0;
        let mut eg = 0;

        for color in Color::ALL {
            let sign = color.sign();
            let attacks = ctx.attacks(color);

            let center_hits = (attacks & Bitboard::CENTER).popcount() as i32;
            let ring_hits = (attacks & Bitboard::EXTENDED_CENTER & !Bitboard::CENTER).popcount() as i32;
            let occupants = (self.occupancy(color) & Bitboard::CENTER).popcount() as i32;
            mg += sign
                * (center_hits * CENTER_ATTACK_MG
                    + ring_hits * EXTENDED_CENTER_ATTACK_MG
                    + occupants * CENTER_OCCUPY_MG);

            let pieces = self.occupancy(color)
                & !self.pieces(color, Piece::Pawn)
                & !self.pieces(color, Piece::King);
            let defended = (pieces & attacks).popcount() as i32;
            mg += sign * defended * COORDINATION_MG;
            eg += sign * defended * COORDINATION_EG;
        }

        (mg, eg)
    }
}
