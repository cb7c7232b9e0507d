//! Mobility: legal-move count differential.

use crate::board::eval::EvalContext;
use crate::board::{Color, Position};

use super::tables::{MOBILITY_EG, MOBILITY_MG};

impl Position {
    /// Both sides' legal-move counts come from the non-mutating legality
    /// check, so the side not on move is counted as if it were.
    pub(crate) fn eval_mobility(&self, ctx: &EvalContext) -> (i32, i32) {
        let diff = ctx.legal_moves[Color::White.index()] as i32
            - ctx.legal_moves[Color::Black.index()] as i32;
        (diff * MOBILITY_MG, diff * MOBILITY_EG)
    }
}
