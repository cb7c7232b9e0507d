//! Game phase classification and endgame king activity.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::eval::EvalContext;
use crate::board::{Color, Position};

use super::tables::{
    ENDGAME_MATERIAL, KING_PROXIMITY_EG, OPENING_MATERIAL, OPENING_MAX_FULLMOVE, WEAK_KING_EDGE_EG,
};

/// Coarse stage of the game, decided by non-pawn material and move count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GamePhase {
    Opening,
    Middlegame,
    Endgame,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GamePhase::Opening => "opening",
            GamePhase::Middlegame => "middlegame",
            GamePhase::Endgame => "endgame",
        };
        f.write_str(name)
    }
}

impl Position {
    #[must_use]
    pub fn game_phase(&self) -> GamePhase {
        let material = self.non_pawn_material(Color::White) + self.non_pawn_material(Color::Black);
        if material <= ENDGAME_MATERIAL {
            GamePhase::Endgame
        } else if material >= OPENING_MATERIAL && self.fullmove_number <= OPENING_MAX_FULLMOVE {
            GamePhase::Opening
        } else {
            GamePhase::Middlegame
        }
    }

    /// In the endgame the side ahead in material wants its king near the
    /// enemy king and the enemy king near the edge.
    /// Returns `(middlegame_score, endgame_score)` from white's perspective.
    pub(crate) fn eval_endgame(&self, ctx: &EvalContext) -> (i32, i32) {
        if ctx.game_phase != GamePhase::Endgame {
            return (0, 0);
        }
        let (Some(white_king), Some(black_king)) = (
            self.king_square(Color::White),
            self.king_square(Color::Black),
        ) else {
            return (0, 0);
        };

        let white = self.material(Color::White);
        let black = self.material(Color::Black);
        let (stronger, weak_king) = if white > black {
            (Color::White, black_king)
        } else if black > white {
            (Color::Black, white_king)
        } else {
            return (0, 0);
        };

        let distance = white_king.manhattan_distance(black_king);
        let bonus = (14 - distance) * KING_PROXIMITY_EG + weak_king.center_distance() * WEAK_KING_EDGE_EG;
        // both phase halves carry the bonus; the taper already favors eg here
        let score = stronger.sign() * bonus;
        (score, score)
    }
}
