//! Static evaluation.
//!
//! Every term is computed per color with color-relative geometry and folded
//! in as `white - black`, so flipping the board negates the white-relative
//! score exactly. The public `evaluate` converts that to the side to move.

use super::eval_terms::tables::MAX_PHASE;
use super::eval_terms::GamePhase;
use super::{Bitboard, Color, Position};

/// Score of a side to move that has been checkmated, negated.
pub const MATE_SCORE: i32 = 30_000;

/// Per-call facts several terms share, computed once.
pub(crate) struct EvalContext {
    /// `attacks[color]`: every square `color` attacks.
    pub(crate) attacks: [Bitboard; 2],
    /// `legal_moves[color]`: legal move count as if `color` were to move.
    pub(crate) legal_moves: [usize; 2],
    pub(crate) game_phase: GamePhase,
}

impl EvalContext {
    pub(crate) fn new(position: &Position) -> Self {
        EvalContext {
            attacks: [
                position.attacked_squares(Color::White),
                position.attacked_squares(Color::Black),
            ],
            legal_moves: [
                position.count_legal_moves(Color::White),
                position.count_legal_moves(Color::Black),
            ],
            game_phase: position.game_phase(),
        }
    }

    #[inline]
    pub(crate) fn attacks(&self, color: Color) -> Bitboard {
        self.attacks[color.index()]
    }
}

impl Position {
    /// Static score in centipawns, positive when it favors the side to move.
    ///
    /// A checkmated side to move scores `-MATE_SCORE`; stalemate scores `0`.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        self.evaluate_white() * self.side_to_move.sign()
    }

    /// Static score from white's point of view.
    #[must_use]
    pub fn evaluate_white(&self) -> i32 {
        let ctx = EvalContext::new(self);
        let stm = self.side_to_move;
        if ctx.legal_moves[stm.index()] == 0 {
            return if self.is_in_check() {
                -MATE_SCORE * stm.sign()
            } else {
                0
            };
        }

        let terms = [
            self.eval_material(),
            self.eval_mobility(&ctx),
            self.eval_king_safety(),
            self.eval_pawn_structure(),
            self.eval_pieces(),
            self.eval_activity(&ctx),
            self.eval_hanging(&ctx),
            self.eval_endgame(&ctx),
        ];
        let (mg, eg) = terms
            .iter()
            .fold((0, 0), |(mg, eg), (tmg, teg)| (mg + tmg, eg + teg));

        let phase = self.phase();
        (mg * phase + eg * (MAX_PHASE - phase)) / MAX_PHASE
    }
}

/// Evaluate `position` for the side to move.
#[must_use]
pub fn evaluate(position: &Position) -> i32 {
    position.evaluate()
}
