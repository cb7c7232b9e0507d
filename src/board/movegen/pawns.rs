use super::super::attack_tables::pawn_attacks;
use super::super::{Color, Move, MoveList, Piece, Position, Square};
use super::GenMode;

impl Position {
    pub(crate) fn generate_pawn_moves(&self, color: Color, mode: GenMode, moves: &mut MoveList) {
        let dir = color.pawn_direction();
        let enemies = self.occupancy(!color);
        let ep_target = self.en_passant_target_for(color);

        for from in self.pieces(color, Piece::Pawn) {
            if mode == GenMode::All {
                if let Some(one) = from.offset(dir, 0).filter(|sq| self.is_empty(*sq)) {
                    push_pawn_move(color, Move::quiet(Piece::Pawn, from, one), moves);
                    if from.rank() == color.pawn_start_rank() {
                        if let Some(two) = one.offset(dir, 0).filter(|sq| self.is_empty(*sq)) {
                            moves.push(Move::quiet(Piece::Pawn, from, two));
                        }
                    }
                }
            }

            let attacks = pawn_attacks(color, from);
            for to in attacks & enemies {
                let mv = Move {
                    captured: self.piece_of(!color, to),
                    ..Move::quiet(Piece::Pawn, from, to)
                };
                push_pawn_move(color, mv, moves);
            }

            if let Some(ep) = ep_target.filter(|ep| attacks.contains(*ep)) {
                moves.push(Move {
                    captured: Some(Piece::Pawn),
                    is_en_passant: true,
                    ..Move::quiet(Piece::Pawn, from, ep)
                });
            }
        }
    }

    /// The en passant target if `color` may capture onto it: `color` is on
    /// move and an enemy pawn stands behind the target.
    fn en_passant_target_for(&self, color: Color) -> Option<Square> {
        if color != self.side_to_move {
            return None;
        }
        self.en_passant_target.filter(|ep| {
            ep.offset(-color.pawn_direction(), 0)
                .is_some_and(|victim| self.pieces(!color, Piece::Pawn).contains(victim))
                && self.is_empty(*ep)
        })
    }
}

/// Push `mv`, expanding it into the four promotions on the last rank.
fn push_pawn_move(color: Color, mv: Move, moves: &mut MoveList) {
    if mv.to.rank() == color.promotion_rank() {
        for promotion in Piece::PROMOTIONS {
            moves.push(Move {
                promotion: Some(promotion),
                ..mv
            });
        }
    } else {
        moves.push(mv);
    }
}
