use super::super::attack_tables::knight_attacks;
use super::super::{Color, MoveList, Piece, Position};
use super::GenMode;

impl Position {
    pub(crate) fn generate_knight_moves(&self, color: Color, mode: GenMode, moves: &mut MoveList) {
        let mask = self.target_mask(color, mode);
        for from in self.pieces(color, Piece::Knight) {
            self.push_targets(color, Piece::Knight, from, knight_attacks(from) & mask, moves);
        }
    }
}
