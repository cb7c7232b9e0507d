use super::super::attack_tables::{bishop_attacks, rook_attacks};
use super::super::{Color, MoveList, Piece, Position};
use super::GenMode;

impl Position {
    /// Bishops, rooks and queens. Each ray yields its empty squares plus at
    /// most one terminal enemy capture; own pieces end the ray before them.
    pub(crate) fn generate_slider_moves(&self, color: Color, mode: GenMode, moves: &mut MoveList) {
        let mask = self.target_mask(color, mode);
        let occupied = self.all_occupied;
        for piece in [Piece::Bishop, Piece::Rook, Piece::Queen] {
            for from in self.pieces(color, piece) {
                let attacks = match piece {
                    Piece::Bishop => bishop_attacks(from, occupied),
                    Piece::Rook => rook_attacks(from, occupied),
                    _ => bishop_attacks(from, occupied) | rook_attacks(from, occupied),
                };
                self.push_targets(color, piece, from, attacks & mask, moves);
            }
        }
    }
}
