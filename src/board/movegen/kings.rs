use super::super::attack_tables::king_attacks;
use super::super::{Color, Move, MoveList, Piece, Position, Square};
use super::GenMode;

impl Position {
    pub(crate) fn generate_king_moves(&self, color: Color, mode: GenMode, moves: &mut MoveList) {
        let mask = self.target_mask(color, mode);
        for from in self.pieces(color, Piece::King) {
            self.push_targets(color, Piece::King, from, king_attacks(from) & mask, moves);
        }
        if mode == GenMode::All {
            self.generate_castling_moves(color, moves);
        }
    }

    /// Castling requires the right, the rook on its home square, empty squares
    /// between king and rook, and a king that is not in check and neither
    /// crosses nor lands on an attacked square.
    fn generate_castling_moves(&self, color: Color, moves: &mut MoveList) {
        let rank = color.back_rank();
        let home = |file: usize| Square::from_index(rank * 8 + file);
        let king_from = home(4);
        if !self.pieces(color, Piece::King).contains(king_from) {
            return;
        }
        let them = !color;
        if self.is_square_attacked(king_from, them) {
            return;
        }

        for kingside in [true, false] {
            if !self.castling_rights.has(color, kingside) {
                continue;
            }
            let (rook_file, between, path): (usize, &[usize], [usize; 2]) = if kingside {
                (7, &[5, 6], [5, 6])
            } else {
                (0, &[1, 2, 3], [3, 2])
            };
            if !self.pieces(color, Piece::Rook).contains(home(rook_file)) {
                continue;
            }
            if between.iter().any(|&file| !self.is_empty(home(file))) {
                continue;
            }
            if path.iter().any(|&file| self.is_square_attacked(home(file), them)) {
                continue;
            }
            moves.push(Move {
                is_castling: true,
                ..Move::quiet(Piece::King, king_from, home(path[1]))
            });
        }
    }
}
