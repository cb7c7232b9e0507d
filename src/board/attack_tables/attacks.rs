//! Attacks-only queries. Unlike move generation these include squares held by
//! the attacker's own pieces, which is what defense and king-safety terms need.

use crate::board::{Bitboard, Color, Piece, Position, Square};

use super::tables::{bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks};

/// Squares a `piece` of `color` on `sq` threatens given `occupied`.
#[inline]
pub(crate) fn piece_attacks(piece: Piece, color: Color, sq: Square, occupied: Bitboard) -> Bitboard {
    match piece {
        Piece::Pawn => pawn_attacks(color, sq),
        Piece::Knight => knight_attacks(sq),
        Piece::Bishop => bishop_attacks(sq, occupied),
        Piece::Rook => rook_attacks(sq, occupied),
        Piece::Queen => bishop_attacks(sq, occupied) | rook_attacks(sq, occupied),
        Piece::King => king_attacks(sq),
    }
}

impl Position {
    /// Every square a `piece` of `color` standing on `sq` attacks, including
    /// squares occupied by its own side. Pawns attack diagonally only.
    #[must_use]
    pub fn attacks_from(&self, sq: Square, piece: Piece, color: Color) -> Bitboard {
        piece_attacks(piece, color, sq, self.all_occupied)
    }

    /// Union of every square attacked by `color`.
    #[must_use]
    pub fn attacked_squares(&self, color: Color) -> Bitboard {
        let mut attacked = Bitboard::EMPTY;
        for piece in Piece::ALL {
            for sq in self.pieces(color, piece) {
                attacked |= self.attacks_from(sq, piece, color);
            }
        }
        attacked
    }

    /// Pieces of `by` attacking `sq` on the board described by `occupied`,
    /// ignoring any of `by`'s pieces listed in `removed`.
    pub(crate) fn attackers_to_with(
        &self,
        sq: Square,
        by: Color,
        occupied: Bitboard,
        removed: Bitboard,
    ) -> Bitboard {
        let live = |piece: Piece| self.pieces(by, piece) & !removed;
        let diagonal = live(Piece::Bishop) | live(Piece::Queen);
        let straight = live(Piece::Rook) | live(Piece::Queen);
        (pawn_attacks(!by, sq) & live(Piece::Pawn))
            | (knight_attacks(sq) & live(Piece::Knight))
            | (king_attacks(sq) & live(Piece::King))
            | (bishop_attacks(sq, occupied) & diagonal)
            | (rook_attacks(sq, occupied) & straight)
    }

    /// Pieces of `by` attacking `sq` on the current board.
    #[must_use]
    pub fn attackers_to(&self, sq: Square, by: Color) -> Bitboard {
        self.attackers_to_with(sq, by, self.all_occupied, Bitboard::EMPTY)
    }

    #[must_use]
    pub fn is_square_attacked(&self, sq: Square, by: Color) -> bool {
        self.attackers_to(sq, by).any()
    }

    /// Least valuable piece type of `by` attacking `sq`.
    #[must_use]
    pub fn lowest_attacker(&self, sq: Square, by: Color) -> Option<Piece> {
        let attackers = self.attackers_to(sq, by);
        if attackers.is_empty() {
            return None;
        }
        Piece::ALL
            .into_iter()
            .find(|&piece| (attackers & self.pieces(by, piece)).any())
    }

    /// True when the side to move's king is attacked.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.is_king_attacked(self.side_to_move)
    }

    /// True when `color`'s king is attacked. A board without that king is
    /// never in check.
    #[must_use]
    pub fn is_king_attacked(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_square_attacked(king, !color))
    }
}

#[cfg(test)]
mod tests {
    use crate::board::{Bitboard, Color, Piece, Position};

    #[test]
    fn start_position_attacks() {
        let pos = Position::new();
        let white = pos.attacked_squares(Color::White);
        // rank 3 entirely covered by pawns and knights
        assert_eq!(white & Bitboard::rank_mask(2), Bitboard::rank_mask(2));
        assert!(!white.contains("e4".parse().unwrap()));
        // own pieces count as attacked (defended)
        assert!(white.contains("d2".parse().unwrap()));
        assert!(!pos.is_in_check());
    }

    #[test]
    fn lowest_attacker_prefers_pawn() {
        let pos = Position::from_fen("4k3/8/8/3p4/4N3/5q2/8/4K3 w - - 0 1");
        let e4 = "e4".parse().unwrap();
        assert_eq!(pos.lowest_attacker(e4, Color::Black), Some(Piece::Pawn));
        let f3 = "f3".parse().unwrap();
        assert_eq!(pos.lowest_attacker(f3, Color::White), None);
    }
}
