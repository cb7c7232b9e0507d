//! Precomputed attack tables for leaper pieces and ray walking for sliders.

use once_cell::sync::Lazy;

use crate::board::{Bitboard, Color, Square};

const KNIGHT_DELTAS: [(i32, i32); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

const KING_DELTAS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(i32, i32); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

fn leaper_table(deltas: &[(i32, i32)]) -> [Bitboard; 64] {
    let mut attacks = [Bitboard::EMPTY; 64];
    for (idx, slot) in attacks.iter_mut().enumerate() {
        let from = Square::from_index(idx);
        for &(dr, df) in deltas {
            if let Some(to) = from.offset(dr, df) {
                slot.set(to);
            }
        }
    }
    attacks
}

pub(crate) static KNIGHT_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| leaper_table(&KNIGHT_DELTAS));

pub(crate) static KING_ATTACKS: Lazy<[Bitboard; 64]> = Lazy::new(|| leaper_table(&KING_DELTAS));

/// `PAWN_ATTACKS[color][sq]`: the two diagonal squares a pawn of `color` on
/// `sq` attacks.
pub(crate) static PAWN_ATTACKS: Lazy<[[Bitboard; 64]; 2]> = Lazy::new(|| {
    [
        leaper_table(&[(1, -1), (1, 1)]),
        leaper_table(&[(-1, -1), (-1, 1)]),
    ]
});

#[inline]
pub(crate) fn knight_attacks(sq: Square) -> Bitboard {
    KNIGHT_ATTACKS[sq.index()]
}

#[inline]
pub(crate) fn king_attacks(sq: Square) -> Bitboard {
    KING_ATTACKS[sq.index()]
}

#[inline]
pub(crate) fn pawn_attacks(color: Color, sq: Square) -> Bitboard {
    PAWN_ATTACKS[color.index()][sq.index()]
}

/// Walk each ray from `sq`, stopping at (and including) the first occupied
/// square.
pub(crate) fn ray_attacks(sq: Square, occupied: Bitboard, directions: &[(i32, i32)]) -> Bitboard {
    let mut attacks = Bitboard::EMPTY;
    for &(dr, df) in directions {
        let mut cur = sq;
        while let Some(next) = cur.offset(dr, df) {
            attacks.set(next);
            if occupied.contains(next) {
                break;
            }
            cur = next;
        }
    }
    attacks
}

#[inline]
pub(crate) fn rook_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &ROOK_DIRECTIONS)
}

#[inline]
pub(crate) fn bishop_attacks(sq: Square, occupied: Bitboard) -> Bitboard {
    ray_attacks(sq, occupied, &BISHOP_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        let attacks = knight_attacks(sq("a1"));
        assert_eq!(attacks.popcount(), 2);
        assert!(attacks.contains(sq("b3")));
        assert!(attacks.contains(sq("c2")));
    }

    #[test]
    fn pawn_attacks_do_not_wrap() {
        let attacks = pawn_attacks(Color::White, sq("h2"));
        assert_eq!(attacks.popcount(), 1);
        assert!(attacks.contains(sq("g3")));
        let attacks = pawn_attacks(Color::Black, sq("a7"));
        assert_eq!(attacks, Bitboard::from_square(sq("b6")));
    }

    #[test]
    fn rook_ray_stops_at_blocker() {
        let occupied = Bitboard::from_square(sq("d6"));
        let attacks = rook_attacks(sq("d4"), occupied);
        assert!(attacks.contains(sq("d5")));
        assert!(attacks.contains(sq("d6")));
        assert!(!attacks.contains(sq("d7")));
        assert_eq!(attacks.popcount(), 3 + 2 + 3 + 4);
    }
}
