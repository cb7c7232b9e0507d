//! King safety evaluation.
//!
//! Enemy attacks into the ring around each king are weighted by attacker
//! type. A castled king also gets credit for its pawn shield and a penalty
//! for open files beside it.

use crate::board::attack_tables::king_attacks;
use crate::board::{Bitboard, Color, Piece, Position, Square};

use super::tables::{
    KING_ATTACK_WEIGHTS, KING_FILE_HEAVY_ATTACKER_MG, KING_OPEN_FILE_MG, KING_RING_ATTACK_EG,
    KING_RING_ATTACK_MG, KING_RING_SWARM_MG, KING_SEMI_OPEN_FILE_MG, SHIELD_FAR_MG,
    SHIELD_MISSING_MG, SHIELD_NEAR_MG,
};

impl Position {
    /// Returns `(middlegame_score, endgame_score)` from white's perspective.
    pub fn eval_king_safety(&self) -> (i32, i32) {
        let mut mg = 0;
        let mut eg = 0;
        for color in Color::ALL {
            let Some(king) = self.king_square(color) else {
                continue;
            };
            let sign = color.sign();
            let (ring_mg, ring_eg) = self.king_ring_pressure(color, king);
            mg += sign * (ring_mg + self.pawn_shield(color, king) + self.king_files(color, king));
            eg += sign * ring_eg;
        }
        (mg, eg)
    }

    fn king_ring_pressure(&self, color: Color, king: Square) -> (i32, i32) {
        let enemy = !color;
        let ring = king_attacks(king) | Bitboard::from_square(king);
        let mut units = 0;
        let mut attackers = 0;
        for piece in [Piece::Pawn, Piece::Knight, Piece::Bishop, Piece::Rook, Piece::Queen] {
            for sq in self.pieces(enemy, piece) {
                let hits = (self.attacks_from(sq, piece, enemy) & ring).popcount() as i32;
                if hits > 0 {
                    units += hits * KING_ATTACK_WEIGHTS[piece.index()];
                    attackers += 1;
                }
            }
        }
        let mut mg = units * KING_RING_ATTACK_MG;
        if attackers >= 2 {
            mg += units * KING_RING_SWARM_MG;
        }
        (mg, units * KING_RING_ATTACK_EG)
    }

    /// Only a king still on its first two ranks has a shield to speak of.
    fn pawn_shield(&self, color: Color, king: Square) -> i32 {
        if color.relative_rank(king.rank()) > 1 {
            return 0;
        }
        let pawns = self.pieces(color, Piece::Pawn);
        let dir = color.pawn_direction();
        let mut score = 0;
        for df in -1..=1 {
            let near = king.offset(dir, df);
            let far = king.offset(2 * dir, df);
            if near.is_some_and(|sq| pawns.contains(sq)) {
                score += SHIELD_NEAR_MG;
            } else if far.is_some_and(|sq| pawns.contains(sq)) {
                score += SHIELD_FAR_MG;
            } else if near.is_some() {
                score += SHIELD_MISSING_MG;
            }
        }
        score
    }

    fn king_files(&self, color: Color, king: Square) -> i32 {
        let enemy = !color;
        let own_pawns = self.pieces(color, Piece::Pawn);
        let enemy_pawns = self.pieces(enemy, Piece::Pawn);
        let heavy = self.pieces(enemy, Piece::Rook) | self.pieces(enemy, Piece::Queen);
        let first = king.file().saturating_sub(1);
        let last = (king.file() + 1).min(7);
        let mut score = 0;
        for file in first..=last {
            let mask = Bitboard::file_mask(file);
            if (own_pawns & mask).any() {
                continue;
            }
            score += if (enemy_pawns & mask).is_empty() {
                KING_OPEN_FILE_MG
            } else {
                KING_SEMI_OPEN_FILE_MG
            };
            if (heavy & mask).any() {
                score += KING_FILE_HEAVY_ATTACKER_MG;
            }
        }
        score
    }
}
