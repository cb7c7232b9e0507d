//! Move ordering for the main search and quiescence.

use super::constants::{CAPTURE_SCORE, CASTLING_SCORE, PROMOTION_SCORE, TT_MOVE_SCORE};
use crate::board::{Move, MoveList, ScoredMoveList};

/// Most valuable victim, least valuable attacker.
#[inline]
pub(crate) fn mvv_lva(mv: Move) -> i32 {
    mv.captured.map_or(0, |victim| victim.value() - mv.piece.value())
}

pub(crate) fn move_score(mv: Move, tt_move: Option<Move>) -> i32 {
    if tt_move == Some(mv) {
        TT_MOVE_SCORE
    } else if let Some(promo) = mv.promotion {
        PROMOTION_SCORE + promo.value() + mv.captured.map_or(0, |c| c.value())
    } else if mv.is_capture() {
        CAPTURE_SCORE + mvv_lva(mv)
    } else if mv.is_castling {
        CASTLING_SCORE
    } else {
        0
    }
}

/// Score and sort `moves`. Ties keep generation order.
pub(crate) fn order_moves(moves: &MoveList, tt_move: Option<Move>) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for &mv in moves {
        scored.push(mv, move_score(mv, tt_move));
    }
    scored.sort_by_score_desc();
    scored
}

pub(crate) fn order_captures(captures: &MoveList) -> ScoredMoveList {
    let mut scored = ScoredMoveList::new();
    for &mv in captures {
        scored.push(mv, mvv_lva(mv));
    }
    scored.sort_by_score_desc();
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Piece, Position};

    #[test]
    fn test_tt_move_goes_first() {
        let mut pos = Position::new();
        let moves = pos.generate_legal_moves();
        let tt_move = moves[moves.len() - 1];
        let ordered = order_moves(&moves, Some(tt_move));
        assert_eq!(ordered.moves().next(), Some(tt_move));
        assert_eq!(ordered.len(), moves.len());
    }

    #[test]
    fn test_category_order() {
        // b8 promotions, cxb5 wins the queen, Kxd2, queenside castling, quiet moves
        let mut pos = Position::from_fen("6k1/1P6/8/1q6/2P5/8/3n4/R3K2R w KQ - 0 1");
        let moves = pos.generate_legal_moves();
        let ordered: Vec<Move> = order_moves(&moves, None).moves().collect();

        assert!(ordered[..4].iter().all(|m| m.promotion.is_some()));
        assert_eq!(ordered[0].promotion, Some(Piece::Queen));
        let pxq = ordered.iter().position(|m| m.captured == Some(Piece::Queen) && m.promotion.is_none());
        let kxp = ordered.iter().position(|m| m.piece == Piece::King && m.is_capture());
        let castle = ordered.iter().position(|m| m.is_castling);
        let quiet = ordered.iter().position(|m| m.is_quiet() && !m.is_castling);
        assert!(pxq < kxp);
        assert!(kxp < castle);
        assert!(castle < quiet);
    }

    #[test]
    fn test_order_is_stable_for_equal_scores() {
        let mut pos = Position::new();
        let moves = pos.generate_legal_moves();
        let ordered: Vec<Move> = order_moves(&moves, None).moves().collect();
        assert_eq!(ordered.as_slice(), moves.as_slice());
    }
}
