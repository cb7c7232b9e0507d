//! Alpha-beta negamax over legal moves.

use super::constants::{INFINITY, MATE_THRESHOLD};
use super::move_order::order_moves;
use super::{SearchAborted, SearchContext};
use crate::board::{Move, Position, MATE_SCORE};
use crate::tt::BoundType;

/// Mate scores are stored relative to the node so they stay correct when the
/// same position is reached at a different ply.
#[inline]
pub(crate) fn score_to_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_THRESHOLD {
        score + ply as i32
    } else if score <= -MATE_THRESHOLD {
        score - ply as i32
    } else {
        score
    }
}

#[inline]
pub(crate) fn score_from_tt(score: i32, ply: usize) -> i32 {
    if score >= MATE_THRESHOLD {
        score - ply as i32
    } else if score <= -MATE_THRESHOLD {
        score + ply as i32
    } else {
        score
    }
}

impl SearchContext<'_> {
    /// Fail-soft alpha-beta from the side to move's point of view.
    ///
    /// `depth` is the remaining depth; `ply` the distance from the root.
    pub(super) fn negamax(
        &mut self,
        pos: &mut Position,
        depth: u32,
        ply: usize,
        mut alpha: i32,
        mut beta: i32,
    ) -> Result<i32, SearchAborted> {
        self.count_node()?;

        let (tt_move, cutoff) = self.probe_tt(pos.hash(), depth, ply, &mut alpha, &mut beta);
        if let Some(score) = cutoff {
            return Ok(score);
        }

        if depth == 0 {
            return self.quiescence(pos, ply, 0, alpha, beta);
        }

        let moves = pos.generate_legal_moves();
        if moves.is_empty() {
            return Ok(if pos.is_in_check() {
                -MATE_SCORE + ply as i32
            } else {
                0
            });
        }

        let alpha_start = alpha;
        let mut best_score = -INFINITY;
        let mut best_move = None;

        for mv in order_moves(&moves, tt_move).moves() {
            let score = {
                let mut child = pos.apply_scoped(mv);
                -self.negamax(&mut child, depth - 1, ply + 1, -beta, -alpha)?
            };

            if score > best_score {
                best_score = score;
                best_move = Some(mv);
            }
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        let bound = if best_score <= alpha_start {
            BoundType::UpperBound
        } else if best_score >= beta {
            BoundType::LowerBound
        } else {
            BoundType::Exact
        };
        self.tt
            .store(pos.hash(), depth, score_to_tt(best_score, ply), bound, best_move);

        Ok(best_score)
    }

    /// Look up the table. Returns the stored move for ordering and, when the
    /// entry is deep enough to settle this node, the score to return.
    /// Bound entries narrow the window in place.
    fn probe_tt(
        &mut self,
        hash: u64,
        depth: u32,
        ply: usize,
        alpha: &mut i32,
        beta: &mut i32,
    ) -> (Option<Move>, Option<i32>) {
        let Some(entry) = self.tt.probe(hash) else {
            return (None, None);
        };
        self.tt_hits += 1;

        if entry.depth() < depth {
            return (entry.best_move(), None);
        }

        let score = score_from_tt(entry.score(), ply);
        match entry.bound_type() {
            BoundType::Exact => return (entry.best_move(), Some(score)),
            BoundType::LowerBound => *alpha = (*alpha).max(score),
            BoundType::UpperBound => *beta = (*beta).min(score),
        }
        if *alpha >= *beta {
            return (entry.best_move(), Some(score));
        }
        (entry.best_move(), None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mate_scores_round_trip_through_table() {
        let mate_in_three_plies = MATE_SCORE - 3;
        let stored = score_to_tt(mate_in_three_plies, 2);
        assert_eq!(stored, MATE_SCORE - 1);
        assert_eq!(score_from_tt(stored, 2), mate_in_three_plies);
        // same node reached two plies deeper
        assert_eq!(score_from_tt(stored, 4), MATE_SCORE - 5);

        let mated = -MATE_SCORE + 4;
        assert_eq!(score_from_tt(score_to_tt(mated, 3), 3), mated);
        assert_eq!(score_to_tt(150, 7), 150);
    }
}
