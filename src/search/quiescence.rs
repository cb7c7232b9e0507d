use super::constants::MATE_THRESHOLD;
use super::move_order::order_captures;
use super::{SearchAborted, SearchContext};
use crate::board::{Position, MATE_SCORE};

impl SearchContext<'_> {
    /// Capture-only search below the nominal depth.
    ///
    /// The static score is a lower bound for the side to move (stand pat);
    /// only legal captures are tried, most valuable victim first.
    pub(super) fn quiescence(
        &mut self,
        pos: &mut Position,
        ply: usize,
        qdepth: u32,
        mut alpha: i32,
        beta: i32,
    ) -> Result<i32, SearchAborted> {
        self.count_node()?;

        let stand_pat = match pos.evaluate() {
            // mated here, score by distance from the root
            score if score == -MATE_SCORE => -MATE_SCORE + ply as i32,
            score => score,
        };
        if stand_pat.abs() >= MATE_THRESHOLD || qdepth >= self.config.max_quiescence_depth {
            return Ok(stand_pat);
        }
        if stand_pat >= beta {
            return Ok(stand_pat);
        }
        alpha = alpha.max(stand_pat);

        let captures = pos.generate_legal_captures();
        let mut best = stand_pat;
        for mv in order_captures(&captures).moves() {
            let score = {
                let mut child = pos.apply_scoped(mv);
                -self.quiescence(&mut child, ply + 1, qdepth + 1, -beta, -alpha)?
            };

            best = best.max(score);
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }

        Ok(best)
    }
}
