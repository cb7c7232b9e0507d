//! Iterative deepening driver and public entry points.

use std::time::Duration;

use log::{debug, trace};

use super::constants::{INFINITY, MATE_THRESHOLD, MAX_DEPTH, MAX_PLY};
use super::move_order::order_moves;
use super::negamax::score_to_tt;
use super::{SearchAborted, SearchConfig, SearchContext, SearchLimits};
use crate::board::{Move, Position, MATE_SCORE};
use crate::tt::{BoundType, TranspositionTable};

/// Outcome of a search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` only when the side to move has no legal move.
    pub best_move: Option<Move>,
    /// Score of `best_move` for the side to move, from the last completed depth.
    pub score: i32,
    /// Deepest fully completed iteration; 0 if none completed.
    pub depth: u32,
    pub nodes: u64,
    pub elapsed: Duration,
    /// Principal variation, starting with `best_move`.
    pub pv: Vec<Move>,
}

impl SearchResult {
    /// Moves to mate: positive when the side to move mates, negative when it
    /// is mated.
    #[must_use]
    pub fn mate_in(&self) -> Option<i32> {
        if self.score.abs() < MATE_THRESHOLD {
            None
        } else if self.score > 0 {
            Some((MATE_SCORE - self.score + 1) / 2)
        } else {
            Some(-(MATE_SCORE + self.score + 1) / 2)
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct RootMove {
    mv: Move,
    score: i32,
}

/// Search engine owning its transposition table.
///
/// The table survives between searches; call [`SearchEngine::new_game`] to
/// forget it.
pub struct SearchEngine {
    config: SearchConfig,
    tt: TranspositionTable,
}

impl SearchEngine {
    #[must_use]
    pub fn new(config: SearchConfig) -> Self {
        let tt = TranspositionTable::with_capacity(config.tt_capacity);
        SearchEngine { config, tt }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    #[must_use]
    pub fn tt(&self) -> &TranspositionTable {
        &self.tt
    }

    pub fn new_game(&mut self) {
        self.tt.clear();
    }

    /// Search `pos` within `limits`. The position is restored on return.
    pub fn search(&mut self, pos: &mut Position, limits: &SearchLimits) -> SearchResult {
        let mut ctx = SearchContext::new(&mut self.tt, &self.config, limits);

        let legal = pos.generate_legal_moves();
        if legal.is_empty() {
            let score = if pos.is_in_check() { -MATE_SCORE } else { 0 };
            return SearchResult {
                best_move: None,
                score,
                depth: 0,
                nodes: 0,
                elapsed: ctx.start_time.elapsed(),
                pv: Vec::new(),
            };
        }

        let tt_move = ctx.tt.probe(pos.hash()).and_then(|entry| entry.best_move());
        let mut root: Vec<RootMove> = order_moves(&legal, tt_move)
            .moves()
            .map(|mv| RootMove { mv, score: -INFINITY })
            .collect();

        // fallback when not even depth 1 completes
        let mut best_move = root[0].mv;
        let mut best_score = pos.evaluate();
        let mut completed = 0;
        let mut pv = vec![best_move];

        let max_depth = limits.max_depth.clamp(1, MAX_DEPTH);
        for depth in 1..=max_depth {
            if depth > 1 && ctx.should_stop() {
                break;
            }

            let (mv, score) = match ctx.search_root(pos, &mut root, depth) {
                Ok(found) => found,
                Err(SearchAborted) => {
                    trace!(
                        "depth {depth} aborted after {} nodes, keeping depth {completed}",
                        ctx.nodes
                    );
                    break;
                }
            };

            root.sort_by(|a, b| b.score.cmp(&a.score));
            ctx.tt
                .store(pos.hash(), depth, score_to_tt(score, 0), BoundType::Exact, Some(mv));

            best_move = mv;
            best_score = score;
            completed = depth;
            pv = extract_pv(&*ctx.tt, pos, depth as usize);

            debug!(
                "depth {depth} score {score} nodes {} time {}ms tt_hits {} pv {}",
                ctx.nodes,
                ctx.start_time.elapsed().as_millis(),
                ctx.tt_hits,
                format_pv(&pv)
            );

            // no shorter mate exists than one found by a full-width search
            if score >= MATE_THRESHOLD && (MATE_SCORE - score) as u32 <= depth {
                break;
            }
        }

        SearchResult {
            best_move: Some(best_move),
            score: best_score,
            depth: completed,
            nodes: ctx.nodes,
            elapsed: ctx.start_time.elapsed(),
            pv,
        }
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        SearchEngine::new(SearchConfig::default())
    }
}

impl SearchContext<'_> {
    /// One full-window pass over the root moves. Records each move's score
    /// and returns the first move with the highest score.
    fn search_root(
        &mut self,
        pos: &mut Position,
        root: &mut [RootMove],
        depth: u32,
    ) -> Result<(Move, i32), SearchAborted> {
        self.count_node()?;

        let mut alpha = -INFINITY;
        let mut best = (root[0].mv, -INFINITY);
        for rm in root.iter_mut() {
            let score = {
                let mut child = pos.apply_scoped(rm.mv);
                -self.negamax(&mut child, depth - 1, 1, -INFINITY, -alpha)?
            };
            rm.score = score;
            if score > best.1 {
                best = (rm.mv, score);
            }
            alpha = alpha.max(score);
        }
        Ok(best)
    }
}

/// Follow best moves stored in the table from `pos`, checking each for
/// legality. Stops at a missing entry or a repeated position.
fn extract_pv(tt: &TranspositionTable, pos: &mut Position, max_len: usize) -> Vec<Move> {
    let max_len = max_len.min(MAX_PLY);
    let mut pv = Vec::with_capacity(max_len);
    let mut seen = Vec::with_capacity(max_len);

    while pv.len() < max_len {
        let hash = pos.hash();
        if seen.contains(&hash) {
            break;
        }
        seen.push(hash);

        let Some(mv) = tt.probe(hash).and_then(|entry| entry.best_move()) else {
            break;
        };
        if !pos.legal_moves().contains(&mv) {
            break;
        }
        pos.apply(mv);
        pv.push(mv);
    }

    for &mv in pv.iter().rev() {
        pos.undo(mv);
    }
    pv
}

fn format_pv(pv: &[Move]) -> String {
    pv.iter()
        .map(|mv| mv.to_uci())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Best move for the side to move, searching up to `max_depth` plies and
/// optionally stopping after `time_limit`.
///
/// Returns `None` only when there is no legal move. Uses a fresh engine, so
/// the same position and depth with no time limit always give the same move.
///
/// ```
/// use bitboard_chess::{find_best_move, Position};
///
/// let mut pos = Position::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
/// let mv = find_best_move(&mut pos, 2, None).unwrap();
/// assert_eq!(mv.to_string(), "e1e8");
/// ```
pub fn find_best_move(
    pos: &mut Position,
    max_depth: u32,
    time_limit: Option<Duration>,
) -> Option<Move> {
    let mut limits = SearchLimits::depth(max_depth);
    if let Some(budget) = time_limit {
        limits = limits.with_time(budget);
    }
    SearchEngine::default().search(pos, &limits).best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Piece;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;

    fn small_engine() -> SearchEngine {
        SearchEngine::new(SearchConfig {
            tt_capacity: 1 << 12,
            ..SearchConfig::default()
        })
    }

    #[test]
    fn test_finds_back_rank_mate() {
        let mut pos = Position::from_fen("6k1/5ppp/8/8/8/8/8/4Q2K w - - 0 1");
        let result = small_engine().search(&mut pos, &SearchLimits::depth(3));
        assert_eq!(result.best_move.map(|m| m.to_string()), Some("e1e8".to_string()));
        assert_eq!(result.score, MATE_SCORE - 1);
        assert_eq!(result.mate_in(), Some(1));
        assert_eq!(result.depth, 1);
        assert_eq!(result.pv.first(), result.best_move.as_ref());
    }

    #[test]
    fn test_no_legal_moves() {
        let mut mated = Position::from_fen("4Q1k1/5ppp/8/8/8/8/8/7K b - - 0 1");
        let result = small_engine().search(&mut mated, &SearchLimits::depth(3));
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -MATE_SCORE);

        let mut stalemate = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
        let result = small_engine().search(&mut stalemate, &SearchLimits::depth(3));
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_pv_is_legal_line_and_position_restored() {
        let mut pos = Position::from_fen(
            "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
        );
        let before = pos.clone();
        let result = small_engine().search(&mut pos, &SearchLimits::depth(2));
        assert_eq!(pos, before);
        assert_eq!(result.depth, 2);
        assert!(!result.pv.is_empty());

        let mut line = pos.clone();
        for &mv in &result.pv {
            assert!(line.generate_legal_moves().contains(&mv));
            line.apply(mv);
        }
    }

    #[test]
    fn test_stop_flag_before_search_still_returns_a_move() {
        let flag = Arc::new(AtomicBool::new(true));
        let config = SearchConfig {
            tt_capacity: 1 << 12,
            poll_interval: 1,
            ..SearchConfig::default()
        };
        let mut pos = Position::new();
        let result = SearchEngine::new(config).search(&mut pos, &SearchLimits::depth(5).with_stop(flag));
        assert_eq!(result.depth, 0);
        let mv = result.best_move.expect("a legal move");
        assert!(pos.generate_legal_moves().contains(&mv));
        assert_eq!(result.pv, vec![mv]);
    }

    #[test]
    fn test_node_limit_keeps_last_completed_depth() {
        let mut pos = Position::new();
        let limits = SearchLimits::depth(20).with_nodes(20_000);
        let result = small_engine().search(&mut pos, &limits);
        assert!(result.depth >= 1);
        assert!(result.depth < 20);
        assert!(result.nodes <= 20_001);
        assert_eq!(pos, Position::new());
    }

    #[test]
    fn test_prefers_winning_the_queen() {
        // Rxd5 wins an undefended queen
        let mut pos = Position::from_fen("4k3/8/8/3q4/8/8/8/3RK3 w - - 0 1");
        let mv = find_best_move(&mut pos, 2, None).expect("move");
        assert_eq!(mv.captured, Some(Piece::Queen));
    }

    #[test]
    fn test_table_persists_until_new_game() {
        let mut engine = small_engine();
        let mut pos = Position::new();
        engine.search(&mut pos, &SearchLimits::depth(2));
        assert!(!engine.tt().is_empty());
        engine.new_game();
        assert!(engine.tt().is_empty());
    }
}
