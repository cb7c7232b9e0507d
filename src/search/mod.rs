//! Game-tree search.
//!
//! This module implements:
//! - Iterative deepening with root move reordering
//! - Fail-soft alpha-beta negamax
//! - Transposition table cutoffs and move ordering
//! - Quiescence search over captures
//! - Cooperative cancellation by deadline, node budget or stop flag

pub mod constants;
mod engine;
mod limits;
mod move_order;
mod negamax;
mod quiescence;

pub use constants::{MATE_THRESHOLD, MAX_DEPTH};
pub use engine::{find_best_move, SearchEngine, SearchResult};
pub use limits::{SearchConfig, SearchLimits};

use std::sync::atomic::Ordering;
use std::time::Instant;

use crate::tt::TranspositionTable;

/// The search ran out of budget or was told to stop. Unwinds to the root.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct SearchAborted;

/// State for one call to [`SearchEngine::search`].
pub(crate) struct SearchContext<'a> {
    pub tt: &'a mut TranspositionTable,
    pub config: &'a SearchConfig,
    pub limits: &'a SearchLimits,
    pub start_time: Instant,
    pub nodes: u64,
    pub tt_hits: u64,
    poll_mask: u64,
    aborted: bool,
}

impl<'a> SearchContext<'a> {
    pub(crate) fn new(
        tt: &'a mut TranspositionTable,
        config: &'a SearchConfig,
        limits: &'a SearchLimits,
    ) -> Self {
        SearchContext {
            tt,
            config,
            limits,
            start_time: Instant::now(),
            nodes: 0,
            tt_hits: 0,
            poll_mask: config.poll_interval.max(1).next_power_of_two() - 1,
            aborted: false,
        }
    }

    /// Count a node and poll the limits every `poll_interval` nodes.
    /// Once aborted, every later call fails too.
    #[inline]
    fn count_node(&mut self) -> Result<(), SearchAborted> {
        if self.aborted {
            return Err(SearchAborted);
        }
        self.nodes += 1;
        if self.limits.nodes.is_some_and(|limit| self.nodes > limit)
            || (self.nodes & self.poll_mask == 0 && self.should_stop())
        {
            self.aborted = true;
            return Err(SearchAborted);
        }
        Ok(())
    }

    fn should_stop(&self) -> bool {
        if let Some(flag) = &self.limits.stop {
            if flag.load(Ordering::Relaxed) {
                return true;
            }
        }
        self.out_of_time()
    }

    fn out_of_time(&self) -> bool {
        self.limits
            .time
            .is_some_and(|budget| self.start_time.elapsed() >= budget)
    }
}
