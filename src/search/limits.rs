//! Search limits and engine configuration.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::constants::{
    DEFAULT_MAX_QSEARCH_DEPTH, DEFAULT_POLL_INTERVAL, DEFAULT_TT_CAPACITY, MAX_DEPTH,
};

/// Engine settings that outlive a single search.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Transposition table slots, rounded up to a power of two.
    pub tt_capacity: usize,
    pub max_quiescence_depth: u32,
    /// Nodes between deadline and stop-flag checks, rounded up to a power of two.
    pub poll_interval: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            tt_capacity: DEFAULT_TT_CAPACITY,
            max_quiescence_depth: DEFAULT_MAX_QSEARCH_DEPTH,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Limits for one call to [`SearchEngine::search`](super::SearchEngine::search).
///
/// ```
/// use std::time::Duration;
/// use bitboard_chess::search::SearchLimits;
///
/// let limits = SearchLimits::depth(6).with_time(Duration::from_millis(250));
/// assert_eq!(limits.max_depth, 6);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SearchLimits {
    pub max_depth: u32,
    pub time: Option<Duration>,
    pub nodes: Option<u64>,
    pub stop: Option<Arc<AtomicBool>>,
}

impl SearchLimits {
    /// Search to a fixed depth with no other limit.
    #[must_use]
    pub fn depth(max_depth: u32) -> Self {
        SearchLimits {
            max_depth,
            ..Self::default()
        }
    }

    /// Deepen until the time budget runs out.
    #[must_use]
    pub fn time(budget: Duration) -> Self {
        SearchLimits {
            max_depth: MAX_DEPTH,
            time: Some(budget),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_time(mut self, budget: Duration) -> Self {
        self.time = Some(budget);
        self
    }

    #[must_use]
    pub fn with_nodes(mut self, nodes: u64) -> Self {
        self.nodes = Some(nodes);
        self
    }

    /// Abort as soon as `flag` is set by another thread.
    #[must_use]
    pub fn with_stop(mut self, flag: Arc<AtomicBool>) -> Self {
        self.stop = Some(flag);
        self
    }
}
