//! Transposition table for caching search results.
//!
//! A fixed-capacity, directly indexed table owned by the search. Each slot
//! keeps the full 64-bit key, so two positions that share a slot index are
//! told apart on probe. New results always overwrite the slot.

use std::mem;

use log::debug;

use crate::board::Move;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoundType {
    Exact,      // score is the exact value
    LowerBound, // score is at least this value (failed high)
    UpperBound, // score is at most this value (failed low)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TTEntry {
    key: u64,
    score: i32,
    depth: u32,
    bound: BoundType,
    best_move: Option<Move>,
}

impl TTEntry {
    #[must_use]
    pub fn key(&self) -> u64 {
        self.key
    }

    /// Remaining depth the score was searched to.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Stored score. Mate scores are relative to the stored node, not the root.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub fn bound_type(&self) -> BoundType {
        self.bound
    }

    #[must_use]
    pub fn best_move(&self) -> Option<Move> {
        self.best_move
    }
}

pub struct TranspositionTable {
    slots: Vec<Option<TTEntry>>,
    mask: usize,
    used: usize,
}

impl TranspositionTable {
    /// Create a table holding `entries` slots, rounded up to a power of two.
    #[must_use]
    pub fn with_capacity(entries: usize) -> Self {
        let capacity = entries.max(1).next_power_of_two();
        debug!(
            "transposition table: {capacity} entries ({} KiB)",
            capacity * mem::size_of::<Option<TTEntry>>() / 1024
        );
        TranspositionTable {
            slots: vec![None; capacity],
            mask: capacity - 1,
            used: 0,
        }
    }

    /// Create a table using about `size_mb` megabytes.
    #[must_use]
    pub fn new(size_mb: usize) -> Self {
        let entries = (size_mb * 1024 * 1024) / mem::size_of::<Option<TTEntry>>();
        // round down so the table never exceeds the budget
        let entries = if entries.is_power_of_two() {
            entries
        } else {
            entries.next_power_of_two() / 2
        };
        Self::with_capacity(entries.max(1024))
    }

    #[inline]
    fn index(&self, hash: u64) -> usize {
        (hash as usize) & self.mask
    }

    /// Entry stored for exactly this key, if any.
    #[must_use]
    pub fn probe(&self, hash: u64) -> Option<TTEntry> {
        self.slots[self.index(hash)].filter(|entry| entry.key == hash)
    }

    /// Store a result, replacing whatever occupied the slot.
    pub fn store(
        &mut self,
        hash: u64,
        depth: u32,
        score: i32,
        bound: BoundType,
        best_move: Option<Move>,
    ) {
        let idx = self.index(hash);
        let slot = &mut self.slots[idx];
        if slot.is_none() {
            self.used += 1;
        }
        *slot = Some(TTEntry {
            key: hash,
            score,
            depth,
            bound,
            best_move,
        });
    }

    pub fn clear(&mut self) {
        self.slots.fill(None);
        self.used = 0;
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.used
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used == 0
    }

    /// Occupancy in permille, as reported by the text protocol.
    #[must_use]
    pub fn hashfull_per_mille(&self) -> u32 {
        ((self.used as u64 * 1000) / self.slots.len() as u64) as u32
    }
}
