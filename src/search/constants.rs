//! Search constants.

use crate::board::MATE_SCORE;

// ============================================================================
// SEARCH LIMITS
// ============================================================================

/// Deepest ply the search can reach, quiescence included.
pub const MAX_PLY: usize = 128;

/// Iterative deepening never goes past this many plies.
pub const MAX_DEPTH: u32 = 64;

/// Wider than any score the search can return.
pub const INFINITY: i32 = MATE_SCORE + 1;

/// Scores with absolute value >= this are checkmate scores.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - MAX_PLY as i32;

pub const DEFAULT_MAX_QSEARCH_DEPTH: u32 = 8;

/// Nodes between deadline checks. Must be a power of two.
pub const DEFAULT_POLL_INTERVAL: u64 = 1024;

/// About 8 MiB of table.
pub const DEFAULT_TT_CAPACITY: usize = 1 << 18;

// ============================================================================
// MOVE ORDERING PRIORITIES
// ============================================================================
// Higher scores are tried earlier: TT > promotions > captures > castling > quiet

pub const TT_MOVE_SCORE: i32 = 1_000_000;

/// Plus the value of the promoted piece.
pub const PROMOTION_SCORE: i32 = 900_000;

/// Plus victim value minus attacker value.
pub const CAPTURE_SCORE: i32 = 100_000;

pub const CASTLING_SCORE: i32 = 50_000;
