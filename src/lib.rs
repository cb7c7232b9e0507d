pub mod board;
pub mod protocol;
pub mod search;
pub mod tt;
mod zobrist;

pub use board::{evaluate, Color, Move, MoveParseError, Piece, Position, Square, MATE_SCORE};
pub use search::{find_best_move, SearchConfig, SearchEngine, SearchLimits, SearchResult};
pub use tt::TranspositionTable;
