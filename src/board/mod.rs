//! Chess board representation and game logic.
//!
//! Uses bitboards for move generation and evaluation. Moves are applied in
//! place and undone from a snapshot stack; the Zobrist hash is maintained
//! incrementally.
//!
//! # Example
//! ```
//! use bitboard_chess::board::Position;
//!
//! let mut pos = Position::new();
//! let moves = pos.generate_legal_moves();
//! assert_eq!(moves.len(), 20);
//! ```

pub(crate) mod attack_tables;
mod error;
pub(crate) mod eval;
pub mod eval_terms;
mod fen;
mod make_unmake;
mod movegen;
mod notation;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::{FenError, MoveParseError, SquareError};
pub use eval::{evaluate, MATE_SCORE};
pub use eval_terms::GamePhase;
pub use make_unmake::MoveGuard;
pub use state::{Position, UndoState};
pub use types::{
    Bitboard, BitboardIter, CastlingRights, Color, Move, MoveList, MoveListIntoIter, Piece,
    ScoredMove, ScoredMoveList, Square,
};

pub(crate) use types::castle_bit;
