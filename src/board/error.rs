//! Error types for board parsing.

use thiserror::Error;

/// Error type for FEN parsing failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN must have at least 4 fields, found {found}")]
    TooFewParts { found: usize },
    #[error("invalid piece character '{char}' in FEN")]
    InvalidPiece { char: char },
    #[error("invalid castling character '{char}' in FEN")]
    InvalidCastling { char: char },
    #[error("invalid side to move '{found}', expected 'w' or 'b'")]
    InvalidSideToMove { found: String },
    #[error("invalid en passant square '{found}'")]
    InvalidEnPassant { found: String },
    #[error("FEN placement must have 8 ranks, found {found}")]
    WrongRankCount { found: usize },
    #[error("rank {rank} does not describe exactly 8 files")]
    BadRankWidth { rank: usize },
    #[error("invalid move counter '{found}'")]
    InvalidCounter { found: String },
    #[error("each side needs exactly one king")]
    KingCount,
}

/// Error type for coordinate move parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveParseError {
    #[error("move must be 4-5 characters, found {len}")]
    InvalidLength { len: usize },
    #[error("invalid square in '{notation}': {source}")]
    InvalidSquare {
        notation: String,
        #[source]
        source: SquareError,
    },
    #[error("invalid promotion piece '{char}'")]
    InvalidPromotion { char: char },
    #[error("illegal move '{notation}'")]
    IllegalMove { notation: String },
}

/// Error type for square parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SquareError {
    #[error("square must be 2 characters, found {0}")]
    InvalidLength(usize),
    #[error("invalid file '{0}'")]
    InvalidFile(char),
    #[error("invalid rank '{0}'")]
    InvalidRank(char),
}
