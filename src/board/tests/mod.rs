//! Board module tests.
//!
//! - `perft.rs` - move generation node counts
//! - `make_unmake.rs` - apply/undo correctness and the move guard
//! - `notation.rs` - coordinate move parsing and formatting
//! - `eval.rs` - evaluation properties
//! - `proptest.rs` - property-based random walks

mod eval;
mod make_unmake;
mod proptest;
