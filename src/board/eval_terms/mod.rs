//! Evaluation terms.
//!
//! Each term returns `(middlegame, endgame)` from white's perspective:
//! - material and piece-square tables
//! - mobility (legal-move differential)
//! - king safety (ring attacks, pawn shield, open files)
//! - pawn structure (doubled, isolated, backward, passed, islands)
//! - piece bonuses (bishop pair, outposts, rook files)
//! - activity (center control, coordination)
//! - hanging pieces
//! - endgame king proximity

mod activity;
mod endgame;
mod hanging;
mod king_safety;
mod material;
mod mobility;
mod pawn_structure;
mod pieces;
pub mod tables;

pub use endgame::GamePhase;
