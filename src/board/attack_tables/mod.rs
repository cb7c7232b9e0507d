//! Attack generation: leaper tables, slider ray walks and attack queries.

mod attacks;
mod tables;

pub(crate) use tables::{
    bishop_attacks, king_attacks, knight_attacks, pawn_attacks, rook_attacks,
};
