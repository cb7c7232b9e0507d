//! Property-based tests using proptest.

use crate::board::{Move, Position};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=40usize
}

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

const START_FENS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
];

proptest! {
    /// A random walk of applies followed by undos restores the position exactly.
    #[test]
    fn prop_apply_undo_restores_state(
        seed in seed_strategy(),
        num_moves in move_count_strategy(),
        start in 0..START_FENS.len(),
    ) {
        let mut pos = Position::from_fen(START_FENS[start]);
        let initial = pos.clone();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut history: Vec<Move> = Vec::new();

        for _ in 0..num_moves {
            let moves = pos.generate_legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            pos.apply(mv);
            history.push(mv);
        }

        while let Some(mv) = history.pop() {
            pos.undo(mv);
        }

        prop_assert_eq!(pos, initial);
    }

    /// The incremental hash always equals a from-scratch recomputation.
    #[test]
    fn prop_hash_consistency(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = pos.generate_legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            pos.apply(mv);
            prop_assert_eq!(pos.hash(), pos.compute_hash());
            prop_assert!(pos.is_consistent());
            prop_assert!(!pos.is_king_attacked(!pos.side_to_move()));
        }
    }

    /// Both legality filters produce the same moves in the same order.
    #[test]
    fn prop_legality_filters_agree(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let by_apply = pos.generate_legal_moves();
            let by_simulation = pos.legal_moves();
            prop_assert_eq!(by_apply.as_slice(), by_simulation.as_slice());

            let captures: Vec<Move> = by_apply.iter().copied().filter(|m| m.is_capture()).collect();
            let legal_captures = pos.generate_legal_captures();
            prop_assert_eq!(captures.as_slice(), legal_captures.as_slice());

            if by_apply.is_empty() {
                break;
            }
            let mv = by_apply[rng.gen_range(0..by_apply.len())];
            pos.apply(mv);
        }
    }

    /// Colour-flipped positions evaluate to the negated white score.
    #[test]
    fn prop_evaluation_antisymmetric(seed in seed_strategy(), num_moves in 0..30usize) {
        let mut pos = Position::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = pos.generate_legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            pos.apply(mv);
        }

        prop_assert_eq!(pos.mirrored().evaluate_white(), -pos.evaluate_white());
    }
}
