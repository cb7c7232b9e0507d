//! Evaluation properties.

use crate::board::eval::EvalContext;
use crate::board::{evaluate, Position, MATE_SCORE};

const SAMPLE_FENS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "r3k2r/Pppp1ppp/1b3nbN/nP6/BBP1P3/q4N2/Pp1P2PP/R2Q1RK1 w kq - 0 1",
    "rnbq1k1r/pp1Pbppp/2p5/8/2B5/8/PPP1NnPP/RNBQK2R w KQ - 1 8",
    "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
    "4k3/8/8/8/8/8/4P3/R3K3 b - - 0 40",
];

#[test]
fn test_color_flip_negates_white_score() {
    for fen in SAMPLE_FENS {
        let pos = Position::from_fen(fen);
        let flipped = pos.mirrored();
        assert_eq!(
            flipped.evaluate_white(),
            -pos.evaluate_white(),
            "asymmetric evaluation for {fen}"
        );
        assert_eq!(flipped.evaluate(), pos.evaluate(), "side-relative score differs for {fen}");
    }
}

#[test]
fn test_start_position_is_level() {
    assert_eq!(Position::new().evaluate(), 0);
}

#[test]
fn test_material_advantage_is_positive_for_side_to_move() {
    let white_up = Position::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - - 0 1");
    assert!(white_up.evaluate() > 500);
    let black_to_move = Position::from_fen("4k3/8/8/8/8/8/8/Q3K3 b - - 0 1");
    assert!(black_to_move.evaluate() < -500);
}

#[test]
fn test_checkmate_and_stalemate_scores() {
    // back-rank mate, black to move
    let mated = Position::from_fen("4Q1k1/5ppp/8/8/8/8/8/7K b - - 0 1");
    assert!(mated.is_checkmate());
    assert_eq!(evaluate(&mated), -MATE_SCORE);
    assert_eq!(mated.evaluate_white(), MATE_SCORE);

    let stalemate = Position::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");
    assert!(stalemate.is_stalemate());
    assert_eq!(evaluate(&stalemate), 0);
}

#[test]
fn test_evaluate_is_pure() {
    let pos = Position::from_fen(SAMPLE_FENS[1]);
    let before = pos.clone();
    let first = pos.evaluate();
    assert_eq!(pos.evaluate(), first);
    assert_eq!(pos, before);
}

#[test]
fn test_endgame_king_proximity_helps_stronger_side() {
    let near = Position::from_fen("8/8/8/3k4/8/3K4/8/7R w - - 0 50");
    let far = Position::from_fen("8/8/8/3k4/8/8/8/K6R w - - 0 50");
    let endgame = |pos: &Position| pos.eval_endgame(&EvalContext::new(pos)).1;
    assert!(endgame(&near) > endgame(&far));
}
