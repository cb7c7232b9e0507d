//! Mate-in-one suite read from `data/mate_in_one.json`.

use serde::Deserialize;

use bitboard_chess::{find_best_move, Position, SearchEngine, SearchLimits};

#[derive(Deserialize)]
struct ProblemSet {
    problems: Vec<Problem>,
}

#[derive(Deserialize)]
struct Problem {
    name: String,
    fen: String,
    solution: String,
}

fn load() -> ProblemSet {
    let data = include_str!("data/mate_in_one.json");
    serde_json::from_str(data).expect("invalid mate_in_one.json")
}

#[test]
fn listed_solutions_are_mate() {
    for problem in load().problems {
        let mut pos = Position::from_fen(&problem.fen);
        let mv = pos
            .parse_move(&problem.solution)
            .unwrap_or_else(|e| panic!("{}: {e}", problem.name));
        pos.apply(mv);
        assert!(pos.is_checkmate(), "{}: {} is not mate", problem.name, problem.solution);
    }
}

#[test]
fn engine_finds_a_mate() {
    for problem in load().problems {
        let mut pos = Position::from_fen(&problem.fen);
        let mv = find_best_move(&mut pos, 2, None)
            .unwrap_or_else(|| panic!("{}: no move", problem.name));
        pos.apply(mv);
        assert!(
            pos.is_checkmate(),
            "{}: engine played {} which is not mate",
            problem.name,
            mv.to_uci()
        );
    }
}

#[test]
fn mate_is_reported_as_mate_in_one() {
    let mut engine = SearchEngine::default();
    for problem in load().problems {
        engine.new_game();
        let mut pos = Position::from_fen(&problem.fen);
        let result = engine.search(&mut pos, &SearchLimits::depth(4));
        assert_eq!(result.mate_in(), Some(1), "{}", problem.name);
        assert_eq!(result.depth, 1, "{}: mate found at depth 1 ends the search", problem.name);
        assert_eq!(result.pv.len(), 1, "{}", problem.name);
    }
}
