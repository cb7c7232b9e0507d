//! Apply/undo tests.

use crate::board::{CastlingRights, Color, Move, Piece, Position, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn find_move(pos: &mut Position, from: &str, to: &str, promotion: Option<Piece>) -> Move {
    let (from, to) = (sq(from), sq(to));
    pos.generate_legal_moves()
        .into_iter()
        .find(|m| m.from == from && m.to == to && m.promotion == promotion)
        .expect("expected move not found")
}

fn assert_round_trip(fen: &str, from: &str, to: &str, promotion: Option<Piece>) -> Position {
    let mut pos = Position::from_fen(fen);
    let before = pos.clone();
    let mv = find_move(&mut pos, from, to, promotion);
    pos.apply(mv);
    assert_eq!(pos.hash(), pos.compute_hash());
    assert!(pos.is_consistent());
    let after = pos.clone();
    pos.undo(mv);
    assert_eq!(pos, before);
    after
}

#[test]
fn test_en_passant_round_trip() {
    let after = assert_round_trip(
        "rnbqkbnr/ppp1p1pp/8/3pPp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
        "e5",
        "f6",
        None,
    );
    assert_eq!(after.piece_at(sq("f5")), None);
    assert_eq!(after.piece_at(sq("f6")), Some((Color::White, Piece::Pawn)));
    assert_eq!(after.en_passant_target(), None);
}

#[test]
fn test_promotion_round_trip() {
    let after = assert_round_trip("8/P7/8/8/8/8/8/K1k5 w - - 0 1", "a7", "a8", Some(Piece::Knight));
    assert_eq!(after.piece_at(sq("a8")), Some((Color::White, Piece::Knight)));
    assert!(after.pieces(Color::White, Piece::Pawn).is_empty());
}

#[test]
fn test_castling_moves_rook_and_clears_rights() {
    let after = assert_round_trip("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "e1", "g1", None);
    assert_eq!(after.piece_at(sq("f1")), Some((Color::White, Piece::Rook)));
    assert_eq!(after.piece_at(sq("h1")), None);
    assert!(!after.castling_rights().has(Color::White, true));
    assert!(!after.castling_rights().has(Color::White, false));
    assert!(after.castling_rights().has(Color::Black, true));

    let after = assert_round_trip("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", "e8", "c8", None);
    assert_eq!(after.piece_at(sq("d8")), Some((Color::Black, Piece::Rook)));
    assert_eq!(after.piece_at(sq("a8")), None);
}

#[test]
fn test_rook_capture_on_home_square_clears_right() {
    let after = assert_round_trip("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", "a1", "a8", None);
    let rights = after.castling_rights();
    assert!(!rights.has(Color::White, false));
    assert!(!rights.has(Color::Black, false));
    assert!(rights.has(Color::White, true));
    assert!(rights.has(Color::Black, true));
}

#[test]
fn test_double_push_sets_en_passant_and_clocks() {
    let mut pos = Position::new();
    let mv = find_move(&mut pos, "e2", "e4", None);
    pos.apply(mv);
    assert_eq!(pos.en_passant_target(), Some(sq("e3")));
    assert_eq!(pos.side_to_move(), Color::Black);
    assert_eq!(pos.halfmove_clock(), 0);
    assert_eq!(pos.fullmove_number(), 1);

    let reply = find_move(&mut pos, "g8", "f6", None);
    pos.apply(reply);
    assert_eq!(pos.en_passant_target(), None);
    assert_eq!(pos.halfmove_clock(), 1);
    assert_eq!(pos.fullmove_number(), 2);

    pos.undo(reply);
    pos.undo(mv);
    assert_eq!(pos, Position::new());
}

#[test]
fn test_guard_undoes_on_drop() {
    let mut pos = Position::new();
    let mv = find_move(&mut pos, "g1", "f3", None);
    {
        let guard = pos.apply_scoped(mv);
        assert_eq!(guard.side_to_move(), Color::Black);
        assert_eq!(guard.ply_count(), 1);
        assert_eq!(guard.applied_move(), mv);
    }
    assert_eq!(pos, Position::new());
}

#[test]
fn test_guard_undoes_on_early_return() {
    fn probe(pos: &mut Position, mv: Move) -> Result<(), ()> {
        let guard = pos.apply_scoped(mv);
        if guard.side_to_move() == Color::Black {
            return Err(());
        }
        Ok(())
    }

    let mut pos = Position::new();
    let mv = find_move(&mut pos, "d2", "d4", None);
    assert!(probe(&mut pos, mv).is_err());
    assert_eq!(pos, Position::new());
}

#[test]
fn test_legal_moves_stable_after_apply_undo() {
    let mut pos = Position::from_fen("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1");
    let initial = pos.generate_legal_moves();
    for mv in initial.clone() {
        let mut child = pos.apply_scoped(mv);
        let _ = child.generate_legal_moves();
    }
    let after: Vec<Move> = pos.generate_legal_moves().into_iter().collect();
    assert_eq!(initial.as_slice(), after.as_slice());
}

#[test]
fn test_mirrored_swaps_everything() {
    let pos = Position::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w Kq d6 0 1");
    let flipped = pos.mirrored();
    assert_eq!(flipped.side_to_move(), Color::Black);
    assert_eq!(flipped.en_passant_target(), Some(sq("d3")));
    assert_eq!(flipped.piece_at(sq("e4")), Some((Color::Black, Piece::Pawn)));
    let mut expected = CastlingRights::none();
    expected.set(Color::Black, true);
    expected.set(Color::White, false);
    assert_eq!(flipped.castling_rights(), expected);
    assert!(flipped.is_consistent());
    assert_eq!(flipped.mirrored(), pos);
}
