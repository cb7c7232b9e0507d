use std::ops::{Deref, DerefMut};

use crate::zobrist::ZOBRIST;

use super::{Color, Move, Piece, Position, Square, UndoState};

impl Position {
    /// Apply a legal move in place.
    ///
    /// A snapshot of everything the move touches is pushed on the undo stack
    /// first; the hash is updated incrementally by XOR-ing out old features
    /// and XOR-ing in new ones.
    pub fn apply(&mut self, mv: Move) {
        let us = self.side_to_move;
        let them = !us;
        debug_assert!(
            self.pieces(us, mv.piece).contains(mv.from),
            "{mv} does not move a {} {}",
            us,
            mv.piece
        );
        debug_assert_eq!(
            mv.captured,
            if mv.is_en_passant {
                Some(Piece::Pawn)
            } else {
                self.piece_of(them, mv.to)
            },
            "{mv} has a stale capture"
        );

        self.undo_stack.push(UndoState {
            mv,
            pieces: self.pieces,
            occupied: self.occupied,
            all_occupied: self.all_occupied,
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
            hash: self.hash,
        });

        let mut hash = self.hash;

        if let Some(ep) = self.en_passant_target.take() {
            hash ^= ZOBRIST.en_passant(ep);
        }

        if let Some(captured) = mv.captured {
            let cap_sq = mv.capture_square();
            self.toggle_piece(cap_sq, them, captured);
            hash ^= ZOBRIST.piece(them, captured, cap_sq);
        }

        self.toggle_piece(mv.from, us, mv.piece);
        hash ^= ZOBRIST.piece(us, mv.piece, mv.from);
        let placed = mv.promotion.unwrap_or(mv.piece);
        self.toggle_piece(mv.to, us, placed);
        hash ^= ZOBRIST.piece(us, placed, mv.to);

        if mv.is_castling {
            let (rook_from, rook_to) = castling_rook_squares(mv.to);
            self.toggle_piece(rook_from, us, Piece::Rook);
            self.toggle_piece(rook_to, us, Piece::Rook);
            hash ^= ZOBRIST.piece(us, Piece::Rook, rook_from);
            hash ^= ZOBRIST.piece(us, Piece::Rook, rook_to);
        }

        let old_rights = self.castling_rights;
        self.castling_rights = old_rights.after_move(mv.from, mv.to);
        hash ^= ZOBRIST.castling_bits(old_rights.bits() ^ self.castling_rights.bits());

        if mv.piece == Piece::Pawn && mv.from.rank().abs_diff(mv.to.rank()) == 2 {
            let ep_rank = usize::midpoint(mv.from.rank(), mv.to.rank());
            if let Some(ep) = Square::new(ep_rank, mv.from.file()) {
                self.en_passant_target = Some(ep);
                hash ^= ZOBRIST.en_passant(ep);
            }
        }

        if mv.piece == Piece::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }
        if us == Color::Black {
            self.fullmove_number += 1;
        }

        self.side_to_move = them;
        hash ^= ZOBRIST.black_to_move();
        self.hash = hash;

        debug_assert_eq!(self.hash, self.compute_hash(), "hash drift after {mv}");
    }

    /// Undo the most recently applied move.
    ///
    /// # Panics
    /// Panics if nothing has been applied. Debug builds also assert that `mv`
    /// is the move on top of the undo stack.
    pub fn undo(&mut self, mv: Move) {
        let Some(state) = self.undo_stack.pop() else {
            panic!("undo({mv}) called with an empty undo stack");
        };
        debug_assert_eq!(state.mv, mv, "undo out of order");
        self.pieces = state.pieces;
        self.occupied = state.occupied;
        self.all_occupied = state.all_occupied;
        self.castling_rights = state.castling_rights;
        self.en_passant_target = state.en_passant_target;
        self.halfmove_clock = state.halfmove_clock;
        self.fullmove_number = state.fullmove_number;
        self.hash = state.hash;
        self.side_to_move = !self.side_to_move;
    }

    /// Apply `mv` and return a guard that undoes it when dropped.
    ///
    /// The guard dereferences to the position, so recursion can continue
    /// through it; the undo runs on every exit path including `?`.
    pub fn apply_scoped(&mut self, mv: Move) -> MoveGuard<'_> {
        self.apply(mv);
        MoveGuard { position: self, mv }
    }
}

/// Rook origin and destination for a castling king landing on `king_to`.
pub(crate) fn castling_rook_squares(king_to: Square) -> (Square, Square) {
    let rank = king_to.rank();
    let (from_file, to_file) = if king_to.file() == 6 { (7, 5) } else { (0, 3) };
    let rook_from = Square::from_index(rank * 8 + from_file);
    let rook_to = Square::from_index(rank * 8 + to_file);
    (rook_from, rook_to)
}

/// A move held applied for the guard's lifetime.
pub struct MoveGuard<'a> {
    position: &'a mut Position,
    mv: Move,
}

impl MoveGuard<'_> {
    #[must_use]
    pub fn applied_move(&self) -> Move {
        self.mv
    }
}

impl Deref for MoveGuard<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.position
    }
}

impl DerefMut for MoveGuard<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.position
    }
}

impl Drop for MoveGuard<'_> {
    fn drop(&mut self) {
        self.position.undo(self.mv);
    }
}
