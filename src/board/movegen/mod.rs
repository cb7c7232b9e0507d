//! Move generation.
//!
//! Pseudo-legal moves are generated per piece kind, then filtered to legal
//! moves either by tentatively applying each one (`generate_legal_moves`) or
//! by an occupancy simulation that never touches the board (`legal_moves`,
//! `count_legal_moves`). Both filters agree; the second keeps evaluation free
//! of mutation.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::{Bitboard, Color, Move, MoveList, Piece, Position, Square};

/// Which moves a generator pass produces.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum GenMode {
    All,
    /// Captures and capture-promotions only.
    Captures,
}

impl Position {
    /// Push a move of `piece` from `from` to every square in `targets`,
    /// recording the enemy piece captured on the destination.
    fn push_targets(&self, color: Color, piece: Piece, from: Square, targets: Bitboard, moves: &mut MoveList) {
        for to in targets {
            moves.push(Move {
                captured: self.piece_of(!color, to),
                ..Move::quiet(piece, from, to)
            });
        }
    }

    /// Target mask for a non-pawn piece in the given mode.
    fn target_mask(&self, color: Color, mode: GenMode) -> Bitboard {
        match mode {
            GenMode::All => !self.occupancy(color),
            GenMode::Captures => self.occupancy(!color),
        }
    }

    pub(crate) fn generate_pseudo_moves_for(&self, color: Color, mode: GenMode) -> MoveList {
        let mut moves = MoveList::new();
        self.generate_pawn_moves(color, mode, &mut moves);
        self.generate_knight_moves(color, mode, &mut moves);
        self.generate_slider_moves(color, mode, &mut moves);
        self.generate_king_moves(color, mode, &mut moves);
        moves
    }

    /// All pseudo-legal moves for the side to move. Some may leave the mover's
    /// own king in check.
    #[must_use]
    pub fn generate_pseudo_moves(&self) -> MoveList {
        self.generate_pseudo_moves_for(self.side_to_move, GenMode::All)
    }

    /// Legal moves for the side to move.
    ///
    /// Each pseudo-legal move is applied, rejected if it leaves the mover's
    /// king attacked, and undone again; the position is unchanged on return.
    pub fn generate_legal_moves(&mut self) -> MoveList {
        let us = self.side_to_move;
        let mut moves = self.generate_pseudo_moves();
        moves.retain(|&mv| {
            let after = self.apply_scoped(mv);
            !after.is_king_attacked(us)
        });
        moves
    }

    /// Legal moves for the side to move without mutating the board.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        let us = self.side_to_move;
        let mut moves = self.generate_pseudo_moves();
        moves.retain(|mv| self.leaves_king_safe(*mv, us));
        moves
    }

    /// Legal captures (including en passant and capture-promotions) for the
    /// side to move.
    #[must_use]
    pub fn generate_legal_captures(&self) -> MoveList {
        let us = self.side_to_move;
        let mut moves = self.generate_pseudo_moves_for(us, GenMode::Captures);
        moves.retain(|mv| self.leaves_king_safe(*mv, us));
        moves
    }

    /// Number of legal moves `side` would have if it were to move.
    ///
    /// En passant is only available to the side actually on move.
    #[must_use]
    pub fn count_legal_moves(&self, side: Color) -> usize {
        self.generate_pseudo_moves_for(side, GenMode::All)
            .iter()
            .filter(|mv| self.leaves_king_safe(**mv, side))
            .count()
    }

    /// Whether `mv` by `color` keeps `color`'s king out of attack, decided by
    /// simulating the occupancy after the move.
    pub(crate) fn leaves_king_safe(&self, mv: Move, color: Color) -> bool {
        // castling squares were checked for attacks at generation time
        if mv.is_castling {
            return true;
        }
        let king = if mv.piece == Piece::King {
            mv.to
        } else {
            match self.king_square(color) {
                Some(sq) => sq,
                None => return true,
            }
        };
        let from = Bitboard::from_square(mv.from);
        let to = Bitboard::from_square(mv.to);
        let mut occupied = (self.all_occupied & !from) | to;
        let mut removed = to;
        if mv.is_en_passant {
            let victim = Bitboard::from_square(mv.capture_square());
            occupied &= !victim;
            removed = victim;
        }
        self.attackers_to_with(king, !color, occupied, removed).is_empty()
    }

    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.is_in_check() && self.count_legal_moves(self.side_to_move) == 0
    }

    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        !self.is_in_check() && self.count_legal_moves(self.side_to_move) == 0
    }

    /// True when the side to move has no legal move. Draws by repetition,
    /// the fifty-move rule or insufficient material are not detected.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.count_legal_moves(self.side_to_move) == 0
    }

    /// Count leaf nodes of the legal move tree to `depth`.
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }
        let moves = self.generate_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }
        let mut nodes = 0;
        for mv in moves {
            let mut child = self.apply_scoped(mv);
            nodes += child.perft(depth - 1);
        }
        nodes
    }

    /// Per-root-move perft counts, in generation order.
    pub fn perft_divide(&mut self, depth: u32) -> Vec<(Move, u64)> {
        let moves = self.generate_legal_moves();
        moves
            .into_iter()
            .map(|mv| {
                let mut child = self.apply_scoped(mv);
                let count = if depth <= 1 { 1 } else { child.perft(depth - 1) };
                (mv, count)
            })
            .collect()
    }
}
