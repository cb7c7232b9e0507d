use crate::zobrist::ZOBRIST;

use super::{Bitboard, CastlingRights, Color, Move, Piece, Square};

/// Everything `apply` changes, captured before the move is made.
///
/// `undo` restores this snapshot verbatim, so nothing about the previous
/// position has to be recomputed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UndoState {
    pub(crate) mv: Move,
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) hash: u64,
}

/// Bit-packed board state with an incrementally maintained Zobrist hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) pieces: [[Bitboard; 6]; 2],
    pub(crate) occupied: [Bitboard; 2],
    pub(crate) all_occupied: Bitboard,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) hash: u64,
    pub(crate) undo_stack: Vec<UndoState>,
}

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, piece) in back_rank.into_iter().enumerate() {
            for (color, pawn_rank) in [(Color::White, 1), (Color::Black, 6)] {
                if let (Some(home), Some(pawn)) = (
                    Square::new(color.back_rank(), file),
                    Square::new(pawn_rank, file),
                ) {
                    position.set_piece(home, color, piece);
                    position.set_piece(pawn, color, Piece::Pawn);
                }
            }
        }
        position.castling_rights = CastlingRights::all();
        position.hash = position.compute_hash();
        position
    }

    /// A board with no pieces, white to move and no rights.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            pieces: [[Bitboard::EMPTY; 6]; 2],
            occupied: [Bitboard::EMPTY; 2],
            all_occupied: Bitboard::EMPTY,
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            hash: 0,
            undo_stack: Vec::with_capacity(64),
        }
    }

    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.pieces[color.index()][piece.index()].set(sq);
        self.occupied[color.index()].set(sq);
        self.all_occupied.set(sq);
    }

    /// Flip `sq` in the piece, color and total occupancy boards.
    #[inline]
    pub(crate) fn toggle_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        let bit = Bitboard::from_square(sq);
        self.pieces[color.index()][piece.index()] ^= bit;
        self.occupied[color.index()] ^= bit;
        self.all_occupied ^= bit;
    }

    /// Piece and owner on `sq`, if any.
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        if !self.all_occupied.contains(sq) {
            return None;
        }
        let color = if self.occupied[Color::White.index()].contains(sq) {
            Color::White
        } else {
            Color::Black
        };
        Piece::ALL
            .into_iter()
            .find(|p| self.pieces[color.index()][p.index()].contains(sq))
            .map(|p| (color, p))
    }

    /// Piece of `color` on `sq`, if any.
    #[inline]
    pub(crate) fn piece_of(&self, color: Color, sq: Square) -> Option<Piece> {
        if !self.occupied[color.index()].contains(sq) {
            return None;
        }
        Piece::ALL
            .into_iter()
            .find(|p| self.pieces[color.index()][p.index()].contains(sq))
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        !self.all_occupied.contains(sq)
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[inline]
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// The incrementally maintained Zobrist hash.
    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn pieces(&self, color: Color, piece: Piece) -> Bitboard {
        self.pieces[color.index()][piece.index()]
    }

    #[inline]
    #[must_use]
    pub fn occupancy(&self, color: Color) -> Bitboard {
        self.occupied[color.index()]
    }

    #[inline]
    #[must_use]
    pub fn all_occupancy(&self) -> Bitboard {
        self.all_occupied
    }

    /// King square of `color`, or `None` on a board without that king.
    #[inline]
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.pieces(color, Piece::King).lsb()
    }

    /// Number of moves applied and not yet undone.
    #[must_use]
    pub fn ply_count(&self) -> usize {
        self.undo_stack.len()
    }

    /// Hash recomputed from scratch over placement, side to move, castling
    /// rights and en passant file.
    #[must_use]
    pub fn compute_hash(&self) -> u64 {
        let mut hash = 0;
        for color in Color::ALL {
            for piece in Piece::ALL {
                for sq in self.pieces(color, piece) {
                    hash ^= ZOBRIST.piece(color, piece, sq);
                }
            }
        }
        if self.side_to_move == Color::Black {
            hash ^= ZOBRIST.black_to_move();
        }
        hash ^= ZOBRIST.castling_bits(self.castling_rights.bits());
        if let Some(ep) = self.en_passant_target {
            hash ^= ZOBRIST.en_passant(ep);
        }
        hash
    }

    /// Color-flipped copy: ranks mirrored, colors swapped, side to move,
    /// castling rights and en passant target mirrored. The undo history is
    /// not carried over.
    #[must_use]
    pub fn mirrored(&self) -> Position {
        let mut flipped = Position::empty();
        for color in Color::ALL {
            for piece in Piece::ALL {
                for sq in self.pieces(color, piece) {
                    flipped.set_piece(sq.flip_vertical(), !color, piece);
                }
            }
        }
        flipped.side_to_move = !self.side_to_move;
        flipped.castling_rights = self.castling_rights.swap_colors();
        flipped.en_passant_target = self.en_passant_target.map(Square::flip_vertical);
        flipped.halfmove_clock = self.halfmove_clock;
        flipped.fullmove_number = self.fullmove_number;
        flipped.hash = flipped.compute_hash();
        flipped
    }

    /// Internal consistency check used by tests and debug assertions.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = Bitboard::EMPTY;
        for color in Color::ALL {
            let mut color_occ = Bitboard::EMPTY;
            for piece in Piece::ALL {
                let bb = self.pieces(color, piece);
                if (seen & bb).any() {
                    return false;
                }
                seen |= bb;
                color_occ |= bb;
            }
            if color_occ != self.occupancy(color) {
                return false;
            }
        }
        seen == self.all_occupied && self.hash == self.compute_hash()
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
