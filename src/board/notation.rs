use super::error::MoveParseError;
use super::{Move, Piece, Position, Square};

impl Position {
    /// Resolve coordinate notation (`e2e4`, `e7e8q`, `e7e8Q`) against the
    /// legal moves of the current position.
    ///
    /// Castling is written as the king's move (`e1g1`). The position is
    /// left unchanged whether or not parsing succeeds.
    ///
    /// # Example
    /// ```
    /// use bitboard_chess::board::Position;
    ///
    /// let mut pos = Position::new();
    /// let mv = pos.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        let text = text.trim();
        if !text.is_ascii() || !(4..=5).contains(&text.len()) {
            return Err(MoveParseError::InvalidLength {
                len: text.chars().count(),
            });
        }

        let square = |part: &str| {
            part.parse::<Square>()
                .map_err(|source| MoveParseError::InvalidSquare {
                    notation: text.to_string(),
                    source,
                })
        };
        let from = square(&text[0..2])?;
        let to = square(&text[2..4])?;

        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(p) if Piece::PROMOTIONS.contains(&p) => Some(p),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        self.generate_legal_moves()
            .into_iter()
            .find(|mv| mv.from == from && mv.to == to && mv.promotion == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }
}
