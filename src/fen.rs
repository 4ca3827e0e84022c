//! FEN import and export limited to what the engine models: piece placement
//! and the side to move. Castling and en passant fields are written as `-`
//! and ignored when read.

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use thiserror::Error;

use crate::{
    board::Board,
    color::Color,
    piece::{InvalidFenPiece, Piece},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fen {
    pub board: Board,
    pub side_to_move: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseFenError {
    #[error("a row ended before reaching 8 squares")]
    NotEnoughSquaresOnRow,
    #[error("a row exceeded 8 squares")]
    ExceedingSquaresOnRow,
    #[error(transparent)]
    InvalidFenPiece(#[from] InvalidFenPiece),
    #[error("unexpected `{0}`")]
    UnexpectedChar(char),
    #[error("unexpected end of input")]
    UnexpectedEol,
}

impl FromStr for Fen {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut fields = s.split_whitespace();
        let mut placement = fields.next().ok_or(ParseFenError::UnexpectedEol)?.split('/');
        let mut rows = [[None; 8]; 8];
        for row in &mut rows {
            let text = placement.next().ok_or(ParseFenError::UnexpectedEol)?;
            let mut x = 0;
            for c in text.chars() {
                if let '1'..='8' = c {
                    x += usize::from(c as u8 - b'0');
                    if x > 8 {
                        return Err(ParseFenError::ExceedingSquaresOnRow);
                    }
                } else {
                    let square = row
                        .get_mut(x)
                        .ok_or(ParseFenError::ExceedingSquaresOnRow)?;
                    *square = Some(Piece::try_from(c)?);
                    x += 1;
                }
            }
            if x < 8 {
                return Err(ParseFenError::NotEnoughSquaresOnRow);
            }
        }
        if placement.next().is_some() {
            return Err(ParseFenError::UnexpectedChar('/'));
        }
        let side_to_move = match fields.next() {
            None => Color::White,
            Some(side) => {
                let mut chars = side.chars();
                let c = chars.next().ok_or(ParseFenError::UnexpectedEol)?;
                if let Some(extra) = chars.next() {
                    return Err(ParseFenError::UnexpectedChar(extra));
                }
                Color::from_letter(c).ok_or(ParseFenError::UnexpectedChar(c))?
            }
        };
        Ok(Fen {
            board: Board::from_rows(rows),
            side_to_move,
        })
    }
}
impl Display for Fen {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (y, row) in self.board.rows().iter().enumerate() {
            if y > 0 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for square in row {
                match square {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{}", piece.letter())?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
        }
        write!(f, " {} - - 0 1", self.side_to_move.letter())
    }
}
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::{
        board::Board,
        color::Color,
        coord,
        fen::{Fen, ParseFenError},
        piece::{InvalidFenPiece, Piece, PieceKind},
    };

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

    #[test]
    fn starting_position() {
        let fen: Fen = START.parse().unwrap();
        assert_eq!(fen.board, Board::starting_position());
        assert_eq!(fen.side_to_move, Color::White);
        assert_eq!(fen.to_string(), START);
    }
    #[test]
    fn placement_and_side() {
        let fen: Fen = "4k3/4r3/8/8/8/8/4N3/4K3 b KQkq e3 0 1".parse().unwrap();
        assert_eq!(fen.side_to_move, Color::Black);
        assert_eq!(
            fen.board[coord!("e7")],
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
        assert_eq!(
            fen.board[coord!("e2")],
            Some(Piece::new(Color::White, PieceKind::Knight))
        );
        assert_eq!(fen.board.pieces().count(), 4);
        assert_eq!(fen.to_string(), "4k3/4r3/8/8/8/8/4N3/4K3 b - - 0 1");
    }
    #[test]
    fn placement_only_defaults_to_white() {
        let fen: Fen = "8/8/8/8/8/8/8/K6k".parse().unwrap();
        assert_eq!(fen.side_to_move, Color::White);
    }
    #[test]
    fn errors() {
        assert_eq!(
            "7/8/8/8/8/8/8/8 w".parse::<Fen>(),
            Err(ParseFenError::NotEnoughSquaresOnRow)
        );
        assert_eq!(
            "54/8/8/8/8/8/8/8 w".parse::<Fen>(),
            Err(ParseFenError::ExceedingSquaresOnRow)
        );
        assert_eq!(
            "x7/8/8/8/8/8/8/8 w".parse::<Fen>(),
            Err(ParseFenError::InvalidFenPiece(InvalidFenPiece('x')))
        );
        assert_eq!("8/8/8".parse::<Fen>(), Err(ParseFenError::UnexpectedEol));
        assert_eq!(
            "8/8/8/8/8/8/8/8/8 w".parse::<Fen>(),
            Err(ParseFenError::UnexpectedChar('/'))
        );
        assert_eq!(
            "8/8/8/8/8/8/8/8 x".parse::<Fen>(),
            Err(ParseFenError::UnexpectedChar('x'))
        );
    }
}
