use std::fmt::{self, Display, Formatter};

use thiserror::Error;

use crate::color::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("`{0}` is not a piece letter, expected one of `pnbrqk` in either case")]
pub struct InvalidFenPiece(pub char);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}
impl PieceKind {
    pub const ALL: [Self; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];
    /// Back row from the a-file to the h-file.
    pub const BACK_ROW: [Self; 8] = {
        use PieceKind::{Bishop, King, Knight, Queen, Rook};
        [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook]
    };
    const LETTERS: [char; 6] = ['p', 'n', 'b', 'r', 'q', 'k'];
    const WHITE_FIGURINES: [char; 6] = ['♙', '♘', '♗', '♖', '♕', '♔'];
    const BLACK_FIGURINES: [char; 6] = ['♟', '♞', '♝', '♜', '♛', '♚'];

    fn index(self) -> usize {
        self as usize
    }
    /// Lowercase FEN letter.
    pub fn letter(self) -> char {
        Self::LETTERS[self.index()]
    }
    /// Case-insensitive inverse of [`PieceKind::letter`].
    pub fn from_letter(letter: char) -> Option<Self> {
        let letter = letter.to_ascii_lowercase();
        PieceKind::ALL
            .into_iter()
            .find(|kind| kind.letter() == letter)
    }
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        };
        write!(f, "{name}")
    }
}
/// A piece standing on the board. An empty square is `None` rather than a
/// dedicated variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}
impl Piece {
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece { color, kind }
    }
    /// FEN letter, uppercase for white.
    pub fn letter(self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter.to_ascii_uppercase(),
            Color::Black => letter,
        }
    }
    pub fn figurine(self) -> char {
        let figurines = match self.color {
            Color::White => &PieceKind::WHITE_FIGURINES,
            Color::Black => &PieceKind::BLACK_FIGURINES,
        };
        figurines[self.kind.index()]
    }
}
impl TryFrom<char> for Piece {
    type Error = InvalidFenPiece;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        let kind = PieceKind::from_letter(letter).ok_or(InvalidFenPiece(letter))?;
        let color = if letter.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Ok(Piece::new(color, kind))
    }
}
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}
