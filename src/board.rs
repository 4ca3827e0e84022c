use std::{
    fmt::{self, Display, Formatter},
    ops::{Index, IndexMut},
};

use thiserror::Error;

use crate::{
    color::Color,
    coord::Coord,
    movement::Move,
    piece::{Piece, PieceKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum InvalidBoard {
    #[error("no {0} king found")]
    MissingKing(Color),
    #[error("found more than one {0} king")]
    ExtraKing(Color),
}

/// The 8×8 grid. Row 0 is black's back rank, row 7 is white's.
///
/// `Board` is a plain value: copying it is how hypothetical positions are
/// explored, nothing is shared between copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board([[Option<Piece>; 8]; 8]);

impl Board {
    pub fn empty() -> Self {
        Board::default()
    }
    pub fn starting_position() -> Self {
        Board::from_configuration(PieceKind::BACK_ROW)
    }
    pub fn from_configuration(configuration: [PieceKind; 8]) -> Self {
        Board([
            configuration.map(|piece| Some(Piece::new(Color::Black, piece))),
            [Some(Piece::new(Color::Black, PieceKind::Pawn)); 8],
            [None; 8],
            [None; 8],
            [None; 8],
            [None; 8],
            [Some(Piece::new(Color::White, PieceKind::Pawn)); 8],
            configuration.map(|piece| Some(Piece::new(Color::White, piece))),
        ])
    }
    pub fn from_rows(rows: [[Option<Piece>; 8]; 8]) -> Self {
        Board(rows)
    }
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.0
    }
    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|position| self[position].map(|piece| (position, piece)))
    }
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }
    pub fn king(&self, color: Color) -> Option<Coord> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(position, _)| position)
    }
    pub fn is_empty_at(&self, position: Coord) -> bool {
        self[position].is_none()
    }
    pub fn has_color_at(&self, position: Coord, color: Color) -> bool {
        self[position].is_some_and(|piece| piece.color == color)
    }
    /// Moves whatever stands on the origin to the destination and returns the
    /// piece it replaced. No legality is checked here.
    pub fn move_piece(&mut self, movement: Move) -> Option<Piece> {
        let piece = self[movement.origin()].take();
        std::mem::replace(&mut self[movement.destination()], piece)
    }
    pub fn clone_and_move(&self, movement: Move) -> Self {
        let mut new = *self;
        new.move_piece(movement);
        new
    }
    /// Checks that each side has exactly one king.
    pub fn validate(&self) -> Result<(), InvalidBoard> {
        for color in Color::ALL {
            let kings = self
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            match kings {
                0 => return Err(InvalidBoard::MissingKing(color)),
                1 => {}
                _ => return Err(InvalidBoard::ExtraKing(color)),
            }
        }
        Ok(())
    }
}
impl Index<Coord> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.0[index.y() as usize][index.x() as usize]
    }
}
impl IndexMut<Coord> for Board {
    fn index_mut(&mut self, index: Coord) -> &mut Self::Output {
        &mut self.0[index.y() as usize][index.x() as usize]
    }
}
impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.0 {
            for piece in row {
                match piece {
                    Some(piece) => write!(f, "{} ", piece.letter())?,
                    None => write!(f, ". ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::{
        board::{Board, InvalidBoard},
        color::Color,
        coord,
        movement::Move,
        piece::{Piece, PieceKind},
    };

    #[test]
    fn starting_position() {
        let board = Board::starting_position();
        assert_eq!(
            board[coord!("e8")],
            Some(Piece::new(Color::Black, PieceKind::King))
        );
        assert_eq!(
            board[coord!("d1")],
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
        assert_eq!(
            board[coord!("a2")],
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        assert_eq!(board.pieces().count(), 32);
        for row in 2..6 {
            assert!(board.rows()[row].iter().all(Option::is_none));
        }
        assert_eq!(board.validate(), Ok(()));
    }
    #[test]
    fn text_grid() {
        let text = Board::starting_position().to_string();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("r n b q k b n r "));
        assert_eq!(lines.nth(2), Some(". . . . . . . . "));
        assert_eq!(text.lines().last(), Some("R N B Q K B N R "));
    }
    #[test]
    fn moving_overwrites_the_destination() {
        let mut board = Board::starting_position();
        let captured = board.move_piece(Move::new(coord!("d1"), coord!("d7")));
        assert_eq!(captured, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        assert_eq!(board[coord!("d1")], None);
        assert_eq!(
            board[coord!("d7")],
            Some(Piece::new(Color::White, PieceKind::Queen))
        );
    }
    #[test]
    fn copies_are_independent() {
        let board = Board::starting_position();
        let moved = board.clone_and_move(Move::new(coord!("e2"), coord!("e4")));
        assert_eq!(board, Board::starting_position());
        assert_ne!(board, moved);
    }
    #[test]
    fn king_count() {
        let mut board = Board::starting_position();
        board[coord!("e1")] = None;
        assert_eq!(board.validate(), Err(InvalidBoard::MissingKing(Color::White)));
        board[coord!("e1")] = Some(Piece::new(Color::White, PieceKind::King));
        board[coord!("e4")] = Some(Piece::new(Color::Black, PieceKind::King));
        assert_eq!(board.validate(), Err(InvalidBoard::ExtraKing(Color::Black)));
    }
}
