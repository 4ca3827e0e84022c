use std::fmt::{self, Display, Formatter};

use crate::{board::Board, color::Color, coord::Coord, piece::Piece};

const LIGHT: &str = "\x1b[30;107m";
const DARK: &str = "\x1b[30;47m";
const HIGHLIGHTED: &str = "\x1b[30;103m";
const RESET: &str = "\x1b[0m";

/// ANSI rendering of a board with an info column on the right.
pub struct BoardDisplay<'a, 'b, 'c> {
    pub board: &'a Board,
    pub view: Color,
    pub highlighted: &'b [Coord],
    pub info: &'c str,
}
impl<'a> BoardDisplay<'a, '_, '_> {
    pub fn new(board: &'a Board) -> Self {
        BoardDisplay {
            board,
            view: Color::White,
            highlighted: &[],
            info: "",
        }
    }
}
impl BoardDisplay<'_, '_, '_> {
    /// Board index of the `i`th row or column as seen from `view`.
    fn oriented(&self, i: u8) -> u8 {
        match self.view {
            Color::White => i,
            Color::Black => 7 - i,
        }
    }
    fn background(&self, position: Coord) -> &'static str {
        if self.highlighted.contains(&position) {
            HIGHLIGHTED
        } else if position.color() == Color::White {
            LIGHT
        } else {
            DARK
        }
    }
}
impl Display for BoardDisplay<'_, '_, '_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut info = self.info.lines().fuse();
        for row in 0..8 {
            let y = self.oriented(row);
            for column in 0..8 {
                let position = Coord::new(self.oriented(column), y);
                let figurine = self.board[position].map_or(' ', Piece::figurine);
                write!(f, "{}{figurine} {RESET}", self.background(position))?;
            }
            write!(f, "{}", 8 - y)?;
            match info.next() {
                Some(line) => writeln!(f, " {line}")?,
                None => writeln!(f)?,
            }
        }
        let files: String = (0..8)
            .map(|column| char::from(b'a' + self.oriented(column)))
            .flat_map(|file| [file, ' '])
            .collect();
        write!(f, "{}", files.trim_end())?;
        match info.next() {
            Some(line) => writeln!(f, "   {line}")?,
            None => writeln!(f)?,
        }
        for line in info {
            writeln!(f, "{:18}{line}", "")?;
        }
        Ok(())
    }
}
