use std::{
    fmt::{self, Display, Formatter},
    ops::Not,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Color {
    #[default]
    White,
    Black,
}
impl Color {
    pub const ALL: [Self; 2] = [Color::White, Color::Black];

    /// FEN side to move letter.
    pub fn letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }
    pub fn from_letter(letter: char) -> Option<Self> {
        Color::ALL
            .into_iter()
            .find(|color| color.letter() == letter.to_ascii_lowercase())
    }
    /// Row delta of a single pawn step. White advances toward row 0.
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }
    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
    /// Row pawns start on; double steps are only offered from here.
    pub fn pawn_home_row(self) -> u8 {
        self.back_row().saturating_add_signed(self.pawn_direction())
    }
    /// The row a pawn of this color can no longer advance from.
    pub fn last_row(self) -> u8 {
        (!self).back_row()
    }
}
impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Color::White => "white",
            Color::Black => "black",
        };
        write!(f, "{name}")
    }
}
impl Not for Color {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::color::Color;

    #[test]
    fn pawns_walk_toward_the_opponent() {
        assert_eq!(Color::White.pawn_home_row(), 6);
        assert_eq!(Color::Black.pawn_home_row(), 1);
        assert_eq!(Color::White.last_row(), 0);
        assert_eq!(Color::Black.last_row(), 7);
        assert_eq!(Color::White.pawn_direction(), -1);
        assert_eq!(Color::Black.pawn_direction(), 1);
    }
    #[test]
    fn letters() {
        assert_eq!(Color::from_letter('w'), Some(Color::White));
        assert_eq!(Color::from_letter('B'), Some(Color::Black));
        assert_eq!(Color::from_letter('x'), None);
        assert_eq!(Color::Black.letter(), 'b');
    }
}
