use std::{
    fmt::{self, Display, Formatter},
    ops::Mul,
    str::FromStr,
};

use thiserror::Error;

use crate::color::Color;

/// Builds a [`Coord`] from its algebraic name at compile time.
///
/// ```
/// use nobles::{coord, coord::Coord};
///
/// assert_eq!(coord!("e2"), Coord::new(4, 6));
/// ```
#[macro_export]
macro_rules! coord {
    ($name:literal) => {
        const { $crate::coord::Coord::from_name($name) }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseCoordError {
    #[error("`{0}` is not a file, expected `a` to `h`")]
    InvalidX(char),
    #[error("`{0}` is not a rank, expected `1` to `8`")]
    InvalidY(char),
    #[error("a square is named by 2 characters, found {0}")]
    WrongLength(usize),
}

/// Whether `(x, y)` names a square of the board.
pub fn is_in_bounds(x: i32, y: i32) -> bool {
    (0..8).contains(&x) && (0..8).contains(&y)
}

/// A square of the board. `x` is the file from the a-file, `y` the row
/// from black's back rank, packed as `00XXXYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord(u8);

impl Coord {
    pub const fn new(x: u8, y: u8) -> Self {
        debug_assert!(x < 8 && y < 8);
        Coord((x << 3) | y)
    }
    pub fn from_signed(x: i32, y: i32) -> Option<Self> {
        if is_in_bounds(x, y) {
            Some(Coord::new(x.try_into().ok()?, y.try_into().ok()?))
        } else {
            None
        }
    }
    /// Panics on anything but a lowercase file followed by a rank, use
    /// [`FromStr`] for untrusted input.
    pub const fn from_name(name: &str) -> Self {
        let [file, rank] = name.as_bytes() else {
            panic!("square names have exactly 2 characters");
        };
        assert!(*file >= b'a' && *file <= b'h', "file must be within `a` to `h`");
        assert!(*rank >= b'1' && *rank <= b'8', "rank must be within `1` to `8`");
        Coord::new(*file - b'a', b'8' - *rank)
    }
    /// Every square, row by row starting from black's back rank.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).flat_map(|y| (0..8).map(move |x| Coord::new(x, y)))
    }
    pub fn x(self) -> u8 {
        self.0 >> 3
    }
    pub fn y(self) -> u8 {
        self.0 & 0b111
    }
    pub fn move_by(self, offset: Vector) -> Option<Self> {
        let x = self.x().checked_add_signed(offset.x)?;
        let y = self.y().checked_add_signed(offset.y)?;
        (x < 8 && y < 8).then(|| Coord::new(x, y))
    }
    /// Squares walked from here toward `direction`, this square excluded,
    /// until the edge.
    pub fn ray(self, direction: Vector) -> impl Iterator<Item = Self> {
        debug_assert!(direction != Vector::new(0, 0));
        (1..8).map_while(move |distance| self.move_by(direction * distance))
    }
    /// Color of the square itself, used for rendering.
    pub fn color(self) -> Color {
        if (self.x() + self.y()) % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }
}
impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let file = char::from(b'a' + self.x());
        let rank = 8 - self.y();
        write!(f, "{file}{rank}")
    }
}
impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let [file, rank] = chars[..] else {
            return Err(ParseCoordError::WrongLength(chars.len()));
        };
        let x = "abcdefgh"
            .find(file)
            .ok_or(ParseCoordError::InvalidX(file))?;
        let y = "87654321"
            .find(rank)
            .ok_or(ParseCoordError::InvalidY(rank))?;
        Ok(Coord::new(
            x.try_into().map_err(|_| ParseCoordError::InvalidX(file))?,
            y.try_into().map_err(|_| ParseCoordError::InvalidY(rank))?,
        ))
    }
}
/// A step between squares, in the same axes as [`Coord`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: i8,
    pub y: i8,
}
impl Vector {
    pub const fn new(x: i8, y: i8) -> Self {
        Vector { x, y }
    }
    pub const KNIGHT_MOVES: [Self; 8] = [
        Vector::new(-1, -2),
        Vector::new(1, -2),
        Vector::new(-1, 2),
        Vector::new(1, 2),
        Vector::new(-2, -1),
        Vector::new(2, -1),
        Vector::new(-2, 1),
        Vector::new(2, 1),
    ];
    pub const ROOK_DIRECTIONS: [Self; 4] = [
        Vector::new(-1, 0),
        Vector::new(1, 0),
        Vector::new(0, -1),
        Vector::new(0, 1),
    ];
    pub const BISHOP_DIRECTIONS: [Self; 4] = [
        Vector::new(-1, -1),
        Vector::new(1, -1),
        Vector::new(-1, 1),
        Vector::new(1, 1),
    ];
    /// One step in every direction.
    pub fn king_moves() -> impl Iterator<Item = Self> {
        Vector::ROOK_DIRECTIONS
            .into_iter()
            .chain(Vector::BISHOP_DIRECTIONS)
    }
    pub fn pawn_push(color: Color) -> Self {
        Vector::new(0, color.pawn_direction())
    }
    /// The two forward diagonals.
    pub fn pawn_captures(color: Color) -> [Self; 2] {
        [-1, 1].map(|x| Vector::new(x, color.pawn_direction()))
    }
}
impl Mul<i8> for Vector {
    type Output = Vector;

    fn mul(self, rhs: i8) -> Self::Output {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::coord::{Coord, ParseCoordError, Vector, is_in_bounds};

    #[test]
    fn in_bounds() {
        for (x, y) in [(0, 0), (7, 0), (0, 7), (7, 7), (3, 4), (6, 2)] {
            assert!(is_in_bounds(x, y), "({x}, {y}) should be in bounds");
        }
        for y in 0..8 {
            for x in 0..8 {
                assert!(is_in_bounds(x, y));
            }
        }
    }
    #[test]
    fn out_of_bounds() {
        for (x, y) in [(-1, 0), (0, -1), (-1, -1), (8, 0), (0, 8), (8, 8), (9, 9)] {
            assert!(!is_in_bounds(x, y), "({x}, {y}) should be out of bounds");
            assert_eq!(Coord::from_signed(x, y), None);
        }
    }
    #[test]
    fn names_follow_black_back_rank_at_row_zero() {
        assert_eq!(coord!("a8"), Coord::new(0, 0));
        assert_eq!(coord!("h1"), Coord::new(7, 7));
        assert_eq!(coord!("f2"), Coord::new(5, 6));
        assert_eq!("d8".parse(), Ok(Coord::new(3, 0)));
        assert_eq!(Coord::new(7, 4).to_string(), "h4");
        assert_eq!("i1".parse::<Coord>(), Err(ParseCoordError::InvalidX('i')));
        assert_eq!("e".parse::<Coord>(), Err(ParseCoordError::WrongLength(1)));
        assert_eq!("e22".parse::<Coord>(), Err(ParseCoordError::WrongLength(3)));
    }
    #[test]
    fn line_stops_at_the_edge() {
        let ray: Vec<_> = coord!("c3").ray(Vector::new(-1, 1)).collect();
        assert_eq!(ray, [coord!("b2"), coord!("a1")]);
        assert_eq!(coord!("a1").move_by(Vector::new(-1, 1)), None);
        assert_eq!(coord!("h8").move_by(Vector::new(1, 0)), None);
        assert_eq!(Vector::king_moves().count(), 8);
    }
    #[test]
    fn all_is_row_major() {
        let all: Vec<_> = Coord::all().collect();
        assert_eq!(all.len(), 64);
        assert_eq!(all[0], Coord::new(0, 0));
        assert_eq!(all[1], Coord::new(1, 0));
        assert_eq!(all[8], Coord::new(0, 1));
    }
}
