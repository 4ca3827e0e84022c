use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use thiserror::Error;

use crate::coord::{Coord, ParseCoordError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseMoveError {
    #[error("provided string contains invalid character")]
    InvalidChar,
    #[error(transparent)]
    ParseCoordError(#[from] ParseCoordError),
    #[error("unexpected `{0}`")]
    Unexpected(char),
}

/// A move from one square to another. Captures are implied by whatever
/// stands on the destination when the move is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Move {
    origin: Coord,
    destination: Coord,
}
impl Move {
    pub fn new(origin: Coord, destination: Coord) -> Self {
        Move {
            origin,
            destination,
        }
    }
    /// Builds a move from raw coordinates, `None` if any lies outside the
    /// board.
    pub fn from_xy(start_x: i32, start_y: i32, end_x: i32, end_y: i32) -> Option<Self> {
        Some(Move::new(
            Coord::from_signed(start_x, start_y)?,
            Coord::from_signed(end_x, end_y)?,
        ))
    }
    pub fn origin(self) -> Coord {
        self.origin
    }
    pub fn destination(self) -> Coord {
        self.destination
    }
}
impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin, self.destination)?;
        Ok(())
    }
}
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let origin = s.get(0..2).ok_or(ParseMoveError::InvalidChar)?.parse()?;
        let destination = s.get(2..4).ok_or(ParseMoveError::InvalidChar)?.parse()?;
        let rest = s.get(4..).ok_or(ParseMoveError::InvalidChar)?;
        if let Some(c) = rest.chars().next() {
            return Err(ParseMoveError::Unexpected(c));
        }
        Ok(Move::new(origin, destination))
    }
}
