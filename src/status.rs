use std::fmt::{self, Display, Formatter};

use crate::{
    attack::is_square_attacked, board::Board, color::Color, config::Rules, legal::legal_moves,
};

/// Whether `color`'s king is attacked. A side without a king is never in
/// check.
pub fn is_in_check(board: &Board, color: Color, rules: Rules) -> bool {
    board
        .king(color)
        .is_some_and(|king| is_square_attacked(board, king, !color, rules))
}
/// In check with no legal move. Running out of moves while not in check is
/// not reported as anything.
pub fn is_checkmate(board: &Board, color: Color, rules: Rules) -> bool {
    is_in_check(board, color, rules) && legal_moves(board, color, rules).is_empty()
}

/// Summary of a side's situation, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    Playing(Color),
    Check(Color),
    Checkmate(Color),
}
impl Status {
    pub fn of(board: &Board, color: Color, rules: Rules) -> Self {
        if !is_in_check(board, color, rules) {
            Status::Playing(color)
        } else if legal_moves(board, color, rules).is_empty() {
            Status::Checkmate(color)
        } else {
            Status::Check(color)
        }
    }
}
impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Status::Playing(color) => write!(f, "{color} plays")?,
            Status::Check(color) => write!(f, "{color} plays, in check")?,
            Status::Checkmate(color) => write!(f, "checkmate, {} wins", !*color)?,
        }
        Ok(())
    }
}
