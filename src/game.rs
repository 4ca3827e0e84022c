use std::fmt::{self, Display, Formatter};

use tracing::{debug, info};

use crate::{
    board::{Board, InvalidBoard},
    color::Color,
    config::Rules,
    legal::legal_moves,
    movement::Move,
    status::{Status, is_checkmate},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveResult {
    Success,
    Checkmate,
    Invalid,
}
impl MoveResult {
    /// Whether the board changed, in which case the caller is expected to
    /// call [`Game::switch_turns`] when it is ready.
    pub fn is_applied(self) -> bool {
        !matches!(self, MoveResult::Invalid)
    }
}
impl Display for MoveResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            MoveResult::Success => write!(f, "success")?,
            MoveResult::Checkmate => write!(f, "checkmate")?,
            MoveResult::Invalid => write!(f, "invalid")?,
        }
        Ok(())
    }
}

/// The board together with the side to move.
///
/// Applying a move and handing the turn over are two separate calls so the
/// caller can do its own work in between. Nothing stops play after a
/// checkmate either, ending the game is up to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Game {
    board: Board,
    side_to_move: Color,
    rules: Rules,
}
impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
impl Game {
    pub fn new() -> Self {
        Game::with_rules(Rules::default())
    }
    pub fn with_rules(rules: Rules) -> Self {
        Game {
            board: Board::starting_position(),
            side_to_move: Color::White,
            rules,
        }
    }
    /// Starts from an arbitrary position, rejecting boards without exactly
    /// one king per side.
    pub fn from_position(
        board: Board,
        side_to_move: Color,
        rules: Rules,
    ) -> Result<Self, InvalidBoard> {
        board.validate()?;
        Ok(Game {
            board,
            side_to_move,
            rules,
        })
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }
    pub fn rules(&self) -> Rules {
        self.rules
    }
    pub fn legal_moves(&self, color: Color) -> Vec<Move> {
        legal_moves(&self.board, color, self.rules)
    }
    pub fn is_checkmate(&self, color: Color) -> bool {
        is_checkmate(&self.board, color, self.rules)
    }
    pub fn status(&self) -> Status {
        Status::of(&self.board, self.side_to_move, self.rules)
    }
    /// Plays `movement` for `color` if it is one of its legal moves. The side
    /// to move is left as it was.
    pub fn make_move(&mut self, movement: Move, color: Color) -> MoveResult {
        if !self.legal_moves(color).contains(&movement) {
            debug!(%movement, %color, "rejected move");
            return MoveResult::Invalid;
        }
        let captured = self.board.move_piece(movement);
        debug!(%movement, %color, ?captured, "applied move");
        if self.is_checkmate(!color) {
            info!(winner = %color, "checkmate");
            MoveResult::Checkmate
        } else {
            MoveResult::Success
        }
    }
    pub fn switch_turns(&mut self) {
        self.side_to_move = !self.side_to_move;
    }
}
