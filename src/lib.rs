//! Rules engine for two-player chess: board state, legal move generation,
//! check and checkmate detection, and move execution.
//!
//! Castling, en passant, promotion and draws are not modelled.
//!
//! ```
//! use nobles::{Color, Game, MoveResult};
//!
//! let mut game = Game::new();
//! let result = game.make_move("e2e4".parse().unwrap(), Color::White);
//! assert_eq!(result, MoveResult::Success);
//! game.switch_turns();
//! assert_eq!(game.side_to_move(), Color::Black);
//! ```
#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    reason = "accessors and parsers are self-explanatory"
)]

pub mod attack;
pub mod board;
pub mod board_display;
pub mod color;
pub mod config;
pub mod coord;
pub mod fen;
pub mod fuzz;
pub mod game;
pub mod geometry;
pub mod legal;
pub mod movement;
pub mod piece;
pub mod repl;
pub mod status;

pub use crate::{
    board::{Board, InvalidBoard},
    color::Color,
    config::{PawnAttacks, Rules},
    coord::{Coord, is_in_bounds},
    fen::Fen,
    game::{Game, MoveResult},
    movement::Move,
    piece::{Piece, PieceKind},
};

/// The standard starting position.
pub fn initial_board() -> Board {
    Board::starting_position()
}
/// Whether `(x, y)` is attacked by `by`. Coordinates outside the board are
/// never attacked.
pub fn is_square_attacked(board: &Board, x: i32, y: i32, by: Color) -> bool {
    Coord::from_signed(x, y).is_some_and(|target| Rules::default().is_square_attacked(board, target, by))
}
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    Rules::default().legal_moves(board, color)
}
pub fn is_in_check(board: &Board, color: Color) -> bool {
    Rules::default().is_in_check(board, color)
}
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    Rules::default().is_checkmate(board, color)
}
