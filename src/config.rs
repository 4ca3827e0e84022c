use crate::{attack, board::Board, color::Color, coord::Coord, legal, movement::Move, status};

/// What a pawn contributes when asking whether a square is attacked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum PawnAttacks {
    /// The pawn's pseudo-legal moves: pushes onto empty squares and diagonal
    /// steps onto opposing pieces. An empty diagonal square is never
    /// reported as attacked.
    #[default]
    PseudoLegal,
    /// Both forward diagonals whatever stands on them, pushes excluded.
    Threats,
}

/// Engine options.
///
/// The default reproduces the plain rules. `pawn_attacks` only changes the
/// answers of [`Rules::is_square_attacked`] for squares not holding a piece
/// of the other side, so legality and checkmate come out the same under
/// every setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rules {
    pub pawn_attacks: PawnAttacks,
}
impl Rules {
    pub fn is_square_attacked(self, board: &Board, target: Coord, by: Color) -> bool {
        attack::is_square_attacked(board, target, by, self)
    }
    pub fn legal_moves(self, board: &Board, color: Color) -> Vec<Move> {
        legal::legal_moves(board, color, self)
    }
    pub fn is_in_check(self, board: &Board, color: Color) -> bool {
        status::is_in_check(board, color, self)
    }
    pub fn is_checkmate(self, board: &Board, color: Color) -> bool {
        status::is_checkmate(board, color, self)
    }
}
