//! Pseudo-legal move geometry: where each piece can go given board edges and
//! blockers, without asking whether its own king ends up attacked.

use crate::{
    board::Board,
    color::Color,
    coord::{Coord, Vector},
    movement::Move,
    piece::PieceKind,
};

/// All adjacent squares. Occupancy is not looked at, the legal move filter
/// drops landings on friendly pieces.
pub fn king_moves(origin: Coord) -> impl Iterator<Item = Move> {
    Vector::king_moves()
        .filter_map(move |movement| origin.move_by(movement))
        .map(move |destination| Move::new(origin, destination))
}
pub fn knight_moves(board: &Board, origin: Coord, color: Color) -> impl Iterator<Item = Move> + '_ {
    Vector::KNIGHT_MOVES
        .into_iter()
        .filter_map(move |movement| origin.move_by(movement))
        .filter(move |destination| !board.has_color_at(*destination, color))
        .map(move |destination| Move::new(origin, destination))
}
fn directional_moves(
    board: &Board,
    origin: Coord,
    color: Color,
    direction: Vector,
) -> impl Iterator<Item = Move> + '_ {
    let mut resume = true;
    origin.ray(direction).map_while(move |destination| {
        if !resume {
            return None;
        }
        if let Some(piece) = board[destination] {
            resume = false;
            (piece.color != color).then_some(Move::new(origin, destination))
        } else {
            Some(Move::new(origin, destination))
        }
    })
}
fn all_directional_moves<'a>(
    board: &'a Board,
    origin: Coord,
    color: Color,
    directions: &'static [Vector],
) -> impl Iterator<Item = Move> + 'a {
    directions
        .iter()
        .copied()
        .flat_map(move |direction| directional_moves(board, origin, color, direction))
}
pub fn bishop_moves(board: &Board, origin: Coord, color: Color) -> impl Iterator<Item = Move> + '_ {
    all_directional_moves(board, origin, color, &Vector::BISHOP_DIRECTIONS)
}
pub fn rook_moves(board: &Board, origin: Coord, color: Color) -> impl Iterator<Item = Move> + '_ {
    all_directional_moves(board, origin, color, &Vector::ROOK_DIRECTIONS)
}
pub fn queen_moves(board: &Board, origin: Coord, color: Color) -> impl Iterator<Item = Move> + '_ {
    rook_moves(board, origin, color).chain(bishop_moves(board, origin, color))
}
/// Forward steps into empty squares, the double step only from the home row,
/// and diagonal steps only onto an opposing piece. En passant is not modelled.
pub fn pawn_moves(board: &Board, origin: Coord, color: Color) -> impl Iterator<Item = Move> + '_ {
    let forward_steps = if origin.y() == color.pawn_home_row() {
        2
    } else {
        1
    };
    origin
        .ray(Vector::pawn_push(color))
        .take(forward_steps)
        .take_while(move |position| board.is_empty_at(*position))
        .chain(
            Vector::pawn_captures(color)
                .into_iter()
                .filter_map(move |movement| origin.move_by(movement))
                .filter(move |destination| board.has_color_at(*destination, !color)),
        )
        .map(move |destination| Move::new(origin, destination))
}
/// Pseudo-legal moves of whatever stands on `origin`, nothing for an empty
/// square.
pub fn pseudo_legal_moves(board: &Board, origin: Coord) -> Box<dyn Iterator<Item = Move> + '_> {
    let Some(piece) = board[origin] else {
        return Box::new(std::iter::empty());
    };
    let color = piece.color;
    match piece.kind {
        PieceKind::Pawn => Box::new(pawn_moves(board, origin, color)),
        PieceKind::Knight => Box::new(knight_moves(board, origin, color)),
        PieceKind::Bishop => Box::new(bishop_moves(board, origin, color)),
        PieceKind::Rook => Box::new(rook_moves(board, origin, color)),
        PieceKind::Queen => Box::new(queen_moves(board, origin, color)),
        PieceKind::King => Box::new(king_moves(origin)),
    }
}
