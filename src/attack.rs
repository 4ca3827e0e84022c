use crate::{
    board::Board,
    color::Color,
    config::{PawnAttacks, Rules},
    coord::{Coord, Vector},
    geometry::pseudo_legal_moves,
    movement::Move,
    piece::{Piece, PieceKind},
};

fn reach(board: &Board, origin: Coord, piece: Piece, rules: Rules) -> Box<dyn Iterator<Item = Coord> + '_> {
    match (piece.kind, rules.pawn_attacks) {
        (PieceKind::Pawn, PawnAttacks::Threats) => Box::new(
            Vector::pawn_captures(piece.color)
                .into_iter()
                .filter_map(move |movement| origin.move_by(movement)),
        ),
        _ => Box::new(pseudo_legal_moves(board, origin).map(Move::destination)),
    }
}
/// Squares `by` reaches, one entry per generated move, so a square may repeat.
pub fn attacked_squares(board: &Board, by: Color, rules: Rules) -> impl Iterator<Item = Coord> + '_ {
    board
        .pieces_of(by)
        .flat_map(move |(origin, piece)| reach(board, origin, piece, rules))
}
/// Whether any piece of `by` has a move landing on `target`. Recomputed from
/// scratch on every call.
pub fn is_square_attacked(board: &Board, target: Coord, by: Color, rules: Rules) -> bool {
    attacked_squares(board, by, rules).any(|position| position == target)
}
#[cfg(test)]
mod test {
    use crate::{
        attack::is_square_attacked,
        board::Board,
        color::Color,
        config::{PawnAttacks, Rules},
        coord,
        piece::{Piece, PieceKind},
    };

    const THREATS: Rules = Rules {
        pawn_attacks: PawnAttacks::Threats,
    };

    #[test]
    fn starting_position() {
        let board = Board::starting_position();
        let rules = Rules::default();
        assert!(is_square_attacked(&board, coord!("f3"), Color::White, rules));
        assert!(is_square_attacked(&board, coord!("e6"), Color::Black, rules));
        assert!(!is_square_attacked(&board, coord!("e5"), Color::White, rules));
        assert!(!is_square_attacked(&board, coord!("e4"), Color::Black, rules));
    }
    #[test]
    fn sliders_see_through_empty_squares_only() {
        let mut board = Board::empty();
        board[coord!("a1")] = Some(Piece::new(Color::Black, PieceKind::Rook));
        board[coord!("a4")] = Some(Piece::new(Color::White, PieceKind::Knight));
        let rules = Rules::default();
        assert!(is_square_attacked(&board, coord!("a4"), Color::Black, rules));
        assert!(!is_square_attacked(&board, coord!("a5"), Color::Black, rules));
        assert!(is_square_attacked(&board, coord!("h1"), Color::Black, rules));
    }
    #[test]
    fn pawn_diagonals_count_only_when_occupied_by_default() {
        let mut board = Board::empty();
        board[coord!("e4")] = Some(Piece::new(Color::White, PieceKind::Pawn));
        let rules = Rules::default();
        assert!(!is_square_attacked(&board, coord!("d5"), Color::White, rules));
        assert!(is_square_attacked(&board, coord!("d5"), Color::White, THREATS));
        // a push is a pseudo-legal destination but not a threat
        assert!(is_square_attacked(&board, coord!("e5"), Color::White, rules));
        assert!(!is_square_attacked(&board, coord!("e5"), Color::White, THREATS));

        board[coord!("d5")] = Some(Piece::new(Color::Black, PieceKind::King));
        assert!(is_square_attacked(&board, coord!("d5"), Color::White, rules));
        assert!(is_square_attacked(&board, coord!("d5"), Color::White, THREATS));
    }
}
