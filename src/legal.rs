use tracing::trace;

use crate::{
    attack::is_square_attacked, board::Board, color::Color, config::Rules,
    geometry::pseudo_legal_moves, movement::Move,
};

/// Whether `color`'s king stands unattacked once `movement` is played on a
/// copy of `board`. A side without a king has nothing to protect.
pub fn is_king_safe_after(board: &Board, movement: Move, color: Color, rules: Rules) -> bool {
    let simulated = board.clone_and_move(movement);
    simulated
        .king(color)
        .is_none_or(|king| !is_square_attacked(&simulated, king, !color, rules))
}
/// Every legal move of `color`, in board scan order then generation order.
///
/// Each pseudo-legal candidate is played on a scratch copy and kept only when
/// the mover's king is not attacked afterwards. This is the only legality
/// check the engine has.
pub fn legal_moves(board: &Board, color: Color, rules: Rules) -> Vec<Move> {
    let moves: Vec<_> = board
        .pieces_of(color)
        .flat_map(|(origin, _)| pseudo_legal_moves(board, origin))
        .filter(|movement| !board.has_color_at(movement.destination(), color))
        .filter(|movement| is_king_safe_after(board, *movement, color, rules))
        .collect();
    trace!(%color, count = moves.len(), "generated legal moves");
    moves
}
#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::{
        board::Board,
        color::Color,
        config::Rules,
        coord,
        fen::Fen,
        legal::legal_moves,
        movement::Move,
    };

    fn position(fen: &str) -> (Board, Color) {
        let fen: Fen = fen.parse().unwrap();
        (fen.board, fen.side_to_move)
    }

    #[test]
    fn starting_position_has_twenty_moves() {
        let board = Board::starting_position();
        for color in Color::ALL {
            assert_eq!(legal_moves(&board, color, Rules::default()).len(), 20);
        }
    }
    #[test]
    fn scan_order_is_row_major() {
        let moves = legal_moves(&Board::starting_position(), Color::White, Rules::default());
        assert_eq!(moves[0], Move::new(coord!("a2"), coord!("a3")));
        assert_eq!(moves[1], Move::new(coord!("a2"), coord!("a4")));
        assert_eq!(moves[16], Move::new(coord!("b1"), coord!("a3")));
        assert_eq!(moves[19], Move::new(coord!("g1"), coord!("h3")));
    }
    #[test]
    fn pin() {
        let (board, color) = position("4k3/4r3/8/8/8/8/4N3/4K3 w - - 0 1");
        let moves = legal_moves(&board, color, Rules::default());
        assert!(moves.iter().all(|movement| movement.origin() != coord!("e2")));
        assert!(!moves.is_empty());
    }
    #[test]
    fn king_keeps_out_of_reach() {
        let (board, color) = position("4k3/8/8/8/8/8/8/3rK3 w - - 0 1");
        let mut moves: Vec<_> = legal_moves(&board, color, Rules::default())
            .into_iter()
            .map(|movement| movement.destination().to_string())
            .collect();
        moves.sort();
        // the rook covers the first rank and the d-file but nothing guards it
        assert_eq!(moves, ["d1", "e2", "f2"]);
    }
    #[test]
    fn king_cannot_step_next_to_a_pawn_capture() {
        let (board, color) = position("8/8/8/3k4/8/3p4/8/4K3 w - - 0 1");
        let moves: Vec<_> = legal_moves(&board, color, Rules::default())
            .into_iter()
            .map(|movement| movement.destination())
            .collect();
        // black pawn on d3 would capture on e2 and c2
        assert!(!moves.contains(&coord!("e2")));
        assert!(moves.contains(&coord!("d2")));
        assert!(moves.contains(&coord!("f2")));
    }
    #[test]
    fn check_must_be_answered() {
        let (board, color) = position("4k3/8/8/8/8/8/3PP3/r3KB2 w - - 0 1");
        let moves = legal_moves(&board, color, Rules::default());
        assert_eq!(moves, [Move::new(coord!("e1"), coord!("f2"))]);
    }
    #[test]
    fn no_friendly_captures() {
        let board = Board::starting_position();
        for color in Color::ALL {
            for movement in legal_moves(&board, color, Rules::default()) {
                assert!(!board.has_color_at(movement.destination(), color));
            }
        }
    }
}
