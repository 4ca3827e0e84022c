//! Differential check of the move generator against the `chess` crate.
//!
//! Positions are exported as FEN without castling rights or en passant
//! targets, so both sides agree on which rules apply. Promotion choices of
//! the reference collapse into a single origin/destination pair.

use rand::{Rng, SeedableRng, rngs::SmallRng};
use rustc_hash::FxHashSet;
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    board::Board, board_display::BoardDisplay, color::Color, config::Rules, coord::Coord, fen::Fen,
    game::Game, movement::Move, piece::PieceKind,
};

/// Plies after which a game is abandoned.
pub const MAX_PLIES: usize = 300;

impl From<chess::Square> for Coord {
    fn from(value: chess::Square) -> Self {
        Coord::new(
            value.get_file().to_index().try_into().unwrap_or_default(),
            (7 - value.get_rank().to_index())
                .try_into()
                .unwrap_or_default(),
        )
    }
}
impl From<chess::ChessMove> for Move {
    fn from(value: chess::ChessMove) -> Self {
        Move::new(value.get_source().into(), value.get_dest().into())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Mismatch {
    #[error("found {movement} but it's not a legal move\n{board}\n{fen}")]
    Extra {
        movement: Move,
        board: String,
        fen: String,
    },
    #[error("{movement} not found\n{board}\n{fen}")]
    Missing {
        movement: Move,
        board: String,
        fen: String,
    },
    #[error("reference rejected the position: {reason}\n{fen}")]
    Rejected { reason: String, fen: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FuzzReport {
    pub games: usize,
    pub plies: usize,
    pub checkmates: usize,
}

fn pawn_on_last_row(board: &Board) -> bool {
    board
        .pieces()
        .any(|(position, piece)| piece.kind == PieceKind::Pawn && position.y() == piece.color.last_row())
}
/// Compares the legal moves of the side to move with the reference
/// generator.
pub fn compare(board: &Board, color: Color, rules: Rules) -> Result<FxHashSet<Move>, Mismatch> {
    let moves: FxHashSet<_> = rules.legal_moves(board, color).into_iter().collect();
    let fen = Fen {
        board: *board,
        side_to_move: color,
    }
    .to_string();
    let reference: chess::Board = fen.parse().map_err(|err| Mismatch::Rejected {
        reason: format!("{err:?}"),
        fen: fen.clone(),
    })?;
    let reference: FxHashSet<Move> = chess::MoveGen::new_legal(&reference)
        .map(Into::into)
        .collect();
    if let Some(movement) = moves.difference(&reference).next() {
        return Err(Mismatch::Extra {
            movement: *movement,
            board: BoardDisplay::new(board).to_string(),
            fen,
        });
    }
    if let Some(movement) = reference.difference(&moves).next() {
        return Err(Mismatch::Missing {
            movement: *movement,
            board: BoardDisplay::new(board).to_string(),
            fen,
        });
    }
    Ok(moves)
}
/// Plays `games` random games, checking every position on the way.
pub fn fuzz(games: usize, seed: Option<u64>, rules: Rules) -> Result<FuzzReport, Mismatch> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let mut report = FuzzReport::default();
    for _ in 0..games {
        let mut game = Game::with_rules(rules);
        for _ in 0..MAX_PLIES {
            if pawn_on_last_row(game.board()) {
                break;
            }
            let color = game.side_to_move();
            let mut moves: Vec<_> = compare(game.board(), color, rules)?.into_iter().collect();
            if moves.is_empty() {
                break;
            }
            // hash set order is unspecified, sort so a seed replays the same game
            moves.sort_unstable();
            let movement = moves[rng.random_range(0..moves.len())];
            let result = game.make_move(movement, color);
            debug_assert!(result.is_applied());
            report.plies += 1;
            if game.is_checkmate(!color) {
                report.checkmates += 1;
            }
            game.switch_turns();
        }
        report.games += 1;
        debug!(?report, "game finished");
    }
    info!(?report, "fuzzing finished");
    Ok(report)
}
