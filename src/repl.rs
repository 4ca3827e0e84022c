//! Line-oriented terminal front end. It only talks to the engine through
//! [`Game`]: it submits moves, hands the turn over after every accepted move,
//! and reads the board back to draw it.

use std::{
    io::{self, BufRead, Write, stderr, stdin, stdout},
    str::FromStr,
};

use thiserror::Error;
use tracing::debug;

use crate::{
    board_display::BoardDisplay,
    color::Color,
    config::Rules,
    coord::Coord,
    fen::{Fen, ParseFenError},
    game::{Game, MoveResult},
    movement::{Move, ParseMoveError},
};

const HELP: &str = "\
help           - show this list
flip           - turn the board around
reset          - start over from the starting position
import <fen>   - continue from a position
fen            - print the position as fen
e2             - highlight where the piece on e2 can go
e2e4           - play a move
exit           - leave
";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Command {
    Help,
    Flip,
    Reset,
    Exit,
    Import(Fen),
    Export,
    Inspect(Coord),
    Play(Move),
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
enum ParseCommandError {
    #[error(transparent)]
    Fen(#[from] ParseFenError),
    #[error("unknown command, {0}")]
    Move(#[from] ParseMoveError),
}
impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let command = match s {
            "help" => Command::Help,
            "flip" => Command::Flip,
            "reset" => Command::Reset,
            "exit" | "quit" => Command::Exit,
            "fen" => Command::Export,
            s => match s.strip_prefix("import ") {
                Some(fen) => Command::Import(fen.trim().parse()?),
                None => match s.parse() {
                    Ok(position) => Command::Inspect(position),
                    Err(_) => Command::Play(s.parse()?),
                },
            },
        };
        Ok(command)
    }
}

/// What the session wants after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Nothing visible changed, prompt again.
    Prompt,
    /// Redraw the board.
    Redraw,
    /// Redraw after the position changed.
    Refresh,
    Exit,
}

struct Session {
    game: Game,
    view: Color,
    highlighted: Vec<Coord>,
    legal_moves: Vec<Move>,
}
impl Session {
    fn new(game: Game, view: Color) -> Self {
        let legal_moves = game.legal_moves(game.side_to_move());
        Session {
            game,
            view,
            highlighted: Vec::new(),
            legal_moves,
        }
    }
    fn info(&self) -> String {
        let mut info = format!("{}\n", self.game.status());
        if Color::ALL
            .into_iter()
            .any(|color| self.game.is_checkmate(color))
        {
            info.push_str("game over\n");
        }
        info
    }
    fn refresh(&mut self) {
        self.legal_moves = self.game.legal_moves(self.game.side_to_move());
    }
    fn reset(&mut self, game: Game) {
        self.game = game;
        self.highlighted.clear();
    }
    fn handle(
        &mut self,
        command: Command,
        mut output: impl Write,
        mut error: impl Write,
    ) -> io::Result<Flow> {
        let flow = match command {
            Command::Help => {
                write!(output, "{HELP}")?;
                Flow::Prompt
            }
            Command::Flip => {
                self.view = !self.view;
                Flow::Redraw
            }
            Command::Reset => {
                self.reset(Game::with_rules(self.game.rules()));
                Flow::Refresh
            }
            Command::Exit => Flow::Exit,
            Command::Import(fen) => {
                match Game::from_position(fen.board, fen.side_to_move, self.game.rules()) {
                    Ok(game) => {
                        self.reset(game);
                        Flow::Refresh
                    }
                    Err(err) => {
                        writeln!(error, "Error: {err}")?;
                        Flow::Prompt
                    }
                }
            }
            Command::Export => {
                let fen = Fen {
                    board: *self.game.board(),
                    side_to_move: self.game.side_to_move(),
                };
                writeln!(output, "{fen}")?;
                Flow::Prompt
            }
            Command::Inspect(position) => match self.game.board()[position] {
                None => {
                    writeln!(error, "Error: {position} is empty")?;
                    Flow::Prompt
                }
                Some(piece) if piece.color != self.game.side_to_move() => {
                    writeln!(error, "Error: it is {}'s turn", self.game.side_to_move())?;
                    Flow::Prompt
                }
                Some(_) => {
                    self.highlighted = self
                        .legal_moves
                        .iter()
                        .copied()
                        .filter(|movement| movement.origin() == position)
                        .map(Move::destination)
                        .collect();
                    Flow::Redraw
                }
            },
            Command::Play(movement) => {
                if self.game.make_move(movement, self.game.side_to_move()) == MoveResult::Invalid {
                    writeln!(error, "Error: {movement} is an invalid move")?;
                    Flow::Prompt
                } else {
                    self.game.switch_turns();
                    self.highlighted = vec![movement.origin(), movement.destination()];
                    Flow::Refresh
                }
            }
        };
        Ok(flow)
    }
}

/// Runs the front end on the process's standard streams.
pub fn repl(rules: Rules, view: Color) -> io::Result<()> {
    run(
        stdin().lock(),
        stdout().lock(),
        stderr().lock(),
        Game::with_rules(rules),
        view,
    )
}
/// Reads commands from `input` until it ends or `exit` is entered.
pub fn run(
    input: impl BufRead,
    mut output: impl Write,
    mut error: impl Write,
    game: Game,
    view: Color,
) -> io::Result<()> {
    let mut session = Session::new(game, view);
    let mut lines = input.lines();
    let mut info = session.info() + "type `help` for instructions\n";
    loop {
        write!(
            output,
            "{}",
            BoardDisplay {
                board: session.game.board(),
                view: session.view,
                highlighted: &session.highlighted,
                info: &info,
            },
        )?;
        let flow = loop {
            write!(output, "> ")?;
            output.flush()?;
            let Some(line) = lines.next().transpose()? else {
                return Ok(());
            };
            let command = match line.trim().parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(error, "Error: {err}")?;
                    writeln!(error, "enter `help` to list the commands")?;
                    continue;
                }
            };
            debug!(?command, "read command");
            match session.handle(command, &mut output, &mut error)? {
                Flow::Prompt => {}
                flow => break flow,
            }
        };
        match flow {
            Flow::Exit => return Ok(()),
            Flow::Refresh => {
                session.refresh();
                info = session.info();
            }
            Flow::Prompt | Flow::Redraw => {}
        }
    }
}
