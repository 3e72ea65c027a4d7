use std::io::{self, Write};

use thiserror::Error;

use super::{TerminalDisplay, setup_standard};
use crate::coord::Coord;
use crate::engine::{GameEngine, Outcome};
use crate::{BoardDisplay, SquareInput};

/// Error type for interactive terminal input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("invalid square notation: '{0}'")]
    BadSquare(String),
}

/// Stdin-backed activation source.
///
/// Every square token on one input line forms a single activation signal
/// (a well-behaved player types one square per line); `q` or end of input
/// ends the session.
#[derive(Debug, Default)]
pub struct InteractiveInput;

impl InteractiveInput {
    pub fn new() -> Self {
        Self
    }
}

impl SquareInput for InteractiveInput {
    type Error = InputError;

    fn next_signal(&mut self) -> Result<Option<Vec<Coord>>, Self::Error> {
        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                return Ok(None);
            }
            let line = line.trim();

            if line == "q" {
                return Ok(None);
            }
            if line.is_empty() {
                continue;
            }

            let hits = line
                .split_whitespace()
                .map(|token| {
                    token
                        .parse::<Coord>()
                        .map_err(|_| InputError::BadSquare(token.to_owned()))
                })
                .collect::<Result<Vec<Coord>, _>>()?;
            return Ok(Some(hits));
        }
    }
}

/// Clears the screen and moves the cursor to the top-left.
#[inline]
fn clear_screen() {
    print!("\x1B[2J\x1B[H");
}

/// Runs an interactive terminal session against a fresh standard position.
///
/// Activating a piece's square highlights its candidate moves; activating a
/// highlighted square commits the move.
pub fn run_interactive_terminal() {
    let mut engine = GameEngine::new();
    setup_standard(engine.board_mut());

    let mut input = InteractiveInput::new();
    let mut display = TerminalDisplay::new();

    clear_screen();
    draw_interface(&mut display, &engine, None);

    loop {
        match input.next_signal() {
            Ok(Some(hits)) => match engine.handle_signal(&hits) {
                Ok(outcome) => {
                    clear_screen();
                    draw_interface(&mut display, &engine, Some(outcome));
                }
                Err(e) => println!("Error: {e}"),
            },
            Ok(None) => break,
            Err(e) => println!("{e}"),
        }
    }
}

/// Draws the help text, the board and the result of the last signal.
fn draw_interface(display: &mut TerminalDisplay, engine: &GameEngine, outcome: Option<Outcome>) {
    println!("♟  Chess board");
    println!();
    println!("Commands: <square> (activate, e.g. e2) | q (quit)");
    println!();

    if let Err(e) = display.show(engine.board()) {
        eprintln!("Failed to draw the board: {e}");
        return;
    }

    match outcome {
        Some(Outcome::Selected { candidates, .. }) => {
            println!("{candidates} possible move(s) highlighted");
        }
        Some(Outcome::Committed { from, to, .. }) => match from {
            Some(from) => println!("Moved {from} -> {to}"),
            None => println!("Placed a piece on {to}"),
        },
        Some(Outcome::Idle) | None => {}
    }
}
