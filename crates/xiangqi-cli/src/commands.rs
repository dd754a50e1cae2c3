//! Command parsing for the interactive prompt.

use thiserror::Error;
use xiangqi_core::{parse_move, ParseMoveError, Square};

/// A command entered at the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Attempt a move ("move b0c2", or just "b0c2").
    Move { from: Square, to: Square },
    /// List legal destinations for a square ("moves b0").
    Moves(Square),
    /// Take back the last move pair.
    Undo,
    /// Start a fresh game.
    New,
    /// Print the command summary.
    Help,
    /// Leave the program.
    Quit,
}

/// Errors produced while parsing a command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty command")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("{0}")]
    InvalidMove(#[from] ParseMoveError),

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
}

impl Command {
    /// Parses one line of input.
    pub fn parse(line: &str) -> Result<Command, CommandError> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(CommandError::Empty)?;

        match head {
            "move" | "m" => {
                let arg = words.next().ok_or(CommandError::MissingArgument("move"))?;
                let (from, to) = parse_move(arg)?;
                Ok(Command::Move { from, to })
            }
            "moves" => {
                let arg = words.next().ok_or(CommandError::MissingArgument("moves"))?;
                let square = Square::from_notation(arg)
                    .ok_or_else(|| CommandError::InvalidSquare(arg.to_string()))?;
                Ok(Command::Moves(square))
            }
            "undo" | "u" => Ok(Command::Undo),
            "new" => Ok(Command::New),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => {
                // Bare move text like "b0c2" is the common case.
                match parse_move(other) {
                    Ok((from, to)) => Ok(Command::Move { from, to }),
                    Err(_) => Err(CommandError::Unknown(other.to_string())),
                }
            }
        }
    }
}
