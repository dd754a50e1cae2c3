//! Move record representation.

use crate::{Piece, Square};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing move text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseMoveError {
    #[error("move text must be 4 characters (e.g. \"b0c2\"), got {0}")]
    InvalidLength(usize),

    #[error("invalid source square: {0}")]
    InvalidFrom(String),

    #[error("invalid destination square: {0}")]
    InvalidTo(String),
}

/// A recorded move.
///
/// `piece` and `captured` are pre-move snapshots: value copies taken before
/// the board changed, independent of any later mutation. A record is
/// therefore sufficient to reverse its move exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    /// Source square.
    pub from: Square,
    /// Destination square.
    pub to: Square,
    /// The moving piece as it stood on `from` before the move.
    pub piece: Piece,
    /// The piece that stood on `to` before the move, if any.
    pub captured: Option<Piece>,
}

impl MoveRecord {
    /// Creates a move record from pre-move snapshots.
    #[inline]
    pub const fn new(from: Square, to: Square, piece: Piece, captured: Option<Piece>) -> Self {
        MoveRecord {
            from,
            to,
            piece,
            captured,
        }
    }

    /// Returns true if this move captured a piece.
    #[inline]
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Returns the text form of this move (e.g. "b0c2").
    pub fn to_text(self) -> String {
        format!("{}{}", self.from, self.to)
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Parses move text ("b0c2") into a source and destination square.
///
/// Only the geometry is parsed; whether the move is legal on a given board
/// is the engine's decision.
pub fn parse_move(s: &str) -> Result<(Square, Square), ParseMoveError> {
    if s.len() != 4 || !s.is_ascii() {
        return Err(ParseMoveError::InvalidLength(s.chars().count()));
    }
    let from = Square::from_notation(&s[0..2])
        .ok_or_else(|| ParseMoveError::InvalidFrom(s[0..2].to_string()))?;
    let to = Square::from_notation(&s[2..4])
        .ok_or_else(|| ParseMoveError::InvalidTo(s[2..4].to_string()))?;
    Ok((from, to))
}
