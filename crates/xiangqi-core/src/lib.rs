//! Core types for xiangqi (Chinese chess).
//!
//! This crate provides the fundamental types used across the engine:
//! - [`PieceKind`], [`Piece`], and [`Color`] for piece representation
//! - [`Square`], [`File`], and [`Rank`] for board coordinates
//! - [`MoveRecord`] for move representation with exact-undo snapshots

mod color;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use mov::{parse_move, MoveRecord, ParseMoveError};
pub use piece::{Piece, PieceKind};
pub use square::{File, Rank, Square};
