//! Xiangqi rules engine.
//!
//! This crate provides:
//! - [`Game`] - board state, side to move, and move history with exact undo
//! - Per-piece move legality ([`Game::is_valid_move`])
//! - Move enumeration ([`Game::valid_moves`], [`Game::moves_for`])
//! - Termination queries ([`Game::result`], [`Game::is_game_over`])
//! - [`perft`] for move-generator validation
//!
//! # Ruleset
//!
//! The engine implements a deliberately simplified ruleset: there is no
//! self-check prevention, no check or checkmate detection, and no
//! repetition rule. The game ends only when a general is captured off the
//! board. Callers wanting stricter rules must layer them on top.
//!
//! # Example
//!
//! ```
//! use xiangqi_engine::Game;
//! use xiangqi_core::Square;
//!
//! let mut game = Game::new();
//! let from = Square::from_notation("b0").unwrap();
//! let to = Square::from_notation("c2").unwrap();
//! assert!(game.make_move(from, to));
//! game.undo_last_move();
//! assert_eq!(game, Game::new());
//! ```

mod game;
mod movegen;
mod rules;

pub use game::{Game, GameResult};
pub use movegen::perft;
