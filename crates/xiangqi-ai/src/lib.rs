//! Search AI for the xiangqi engine.
//!
//! This crate provides:
//! - [`Minimax`] - iterative-deepening minimax with alpha-beta pruning
//! - [`evaluate`] / [`evaluate_for`] - material + mobility static evaluation
//!
//! The strategy explores the game tree by mutating a borrowed
//! [`Game`](xiangqi_engine::Game) through apply/undo cycles rather than
//! copying boards, and restores the instance exactly before returning.
//!
//! # Example
//!
//! ```
//! use xiangqi_ai::Minimax;
//! use xiangqi_core::Color;
//! use xiangqi_engine::Game;
//!
//! let mut game = Game::new();
//! let ai = Minimax::new(2);
//! let m = ai.find_best_move(&mut game, Color::Red).unwrap();
//! assert!(game.make_move(m.from, m.to));
//! ```

mod eval;
mod search;

pub use eval::{evaluate, evaluate_for, piece_value, MOBILITY_BONUS};
pub use search::Minimax;
