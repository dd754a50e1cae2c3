//! Iterative-deepening minimax search with alpha-beta pruning.
//!
//! The search owns no state of its own: it drives a mutably borrowed
//! [`Game`] through make/undo cycles, one shared instance for the whole
//! tree, and guarantees the instance is back in its pre-search state on
//! every exit path. Sign convention follows the evaluation: Red maximizes
//! the raw score and Black minimizes it, including at the root.

use crate::eval::evaluate_for;
use std::time::Instant;
use xiangqi_core::{Color, MoveRecord};
use xiangqi_engine::Game;

/// Score bounds. `-INFINITY` negates safely, unlike `i32::MIN`.
const INFINITY: i32 = i32::MAX;

/// A fixed-depth minimax strategy.
///
/// Stateless between calls; configured only with the maximum search depth
/// in plies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    max_depth: u32,
}

impl Default for Minimax {
    /// Four plies.
    fn default() -> Self {
        Minimax::new(4)
    }
}

impl Minimax {
    /// Creates a strategy searching `max_depth` plies.
    pub const fn new(max_depth: u32) -> Self {
        Minimax { max_depth }
    }

    /// Returns the configured search depth.
    pub const fn max_depth(self) -> u32 {
        self.max_depth
    }

    /// Picks a move for `color`, or `None` when `color` has no legal moves.
    ///
    /// Runs iterative deepening from depth 1 to the configured maximum,
    /// keeping the answer of the deepest completed iteration. The game's
    /// side to move is forced to `color` for the duration and restored on
    /// exit; the board and history are left exactly as found. Blocks the
    /// caller until the search completes.
    pub fn find_best_move(&self, game: &mut Game, color: Color) -> Option<MoveRecord> {
        let original_side = game.side_to_move();
        game.set_side_to_move(color);

        let start = Instant::now();
        let mut nodes = 0u64;
        let mut best_move = None;

        for depth in 1..=self.max_depth {
            let (m, score) = self.search_root(game, color, depth, &mut nodes);
            if let Some(m) = m {
                best_move = Some(m);
                tracing::debug!(
                    depth,
                    score,
                    nodes,
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    best = %m,
                    "search iteration complete"
                );
            }
        }

        game.set_side_to_move(original_side);
        best_move
    }

    /// One full-depth root search for `color`.
    ///
    /// Red keeps the maximum child score, Black the minimum.
    fn search_root(
        &self,
        game: &mut Game,
        color: Color,
        depth: u32,
        nodes: &mut u64,
    ) -> (Option<MoveRecord>, i32) {
        let moves = game.moves_for(color);
        if moves.is_empty() {
            return (None, evaluate_for(game, color));
        }

        let mut best_move = None;
        let mut best_score = match color {
            Color::Red => -INFINITY,
            Color::Black => INFINITY,
        };

        for m in moves {
            if !game.make_move(m.from, m.to) {
                continue;
            }
            let score = self.minimax(
                game,
                depth - 1,
                -INFINITY,
                INFINITY,
                color.opposite(),
                color,
                nodes,
            );
            game.undo_last_move();

            let better = match color {
                Color::Red => score > best_score,
                Color::Black => score < best_score,
            };
            if better || best_move.is_none() {
                best_score = score;
                best_move = Some(m);
            }
        }

        (best_move, best_score)
    }

    /// Depth-limited alpha-beta minimax.
    ///
    /// `perspective` maximizes, the opponent minimizes; leaves return the
    /// static evaluation from `perspective`'s viewpoint. Every trial move
    /// is undone before returning, including at pruning cutoffs.
    #[allow(clippy::too_many_arguments)]
    fn minimax(
        &self,
        game: &mut Game,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        side_to_move: Color,
        perspective: Color,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;

        if depth == 0 || game.is_game_over() {
            return evaluate_for(game, perspective);
        }

        let moves = game.moves_for(side_to_move);
        if moves.is_empty() {
            return evaluate_for(game, perspective);
        }

        if side_to_move == perspective {
            let mut value = -INFINITY;
            for m in moves {
                if !game.make_move(m.from, m.to) {
                    continue;
                }
                let score = self.minimax(
                    game,
                    depth - 1,
                    alpha,
                    beta,
                    side_to_move.opposite(),
                    perspective,
                    nodes,
                );
                game.undo_last_move();

                value = value.max(score);
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        } else {
            let mut value = INFINITY;
            for m in moves {
                if !game.make_move(m.from, m.to) {
                    continue;
                }
                let score = self.minimax(
                    game,
                    depth - 1,
                    alpha,
                    beta,
                    side_to_move.opposite(),
                    perspective,
                    nodes,
                );
                game.undo_last_move();

                value = value.min(score);
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xiangqi_core::{PieceKind, Square};

    fn sq(s: &str) -> Square {
        Square::from_notation(s).unwrap()
    }

    /// Generals on both thrones plus the given extra pieces.
    fn position(extra: &[(PieceKind, Color, &str)], side: Color) -> Game {
        let mut game = Game::empty(side);
        game.place(PieceKind::General, Color::Red, sq("e0"));
        game.place(PieceKind::General, Color::Black, sq("e9"));
        for (kind, color, square) in extra {
            game.place(*kind, *color, sq(square));
        }
        game
    }

    #[test]
    fn search_leaves_game_untouched() {
        let mut game = Game::new();
        let before = game.clone();

        let m = Minimax::new(2).find_best_move(&mut game, Color::Red);
        assert!(m.is_some());
        assert_eq!(game, before);
    }

    #[test]
    fn search_restores_side_to_move() {
        let mut game = Game::new();
        assert!(game.make_move(sq("e3"), sq("e4")));
        assert_eq!(game.side_to_move(), Color::Black);

        // Searching for Red must not leave Red on the clock.
        Minimax::new(1).find_best_move(&mut game, Color::Red);
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn search_is_deterministic() {
        let mut game = Game::new();
        let ai = Minimax::new(2);
        let first = ai.find_best_move(&mut game, Color::Red);
        let second = ai.find_best_move(&mut game, Color::Red);
        assert_eq!(first, second);
    }

    #[test]
    fn no_legal_moves_yields_none() {
        // Black has no pieces at all, so no move exists for Black.
        let mut game = Game::empty(Color::Black);
        game.place(PieceKind::General, Color::Red, sq("e0"));
        assert_eq!(Minimax::new(3).find_best_move(&mut game, Color::Black), None);
    }

    #[test]
    fn red_takes_the_hanging_general() {
        // Red chariot on an open e-file: capturing the black general
        // dominates every alternative.
        let mut game = position(&[(PieceKind::Chariot, Color::Red, "e4")], Color::Red);
        let m = Minimax::new(1)
            .find_best_move(&mut game, Color::Red)
            .unwrap();
        assert_eq!(m.from, sq("e4"));
        assert_eq!(m.to, sq("e9"));
        assert_eq!(m.captured.unwrap().kind, PieceKind::General);
    }

    #[test]
    fn red_takes_the_general_at_depth_two() {
        let mut game = position(&[(PieceKind::Chariot, Color::Red, "e4")], Color::Red);
        let m = Minimax::new(2)
            .find_best_move(&mut game, Color::Red)
            .unwrap();
        assert_eq!(m.to, sq("e9"));
    }

    #[test]
    fn black_root_keeps_the_minimum_score() {
        // The root for Black keeps the move with the minimum search score,
        // so Black passes up a free chariot capture at depth 1.
        let mut game = position(
            &[
                (PieceKind::Soldier, Color::Black, "a1"),
                (PieceKind::Chariot, Color::Red, "a0"),
            ],
            Color::Black,
        );
        let m = Minimax::new(1)
            .find_best_move(&mut game, Color::Black)
            .unwrap();
        assert!(
            !(m.from == sq("a1") && m.to == sq("a0")),
            "black root should not select the maximum-score capture"
        );
    }

    // Full-depth search from the start position is slow without
    // optimizations; run with --ignored in release mode.
    #[test]
    #[ignore]
    fn deeper_search_still_returns_a_move() {
        let mut game = Game::new();
        let m = Minimax::default().find_best_move(&mut game, Color::Red);
        assert!(m.is_some());
        assert_eq!(game, Game::new());
    }
}
