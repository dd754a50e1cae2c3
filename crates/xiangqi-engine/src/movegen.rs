//! Move enumeration and perft.

use crate::Game;
use xiangqi_core::{Color, MoveRecord, Square};

impl Game {
    /// Returns every legal destination for `color`'s piece on `from`.
    ///
    /// Returns an empty vector when `from` is empty or holds an opposing
    /// piece. Destinations come out in square-index order (a0 first, i9
    /// last), which keeps the search deterministic.
    pub fn valid_moves(&self, from: Square, color: Color) -> Vec<Square> {
        match self.piece_at(from) {
            Some(p) if p.color == color => {}
            _ => return Vec::new(),
        }

        Square::all()
            .filter(|&to| self.is_valid_move(from, to, color))
            .collect()
    }

    /// Enumerates every legal move for `color`, with capture snapshots
    /// filled in.
    pub fn moves_for(&self, color: Color) -> Vec<MoveRecord> {
        let mut moves = Vec::new();

        for from in Square::all() {
            let piece = match self.piece_at(from) {
                Some(p) if p.color == color => p,
                _ => continue,
            };
            for to in self.valid_moves(from, color) {
                moves.push(MoveRecord::new(from, to, piece, self.piece_at(to)));
            }
        }
        moves
    }
}

/// Counts leaf nodes of the move tree at the given depth.
///
/// Standard perft, for validating the move generator against hand-counted
/// values. Drives the game through make/undo cycles, so the instance is
/// back in its starting state when this returns.
pub fn perft(game: &mut Game, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.moves_for(game.side_to_move());

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for m in &moves {
        if game.make_move(m.from, m.to) {
            nodes += perft(game, depth - 1);
            game.undo_last_move();
        }
    }
    nodes
}
