//! Static board evaluation.
//!
//! Material plus mobility, signed red-positive: every piece adds its fixed
//! value and 5 points per reachable square, positive for Red and negative
//! for Black. Mobility runs a full legal-move scan per piece, which makes
//! evaluation the expensive half of the search alongside tree branching.

use xiangqi_core::{Color, PieceKind};
use xiangqi_engine::Game;

/// Bonus per legal destination square.
pub const MOBILITY_BONUS: i32 = 5;

/// Material value of a piece kind.
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::General => 10_000,
        PieceKind::Chariot => 600,
        PieceKind::Cannon => 350,
        PieceKind::Horse => 300,
        PieceKind::Advisor => 110,
        PieceKind::Elephant => 110,
        PieceKind::Soldier => 70,
    }
}

/// Evaluates the board, positive favoring Red.
pub fn evaluate(game: &Game) -> i32 {
    let mut score = 0;

    for piece in game.pieces() {
        let mobility = game.valid_moves(piece.square, piece.color).len() as i32 * MOBILITY_BONUS;
        let value = piece_value(piece.kind) + mobility;
        score += match piece.color {
            Color::Red => value,
            Color::Black => -value,
        };
    }
    score
}

/// Evaluates the board from `perspective`'s viewpoint.
///
/// Negates the raw red-positive score for Black, so a searching side can
/// uniformly maximize.
pub fn evaluate_for(game: &Game, perspective: Color) -> i32 {
    match perspective {
        Color::Red => evaluate(game),
        Color::Black => -evaluate(game),
    }
}
