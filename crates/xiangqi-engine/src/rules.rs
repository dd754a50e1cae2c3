//! Per-piece move legality.
//!
//! Legality is purely geometric plus obstruction: there is no self-check
//! rule in this ruleset, so a move that exposes the mover's own general is
//! still legal. Friendly-fire capture is rejected before any per-kind rule
//! runs.

use crate::Game;
use xiangqi_core::{Color, PieceKind, Square};

impl Game {
    /// Returns true if moving `color`'s piece from `from` to `to` is legal.
    ///
    /// Checks, in order and short-circuiting to `false`:
    /// 1. a piece of `color` stands on `from`;
    /// 2. `to` is empty or holds an opposing piece;
    /// 3. the piece kind's geometric and obstruction rule holds.
    ///
    /// Board bounds are enforced by [`Square`] itself; callers holding raw
    /// coordinates go through [`Square::from_coords`] first.
    pub fn is_valid_move(&self, from: Square, to: Square, color: Color) -> bool {
        let piece = match self.piece_at(from) {
            Some(p) if p.color == color => p,
            _ => return false,
        };

        if let Some(target) = self.piece_at(to) {
            if target.color == piece.color {
                return false;
            }
        }

        match piece.kind {
            PieceKind::General => general_move_ok(from, to, piece.color),
            PieceKind::Advisor => advisor_move_ok(from, to, piece.color),
            PieceKind::Elephant => self.elephant_move_ok(from, to, piece.color),
            PieceKind::Horse => self.horse_move_ok(from, to),
            PieceKind::Chariot => self.chariot_move_ok(from, to),
            PieceKind::Cannon => self.cannon_move_ok(from, to),
            PieceKind::Soldier => soldier_move_ok(from, to, piece.color),
        }
    }

    /// Two diagonal steps, never across the river, with an empty "eye"
    /// at the midpoint.
    fn elephant_move_ok(&self, from: Square, to: Square, color: Color) -> bool {
        let dx = to.x() - from.x();
        let dy = to.y() - from.y();

        if dx.abs() != 2 || dy.abs() != 2 {
            return false;
        }
        if !to.is_home_side(color) {
            return false;
        }
        self.piece_at_coords(from.x() + dx / 2, from.y() + dy / 2)
            .is_none()
    }

    /// An L-shape, with the adjacent cell toward the long leg empty
    /// (the "horse leg").
    fn horse_move_ok(&self, from: Square, to: Square) -> bool {
        let dx = to.x() - from.x();
        let dy = to.y() - from.y();

        let (bx, by) = match (dx.abs(), dy.abs()) {
            (2, 1) => (from.x() + dx.signum(), from.y()),
            (1, 2) => (from.x(), from.y() + dy.signum()),
            _ => return false,
        };
        self.piece_at_coords(bx, by).is_none()
    }

    /// A straight slide over an empty path.
    fn chariot_move_ok(&self, from: Square, to: Square) -> bool {
        if from.x() != to.x() && from.y() != to.y() {
            return false;
        }
        self.pieces_between(from, to) == 0
    }

    /// A straight slide: to an empty square over an empty path, or a
    /// capture over exactly one screen.
    fn cannon_move_ok(&self, from: Square, to: Square) -> bool {
        if from.x() != to.x() && from.y() != to.y() {
            return false;
        }
        let screens = self.pieces_between(from, to);
        if self.piece_at(to).is_none() {
            screens == 0
        } else {
            screens == 1
        }
    }

    /// Counts occupied cells strictly between `from` and `to`.
    ///
    /// `from` and `to` must share a file or a rank.
    fn pieces_between(&self, from: Square, to: Square) -> usize {
        let dx = (to.x() - from.x()).signum();
        let dy = (to.y() - from.y()).signum();
        let mut count = 0;
        let mut x = from.x() + dx;
        let mut y = from.y() + dy;

        while (x, y) != (to.x(), to.y()) {
            if self.piece_at_coords(x, y).is_some() {
                count += 1;
            }
            x += dx;
            y += dy;
        }
        count
    }
}

/// One orthogonal step, confined to the palace.
fn general_move_ok(from: Square, to: Square, color: Color) -> bool {
    let dx = (to.x() - from.x()).abs();
    let dy = (to.y() - from.y()).abs();
    dx + dy == 1 && to.in_palace(color)
}

/// One diagonal step, confined to the palace.
fn advisor_move_ok(from: Square, to: Square, color: Color) -> bool {
    (to.x() - from.x()).abs() == 1 && (to.y() - from.y()).abs() == 1 && to.in_palace(color)
}

/// A single forward step; after crossing the river a single sideways step
/// becomes additionally legal. Never backward, never diagonal.
fn soldier_move_ok(from: Square, to: Square, color: Color) -> bool {
    let dx = to.x() - from.x();
    let dy = to.y() - from.y();
    let forward = color.soldier_direction();

    if from.is_home_side(color) {
        dx == 0 && dy == forward
    } else {
        (dx == 0 && dy == forward) || (dy == 0 && dx.abs() == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xiangqi_core::Color::{Black, Red};

    fn sq(s: &str) -> Square {
        Square::from_notation(s).unwrap()
    }

    #[test]
    fn no_piece_or_wrong_owner_is_invalid() {
        let game = Game::new();
        // Empty source.
        assert!(!game.is_valid_move(sq("e4"), sq("e5"), Red));
        // Black piece queried as Red's.
        assert!(!game.is_valid_move(sq("e9"), sq("e8"), Red));
    }

    #[test]
    fn no_friendly_capture() {
        let game = Game::new();
        // Chariot a0 onto its own soldier a3.
        assert!(!game.is_valid_move(sq("a0"), sq("a3"), Red));
        // General e0 onto its own advisor d0.
        assert!(!game.is_valid_move(sq("e0"), sq("d0"), Red));
    }

    #[test]
    fn general_stays_in_palace() {
        let mut game = Game::empty(Red);
        game.place(PieceKind::General, Red, sq("e1"));

        assert!(game.is_valid_move(sq("e1"), sq("e0"), Red));
        assert!(game.is_valid_move(sq("e1"), sq("e2"), Red));
        assert!(game.is_valid_move(sq("e1"), sq("d1"), Red));
        assert!(game.is_valid_move(sq("e1"), sq("f1"), Red));
        // Diagonal step.
        assert!(!game.is_valid_move(sq("e1"), sq("d0"), Red));
        // Two steps.
        assert!(!game.is_valid_move(sq("e1"), sq("e3"), Red));

        // On the palace edge, stepping out is illegal.
        game.place(PieceKind::General, Red, sq("d2"));
        assert!(!game.is_valid_move(sq("d2"), sq("c2"), Red));
        assert!(!game.is_valid_move(sq("d2"), sq("d3"), Red));
    }

    #[test]
    fn black_general_palace_is_mirrored() {
        let mut game = Game::empty(Black);
        game.place(PieceKind::General, Black, sq("e8"));

        assert!(game.is_valid_move(sq("e8"), sq("e7"), Black));
        assert!(game.is_valid_move(sq("e8"), sq("e9"), Black));
        assert!(!game.is_valid_move(sq("e8"), sq("e6"), Black));
    }

    #[test]
    fn advisor_moves_diagonally_in_palace() {
        let mut game = Game::empty(Red);
        game.place(PieceKind::Advisor, Red, sq("e1"));

        for to in ["d0", "f0", "d2", "f2"] {
            assert!(game.is_valid_move(sq("e1"), sq(to), Red), "{}", to);
        }
        // Orthogonal step.
        assert!(!game.is_valid_move(sq("e1"), sq("e2"), Red));

        // From the corner of the palace, c-file exits are out.
        game.place(PieceKind::Advisor, Red, sq("d2"));
        assert!(!game.is_valid_move(sq("d2"), sq("c1"), Red));
        assert!(!game.is_valid_move(sq("d2"), sq("c3"), Red));

        // Stepping back onto the first advisor is a friendly capture;
        // clearing e1 makes the same step legal.
        assert!(!game.is_valid_move(sq("d2"), sq("e1"), Red));
        game.remove(sq("e1"));
        assert!(game.is_valid_move(sq("d2"), sq("e1"), Red));
    }

    #[test]
    fn elephant_two_diagonal_steps() {
        let mut game = Game::empty(Red);
        game.place(PieceKind::Elephant, Red, sq("c0"));

        assert!(game.is_valid_move(sq("c0"), sq("a2"), Red));
        assert!(game.is_valid_move(sq("c0"), sq("e2"), Red));
        // One step is not enough.
        assert!(!game.is_valid_move(sq("c0"), sq("b1"), Red));
    }

    #[test]
    fn elephant_cannot_cross_river() {
        let mut game = Game::empty(Red);
        game.place(PieceKind::Elephant, Red, sq("c4"));
        // c4 -> e6 crosses the river.
        assert!(!game.is_valid_move(sq("c4"), sq("e6"), Red));
        assert!(game.is_valid_move(sq("c4"), sq("e2"), Red));

        game.place(PieceKind::Elephant, Black, sq("c5"));
        assert!(!game.is_valid_move(sq("c5"), sq("e3"), Black));
        assert!(game.is_valid_move(sq("c5"), sq("e7"), Black));
    }

    #[test]
    fn elephant_blocked_by_eye() {
        let mut game = Game::empty(Red);
        game.place(PieceKind::Elephant, Red, sq("c0"));
        game.place(PieceKind::Soldier, Red, sq("d1"));

        assert!(!game.is_valid_move(sq("c0"), sq("e2"), Red));
        assert!(game.is_valid_move(sq("c0"), sq("a2"), Red));
    }

    #[test]
    fn horse_l_shape() {
        let mut game = Game::empty(Red);
        game.place(PieceKind::Horse, Red, sq("e4"));

        for to in ["d6", "f6", "c5", "g5", "c3", "g3", "d2", "f2"] {
            assert!(game.is_valid_move(sq("e4"), sq(to), Red), "{}", to);
        }
        assert!(!game.is_valid_move(sq("e4"), sq("e5"), Red));
        assert!(!game.is_valid_move(sq("e4"), sq("g6"), Red));
    }

    #[test]
    fn horse_leg_blocks() {
        let mut game = Game::empty(Red);
        game.place(PieceKind::Horse, Red, sq("e4"));
        // Blocker directly above stops both upward L-moves only.
        game.place(PieceKind::Soldier, Black, sq("e5"));

        assert!(!game.is_valid_move(sq("e4"), sq("d6"), Red));
        assert!(!game.is_valid_move(sq("e4"), sq("f6"), Red));
        assert!(game.is_valid_move(sq("e4"), sq("c5"), Red));
        assert!(game.is_valid_move(sq("e4"), sq("d2"), Red));

        // Blocker to the right stops the rightward long leg.
        game.place(PieceKind::Soldier, Black, sq("f4"));
        assert!(!game.is_valid_move(sq("e4"), sq("g5"), Red));
        assert!(!game.is_valid_move(sq("e4"), sq("g3"), Red));
        assert!(game.is_valid_move(sq("e4"), sq("c5"), Red));
    }

    #[test]
    fn starting_horse_moves() {
        let game = Game::new();
        let moves = game.valid_moves(sq("b0"), Red);
        let expected = [sq("a2"), sq("c2")];
        assert_eq!(moves.len(), 2);
        for to in expected {
            assert!(moves.contains(&to));
        }
        // d1 is reachable geometrically but the c0 elephant blocks the leg.
        assert!(!game.is_valid_move(sq("b0"), sq("d1"), Red));
    }

    #[test]
    fn chariot_slides_and_stops() {
        let mut game = Game::empty(Red);
        game.place(PieceKind::Chariot, Red, sq("e4"));
        game.place(PieceKind::Soldier, Black, sq("e7"));

        assert!(game.is_valid_move(sq("e4"), sq("e6"), Red));
        assert!(game.is_valid_move(sq("e4"), sq("e7"), Red)); // capture
        assert!(!game.is_valid_move(sq("e4"), sq("e8"), Red)); // through a piece
        assert!(game.is_valid_move(sq("e4"), sq("a4"), Red));
        assert!(!game.is_valid_move(sq("e4"), sq("d5"), Red)); // diagonal
    }

    #[test]
    fn cannon_screen_rule() {
        let mut game = Game::empty(Red);
        game.place(PieceKind::Cannon, Red, sq("e2"));
        game.place(PieceKind::Soldier, Red, sq("e4"));
        game.place(PieceKind::Horse, Black, sq("e6"));

        // Quiet move over a screen is illegal.
        assert!(!game.is_valid_move(sq("e2"), sq("e5"), Red));
        // Quiet move with a clear path is legal.
        assert!(game.is_valid_move(sq("e2"), sq("e3"), Red));
        // Capture over exactly one screen is legal.
        assert!(game.is_valid_move(sq("e2"), sq("e6"), Red));

        // A second screen makes the capture illegal.
        game.place(PieceKind::Soldier, Red, sq("e5"));
        assert!(!game.is_valid_move(sq("e2"), sq("e6"), Red));
    }

    #[test]
    fn cannon_cannot_capture_adjacent_without_screen() {
        let game = Game::new();
        // Starting cannons face each other on rank 2/7 files b and h with
        // nothing between them: zero screens, so no capture.
        assert!(!game.is_valid_move(sq("b2"), sq("b7"), Red));
        // With the b7 cannon as a screen, the b9 horse is a legal target.
        assert!(game.is_valid_move(sq("b2"), sq("b9"), Red));
    }

    #[test]
    fn starting_cannon_quiet_moves() {
        let game = Game::new();
        // Clear rank-2 slide.
        assert!(game.is_valid_move(sq("b2"), sq("e2"), Red));
        assert!(game.is_valid_move(sq("b2"), sq("a2"), Red));
        // Own cannon on h2 is a friendly target.
        assert!(!game.is_valid_move(sq("b2"), sq("h2"), Red));
    }

    #[test]
    fn soldier_before_river_only_forward() {
        let game = Game::new();
        assert!(game.is_valid_move(sq("e3"), sq("e4"), Red));
        assert!(!game.is_valid_move(sq("e3"), sq("d3"), Red));
        assert!(!game.is_valid_move(sq("e3"), sq("f3"), Red));
        assert!(!game.is_valid_move(sq("e3"), sq("e2"), Red));
        assert!(!game.is_valid_move(sq("e3"), sq("d4"), Red));
    }

    #[test]
    fn soldier_after_river_gains_sideways() {
        let mut game = Game::empty(Red);
        game.place(PieceKind::Soldier, Red, sq("e5"));

        assert!(game.is_valid_move(sq("e5"), sq("e6"), Red));
        assert!(game.is_valid_move(sq("e5"), sq("d5"), Red));
        assert!(game.is_valid_move(sq("e5"), sq("f5"), Red));
        // Still never backward.
        assert!(!game.is_valid_move(sq("e5"), sq("e4"), Red));
    }

    #[test]
    fn black_soldier_moves_down() {
        let mut game = Game::empty(Black);
        game.place(PieceKind::Soldier, Black, sq("e6"));
        assert!(game.is_valid_move(sq("e6"), sq("e5"), Black));
        assert!(!game.is_valid_move(sq("e6"), sq("e7"), Black));
        assert!(!game.is_valid_move(sq("e6"), sq("d6"), Black));

        game.place(PieceKind::Soldier, Black, sq("e4"));
        assert!(game.is_valid_move(sq("e4"), sq("d4"), Black));
        assert!(game.is_valid_move(sq("e4"), sq("e3"), Black));
    }

    #[test]
    fn moves_that_expose_own_general_are_still_legal() {
        let mut game = Game::empty(Red);
        game.place(PieceKind::General, Red, sq("e0"));
        game.place(PieceKind::Chariot, Red, sq("e4"));
        game.place(PieceKind::Chariot, Black, sq("e8"));

        // Moving the shielding chariot aside leaves e0 en prise; this
        // ruleset allows it.
        assert!(game.is_valid_move(sq("e4"), sq("a4"), Red));
        assert!(game.make_move(sq("e4"), sq("a4")));
        assert!(game.is_valid_move(sq("e8"), sq("e0"), Black));
    }
}
