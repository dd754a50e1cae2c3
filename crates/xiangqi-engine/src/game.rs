//! Game state with history tracking.
//!
//! [`Game`] owns the board, the side to move, and the move history. It is
//! mutated in place for the lifetime of one game: [`Game::make_move`] is the
//! only forward state transition and [`Game::undo_last_move`] its exact
//! inverse, which is what lets the search explore the tree on a single
//! shared instance instead of copying boards per node.

use std::fmt;
use xiangqi_core::{Color, MoveRecord, Piece, PieceKind, Square};

/// Result of a finished game.
///
/// The game ends when a general leaves the board; the winner is the side
/// whose general remains. There are no draws: no checkmate, stalemate, or
/// repetition detection exists in this ruleset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    RedWins,
    BlackWins,
}

impl GameResult {
    /// Returns the winning color.
    #[inline]
    pub const fn winner(self) -> Color {
        match self {
            GameResult::RedWins => Color::Red,
            GameResult::BlackWins => Color::Black,
        }
    }
}

/// Back-rank piece order, mirrored for both sides.
const BACK_RANK: [PieceKind; 9] = [
    PieceKind::Chariot,
    PieceKind::Horse,
    PieceKind::Elephant,
    PieceKind::Advisor,
    PieceKind::General,
    PieceKind::Advisor,
    PieceKind::Elephant,
    PieceKind::Horse,
    PieceKind::Chariot,
];

/// A xiangqi game: board, side to move, and move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: [Option<Piece>; 90],
    side_to_move: Color,
    history: Vec<MoveRecord>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the canonical starting layout, Red to move.
    pub fn new() -> Self {
        let mut game = Self::empty(Color::Red);

        for color in [Color::Red, Color::Black] {
            let back = color.back_rank() as i8;
            let dir = color.soldier_direction();

            for (x, kind) in BACK_RANK.iter().enumerate() {
                game.place_at(*kind, color, x as i8, back);
            }
            for x in [1, 7] {
                game.place_at(PieceKind::Cannon, color, x, back + 2 * dir);
            }
            for x in (0..9).step_by(2) {
                game.place_at(PieceKind::Soldier, color, x, back + 3 * dir);
            }
        }

        game
    }

    /// Creates a game with an empty board and `side_to_move` to move.
    ///
    /// Useful together with [`Game::place`] for setting up positions in
    /// tests and analysis.
    pub fn empty(side_to_move: Color) -> Self {
        Game {
            board: [None; 90],
            side_to_move,
            history: Vec::new(),
        }
    }

    /// Puts a piece on the board, replacing whatever held the square.
    pub fn place(&mut self, kind: PieceKind, color: Color, square: Square) {
        self.board[square.index() as usize] = Some(Piece::new(kind, color, square));
    }

    fn place_at(&mut self, kind: PieceKind, color: Color, x: i8, y: i8) {
        // Start-layout coordinates are fixed constants, always on the board.
        if let Some(square) = Square::from_coords(x, y) {
            self.place(kind, color, square);
        }
    }

    /// Removes and returns the piece on `square`, if any.
    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        self.board[square.index() as usize].take()
    }

    /// Returns the piece on `square`, if any.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.index() as usize]
    }

    /// Returns the piece at signed coordinates, or `None` when the
    /// coordinates are off the board. Never panics.
    #[inline]
    pub fn piece_at_coords(&self, x: i8, y: i8) -> Option<Piece> {
        Square::from_coords(x, y).and_then(|sq| self.piece_at(sq))
    }

    /// Iterates over every piece on the board in square-index order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.board.iter().flatten().copied()
    }

    /// Returns the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Forces the side to move.
    ///
    /// The search uses this to align the engine with the side it is asked
    /// to pick a move for, restoring the original value on exit.
    #[inline]
    pub fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Returns the number of half-moves (plies) played.
    pub fn ply_count(&self) -> usize {
        self.history.len()
    }

    /// Attempts to move the side to move's piece from `from` to `to`.
    ///
    /// The move is validated first; on any validation failure this returns
    /// `false` and leaves the board, the turn, and the history untouched.
    /// On success the move is applied, recorded with pre-move snapshots,
    /// and the turn passes to the opponent.
    pub fn make_move(&mut self, from: Square, to: Square) -> bool {
        if !self.is_valid_move(from, to, self.side_to_move) {
            return false;
        }

        // is_valid_move guarantees a piece of the mover's color on `from`.
        let piece = match self.piece_at(from) {
            Some(p) => p,
            None => return false,
        };
        let captured = self.piece_at(to);

        self.board[to.index() as usize] = Some(piece.at(to));
        self.board[from.index() as usize] = None;
        self.history.push(MoveRecord::new(from, to, piece, captured));
        self.side_to_move = self.side_to_move.opposite();

        true
    }

    /// Undoes the most recent move; no-op when the history is empty.
    ///
    /// Restores bit-for-bit identical board contents to the pre-move state:
    /// the mover returns to `from` and the captured piece (if any) returns
    /// to `to`, both from their history snapshots.
    pub fn undo_last_move(&mut self) {
        let record = match self.history.pop() {
            Some(r) => r,
            None => return,
        };

        self.board[record.from.index() as usize] = Some(record.piece.at(record.from));
        self.board[record.to.index() as usize] = record.captured.map(|p| p.at(record.to));
        self.side_to_move = self.side_to_move.opposite();
    }

    /// Returns the game result, or `None` while both generals stand.
    ///
    /// This is the sole termination condition: a full-board scan for the
    /// generals. A side may legally leave its own general en prise.
    pub fn result(&self) -> Option<GameResult> {
        let mut red_general = false;
        let mut black_general = false;

        for piece in self.pieces() {
            if piece.kind == PieceKind::General {
                match piece.color {
                    Color::Red => red_general = true,
                    Color::Black => black_general = true,
                }
            }
        }

        if !red_general {
            Some(GameResult::BlackWins)
        } else if !black_general {
            Some(GameResult::RedWins)
        } else {
            None
        }
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.result().is_some()
    }
}

impl fmt::Display for Game {
    /// Renders the board as text, Black's back rank on top, with the river
    /// drawn between ranks 5 and 4.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in (0..10i8).rev() {
            write!(f, "{} ", y)?;
            for x in 0..9i8 {
                let c = self
                    .piece_at_coords(x, y)
                    .map_or('.', |p| p.to_char());
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
            if y == 5 {
                writeln!(f, "   ~~~~~~~~~~~~~~~~~")?;
            }
        }
        write!(f, "   a b c d e f g h i")
    }
}
