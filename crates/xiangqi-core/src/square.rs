//! Board square representation.
//!
//! The xiangqi board is a 9-file by 10-rank grid of intersections. Squares
//! are written in file-rank notation: files `a`-`i` left to right from Red's
//! side, ranks `0`-`9` from Red's back rank upward (e.g. "e0" is the Red
//! general's starting square).

use crate::Color;
use std::fmt;

/// A file (column) on the xiangqi board, from A to I.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
    I = 8,
}

impl File {
    /// All files in order.
    pub const ALL: [File; 9] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
        File::I,
    ];

    /// Creates a file from index (0-8).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(File::A),
            1 => Some(File::B),
            2 => Some(File::C),
            3 => Some(File::D),
            4 => Some(File::E),
            5 => Some(File::F),
            6 => Some(File::G),
            7 => Some(File::H),
            8 => Some(File::I),
            _ => None,
        }
    }

    /// Creates a file from a character ('a'-'i' or 'A'-'I').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_lowercase() {
            'a' => Some(File::A),
            'b' => Some(File::B),
            'c' => Some(File::C),
            'd' => Some(File::D),
            'e' => Some(File::E),
            'f' => Some(File::F),
            'g' => Some(File::G),
            'h' => Some(File::H),
            'i' => Some(File::I),
            _ => None,
        }
    }

    /// Returns the index (0-8).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'a' + self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A rank (row) on the xiangqi board, from 0 (Red's back rank) to 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Rank {
    R0 = 0,
    R1 = 1,
    R2 = 2,
    R3 = 3,
    R4 = 4,
    R5 = 5,
    R6 = 6,
    R7 = 7,
    R8 = 8,
    R9 = 9,
}

impl Rank {
    /// All ranks in order.
    pub const ALL: [Rank; 10] = [
        Rank::R0,
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
        Rank::R9,
    ];

    /// Creates a rank from index (0-9).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Rank::R0),
            1 => Some(Rank::R1),
            2 => Some(Rank::R2),
            3 => Some(Rank::R3),
            4 => Some(Rank::R4),
            5 => Some(Rank::R5),
            6 => Some(Rank::R6),
            7 => Some(Rank::R7),
            8 => Some(Rank::R8),
            9 => Some(Rank::R9),
            _ => None,
        }
    }

    /// Creates a rank from a character ('0'-'9').
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Self::from_index(c as u8 - b'0'),
            _ => None,
        }
    }

    /// Returns the index (0-9).
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the character representation.
    #[inline]
    pub const fn to_char(self) -> char {
        (b'0' + self as u8) as char
    }

    /// Returns true if this rank is on `color`'s home side of the river.
    ///
    /// The river lies between ranks 4 and 5: Red's side is ranks 0-4,
    /// Black's side is ranks 5-9.
    #[inline]
    pub const fn is_home_side(self, color: Color) -> bool {
        match color {
            Color::Red => (self as u8) <= 4,
            Color::Black => (self as u8) >= 5,
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A square on the xiangqi board, indexed 0-89.
///
/// Squares are indexed in rank-file order: a0 = 0, b0 = 1, ..., i0 = 8,
/// a1 = 9, ..., i9 = 89.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// The number of squares on the board.
    pub const COUNT: u8 = 90;

    /// Creates a square from file and rank.
    #[inline]
    pub const fn new(file: File, rank: Rank) -> Self {
        Square(rank.index() * 9 + file.index())
    }

    /// Creates a square from index (0-89).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < Self::COUNT {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, returning `None` when
    /// either coordinate falls outside the board.
    #[inline]
    pub const fn from_coords(x: i8, y: i8) -> Option<Self> {
        if x >= 0 && x < 9 && y >= 0 && y < 10 {
            Some(Square(y as u8 * 9 + x as u8))
        } else {
            None
        }
    }

    /// Parses a square from file-rank notation (e.g. "e0").
    pub const fn from_notation(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let file = match File::from_char(bytes[0] as char) {
            Some(f) => f,
            None => return None,
        };
        let rank = match Rank::from_char(bytes[1] as char) {
            Some(r) => r,
            None => return None,
        };
        Some(Square::new(file, rank))
    }

    /// Returns the index (0-89).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the file of this square.
    #[inline]
    pub const fn file(self) -> File {
        match File::from_index(self.0 % 9) {
            Some(f) => f,
            None => unreachable!(),
        }
    }

    /// Returns the rank of this square.
    #[inline]
    pub const fn rank(self) -> Rank {
        match Rank::from_index(self.0 / 9) {
            Some(r) => r,
            None => unreachable!(),
        }
    }

    /// Returns the file index as a signed coordinate.
    #[inline]
    pub const fn x(self) -> i8 {
        (self.0 % 9) as i8
    }

    /// Returns the rank index as a signed coordinate.
    #[inline]
    pub const fn y(self) -> i8 {
        (self.0 / 9) as i8
    }

    /// Returns the square offset by `(dx, dy)`, or `None` off the board.
    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        Self::from_coords(self.x() + dx, self.y() + dy)
    }

    /// Returns true if this square lies inside `color`'s palace.
    ///
    /// The palace is the 3x3 region spanning files d-f (x 3-5),
    /// ranks 0-2 for Red and ranks 7-9 for Black.
    #[inline]
    pub const fn in_palace(self, color: Color) -> bool {
        let x = self.0 % 9;
        let y = self.0 / 9;
        let file_ok = x >= 3 && x <= 5;
        match color {
            Color::Red => file_ok && y <= 2,
            Color::Black => file_ok && y >= 7,
        }
    }

    /// Returns true if this square is on `color`'s home side of the river.
    #[inline]
    pub const fn is_home_side(self, color: Color) -> bool {
        self.rank().is_home_side(color)
    }

    /// Iterates over all 90 squares in index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT).map(Square)
    }

    /// Returns the file-rank notation for this square.
    pub fn to_notation(self) -> String {
        format!("{}{}", self.file(), self.rank())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_notation())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}
