//! Player color representation.

/// Represents the two players in xiangqi.
///
/// Red sits at ranks 0-4 and moves first; Black sits at ranks 5-9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Black = 1,
}

impl Color {
    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }

    /// Returns the index (0 for Red, 1 for Black).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the soldier direction for this color (+1 for Red, -1 for Black).
    #[inline]
    pub const fn soldier_direction(self) -> i8 {
        match self {
            Color::Red => 1,
            Color::Black => -1,
        }
    }

    /// Returns the back rank for this color (0 for Red, 9 for Black).
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::Red => 0,
            Color::Black => 9,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "Red"),
            Color::Black => write!(f, "Black"),
        }
    }
}
