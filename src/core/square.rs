//! Board coordinates and static square classification.
//!
//! ## Square
//!
//! A bounds-checked `(row, col)` address on the 11x11 board. Row 0 is the
//! top edge, column 0 the left edge.
//!
//! ## SquareKind
//!
//! Every square is a `Corner`, the `Throne`, or `Normal`. The kind is a pure
//! function of the coordinates and never changes during a game.

use serde::{Deserialize, Serialize};

use super::error::{Result, RulesError};

/// Width and height of the board.
pub const BOARD_SIZE: usize = 11;

/// The four corner squares.
pub const CORNERS: [Square; 4] = [
    Square::at(0, 0),
    Square::at(0, 10),
    Square::at(10, 0),
    Square::at(10, 10),
];

/// The center square.
pub const THRONE: Square = Square::at(5, 5);

/// Static classification of a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SquareKind {
    /// One of the four board-extreme squares.
    Corner,
    /// The center square.
    Throne,
    /// Any other square.
    Normal,
}

impl SquareKind {
    /// Corners and the throne act as a permanent hostile custodian.
    #[must_use]
    pub const fn is_hostile(self) -> bool {
        matches!(self, SquareKind::Corner | SquareKind::Throne)
    }
}

/// An in-bounds board address.
///
/// Construct with `Square::new` from untrusted coordinates; out-of-range
/// values are rejected with `RulesError::OutOfBounds`.
///
/// ```
/// use tafl_engine::core::{Square, SquareKind};
///
/// let sq = Square::new(5, 5).unwrap();
/// assert_eq!(sq.kind(), SquareKind::Throne);
/// assert!(Square::new(11, 0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Create a square, checking bounds.
    pub fn new(row: usize, col: usize) -> Result<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self::at(row as u8, col as u8))
        } else {
            Err(RulesError::OutOfBounds { row, col })
        }
    }

    // Callers guarantee the coordinates are in range.
    pub(crate) const fn at(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row index (0 = top).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    /// Column index (0 = left).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Step by `(dr, dc)`, returning `None` when the result leaves the board.
    #[must_use]
    pub fn offset(self, dr: i32, dc: i32) -> Option<Square> {
        let row = self.row as i32 + dr;
        let col = self.col as i32 + dc;
        let size = BOARD_SIZE as i32;
        if (0..size).contains(&row) && (0..size).contains(&col) {
            Some(Self::at(row as u8, col as u8))
        } else {
            None
        }
    }

    /// One step in `dir`.
    #[must_use]
    pub fn step(self, dir: Direction) -> Option<Square> {
        let (dr, dc) = dir.delta();
        self.offset(dr, dc)
    }

    /// Classify this square.
    #[must_use]
    pub fn kind(self) -> SquareKind {
        if self.is_corner() {
            SquareKind::Corner
        } else if self.is_throne() {
            SquareKind::Throne
        } else {
            SquareKind::Normal
        }
    }

    #[must_use]
    pub fn is_corner(self) -> bool {
        let edge = (BOARD_SIZE - 1) as u8;
        (self.row == 0 || self.row == edge) && (self.col == 0 || self.col == edge)
    }

    #[must_use]
    pub fn is_throne(self) -> bool {
        self == THRONE
    }

    /// Iterate over every square in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square::at(row, col)))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Down,
    Up,
    Right,
    Left,
}

impl Direction {
    /// All directions in scan order: down, up, right, left.
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Right,
        Direction::Left,
    ];

    /// `(row, col)` delta for one step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(10, 10).is_ok());
        assert_eq!(
            Square::new(11, 3),
            Err(RulesError::OutOfBounds { row: 11, col: 3 })
        );
        assert!(Square::new(3, 11).is_err());
    }

    #[test]
    fn test_square_kind() {
        for corner in CORNERS {
            assert_eq!(corner.kind(), SquareKind::Corner);
        }
        assert_eq!(THRONE.kind(), SquareKind::Throne);
        assert_eq!(Square::at(0, 5).kind(), SquareKind::Normal);
        assert_eq!(Square::at(5, 4).kind(), SquareKind::Normal);

        let corners = Square::all().filter(|s| s.is_corner()).count();
        let thrones = Square::all().filter(|s| s.is_throne()).count();
        assert_eq!(corners, 4);
        assert_eq!(thrones, 1);
    }

    #[test]
    fn test_offset() {
        let sq = Square::at(0, 0);
        assert_eq!(sq.offset(-1, 0), None);
        assert_eq!(sq.offset(0, -1), None);
        assert_eq!(sq.offset(2, 3), Some(Square::at(2, 3)));
        assert_eq!(Square::at(10, 10).step(Direction::Down), None);
        assert_eq!(Square::at(4, 4).step(Direction::Left), Some(Square::at(4, 3)));
    }

    #[test]
    fn test_direction_order() {
        assert_eq!(
            Direction::ALL.map(Direction::delta),
            [(1, 0), (-1, 0), (0, 1), (0, -1)]
        );
    }

    #[test]
    fn test_all_squares() {
        let squares: Vec<_> = Square::all().collect();
        assert_eq!(squares.len(), BOARD_SIZE * BOARD_SIZE);
        assert_eq!(squares[0], Square::at(0, 0));
        assert_eq!(squares[12], Square::at(1, 1));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Square::at(3, 7)), "(3, 7)");
    }
}
