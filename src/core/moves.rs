//! Move representation and move results.
//!
//! A `Move` is an origin and a destination. Applying one yields a
//! `MoveResult`: the updated board, every piece removed as a consequence,
//! and the game outcome after the move.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Board;
use super::piece::{PieceKind, Side};
use super::square::Square;
use super::state::Outcome;

/// Destinations for one piece.
///
/// A slider on an 11x11 board reaches at most 20 squares, so this never
/// spills to the heap.
pub type MoveList = SmallVec<[Square; 20]>;

/// A piece relocation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[must_use]
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Why a piece was removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureCause {
    /// Sandwiched against a friendly piece, a corner, or the throne.
    Custodian,
    /// Found standing on a corner or the throne after the move.
    HostileSquare,
}

/// A piece removed by a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    pub square: Square,
    pub piece: PieceKind,
    pub cause: CaptureCause,
}

/// Outcome of a successful `apply_move`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Board after the move and all removals.
    pub board: Board,

    /// Removed pieces in evaluation order: custodian captures by direction
    /// (down, up, right, left), then hostile-square removals.
    pub captures: SmallVec<[Capture; 4]>,

    /// Game outcome after the move.
    pub outcome: Outcome,
}

impl MoveResult {
    /// Squares emptied by this move's captures.
    pub fn captured_squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.captures.iter().map(|c| c.square)
    }

    /// True if the king was among the captured pieces.
    #[must_use]
    pub fn king_captured(&self) -> bool {
        self.captures.iter().any(|c| c.piece.is_king())
    }
}

/// A committed move with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Side of the piece that moved.
    pub side: Side,

    /// The move played.
    pub mv: Move,

    /// Pieces removed as a result.
    pub captures: SmallVec<[Capture; 4]>,

    /// 1-based move number.
    pub number: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_move_display() {
        let mv = Move::new(sq(0, 3), sq(2, 3));
        assert_eq!(mv.to_string(), "(0, 3) -> (2, 3)");
    }

    #[test]
    fn test_captured_squares() {
        let result = MoveResult {
            board: Board::empty(),
            captures: SmallVec::from_slice(&[
                Capture {
                    square: sq(4, 4),
                    piece: PieceKind::Defender,
                    cause: CaptureCause::Custodian,
                },
                Capture {
                    square: sq(0, 0),
                    piece: PieceKind::Attacker,
                    cause: CaptureCause::HostileSquare,
                },
            ]),
            outcome: Outcome::InProgress,
        };

        let squares: Vec<_> = result.captured_squares().collect();
        assert_eq!(squares, vec![sq(4, 4), sq(0, 0)]);
        assert!(!result.king_captured());
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord {
            side: Side::Attackers,
            mv: Move::new(sq(0, 3), sq(2, 3)),
            captures: SmallVec::new(),
            number: 1,
        };
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
