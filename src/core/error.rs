//! Error types for board access and rule enforcement.
//!
//! `OutOfBounds`, `IllegalMove` and `IllegalSelection` are recoverable: the
//! engine rejects the call and leaves state untouched. `InvariantViolation`
//! means the board reached a shape the engine never produces on its own;
//! treat the current game as corrupt.

use thiserror::Error;

use super::square::Square;

/// Why a move was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// No piece on the origin square.
    EmptyOrigin,
    /// The destination is not among the origin's legal moves.
    Unreachable,
    /// The piece belongs to the side not on move.
    WrongSide,
    /// The game has already ended.
    GameOver,
}

impl std::fmt::Display for IllegalMoveReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            IllegalMoveReason::EmptyOrigin => "origin square is empty",
            IllegalMoveReason::Unreachable => "destination is not reachable",
            IllegalMoveReason::WrongSide => "piece does not belong to the side on move",
            IllegalMoveReason::GameOver => "game is already over",
        };
        f.write_str(text)
    }
}

/// Rules engine error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("coordinate ({row}, {col}) is off the board")]
    OutOfBounds { row: usize, col: usize },

    #[error("illegal move {from} -> {to}: {reason}")]
    IllegalMove {
        from: Square,
        to: Square,
        reason: IllegalMoveReason,
    },

    #[error("cannot select {square}: {reason}")]
    IllegalSelection {
        square: Square,
        reason: IllegalMoveReason,
    },

    #[error("board invariant violated: {0}")]
    InvariantViolation(&'static str),

    #[error("invalid layout: {0}")]
    InvalidLayout(String),
}

impl RulesError {
    pub(crate) fn illegal(from: Square, to: Square, reason: IllegalMoveReason) -> Self {
        RulesError::IllegalMove { from, to, reason }
    }

    pub(crate) fn unselectable(square: Square, reason: IllegalMoveReason) -> Self {
        RulesError::IllegalSelection { square, reason }
    }

    /// The rejection reason, if this is an `IllegalMove` or `IllegalSelection`.
    #[must_use]
    pub fn illegal_reason(&self) -> Option<IllegalMoveReason> {
        match self {
            RulesError::IllegalMove { reason, .. }
            | RulesError::IllegalSelection { reason, .. } => Some(*reason),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RulesError>;
