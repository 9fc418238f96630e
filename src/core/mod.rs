//! Core engine types: squares, pieces, board, state, moves, configuration.
//!
//! This module holds the board model and plain value types. Rule logic
//! lives in `rules`.

pub mod square;
pub mod piece;
pub mod board;
pub mod error;
pub mod config;
pub mod moves;
pub mod state;

pub use square::{Direction, Square, SquareKind, BOARD_SIZE, CORNERS, THRONE};
pub use piece::{PieceKind, Side};
pub use board::{Board, STANDARD_LAYOUT};
pub use error::{IllegalMoveReason, Result, RulesError};
pub use config::{RulesConfig, TurnOrder};
pub use moves::{Capture, CaptureCause, Move, MoveList, MoveRecord, MoveResult};
pub use state::{GameState, Outcome};
