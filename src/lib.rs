//! # tafl-engine
//!
//! Rules engine for 11x11 Hnefatafl.
//!
//! ## Design Principles
//!
//! 1. **Stateless Rules**: The engine holds configuration only. All game
//!    data lives in a `GameState` passed to each call.
//!
//! 2. **All-or-Nothing Moves**: `apply_move` validates first and builds the
//!    next position on a copy. A rejected move leaves the state untouched.
//!
//! 3. **Configuration Over Convention**: Starting layout and turn order
//!    come from `RulesConfig`.
//!
//! ## Architecture
//!
//! - **Value Board**: The board is a 121-byte `Copy` value; history uses
//!   `im` persistent vectors so cloning a state is O(1).
//!
//! - **Presentation Boundary**: Move lists, capture lists, and the outcome
//!   come back synchronously. Animation and rendering are the caller's
//!   business.
//!
//! ## Modules
//!
//! - `core`: Squares, pieces, board, state, moves, configuration, errors
//! - `rules`: `RulesEngine` trait, move generation, capture, win conditions
//! - `games`: Concrete games (`hnefatafl`)

pub mod core;
pub mod rules;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Board, Capture, CaptureCause, Direction, GameState, IllegalMoveReason, Move, MoveList,
    MoveRecord, MoveResult, Outcome, PieceKind, Result, RulesConfig, RulesError, Side, Square,
    SquareKind, TurnOrder, BOARD_SIZE, CORNERS, STANDARD_LAYOUT, THRONE,
};

pub use crate::rules::RulesEngine;

pub use crate::games::hnefatafl::{Game, Hnefatafl, Selection};
