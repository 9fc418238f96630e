//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - Which destinations a piece may reach
//! - How a move changes the state
//! - When the game is over

use crate::core::{GameState, Move, MoveList, MoveResult, Outcome, RulesConfig, Side, Square};
use crate::core::error::Result;

/// Rules engine trait.
///
/// The engine holds configuration only; all game data lives in the
/// `GameState` passed to each call.
///
/// ## Implementation Notes
///
/// - `legal_moves`: Return empty if the piece can't move right now
/// - `apply_move`: Must be deterministic and all-or-nothing
/// - `outcome`: `InProgress` if the game continues
pub trait RulesEngine {
    /// Get the rules configuration.
    fn config(&self) -> &RulesConfig;

    /// Build the starting state described by the configuration.
    fn initial_state(&self) -> Result<GameState>;

    /// Legal destinations for the piece on `from`.
    ///
    /// Empty when the square is empty, the piece is not allowed to move,
    /// or the game is over. Has no side effects.
    fn legal_moves(&self, state: &GameState, from: Square) -> MoveList;

    /// Move the piece on `from` to `to` and resolve the consequences.
    ///
    /// On error `state` is left exactly as it was.
    fn apply_move(&self, state: &mut GameState, from: Square, to: Square) -> Result<MoveResult>;

    /// Current game outcome.
    fn outcome(&self, state: &GameState) -> Outcome {
        state.outcome
    }

    // === Convenience Methods ===

    /// Enumerate every legal move for `side`.
    ///
    /// Pieces are visited in row-major order, destinations in scan order.
    fn legal_moves_for(&self, state: &GameState, side: Side) -> Vec<Move> {
        state
            .board
            .pieces()
            .filter(|(_, kind)| kind.side() == side)
            .flat_map(|(from, _)| {
                self.legal_moves(state, from)
                    .into_iter()
                    .map(move |to| Move::new(from, to))
            })
            .collect()
    }
}
