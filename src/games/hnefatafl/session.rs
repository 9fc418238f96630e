//! A single game session: one engine, one state.

use crate::core::{
    Board, GameState, IllegalMoveReason, MoveList, MoveResult, Outcome, Result, RulesConfig,
    RulesError, Square,
};
use crate::rules::RulesEngine;

use super::engine::Hnefatafl;
use super::selection::Selection;

/// One game of Hnefatafl.
///
/// Owns the engine and the only copy of the game state. This is the
/// surface a presentation layer talks to: select a piece, get its
/// destinations, play a move, read back captures and the outcome.
///
/// ## Example
///
/// ```
/// use tafl_engine::core::{Outcome, RulesConfig, Square};
/// use tafl_engine::games::hnefatafl::Game;
///
/// let mut game = Game::new(RulesConfig::default()).unwrap();
/// let selection = game.select(Square::new(0, 3).unwrap()).unwrap();
/// let to = selection.destinations()[0];
///
/// let result = game.play(&selection, to).unwrap();
/// assert_eq!(result.outcome, Outcome::InProgress);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    rules: Hnefatafl,
    initial: GameState,
    state: GameState,
}

impl Game {
    /// Start a game. Fails if the configured layout is invalid.
    pub fn new(config: RulesConfig) -> Result<Self> {
        let rules = Hnefatafl::new(config);
        let initial = rules.initial_state()?;
        Ok(Self {
            rules,
            state: initial.clone(),
            initial,
        })
    }

    /// Start from an arbitrary state, e.g. a position built for analysis.
    ///
    /// `reset` returns to this state.
    #[must_use]
    pub fn from_state(rules: Hnefatafl, state: GameState) -> Self {
        Self {
            rules,
            initial: state.clone(),
            state,
        }
    }

    #[must_use]
    pub fn rules(&self) -> &Hnefatafl {
        &self.rules
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.state.board
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.rules.outcome(&self.state)
    }

    /// Legal destinations for the piece on `from`.
    #[must_use]
    pub fn legal_moves(&self, from: Square) -> MoveList {
        self.rules.legal_moves(&self.state, from)
    }

    /// Pick up the piece on `square`.
    ///
    /// Fails if the game is over, the square is empty, or the piece's side
    /// is not allowed to move. A piece with no moves is still selectable.
    pub fn select(&self, square: Square) -> Result<Selection> {
        if self.state.is_terminal() {
            return Err(RulesError::unselectable(square, IllegalMoveReason::GameOver));
        }
        let piece = self
            .state
            .board
            .piece_at(square)
            .ok_or_else(|| RulesError::unselectable(square, IllegalMoveReason::EmptyOrigin))?;
        if !self.rules.may_move(&self.state, piece) {
            return Err(RulesError::unselectable(square, IllegalMoveReason::WrongSide));
        }
        Ok(Selection::new(square, piece, self.legal_moves(square)))
    }

    /// Move the piece on `from` to `to`.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveResult> {
        self.rules.apply_move(&mut self.state, from, to)
    }

    /// Move the selected piece to `to`.
    ///
    /// The move is checked against the current board, so a stale
    /// selection cannot produce an illegal move.
    pub fn play(&mut self, selection: &Selection, to: Square) -> Result<MoveResult> {
        self.apply_move(selection.origin(), to)
    }

    /// Discard the current game and return to the starting position.
    pub fn reset(&mut self) -> &GameState {
        self.state = self.initial.clone();
        &self.state
    }
}
