//! Hnefatafl rules engine.

use crate::core::{
    Board, GameState, IllegalMoveReason, Move, MoveList, MoveRecord, MoveResult, PieceKind, Result,
    RulesConfig, RulesError, Square, TurnOrder,
};
use crate::rules::capture::{self, CaptureList};
use crate::rules::{movegen, outcome, RulesEngine};

/// 11x11 Hnefatafl with corner escape and an armed, weak king.
///
/// ## Move sequence
///
/// 1. Validate: game not over, origin occupied, side allowed to move,
///    destination in the legal set.
/// 2. Relocate the piece.
/// 3. If the king now stands on a corner the defenders win and nothing
///    else is evaluated.
/// 4. Otherwise run the custodian scan and the hostile-square cleanup,
///    then check whether the king was captured.
#[derive(Clone, Debug, Default)]
pub struct Hnefatafl {
    config: RulesConfig,
}

impl Hnefatafl {
    /// Create an engine with the given configuration.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        Self { config }
    }

    /// True if a piece of `kind` may move in `state` under the turn order.
    #[must_use]
    pub fn may_move(&self, state: &GameState, kind: PieceKind) -> bool {
        match self.config.turn_order {
            TurnOrder::Alternating => kind.side() == state.to_move,
            TurnOrder::Free => true,
        }
    }

    /// Check a move without applying it, returning the moving piece.
    pub fn validate(&self, state: &GameState, from: Square, to: Square) -> Result<PieceKind> {
        if state.is_terminal() {
            return Err(RulesError::illegal(from, to, IllegalMoveReason::GameOver));
        }
        let kind = state
            .board
            .piece_at(from)
            .ok_or_else(|| RulesError::illegal(from, to, IllegalMoveReason::EmptyOrigin))?;
        if !self.may_move(state, kind) {
            return Err(RulesError::illegal(from, to, IllegalMoveReason::WrongSide));
        }
        if !movegen::destinations(&state.board, from, kind).contains(&to) {
            return Err(RulesError::illegal(from, to, IllegalMoveReason::Unreachable));
        }
        Ok(kind)
    }

    /// Board and removals after moving `kind` from `from` to `to`.
    fn resolve(
        board: &mut Board,
        kind: PieceKind,
        from: Square,
        to: Square,
    ) -> Result<CaptureList> {
        board.move_piece(from, to)?;
        if outcome::king_escaped(board) {
            return Ok(CaptureList::new());
        }
        Ok(capture::resolve_captures(board, kind, from, to))
    }
}

impl RulesEngine for Hnefatafl {
    fn config(&self) -> &RulesConfig {
        &self.config
    }

    fn initial_state(&self) -> Result<GameState> {
        let board = self.config.starting_board()?;
        Ok(GameState::new(board, self.config.first_side))
    }

    fn legal_moves(&self, state: &GameState, from: Square) -> MoveList {
        if state.is_terminal() {
            return MoveList::new();
        }
        match state.board.piece_at(from) {
            Some(kind) if self.may_move(state, kind) => {
                movegen::destinations(&state.board, from, kind)
            }
            _ => MoveList::new(),
        }
    }

    fn apply_move(&self, state: &mut GameState, from: Square, to: Square) -> Result<MoveResult> {
        let kind = self.validate(state, from, to)?;

        let mut board = state.board;
        let captures = Self::resolve(&mut board, kind, from, to)?;
        board.check_kings()?;
        let outcome = outcome::evaluate(&board, &captures);

        // Commit
        let number = state.move_count() + 1;
        state.board = board;
        state.outcome = outcome;
        state.commit(MoveRecord {
            side: kind.side(),
            mv: Move::new(from, to),
            captures: captures.clone(),
            number,
        });

        Ok(MoveResult {
            board,
            captures,
            outcome,
        })
    }
}
