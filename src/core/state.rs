//! Game state: board, side to move, outcome, and move history.
//!
//! `GameState` is the only mutable thing in a game. It is owned by the
//! caller and changed only through `RulesEngine::apply_move`, which builds
//! the next state on a copy and commits it whole.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::moves::MoveRecord;
use super::piece::Side;

/// Game outcome state machine.
///
/// `InProgress` moves to exactly one terminal state and never leaves it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    /// The king was captured.
    AttackersWin,
    /// The king reached a corner.
    DefendersWin,
}

impl Outcome {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning side, if the game is over.
    #[must_use]
    pub const fn winner(self) -> Option<Side> {
        match self {
            Outcome::InProgress => None,
            Outcome::AttackersWin => Some(Side::Attackers),
            Outcome::DefendersWin => Some(Side::Defenders),
        }
    }
}

/// Complete game state.
///
/// Uses `im::Vector` for the history so cloning a state is cheap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current position.
    pub board: Board,

    /// Side expected to move next.
    pub to_move: Side,

    /// Current outcome.
    pub outcome: Outcome,

    /// Committed moves, oldest first. In-memory only.
    pub history: Vector<MoveRecord>,
}

impl GameState {
    /// Create a state at the start of a game.
    #[must_use]
    pub fn new(board: Board, first_side: Side) -> Self {
        Self {
            board,
            to_move: first_side,
            outcome: Outcome::InProgress,
            history: Vector::new(),
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Number of moves played so far.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.history.len() as u32
    }

    /// The most recent move, if any.
    #[must_use]
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last()
    }

    /// Record a committed move and hand the turn to the other side.
    pub(crate) fn commit(&mut self, record: MoveRecord) {
        self.to_move = record.side.opponent();
        self.history.push_back(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::STANDARD_LAYOUT;
    use crate::core::moves::Move;
    use crate::core::square::Square;
    use smallvec::SmallVec;

    #[test]
    fn test_outcome() {
        assert!(!Outcome::InProgress.is_terminal());
        assert!(Outcome::AttackersWin.is_terminal());
        assert!(Outcome::DefendersWin.is_terminal());

        assert_eq!(Outcome::InProgress.winner(), None);
        assert_eq!(Outcome::AttackersWin.winner(), Some(Side::Attackers));
        assert_eq!(Outcome::DefendersWin.winner(), Some(Side::Defenders));
    }

    #[test]
    fn test_new_state() {
        let board = Board::from_layout(STANDARD_LAYOUT).unwrap();
        let state = GameState::new(board, Side::Attackers);

        assert_eq!(state.to_move, Side::Attackers);
        assert_eq!(state.outcome, Outcome::InProgress);
        assert_eq!(state.move_count(), 0);
        assert!(state.last_move().is_none());
    }

    #[test]
    fn test_commit() {
        let mut state = GameState::new(Board::empty(), Side::Attackers);
        let mv = Move::new(Square::new(0, 3).unwrap(), Square::new(1, 3).unwrap());

        state.commit(MoveRecord {
            side: Side::Attackers,
            mv,
            captures: SmallVec::new(),
            number: 1,
        });

        assert_eq!(state.to_move, Side::Defenders);
        assert_eq!(state.move_count(), 1);
        assert_eq!(state.last_move().map(|r| r.mv), Some(mv));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = GameState::new(Board::empty(), Side::Attackers);
        let snapshot = state.clone();

        state.outcome = Outcome::DefendersWin;

        assert_eq!(snapshot.outcome, Outcome::InProgress);
    }

    #[test]
    fn test_state_serialization() {
        let board = Board::from_layout(STANDARD_LAYOUT).unwrap();
        let state = GameState::new(board, Side::Defenders);
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
