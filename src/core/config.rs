//! Rules configuration.
//!
//! Games are configured at startup with a `RulesConfig`:
//! - `layout`: starting position in the board layout format
//! - `turn_order`: whether side-to-move is enforced
//! - `first_side`: which side opens

use serde::{Deserialize, Serialize};

use super::board::{Board, STANDARD_LAYOUT};
use super::error::Result;
use super::piece::Side;

/// Turn-taking policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOrder {
    /// Sides alternate; moving out of turn is rejected.
    #[default]
    Alternating,
    /// Either side may move any piece at any time.
    Free,
}

/// Complete rules configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Starting position (see `Board::from_layout`).
    pub layout: String,

    /// Turn-taking policy.
    pub turn_order: TurnOrder,

    /// Side that makes the first move.
    pub first_side: Side,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            layout: STANDARD_LAYOUT.to_string(),
            turn_order: TurnOrder::Alternating,
            first_side: Side::Attackers,
        }
    }
}

impl RulesConfig {
    /// Use a custom starting layout.
    #[must_use]
    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    /// Set the turn-taking policy.
    #[must_use]
    pub fn with_turn_order(mut self, turn_order: TurnOrder) -> Self {
        self.turn_order = turn_order;
        self
    }

    /// Set the opening side.
    #[must_use]
    pub fn with_first_side(mut self, side: Side) -> Self {
        self.first_side = side;
        self
    }

    /// Parse the configured layout.
    pub fn starting_board(&self) -> Result<Board> {
        Board::from_layout(&self.layout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::piece::PieceKind;

    #[test]
    fn test_default_config() {
        let config = RulesConfig::default();
        assert_eq!(config.layout, STANDARD_LAYOUT);
        assert_eq!(config.turn_order, TurnOrder::Alternating);
        assert_eq!(config.first_side, Side::Attackers);
    }

    #[test]
    fn test_builder_pattern() {
        let config = RulesConfig::default()
            .with_layout("11/11/11/11/11/5K5/11/11/11/11/11")
            .with_turn_order(TurnOrder::Free)
            .with_first_side(Side::Defenders);

        assert_eq!(config.turn_order, TurnOrder::Free);
        assert_eq!(config.first_side, Side::Defenders);

        let board = config.starting_board().unwrap();
        assert_eq!(board.count(PieceKind::King), 1);
        assert_eq!(board.pieces().count(), 1);
    }

    #[test]
    fn test_bad_layout() {
        let config = RulesConfig::default().with_layout("nonsense");
        assert!(config.starting_board().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = RulesConfig::default().with_turn_order(TurnOrder::Free);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: RulesConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
