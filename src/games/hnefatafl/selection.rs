//! Selected piece and its destinations.

use serde::{Deserialize, Serialize};

use crate::core::{MoveList, PieceKind, Square};

/// A piece picked by the player, with the squares it may move to.
///
/// Held by the caller between "select" and "move"; the engine keeps no
/// selection state of its own.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    origin: Square,
    piece: PieceKind,
    destinations: MoveList,
}

impl Selection {
    #[must_use]
    pub fn new(origin: Square, piece: PieceKind, destinations: MoveList) -> Self {
        Self {
            origin,
            piece,
            destinations,
        }
    }

    #[must_use]
    pub fn origin(&self) -> Square {
        self.origin
    }

    #[must_use]
    pub fn piece(&self) -> PieceKind {
        self.piece
    }

    /// Legal destinations in scan order.
    #[must_use]
    pub fn destinations(&self) -> &[Square] {
        &self.destinations
    }

    /// True if `to` is a legal destination. The origin never is.
    #[must_use]
    pub fn contains(&self, to: Square) -> bool {
        self.destinations.contains(&to)
    }

    /// True if the piece has nowhere to go.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        self.destinations.is_empty()
    }

    /// Squares to highlight: the origin, then every destination.
    pub fn highlighted(&self) -> impl Iterator<Item = Square> + '_ {
        std::iter::once(self.origin).chain(self.destinations.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_selection() {
        let selection = Selection::new(
            sq(2, 2),
            PieceKind::Defender,
            MoveList::from_slice(&[sq(3, 2), sq(2, 3)]),
        );

        assert_eq!(selection.origin(), sq(2, 2));
        assert_eq!(selection.piece(), PieceKind::Defender);
        assert!(selection.contains(sq(3, 2)));
        assert!(!selection.contains(sq(2, 2)));
        assert!(!selection.is_stuck());

        let highlighted: Vec<_> = selection.highlighted().collect();
        assert_eq!(highlighted, vec![sq(2, 2), sq(3, 2), sq(2, 3)]);
    }

    #[test]
    fn test_stuck_selection() {
        let selection = Selection::new(sq(0, 1), PieceKind::Attacker, MoveList::new());
        assert!(selection.is_stuck());
        assert_eq!(selection.highlighted().count(), 1);
    }
}
