//! Piece kinds and sides.
//!
//! Pieces carry no identity beyond their kind and current square. The
//! attacker is one side; the defender and the king together are the other.

use serde::{Deserialize, Serialize};

/// The kind of piece occupying a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Attacker,
    Defender,
    King,
}

impl PieceKind {
    /// The side this piece fights for.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            PieceKind::Attacker => Side::Attackers,
            PieceKind::Defender | PieceKind::King => Side::Defenders,
        }
    }

    /// True if `other` is on the opposing side.
    #[must_use]
    pub fn is_hostile_to(self, other: PieceKind) -> bool {
        self.side() != other.side()
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, PieceKind::King)
    }

    /// Layout character: `t` attacker, `T` defender, `K` king.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::Attacker => 't',
            PieceKind::Defender => 'T',
            PieceKind::King => 'K',
        }
    }

    /// Parse a layout character.
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            't' => Some(PieceKind::Attacker),
            'T' => Some(PieceKind::Defender),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PieceKind::Attacker => "attacker",
            PieceKind::Defender => "defender",
            PieceKind::King => "king",
        };
        f.write_str(name)
    }
}

/// One of the two players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[default]
    Attackers,
    Defenders,
}

impl Side {
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Attackers => Side::Defenders,
            Side::Defenders => Side::Attackers,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Attackers => f.write_str("Attackers"),
            Side::Defenders => f.write_str("Defenders"),
        }
    }
}
