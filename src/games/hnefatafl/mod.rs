//! 11x11 Hnefatafl.
//!
//! - Attackers (24 pieces) against defenders (12 pieces) and their king
//! - All pieces slide orthogonally; only the king may stop on a corner or
//!   the throne
//! - Custodian capture, with corners and the throne acting as hostile
//!   squares
//! - Defenders win when the king reaches a corner; attackers win when the
//!   king is captured

mod engine;
mod selection;
mod session;

pub use engine::Hnefatafl;
pub use selection::Selection;
pub use session::Game;
