//! Rules for 11x11 Hnefatafl.
//!
//! - `movegen`: rook-like sliding with corner and throne restrictions
//! - `capture`: custodian captures and hostile-square cleanup
//! - `outcome`: king escape and king capture
//! - `engine`: the `RulesEngine` trait tying them to a `GameState`

pub mod engine;
pub mod movegen;
pub mod capture;
pub mod outcome;

pub use engine::RulesEngine;
pub use capture::{resolve_captures, CaptureList};
pub use movegen::{destinations, legal_destinations};
