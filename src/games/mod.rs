//! Game implementations.
//!
//! - `hnefatafl`: 11x11 Hnefatafl with corner escape

pub mod hnefatafl;
