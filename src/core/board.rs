//! The 11x11 board and its text layout format.
//!
//! ## Board
//!
//! A fixed grid where each square is empty or holds one `PieceKind`. The
//! board is a plain `Copy` value, so snapshots and trial moves cost a
//! 121-byte copy.
//!
//! ## Layout Format
//!
//! Starting positions are external configuration data written as rows from
//! top to bottom separated by `/`. Within a row `t` is an attacker, `T` a
//! defender, `K` the king, and a decimal number is a run of empty squares:
//!
//! ```
//! use tafl_engine::core::{Board, PieceKind, Square, STANDARD_LAYOUT};
//!
//! let board = Board::from_layout(STANDARD_LAYOUT).unwrap();
//! assert_eq!(board.piece_at(Square::new(5, 5).unwrap()), Some(PieceKind::King));
//! assert_eq!(board.to_layout(), STANDARD_LAYOUT);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::error::{Result, RulesError};
use super::piece::PieceKind;
use super::square::{Square, BOARD_SIZE};

/// Copenhagen opening: 24 attackers on the edges, 12 defenders around the
/// king on the throne.
pub const STANDARD_LAYOUT: &str =
    "3ttttt3/5t5/11/t4T4t/t3TTT3t/tt1TTKTT1tt/t3TTT3t/t4T4t/11/5t5/3ttttt3";

/// A fixed 11x11 grid of optional pieces.
///
/// At most one piece occupies any square; every mutator enforces this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<PieceKind>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Bounds-checked lookup. `None` outside the board.
    #[must_use]
    pub fn cell_at(row: usize, col: usize) -> Option<Square> {
        Square::new(row, col).ok()
    }

    /// Piece on a square, if any.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<PieceKind> {
        self.cells[square.row()][square.col()]
    }

    /// True iff the square holds no piece.
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Put a piece on an empty square (setup only).
    pub fn place_piece(&mut self, square: Square, kind: PieceKind) -> Result<()> {
        if !self.is_empty(square) {
            return Err(RulesError::InvariantViolation("placing onto an occupied square"));
        }
        self.cells[square.row()][square.col()] = Some(kind);
        Ok(())
    }

    /// Relocate the piece on `from` to `to`.
    ///
    /// Fails if `from` is empty or `to` is occupied; the board is left
    /// unchanged in either case.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<PieceKind> {
        let kind = self
            .piece_at(from)
            .ok_or(RulesError::InvariantViolation("moving from an empty square"))?;
        if !self.is_empty(to) {
            return Err(RulesError::InvariantViolation("moving onto an occupied square"));
        }
        self.cells[from.row()][from.col()] = None;
        self.cells[to.row()][to.col()] = Some(kind);
        Ok(kind)
    }

    /// Clear a square, returning what was there. No-op on an empty square.
    pub fn remove_piece(&mut self, square: Square) -> Option<PieceKind> {
        self.cells[square.row()][square.col()].take()
    }

    /// Iterate over occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, PieceKind)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|kind| (sq, kind)))
    }

    /// Where the king stands, if still on the board.
    #[must_use]
    pub fn king_square(&self) -> Option<Square> {
        self.pieces().find(|(_, kind)| kind.is_king()).map(|(sq, _)| sq)
    }

    /// Count of each piece kind on the board.
    #[must_use]
    pub fn census(&self) -> FxHashMap<PieceKind, usize> {
        let mut counts = FxHashMap::default();
        for (_, kind) in self.pieces() {
            *counts.entry(kind).or_insert(0) += 1;
        }
        counts
    }

    /// Number of pieces of one kind.
    #[must_use]
    pub fn count(&self, kind: PieceKind) -> usize {
        self.pieces().filter(|&(_, k)| k == kind).count()
    }

    /// Check the at-most-one-king rule.
    pub fn check_kings(&self) -> Result<()> {
        if self.count(PieceKind::King) > 1 {
            return Err(RulesError::InvariantViolation("more than one king on the board"));
        }
        Ok(())
    }

    // === Layout ===

    /// Parse a layout string. The result must hold exactly one king.
    pub fn from_layout(layout: &str) -> Result<Self> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != BOARD_SIZE {
            return Err(RulesError::InvalidLayout(format!(
                "expected {} rows, found {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            let mut run = 0usize;
            for c in text.chars() {
                if let Some(digit) = c.to_digit(10) {
                    // Bounded by the row width, so the next digit cannot overflow
                    run = run * 10 + digit as usize;
                    if col + run > BOARD_SIZE {
                        return Err(RulesError::InvalidLayout(format!(
                            "row {} is longer than {}",
                            row, BOARD_SIZE
                        )));
                    }
                    continue;
                }
                col += std::mem::take(&mut run);
                let kind = PieceKind::from_char(c).ok_or_else(|| {
                    RulesError::InvalidLayout(format!("unknown piece '{}' in row {}", c, row))
                })?;
                let square = Square::new(row, col).map_err(|_| {
                    RulesError::InvalidLayout(format!("row {} is longer than {}", row, BOARD_SIZE))
                })?;
                board.place_piece(square, kind)?;
                col += 1;
            }
            col += run;
            if col != BOARD_SIZE {
                return Err(RulesError::InvalidLayout(format!(
                    "row {} describes {} squares, expected {}",
                    row, col, BOARD_SIZE
                )));
            }
        }

        match board.count(PieceKind::King) {
            1 => Ok(board),
            n => Err(RulesError::InvalidLayout(format!("expected exactly one king, found {}", n))),
        }
    }

    /// Encode the board in the layout format.
    #[must_use]
    pub fn to_layout(&self) -> String {
        let mut out = String::new();
        for row in 0..BOARD_SIZE {
            if row > 0 {
                out.push('/');
            }
            let mut run = 0;
            for cell in &self.cells[row] {
                match cell {
                    Some(kind) => {
                        if run > 0 {
                            out.push_str(&run.to_string());
                            run = 0;
                        }
                        out.push(kind.to_char());
                    }
                    None => run += 1,
                }
            }
            if run > 0 {
                out.push_str(&run.to_string());
            }
        }
        out
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.cells {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or('.', PieceKind::to_char))
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
