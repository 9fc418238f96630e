//! Win conditions.
//!
//! - King escape: the king stands on a corner. Defenders win.
//! - King capture: the king was removed by a custodian capture. Attackers
//!   win.
//!
//! Escape is checked as soon as the piece has moved; capture is checked
//! after both capture passes have finished.

use crate::core::{Board, Capture, Outcome};

/// True if the king stands on a corner.
#[must_use]
pub fn king_escaped(board: &Board) -> bool {
    board.king_square().is_some_and(|sq| sq.is_corner())
}

/// True if any of `captures` removed the king.
#[must_use]
pub fn king_captured(captures: &[Capture]) -> bool {
    captures.iter().any(|c| c.piece.is_king())
}

/// Outcome after a move whose removals are `captures`.
#[must_use]
pub fn evaluate(board: &Board, captures: &[Capture]) -> Outcome {
    if king_escaped(board) {
        Outcome::DefendersWin
    } else if king_captured(captures) {
        Outcome::AttackersWin
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CaptureCause, PieceKind, Square};

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_escape() {
        let mut board = Board::empty();
        board.place_piece(sq(0, 10), PieceKind::King).unwrap();

        assert!(king_escaped(&board));
        assert_eq!(evaluate(&board, &[]), Outcome::DefendersWin);
    }

    #[test]
    fn test_not_escaped_on_edge() {
        let mut board = Board::empty();
        board.place_piece(sq(0, 9), PieceKind::King).unwrap();

        assert!(!king_escaped(&board));
        assert_eq!(evaluate(&board, &[]), Outcome::InProgress);
    }

    #[test]
    fn test_capture() {
        let board = Board::empty();
        let captures = [Capture {
            square: sq(4, 4),
            piece: PieceKind::King,
            cause: CaptureCause::Custodian,
        }];

        assert!(king_captured(&captures));
        assert_eq!(evaluate(&board, &captures), Outcome::AttackersWin);
    }

    #[test]
    fn test_defender_capture_is_not_terminal() {
        let mut board = Board::empty();
        board.place_piece(sq(5, 5), PieceKind::King).unwrap();
        let captures = [Capture {
            square: sq(4, 4),
            piece: PieceKind::Defender,
            cause: CaptureCause::Custodian,
        }];

        assert_eq!(evaluate(&board, &captures), Outcome::InProgress);
    }
}
