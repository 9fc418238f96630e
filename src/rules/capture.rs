//! Capture evaluation.
//!
//! Runs after a piece has been moved, in two passes:
//!
//! 1. **Custodian scan**: for each direction (down, up, right, left) the
//!    square next to the destination holds an enemy and the square beyond
//!    it is either a friendly piece or a hostile square (corner or throne,
//!    occupied or not). The enemy is removed. The attacker is one side; the
//!    defender and the king are the other, and the king is armed.
//! 2. **Hostile-square cleanup**: any non-king piece standing on a corner
//!    or the throne is removed, whether or not it was just sandwiched.
//!
//! The scan never stops early, including after a king capture; the
//! outcome is decided by the caller once both passes are done.

use smallvec::SmallVec;

use crate::core::{Board, Capture, CaptureCause, Direction, PieceKind, Square, CORNERS, THRONE};

/// Pieces removed by one move.
pub type CaptureList = SmallVec<[Capture; 4]>;

/// Run both capture passes for a piece of `mover` kind that has just
/// moved from `origin` to `destination`, removing captured pieces from
/// `board`.
pub fn resolve_captures(
    board: &mut Board,
    mover: PieceKind,
    origin: Square,
    destination: Square,
) -> CaptureList {
    let mut captures = CaptureList::new();
    custodian_scan(board, mover, origin, destination, &mut captures);
    clear_hostile_squares(board, &mut captures);
    captures
}

/// Custodian captures around `destination`.
pub fn custodian_scan(
    board: &mut Board,
    mover: PieceKind,
    origin: Square,
    destination: Square,
    out: &mut CaptureList,
) {
    for dir in Direction::ALL {
        let Some(enemy_sq) = destination.step(dir) else {
            continue;
        };
        let Some(enemy) = board.piece_at(enemy_sq) else {
            continue;
        };
        if !mover.is_hostile_to(enemy) {
            continue;
        }
        let Some(behind) = enemy_sq.step(dir) else {
            continue;
        };
        // A piece cannot be pinned against the square its captor left.
        if behind == origin {
            continue;
        }
        if !is_anvil(board, mover, behind) {
            continue;
        }

        if let Some(piece) = board.remove_piece(enemy_sq) {
            out.push(Capture {
                square: enemy_sq,
                piece,
                cause: CaptureCause::Custodian,
            });
        }
    }
}

/// True if `square` closes a sandwich for `mover`'s side.
#[must_use]
pub fn is_anvil(board: &Board, mover: PieceKind, square: Square) -> bool {
    if square.kind().is_hostile() {
        return true;
    }
    board
        .piece_at(square)
        .is_some_and(|piece| piece.side() == mover.side())
}

/// Remove every non-king piece on a corner or the throne.
pub fn clear_hostile_squares(board: &mut Board, out: &mut CaptureList) {
    for square in CORNERS.into_iter().chain(std::iter::once(THRONE)) {
        if board.piece_at(square).is_some_and(|piece| !piece.is_king()) {
            if let Some(piece) = board.remove_piece(square) {
                out.push(Capture {
                    square,
                    piece,
                    cause: CaptureCause::HostileSquare,
                });
            }
        }
    }
}
