//! Legal move generation.
//!
//! Every piece slides orthogonally like a rook. Each direction is scanned
//! outward from the origin in the fixed order down, up, right, left;
//! within a direction destinations are listed nearest first.
//!
//! ## Special squares
//!
//! - Corner: only an empty corner reached by the king is a destination.
//!   The scan always stops at a corner.
//! - Throne: the king may stop on an empty throne, and the scan stops
//!   there. Every other piece slides over the throne without stopping,
//!   whether or not it is occupied.

use crate::core::{Board, Direction, MoveList, PieceKind, Square, SquareKind};

/// Destinations reachable by `kind` from `origin`.
///
/// Does not look at the origin square itself, so it can be used to ask
/// "where could this piece go" for hypothetical pieces.
#[must_use]
pub fn destinations(board: &Board, origin: Square, kind: PieceKind) -> MoveList {
    let mut out = MoveList::new();
    for dir in Direction::ALL {
        scan_direction(board, origin, kind, dir, &mut out);
    }
    out
}

fn scan_direction(
    board: &Board,
    origin: Square,
    kind: PieceKind,
    dir: Direction,
    out: &mut MoveList,
) {
    let mut cursor = origin.step(dir);

    while let Some(square) = cursor {
        match square.kind() {
            SquareKind::Corner => {
                if kind.is_king() && board.is_empty(square) {
                    out.push(square);
                }
                return;
            }
            SquareKind::Throne => {
                if kind.is_king() && board.is_empty(square) {
                    out.push(square);
                    return;
                }
                // Transparent for everything else, occupied or not
            }
            SquareKind::Normal => {
                if !board.is_empty(square) {
                    return;
                }
                out.push(square);
            }
        }
        cursor = square.step(dir);
    }
}

/// Destinations for the piece standing on `origin`. Empty if there is none.
#[must_use]
pub fn legal_destinations(board: &Board, origin: Square) -> MoveList {
    match board.piece_at(origin) {
        Some(kind) => destinations(board, origin, kind),
        None => MoveList::new(),
    }
}
