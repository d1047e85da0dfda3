//! Attack detection.
//!
//! A square is attacked by a color if one of its pieces could capture there,
//! ignoring whose turn it is and whether that capture would expose its own king.

use tracing::trace;

use crate::board::Board;
use crate::geometry::{bishop_pattern, king_step, knight_pattern, queen_pattern, rook_pattern};
use crate::types::*;

/// True if `piece` on `from` attacks `target` on `board`.
pub fn attacks_square(board: &Board, piece: Piece, from: Square, target: Square) -> bool {
    if from == target {
        return false;
    }
    match piece.kind {
        // Pawns attack diagonally forward only; a push never captures.
        PieceKind::Pawn => {
            target.row() - from.row() == piece.color.forward()
                && (target.col() - from.col()).abs() == 1
        }
        PieceKind::Knight => knight_pattern(from, target),
        PieceKind::Bishop => bishop_pattern(board, from, target),
        PieceKind::Rook => rook_pattern(board, from, target),
        PieceKind::Queen => queen_pattern(board, from, target),
        PieceKind::King => king_step(from, target),
    }
}

pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    board
        .pieces()
        .filter(|(_, pc)| pc.color == by)
        .any(|(from, pc)| attacks_square(board, pc, from, target))
}

/// Squares holding pieces of color `by` that attack `target`.
pub fn attackers_of(board: &Board, target: Square, by: Color) -> Vec<Square> {
    board
        .pieces()
        .filter(|&(from, pc)| pc.color == by && attacks_square(board, pc, from, target))
        .map(|(from, _)| from)
        .collect()
}

/// Is `c`'s king attacked. A board without that king counts as check.
pub fn is_check(board: &Board, c: Color) -> bool {
    match board.king_sq(c) {
        Some(ksq) => is_square_attacked(board, ksq, c.other()),
        None => {
            trace!(color = %c, "no king on the board, treating as check");
            true
        }
    }
}

#[cfg(test)]
#[path = "attacks_tests.rs"]
mod tests;
