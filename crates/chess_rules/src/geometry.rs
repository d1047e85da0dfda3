//! Movement patterns per piece type.
//!
//! Answers "does this move have the right shape, board permitting" without
//! asking whether the mover's own king ends up in check. The one exception is
//! castling: the king may not castle out of or through an attacked square,
//! and simulating the final position alone cannot see the square it passes.

use crate::attacks::{is_check, is_square_attacked};
use crate::board::{Board, Position, castle_side};
use crate::types::*;

/// True if `piece` standing on `from` may move to `to` by its movement rule.
pub fn is_geometry_valid(pos: &Position, piece: Piece, from: Square, to: Square) -> bool {
    if from == to {
        return false;
    }
    match piece.kind {
        PieceKind::Pawn => pawn_move(pos, piece.color, from, to),
        PieceKind::Knight => knight_pattern(from, to),
        PieceKind::Bishop => bishop_pattern(&pos.board, from, to),
        PieceKind::Rook => rook_pattern(&pos.board, from, to),
        PieceKind::Queen => queen_pattern(&pos.board, from, to),
        PieceKind::King => king_step(from, to) || castle_allowed(pos, piece.color, from, to),
    }
}

fn pawn_move(pos: &Position, c: Color, from: Square, to: Square) -> bool {
    let dir = c.forward();
    let d_row = to.row() - from.row();
    let d_col = to.col() - from.col();
    let target = pos.board.get(to);

    // Single push
    if d_col == 0 && d_row == dir {
        return target.is_none();
    }
    // Double push from the starting row, both squares empty
    if d_col == 0 && d_row == 2 * dir {
        return from.row() == c.pawn_row()
            && target.is_none()
            && pos.board.piece_at(from.row() + dir, from.col()).is_none();
    }
    // Diagonal capture, or en passant onto the stored target past an enemy pawn
    if d_col.abs() == 1 && d_row == dir {
        if target.is_some() {
            return true;
        }
        let passed = pos.board.piece_at(from.row(), to.col());
        return pos.en_passant == Some(to)
            && passed.is_some_and(|pc| pc.is(c.other(), PieceKind::Pawn));
    }
    false
}

pub fn knight_pattern(from: Square, to: Square) -> bool {
    let d_row = (to.row() - from.row()).abs();
    let d_col = (to.col() - from.col()).abs();
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}

pub fn rook_pattern(board: &Board, from: Square, to: Square) -> bool {
    (from.row() == to.row() || from.col() == to.col()) && is_path_clear(board, from, to)
}

pub fn bishop_pattern(board: &Board, from: Square, to: Square) -> bool {
    let d_row = (to.row() - from.row()).abs();
    let d_col = (to.col() - from.col()).abs();
    d_row == d_col && is_path_clear(board, from, to)
}

pub fn queen_pattern(board: &Board, from: Square, to: Square) -> bool {
    rook_pattern(board, from, to) || bishop_pattern(board, from, to)
}

pub fn king_step(from: Square, to: Square) -> bool {
    let d_row = (to.row() - from.row()).abs();
    let d_col = (to.col() - from.col()).abs();
    d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
}

/// Every square strictly between `from` and `to` is empty.
///
/// Only meaningful for straight or diagonal lines; callers check the shape first.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let dr = (to.row() - from.row()).signum();
    let dc = (to.col() - from.col()).signum();
    let mut cur = from.offset(dr, dc);
    while let Some(sq) = cur {
        if sq == to {
            return true;
        }
        if board.get(sq).is_some() {
            return false;
        }
        cur = sq.offset(dr, dc);
    }
    true
}

fn castle_allowed(pos: &Position, c: Color, from: Square, to: Square) -> bool {
    let Some(side) = castle_side(from, to) else {
        return false;
    };
    if from.row() != c.back_row() || from.col() != 4 || !pos.castling.has(c, side) {
        return false;
    }
    let rook_home = pos.board.piece_at(from.row(), side.rook_col());
    if !rook_home.is_some_and(|pc| pc.is(c, PieceKind::Rook)) {
        return false;
    }
    if is_check(&pos.board, c) {
        return false;
    }

    let step = side.step();
    let mut col = from.col() + step;
    while col != side.rook_col() {
        let Some(sq) = Square::new(from.row(), col) else {
            return false;
        };
        if pos.board.get(sq).is_some() {
            return false;
        }
        // The king crosses one square and lands on the next.
        if (col - from.col()).abs() <= 2 && is_square_attacked(&pos.board, sq, c.other()) {
            return false;
        }
        col += step;
    }
    true
}

#[cfg(test)]
#[path = "geometry_tests.rs"]
mod tests;
