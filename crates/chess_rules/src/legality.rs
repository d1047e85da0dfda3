//! Move legality: geometry first, then a check-safety simulation.
//!
//! The simulation applies the candidate to a scratch copy of the board and
//! takes it back afterwards, so the live position is never touched.

use crate::attacks::is_check;
use crate::board::{Board, Position, SideEffects};
use crate::error::MoveError;
use crate::geometry::is_geometry_valid;
use crate::types::*;

/// Whether a legality query insists the moving piece belongs to the side to move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TurnPolicy {
    #[default]
    Enforce,
    Ignore,
}

/// Check a move on `pos`, returning the moving piece if it is legal.
pub fn check_move(
    pos: &Position,
    from: Square,
    to: Square,
    turn: TurnPolicy,
) -> Result<Piece, MoveError> {
    let mut scratch = pos.board;
    check_move_with(pos, &mut scratch, from, to, turn)
}

/// Same as [`check_move`] but simulates on a caller-provided copy of `pos.board`,
/// so enumeration can reuse one scratch board for every candidate.
///
/// `scratch` must equal `pos.board` on entry and is left equal to it on return.
pub(crate) fn check_move_with(
    pos: &Position,
    scratch: &mut Board,
    from: Square,
    to: Square,
    turn: TurnPolicy,
) -> Result<Piece, MoveError> {
    let piece = pos.board.get(from).ok_or(MoveError::EmptySquare)?;
    if turn == TurnPolicy::Enforce && piece.color != pos.side_to_move {
        return Err(MoveError::WrongTurn);
    }
    if from == to {
        return Err(MoveError::NullMove);
    }
    if pos.board.get(to).is_some_and(|t| t.color == piece.color) {
        return Err(MoveError::OwnPieceCapture);
    }
    if !is_geometry_valid(pos, piece, from, to) {
        return Err(MoveError::IllegalPattern);
    }
    if leaves_king_in_check(scratch, piece, from, to) {
        return Err(MoveError::LeavesKingInCheck);
    }
    Ok(piece)
}

fn leaves_king_in_check(scratch: &mut Board, piece: Piece, from: Square, to: Square) -> bool {
    let fx = SideEffects::of(scratch, piece, from, to);
    let Some(undo) = scratch.apply(from, to, fx) else {
        return true;
    };
    let in_check = is_check(scratch, piece.color);
    scratch.undo(undo);
    in_check
}

pub fn is_legal(pos: &Position, from: Square, to: Square, turn: TurnPolicy) -> bool {
    check_move(pos, from, to, turn).is_ok()
}

#[cfg(test)]
#[path = "legality_tests.rs"]
mod tests;
