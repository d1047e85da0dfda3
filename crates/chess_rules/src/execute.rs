//! Applying a validated move to a position.

use serde::{Deserialize, Serialize};

use crate::board::{Position, SideEffects, castle_side};
use crate::error::MoveError;
use crate::types::*;

/// What sort of move was played, beyond moving one piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MoveKind {
    Normal,
    DoubleStep,
    EnPassant,
    Castle(CastleSide),
    Promotion(Promotion),
}

/// An executed move as kept in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The moving piece as it stood before the move.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
}

impl MoveRecord {
    /// Pawn moves and captures reset the half-move clock.
    pub fn resets_halfmove_clock(&self) -> bool {
        self.piece.kind == PieceKind::Pawn || self.captured.is_some()
    }
}

/// Play `from -> to` on `pos`, which the caller has already found legal.
///
/// Handles en passant removal, the castling rook, promotion, the en passant
/// target, castling rights and the side to move, in that order.
pub fn execute(
    pos: &mut Position,
    from: Square,
    to: Square,
    promotion: Promotion,
) -> Result<MoveRecord, MoveError> {
    let piece = pos.board.get(from).ok_or(MoveError::EmptySquare)?;
    let c = piece.color;

    let fx = SideEffects::of(&pos.board, piece, from, to);
    let undo = pos
        .board
        .apply(from, to, fx)
        .ok_or(MoveError::EmptySquare)?;

    let mut moved = Piece {
        has_moved: true,
        ..piece
    };
    if let Some((_, rook_to)) = undo.rook_move
        && let Some(rook) = pos.board.get(rook_to)
    {
        pos.board.set(
            rook_to,
            Some(Piece {
                has_moved: true,
                ..rook
            }),
        );
    }

    let mut kind = MoveKind::Normal;
    if fx.en_passant_victim.is_some() {
        kind = MoveKind::EnPassant;
    }
    if undo.rook_move.is_some()
        && let Some(side) = castle_side(from, to)
    {
        kind = MoveKind::Castle(side);
    }
    if piece.kind == PieceKind::Pawn && to.row() == c.promotion_row() {
        moved.kind = promotion.kind();
        kind = MoveKind::Promotion(promotion);
    }
    pos.board.set(to, Some(moved));

    pos.en_passant = None;
    if piece.kind == PieceKind::Pawn && (to.row() - from.row()).abs() == 2 {
        pos.en_passant = Square::new(from.row() + c.forward(), from.col());
        kind = MoveKind::DoubleStep;
    }

    match piece.kind {
        PieceKind::King => pos.castling.revoke_all(c),
        PieceKind::Rook if from.row() == c.back_row() => {
            if let Some(side) = CastleSide::from_rook_col(from.col()) {
                pos.castling.revoke(c, side);
            }
        }
        _ => {}
    }
    // A rook taken on its home corner takes its side's right with it.
    if let Some(cap) = undo.captured
        && cap.kind == PieceKind::Rook
        && undo.captured_sq.row() == cap.color.back_row()
        && let Some(side) = CastleSide::from_rook_col(undo.captured_sq.col())
    {
        pos.castling.revoke(cap.color, side);
    }

    pos.side_to_move = c.other();

    Ok(MoveRecord {
        from,
        to,
        piece,
        captured: undo.captured,
        kind,
    })
}

#[cfg(test)]
#[path = "execute_tests.rs"]
mod tests;
