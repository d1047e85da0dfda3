use serde::{Deserialize, Serialize};

use crate::types::*;

/// Per color, per side: is castling still permitted.
///
/// Rights only ever go from granted to revoked while a game is played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    rights: [[bool; 2]; 2], // [color][side]
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            rights: [[true; 2]; 2],
        }
    }
    pub fn none() -> Self {
        Self {
            rights: [[false; 2]; 2],
        }
    }

    /// Grant one right. Only meant for building custom setups.
    pub fn with(mut self, color: Color, side: CastleSide) -> Self {
        self.rights[color.idx()][side.idx()] = true;
        self
    }

    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        self.rights[color.idx()][side.idx()]
    }

    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        self.rights[color.idx()][side.idx()] = false;
    }

    pub fn revoke_all(&mut self, color: Color) {
        self.rights[color.idx()] = [false; 2];
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::all()
    }
}

/// The 8x8 grid. A piece's coordinates are implied by the cell holding it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

/// Everything needed to take back a move applied with [`Board::apply`].
#[derive(Clone, Copy, Debug)]
pub struct Undo {
    pub from: Square,
    pub to: Square,
    pub moved: Piece,
    pub captured: Option<Piece>,
    pub captured_sq: Square, // differs from `to` only for en passant
    pub rook_move: Option<(Square, Square)>,
}

/// Extra board edits a move drags along beyond moving the piece itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SideEffects {
    /// Pawn removed by an en passant capture.
    pub en_passant_victim: Option<Square>,
    /// Rook relocation (from, to) when the king castles.
    pub rook_move: Option<(Square, Square)>,
}

impl SideEffects {
    /// Derive the side effects of moving `piece` from `from` to `to` on `board`.
    pub fn of(board: &Board, piece: Piece, from: Square, to: Square) -> Self {
        let mut fx = SideEffects::default();
        match piece.kind {
            PieceKind::Pawn => {
                // Diagonal step onto an empty square can only be en passant.
                if from.col() != to.col() && board.get(to).is_none() {
                    fx.en_passant_victim = Square::new(from.row(), to.col());
                }
            }
            PieceKind::King => {
                if let Some(side) = castle_side(from, to) {
                    let rook_from = Square::new(from.row(), side.rook_col());
                    let rook_to = Square::new(from.row(), to.col() - side.step());
                    fx.rook_move = rook_from.zip(rook_to);
                }
            }
            _ => {}
        }
        fx
    }
}

/// Side being castled towards if the king move from `from` to `to` is two columns along its row.
pub fn castle_side(from: Square, to: Square) -> Option<CastleSide> {
    if from.row() != to.row() {
        return None;
    }
    match to.col() - from.col() {
        2 => Some(CastleSide::KingSide),
        -2 => Some(CastleSide::QueenSide),
        _ => None,
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            cells: [[None; 8]; 8],
        }
    }

    pub fn startpos() -> Self {
        let mut b = Board::empty();
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for color in [Color::White, Color::Black] {
            let back_row = color.back_row() as usize;
            let pawn_row = color.pawn_row() as usize;
            for (col, &kind) in back.iter().enumerate() {
                b.cells[back_row][col] = Some(Piece::new(color, kind));
                b.cells[pawn_row][col] = Some(Piece::new(color, PieceKind::Pawn));
            }
        }
        b
    }

    /// Bounds-checked read: off-board coordinates read as empty.
    pub fn piece_at(&self, row: i8, col: i8) -> Option<Piece> {
        Square::new(row, col).and_then(|sq| self.get(sq))
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    pub fn set(&mut self, sq: Square, pc: Option<Piece>) {
        self.cells[sq.row() as usize][sq.col() as usize] = pc;
    }

    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.row() as usize][sq.col() as usize].take()
    }

    /// Occupied squares with their pieces, row by row.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.get(sq).map(|pc| (sq, pc)))
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        self.pieces()
            .find(|(_, pc)| pc.is(c, PieceKind::King))
            .map(|(sq, _)| sq)
    }

    pub fn count(&self, c: Color) -> usize {
        self.pieces().filter(|(_, pc)| pc.color == c).count()
    }

    /// Move the piece on `from` to `to` together with its side effects.
    ///
    /// Does no legality checking and leaves `has_moved` alone; the returned
    /// [`Undo`] restores the board exactly.
    pub fn apply(&mut self, from: Square, to: Square, fx: SideEffects) -> Option<Undo> {
        let moved = self.take(from)?;
        let captured_sq = fx.en_passant_victim.unwrap_or(to);
        let captured = self.take(captured_sq);
        self.set(to, Some(moved));

        let mut rook_move = None;
        if let Some((rf, rt)) = fx.rook_move
            && let Some(rook) = self.take(rf)
        {
            self.set(rt, Some(rook));
            rook_move = Some((rf, rt));
        }

        Some(Undo {
            from,
            to,
            moved,
            captured,
            captured_sq,
            rook_move,
        })
    }

    pub fn undo(&mut self, undo: Undo) {
        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.take(rt);
            self.set(rf, rook);
        }
        self.set(undo.to, None);
        self.set(undo.captured_sq, undo.captured);
        self.set(undo.from, Some(undo.moved));
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

/// Board plus the auxiliary state legality depends on.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub board: Board,
    pub side_to_move: Color,
    pub castling: CastlingRights,
    /// Square a pawn may capture onto en passant this turn only.
    pub en_passant: Option<Square>,
}

impl Position {
    pub fn startpos() -> Self {
        Position {
            board: Board::startpos(),
            side_to_move: Color::White,
            castling: CastlingRights::all(),
            en_passant: None,
        }
    }

    /// Empty board, no castling rights, no en passant target.
    pub fn empty(side_to_move: Color) -> Self {
        Position {
            board: Board::empty(),
            side_to_move,
            castling: CastlingRights::none(),
            en_passant: None,
        }
    }

    /// Builder used to lay out custom setups; off-board coordinates are ignored.
    pub fn with_piece(mut self, row: i8, col: i8, color: Color, kind: PieceKind) -> Self {
        if let Some(sq) = Square::new(row, col) {
            self.board.set(sq, Some(Piece::new(color, kind)));
        }
        self
    }

    pub fn with_castling(mut self, castling: CastlingRights) -> Self {
        self.castling = castling;
        self
    }

    pub fn with_en_passant(mut self, row: i8, col: i8) -> Self {
        self.en_passant = Square::new(row, col);
        self
    }

    pub fn piece_at(&self, row: i8, col: i8) -> Option<Piece> {
        self.board.piece_at(row, col)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
