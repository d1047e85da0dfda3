//! Shared helpers for the integration tests.

use chess_rules::{CastlingRights, Color, PieceKind, Position};

/// Build a position from an 8-line diagram, row 0 (black's back rank) first.
/// Uppercase is white, lowercase black, `.` an empty square.
pub fn setup(rows: [&str; 8], side_to_move: Color, castling: CastlingRights) -> Position {
    let mut pos = Position::empty(side_to_move).with_castling(castling);
    for (row, line) in rows.iter().enumerate() {
        assert_eq!(line.len(), 8, "diagram row {row} must have 8 squares");
        for (col, ch) in line.chars().enumerate() {
            if ch == '.' {
                continue;
            }
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = match ch.to_ascii_lowercase() {
                'p' => PieceKind::Pawn,
                'n' => PieceKind::Knight,
                'b' => PieceKind::Bishop,
                'r' => PieceKind::Rook,
                'q' => PieceKind::Queen,
                'k' => PieceKind::King,
                _ => panic!("unknown piece '{ch}' in diagram"),
            };
            pos = pos.with_piece(row as i8, col as i8, color, kind);
        }
    }
    pos
}
