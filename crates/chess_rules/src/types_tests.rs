use super::*;

#[test]
fn test_square_bounds() {
    assert!(Square::new(0, 0).is_some());
    assert!(Square::new(7, 7).is_some());
    assert!(Square::new(-1, 0).is_none());
    assert!(Square::new(0, 8).is_none());
    assert_eq!(Square::try_from((8i8, 3i8)), Err(MoveError::OutOfBounds));
}

#[test]
fn test_square_offset() {
    let e4 = Square::new(4, 4).unwrap();
    assert_eq!(e4.offset(-1, 1), Square::new(3, 5));
    assert_eq!(e4.offset(4, 0), None);
    // Offsets that overflow i8 land off the board instead of wrapping
    let h1 = Square::new(7, 7).unwrap();
    assert_eq!(h1.offset(i8::MAX, 0), None);
    assert_eq!(h1.offset(0, i8::MAX), None);
    assert_eq!(Square::new(0, 0).unwrap().offset(i8::MIN, 0), None);
}

#[test]
fn test_square_display() {
    // Row 7 is white's back rank
    assert_eq!(Square::new(7, 4).unwrap().to_string(), "e1");
    assert_eq!(Square::new(0, 0).unwrap().to_string(), "a8");
    assert_eq!(Square::new(4, 7).unwrap().to_string(), "h4");
}

#[test]
fn test_all_squares() {
    let all: Vec<Square> = Square::all().collect();
    assert_eq!(all.len(), 64);
    assert_eq!(all[0], Square::new(0, 0).unwrap());
    assert_eq!(all[63], Square::new(7, 7).unwrap());
}

#[test]
fn test_color_rows() {
    assert_eq!(Color::White.pawn_row(), 6);
    assert_eq!(Color::Black.pawn_row(), 1);
    assert_eq!(Color::White.promotion_row(), 0);
    assert_eq!(Color::Black.promotion_row(), 7);
    assert_eq!(Color::White.pawn_row() + Color::White.forward(), 5);
}

#[test]
fn test_promotion_kinds() {
    assert_eq!(Promotion::default().kind(), PieceKind::Queen);
    assert_eq!(Promotion::Knight.kind(), PieceKind::Knight);
}
