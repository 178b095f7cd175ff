#![cfg(feature = "serde")]

use chessboard::{Board, Coord, Piece, PieceKind};

#[test]
fn pieces_roundtrip_through_json() {
    let pieces = vec![
        Piece::new(PieceKind::King, 0),
        Piece::new(PieceKind::Knight, 17),
    ];
    let json = serde_json::to_string(&pieces).unwrap();
    let back: Vec<Piece> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, pieces);

    let c: Coord = serde_json::from_str(r#"{"x":2,"y":-1}"#).unwrap();
    assert_eq!(c, Coord::new(2, -1));
}

#[test]
fn board_serializes_its_dimensions() {
    let json = serde_json::to_value(Board::new(4, 6)).unwrap();
    assert_eq!(json, serde_json::json!({"width": 4, "height": 6}));
}
