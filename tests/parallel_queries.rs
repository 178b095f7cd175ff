use chessboard::{Board, Piece, PieceKind};
use rayon::prelude::*;

#[test]
fn concurrent_queries_on_a_shared_board_agree_with_sequential_ones() {
    let board = Board::new(7, 9);
    let pieces: Vec<Piece> = PieceKind::ALL
        .into_iter()
        .flat_map(|kind| board.indices().map(move |pos| Piece::new(kind, pos)))
        .collect();

    let sequential: Vec<Vec<bool>> = pieces
        .iter()
        .map(|p| p.territory(&board).unwrap().into_vec())
        .collect();
    let parallel: Vec<Vec<bool>> = pieces
        .par_iter()
        .map(|p| p.territory(&board).unwrap().into_vec())
        .collect();

    assert_eq!(parallel.len(), 5 * board.len());
    assert_eq!(sequential, parallel);
}
