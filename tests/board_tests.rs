//! Board tests - grid storage, collision and line clearing

use blockfall::core::Board;
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const O_SHAPE: [(i8, i8); 4] = [(0, 0), (1, 0), (0, 1), (1, 1)];

fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in -2..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_free(x, y), "Cell ({}, {}) should be free", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
    // Hidden rows are stored, anything above them is not.
    assert_eq!(board.get(0, -2), Some(None));
    assert_eq!(board.get(0, -3), None);
}

#[test]
fn test_board_walls_and_open_top() {
    let board = Board::new();

    assert!(!board.is_free(-1, 5));
    assert!(!board.is_free(BOARD_WIDTH as i8, 5));
    assert!(!board.is_free(3, BOARD_HEIGHT as i8));
    // No ceiling.
    assert!(board.is_free(3, -10));
}

#[test]
fn test_board_set_and_occupied() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert!(board.is_occupied(5, 10));
    assert!(!board.is_free(5, 10));

    assert!(board.set(5, 10, None));
    assert!(!board.is_occupied(5, 10));
    assert!(!board.set(-1, 0, Some(PieceKind::T)));
}

#[test]
fn test_board_lock_piece_success() {
    let mut board = Board::new();
    assert!(board.lock_piece(&O_SHAPE, 3, 5, PieceKind::O));

    assert_eq!(board.get(3, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(4, 5), Some(Some(PieceKind::O)));
    assert_eq!(board.get(3, 6), Some(Some(PieceKind::O)));
    assert_eq!(board.get(4, 6), Some(Some(PieceKind::O)));
    assert_eq!(board.filled_count(), 4);
}

#[test]
fn test_board_lock_piece_collision_writes_nothing() {
    let mut board = Board::new();
    board.set(4, 6, Some(PieceKind::T));

    assert!(!board.lock_piece(&O_SHAPE, 3, 5, PieceKind::O));
    assert_eq!(board.get(3, 5), Some(None));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_board_lock_piece_above_playfield_rejected() {
    let mut board = Board::new();
    assert!(!board.lock_piece(&O_SHAPE, 3, -1, PieceKind::O));
    assert!(board.is_empty());
}

#[test]
fn test_clear_single_line() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    board.set(2, 18, Some(PieceKind::T));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19]);
    // The row above dropped by one.
    assert_eq!(board.get(2, 19), Some(Some(PieceKind::T)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_clear_non_adjacent_lines_keeps_order() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    board.set(0, 18, Some(PieceKind::S));
    fill_row(&mut board, 17, PieceKind::I);
    board.set(1, 16, Some(PieceKind::Z));

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[19, 17]);

    assert_eq!(board.get(0, 19), Some(Some(PieceKind::S)));
    assert_eq!(board.get(1, 18), Some(Some(PieceKind::Z)));
    assert_eq!(board.filled_count(), 2);
    for y in 0..BOARD_HEIGHT as i8 {
        assert!(!board.is_row_full(y));
    }
}

#[test]
fn test_clear_nothing_when_no_full_rows() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 - 1 {
        board.set(x, 19, Some(PieceKind::L));
    }
    let before = board.clone();

    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_write_u8_grid_uses_piece_codes() {
    let mut board = Board::new();
    board.set(0, 0, Some(PieceKind::I));
    board.set(9, 19, Some(PieceKind::L));
    board.set(5, -1, Some(PieceKind::O));

    let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_u8_grid(&mut grid);

    assert_eq!(grid[0][0], PieceKind::I.code());
    assert_eq!(grid[19][9], PieceKind::L.code());
    // Hidden rows are not part of the visible grid.
    assert_eq!(grid.iter().flatten().filter(|&&c| c != 0).count(), 2);
}

#[test]
fn test_fits_refuses_overflowing_cells() {
    let board = Board::new();

    assert!(board.fits(O_SHAPE, 3, i8::MIN));
    assert!(!board.fits(O_SHAPE, i8::MAX, 5));
    assert!(!board.fits(O_SHAPE, 3, i8::MAX));

    let mut board = board;
    assert!(!board.lock_piece(&O_SHAPE, i8::MAX, 5, PieceKind::O));
    assert!(board.is_empty());
}
