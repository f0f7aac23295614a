use broadside::{Board, BoardError, CellCode, TOTAL_SHIP_CELLS};
use broadside::{place_fleet, starting_fleet};

#[test]
fn fresh_own_board_is_water() {
    let board = Board::new();
    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(board.get(x, y).unwrap(), CellCode::Water);
        }
    }
    assert_eq!(board.checksum(), 0);
}

#[test]
fn fresh_fog_board_is_fog() {
    let board = Board::fog();
    for y in 0..10 {
        for x in 0..10 {
            assert_eq!(board.get(x, y).unwrap(), CellCode::Fog);
        }
    }
}

#[test]
fn out_of_range_access_fails() {
    let mut board = Board::new();
    assert_eq!(board.get(10, 0).unwrap_err(), BoardError::OutOfBounds);
    assert_eq!(board.get(0, 10).unwrap_err(), BoardError::OutOfBounds);
    assert_eq!(
        board.set(10, 10, CellCode::Water).unwrap_err(),
        BoardError::OutOfBounds
    );
}

#[test]
fn fleet_checksum_is_sum_of_occupied_cells() {
    let board = place_fleet(&starting_fleet()).unwrap();
    assert_eq!(
        board.occupied_mask().count_ones(),
        TOTAL_SHIP_CELLS as u32
    );
    // checksum equals the sum over the 17 ship cells; water contributes 0
    let expected: u32 = board
        .codes()
        .filter(|&c| c != 0)
        .map(|c| c as u32)
        .sum();
    assert_eq!(board.checksum(), expected);
}

#[test]
fn serialization_roundtrip_preserves_checksum() {
    let board = place_fleet(&starting_fleet()).unwrap();
    let codes: Vec<u8> = board.codes().collect();
    assert_eq!(codes.len(), 100);
    let rebuilt = Board::from_codes(codes).unwrap();
    assert_eq!(rebuilt, board);
    assert_eq!(rebuilt.checksum(), board.checksum());
}

#[test]
fn reveal_only_touches_fog() {
    let snapshot = place_fleet(&starting_fleet()).unwrap();
    let mut guess = Board::fog();
    guess.set(0, 0, CellCode::HitGuess).unwrap();
    guess.set(5, 5, CellCode::MissGuess).unwrap();
    guess.reveal_from(&snapshot);
    assert_eq!(guess.get(0, 0).unwrap(), CellCode::HitGuess);
    assert_eq!(guess.get(5, 5).unwrap(), CellCode::MissGuess);
    assert_eq!(guess.count(CellCode::Fog), 0);
    // an untouched ship cell now shows through
    assert!(guess.get(0, 2).unwrap().is_ship());
}
