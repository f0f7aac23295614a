use broadside::{
    run_placement, Direction, PlacementCommand, PlacementError, PlacementSession,
    TOTAL_SHIP_CELLS,
};
use tokio::sync::mpsc;

#[test]
fn committed_fleet_matches_session_ships() {
    let mut session = PlacementSession::new();
    session.apply(PlacementCommand::Select(2)).unwrap();
    session.apply(PlacementCommand::Move(Direction::Right)).unwrap();
    session.apply(PlacementCommand::Rotate).unwrap();
    let board = session.apply(PlacementCommand::Commit).unwrap().unwrap();
    assert_eq!(board.occupied_mask().count_ones(), TOTAL_SHIP_CELLS as u32);
}

#[test]
fn rejected_rotation_keeps_previous_orientation() {
    let mut session = PlacementSession::new();
    // ship 3 (length 5) sits at (0, 6); rotating it vertical would run
    // off the bottom edge
    session.apply(PlacementCommand::Select(3)).unwrap();
    let before = session.ships()[3];
    let err = session.apply(PlacementCommand::Rotate).unwrap_err();
    assert_eq!(err, PlacementError::OutOfBounds);
    assert_eq!(session.ships()[3], before);
}

#[tokio::test]
async fn placement_waits_for_commands() {
    let (tx, rx) = mpsc::channel(8);
    let driver = tokio::spawn(run_placement(rx));

    tx.send(PlacementCommand::Select(0)).await.unwrap();
    tx.send(PlacementCommand::Move(Direction::Down)).await.unwrap();
    // an invalid move is dropped without ending the session
    tx.send(PlacementCommand::Move(Direction::Left)).await.unwrap();
    tx.send(PlacementCommand::Commit).await.unwrap();

    let (ships, board) = driver.await.unwrap().unwrap();
    assert_eq!(ships[0].y, 1);
    assert_eq!(board.occupied_mask().count_ones(), TOTAL_SHIP_CELLS as u32);
}

#[tokio::test]
async fn closed_input_aborts_placement() {
    let (tx, rx) = mpsc::channel(1);
    drop(tx);
    assert!(run_placement(rx).await.is_err());
}
