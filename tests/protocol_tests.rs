use broadside::protocol::{self, TOKEN_PLACEMENT_DONE, TOKEN_QUIT};
use broadside::transport::in_memory::InMemoryTransport;
use broadside::transport::Transport;
use broadside::{place_fleet, starting_fleet, ProtocolError, ShotOutcome};

#[tokio::test]
async fn board_transfer_roundtrip() {
    let (mut a, mut b) = InMemoryTransport::pair();
    let board = place_fleet(&starting_fleet()).unwrap();
    protocol::send_board(&mut a, &board).await.unwrap();
    let received = protocol::recv_board(&mut b).await.unwrap();
    assert_eq!(received, board);
    assert_eq!(received.checksum(), board.checksum());
}

#[tokio::test]
async fn checksum_mismatch_is_fatal() {
    let (mut a, mut b) = InMemoryTransport::pair();
    // 100 codes summing to 23, declared as 24
    let mut codes = [0u8; 100];
    codes[0] = 7;
    codes[1] = 7;
    codes[2] = 7;
    codes[3] = 2;
    for code in codes {
        a.send_line(&code.to_string()).await.unwrap();
    }
    a.send_line("24").await.unwrap();
    let err = protocol::recv_board(&mut b).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<ProtocolError>(),
        Some(&ProtocolError::ChecksumMismatch {
            declared: 24,
            computed: 23
        })
    );
}

#[tokio::test]
async fn transfer_rejects_invalid_cell_code() {
    let (mut a, mut b) = InMemoryTransport::pair();
    a.send_line("8").await.unwrap();
    let err = protocol::recv_board(&mut b).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<ProtocolError>(),
        Some(&ProtocolError::Malformed)
    );
}

#[tokio::test]
async fn shot_and_outcome_exchange() {
    let (mut a, mut b) = InMemoryTransport::pair();
    protocol::send_shot(&mut a, 3, 4).await.unwrap();
    assert_eq!(protocol::recv_shot(&mut b).await.unwrap(), (3, 4));
    protocol::send_outcome(&mut b, ShotOutcome::Hit).await.unwrap();
    assert_eq!(
        protocol::recv_outcome(&mut a).await.unwrap(),
        ShotOutcome::Hit
    );
}

#[tokio::test]
async fn quit_sentinel_interrupts_any_read() {
    let (mut a, mut b) = InMemoryTransport::pair();
    a.send_line(TOKEN_QUIT).await.unwrap();
    let err = protocol::recv_shot(&mut b).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<ProtocolError>(),
        Some(&ProtocolError::PeerQuit)
    );

    a.send_line(TOKEN_QUIT).await.unwrap();
    let err = protocol::recv_board(&mut b).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<ProtocolError>(),
        Some(&ProtocolError::PeerQuit)
    );
}

#[tokio::test]
async fn quit_is_sent_twice() {
    let (mut a, mut b) = InMemoryTransport::pair();
    protocol::send_quit(&mut a).await;
    assert_eq!(b.recv_line().await.unwrap(), TOKEN_QUIT);
    assert_eq!(b.recv_line().await.unwrap(), TOKEN_QUIT);
}

#[tokio::test]
async fn token_exchange_matches() {
    let (mut a, mut b) = InMemoryTransport::pair();
    let (ra, rb) = tokio::join!(
        protocol::exchange_token(&mut a, TOKEN_PLACEMENT_DONE),
        protocol::exchange_token(&mut b, TOKEN_PLACEMENT_DONE),
    );
    ra.unwrap();
    rb.unwrap();
}

#[tokio::test]
async fn malformed_coordinate_is_violation() {
    let (mut a, mut b) = InMemoryTransport::pair();
    a.send_line("banana").await.unwrap();
    let err = protocol::recv_shot(&mut b).await.unwrap_err();
    assert_eq!(
        err.downcast_ref::<ProtocolError>(),
        Some(&ProtocolError::Malformed)
    );
}
