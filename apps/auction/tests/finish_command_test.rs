mod common;
mod support;

use auction::domain::{AuctionStatus, AuctionType};
use auction::services::notices;
use auction::{ErrorClass, ErrorCode};
use support::fixtures::{
    alice, auctioneer, harness, other_room, sale_room, AUCTION_ROOM_ID, OTHER_ROOM_ID,
};

#[tokio::test]
async fn finishing_locks_the_auction_and_names_the_winner() {
    let h = harness();
    h.running(AuctionType::Forward).await;
    h.place_bid(&alice(), "75").await;

    h.flow
        .process_finish_command(&auctioneer(), &sale_room(), None)
        .await
        .unwrap();

    assert_eq!(h.state_of(&sale_room()).await.status(), AuctionStatus::Finished);
    let last = h.messenger.messages_in(AUCTION_ROOM_ID).pop().unwrap();
    assert_eq!(last.text, "The auction is finished. Winning bid: *75* by alice");
    assert!(last.actions.is_empty());
}

#[tokio::test]
async fn finishing_without_bids_says_so() {
    let h = harness();
    h.flow
        .process_finish_command(&auctioneer(), &sale_room(), Some("   "))
        .await
        .unwrap();
    let last = h.messenger.messages_in(AUCTION_ROOM_ID).pop().unwrap();
    assert_eq!(last.text, "The auction is finished. No bids were placed.");
}

#[tokio::test]
async fn finishing_twice_is_reported() {
    let h = harness();
    for _ in 0..2 {
        h.flow
            .process_finish_command(&auctioneer(), &sale_room(), None)
            .await
            .unwrap();
    }
    assert_eq!(
        h.messenger.notifications_for("u-auctioneer"),
        vec![notices::AUCTION_FINISHED.to_string()]
    );
    assert_eq!(h.messenger.messages_in(AUCTION_ROOM_ID).len(), 1);
}

#[tokio::test]
async fn named_room_is_finished_instead_of_the_current_one() {
    let h = harness();
    h.flow
        .process_finish_command(&auctioneer(), &sale_room(), Some(" other "))
        .await
        .unwrap();

    assert_eq!(h.state_of(&other_room()).await.status(), AuctionStatus::Finished);
    assert_eq!(h.state_of(&sale_room()).await.status(), AuctionStatus::NoAuction);
    assert_eq!(h.messenger.messages_in(OTHER_ROOM_ID).len(), 1);
}

#[tokio::test]
async fn unknown_room_name_is_reported() {
    let h = harness();
    h.flow
        .process_finish_command(&auctioneer(), &sale_room(), Some("nowhere"))
        .await
        .unwrap();
    let notes = h.messenger.notifications_for("u-auctioneer");
    assert_eq!(notes, vec![notices::unknown_room("nowhere")]);
    assert!(h.messenger.room_messages().is_empty());
}

#[tokio::test]
async fn only_managers_may_finish() {
    let h = harness();
    h.flow
        .process_finish_command(&alice(), &sale_room(), None)
        .await
        .unwrap();
    assert_eq!(
        h.messenger.notifications_for("u-alice"),
        vec![notices::ONLY_AUCTIONEER.to_string()]
    );
    assert_eq!(h.state_of(&sale_room()).await.status(), AuctionStatus::NoAuction);
}

#[tokio::test]
async fn finished_state_rejects_direct_mutation() {
    let h = harness();
    h.flow
        .process_finish_command(&auctioneer(), &sale_room(), None)
        .await
        .unwrap();
    let mut state = h.state_of(&sale_room()).await;
    let before = state.clone();

    let err: auction::AppError = state.set_status(AuctionStatus::Running).unwrap_err().into();
    assert_eq!(err.class(), ErrorClass::StateInvariant);
    assert_eq!(err.code(), ErrorCode::AuctionLocked);
    assert_eq!(state, before);
}
