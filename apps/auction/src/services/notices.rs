//! Texts shown to actors and posted in rooms.

use crate::domain::auction::AuctionState;
use crate::domain::bid::Bid;

pub const AUCTION_FINISHED: &str = "Auction finished. No further actions are possible.";
pub const ONLY_AUCTIONEER: &str =
    "This is an auction room. Only the auctioneer may perform this action.";
pub const NOT_ACCEPTING_BIDS: &str = "The auction is not accepting bids right now.";
pub const EMPTY_QUESTION: &str = "No question was sent.";
pub const QUESTION_FAILED: &str = "Error sending your question.";

pub fn question_sent(question: &str) -> String {
    format!("Your question \"{question}\" was sent.")
}

pub fn question_relay(username: &str, question: &str, room_slug: &str) -> String {
    format!("user {username} asked {question} in room {room_slug}")
}

pub fn unknown_room(name: &str) -> String {
    format!("Room '{name}' was not found.")
}

pub fn configured(state: &AuctionState) -> String {
    let auction_type = state
        .auction_type()
        .map(|t| t.as_str())
        .unwrap_or("unset");
    format!(
        "Room status now is {} type is {auction_type}",
        state.status()
    )
}

pub fn new_bid(bid: &Bid) -> String {
    format!(
        "New bid from {} of {}",
        bid.bidder.username, bid.bid_value
    )
}

pub fn auction_closed(state: &AuctionState) -> String {
    match state.winning_bid() {
        Some(bid) => format!(
            "The auction is finished. Winning bid: *{}* by {}",
            bid.bid_value, bid.bidder.username
        ),
        None => "The auction is finished. No bids were placed.".to_string(),
    }
}
