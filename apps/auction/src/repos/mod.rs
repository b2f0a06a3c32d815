pub mod auction_states;

pub use auction_states::{AuctionStateRepo, InMemoryAuctionStateRepo, SeaAuctionStateRepo};
