pub mod auction_states;

pub use auction_states::Entity as AuctionStates;
pub use auction_states::Model as AuctionStateRow;
