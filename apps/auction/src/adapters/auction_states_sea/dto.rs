//! DTOs for auction_states_sea adapter.

/// Column values written for one room. Status and type are stored as their
/// wire strings.
#[derive(Debug, Clone, PartialEq)]
pub struct AuctionStateUpsert {
    pub room_id: String,
    pub status: String,
    pub auction_type: Option<String>,
    pub questions_room_name: String,
    pub winning_bidder_id: Option<String>,
    pub winning_bidder_name: Option<String>,
    pub winning_bid_value: Option<f64>,
}
