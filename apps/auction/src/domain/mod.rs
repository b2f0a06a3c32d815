//! Pure auction domain: records, roles, bids and the bidding state machine.
//!
//! Nothing in here performs I/O; the workflow service loads and saves state
//! around these types.

pub mod actors;
pub mod auction;
pub mod bid;
pub mod bid_flow;
pub mod role;

pub use actors::{ActorId, ActorRef, RoomId, RoomRef};
pub use auction::{AuctionConfig, AuctionState, AuctionStatus, AuctionType};
pub use bid::{Bid, BidValue, Bidder};
pub use bid_flow::{BidAttempt, BidStage};
pub use role::{Role, RoleMembership, RoleResolver};
