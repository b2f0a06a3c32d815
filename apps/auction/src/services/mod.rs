pub mod auction_flow;
pub mod forms;
pub mod notices;
pub mod room_locks;
