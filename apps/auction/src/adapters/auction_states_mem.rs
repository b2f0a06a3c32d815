//! In-process auction state store backed by a `DashMap`.

use dashmap::DashMap;

use crate::domain::actors::RoomId;
use crate::domain::auction::AuctionState;

#[derive(Debug, Default)]
pub struct MemAuctionStates {
    rows: DashMap<RoomId, AuctionState>,
}

impl MemAuctionStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find(&self, room_id: &RoomId) -> Option<AuctionState> {
        self.rows.get(room_id).map(|entry| entry.value().clone())
    }

    pub fn put(&self, room_id: RoomId, state: AuctionState) {
        self.rows.insert(room_id, state);
    }

    pub fn room_count(&self) -> usize {
        self.rows.len()
    }
}
