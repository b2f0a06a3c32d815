//! Store wrappers that change the timing of the underlying repo.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use auction::domain::{AuctionState, RoomId, RoomRef};
use auction::repos::{AuctionStateRepo, InMemoryAuctionStateRepo};
use auction::DomainError;

/// Suspends after every load, so a writer that is not holding the room lock
/// lets other writers load the same state before it saves.
pub struct SlowStore {
    inner: Arc<dyn AuctionStateRepo>,
    delay: Duration,
}

impl SlowStore {
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: Arc::new(InMemoryAuctionStateRepo::new()),
            delay,
        }
    }
}

#[async_trait]
impl AuctionStateRepo for SlowStore {
    async fn load(&self, room: &RoomRef) -> Result<AuctionState, DomainError> {
        let state = self.inner.load(room).await?;
        tokio::time::sleep(self.delay).await;
        Ok(state)
    }

    async fn save(&self, room_id: &RoomId, state: &AuctionState) -> Result<(), DomainError> {
        self.inner.save(room_id, state).await
    }
}
