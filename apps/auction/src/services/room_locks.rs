//! Per-room async mutexes serializing load-mutate-save sequences.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::domain::actors::RoomId;

/// One mutex per room. Rooms never contend with each other; two writers in
/// the same room run one after the other.
///
/// Entries are never removed. A room's entry is a single empty mutex, and a
/// deployment only ever sees a handful of auction rooms. Removing an entry
/// while a waiter still holds its `Arc` would let a new caller create a second
/// mutex for the same room.
#[derive(Debug, Default)]
pub struct RoomLocks {
    locks: DashMap<RoomId, Arc<Mutex<()>>>,
}

impl RoomLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits for exclusive access to `room_id`. Released when the guard drops.
    pub async fn lock(&self, room_id: &RoomId) -> OwnedMutexGuard<()> {
        // Clone the Arc out so the shard guard is released before awaiting.
        let lock = self
            .locks
            .entry(room_id.clone())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone();
        lock.lock_owned().await
    }

    pub fn tracked_rooms(&self) -> usize {
        self.locks.len()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn same_room_is_exclusive() {
        let locks = Arc::new(RoomLocks::new());
        let room = RoomId::new("r-1");

        let guard = locks.lock(&room).await;
        let contender = {
            let locks = locks.clone();
            let room = room.clone();
            tokio::spawn(async move {
                let _g = locks.lock(&room).await;
            })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!contender.is_finished());

        drop(guard);
        tokio::time::timeout(Duration::from_secs(1), contender)
            .await
            .unwrap()
            .unwrap();
    }

    #[tokio::test]
    async fn different_rooms_do_not_block() {
        let locks = RoomLocks::new();
        let _a = locks.lock(&RoomId::new("a")).await;
        let b = tokio::time::timeout(Duration::from_millis(200), locks.lock(&RoomId::new("b"))).await;
        assert!(b.is_ok());
        assert_eq!(locks.tracked_rooms(), 2);
    }
}
