use std::sync::Arc;

use crate::config::roles::RoleTable;
use crate::domain::role::RoleResolver;
use crate::repos::auction_states::{AuctionStateRepo, InMemoryAuctionStateRepo, SeaAuctionStateRepo};
use crate::services::room_locks::RoomLocks;

/// Shared resources a workflow controller is built from.
///
/// Controllers built from clones of one `AppState` share its room locks, so
/// writes to a room stay serialized however many controllers are alive.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AuctionStateRepo>,
    pub roles: RoleResolver,
    pub locks: Arc<RoomLocks>,
}

impl AppState {
    pub fn new(store: Arc<dyn AuctionStateRepo>, roles: RoleTable) -> Self {
        Self {
            store,
            roles: RoleResolver::new(Arc::new(roles)),
            locks: Arc::new(RoomLocks::new()),
        }
    }

    pub fn with_db(db: sea_orm::DatabaseConnection, roles: RoleTable) -> Self {
        Self::new(Arc::new(SeaAuctionStateRepo::new(db)), roles)
    }

    /// State kept in process memory only.
    pub fn without_db(roles: RoleTable) -> Self {
        Self::new(Arc::new(InMemoryAuctionStateRepo::new()), roles)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("roles", &self.roles)
            .field("locked_rooms", &self.locks.tracked_rooms())
            .finish_non_exhaustive()
    }
}
