//! Auction state repository: load-or-default and save, per room.

use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseConnection};
use tracing::debug;

use crate::adapters::auction_states_mem::MemAuctionStates;
use crate::adapters::auction_states_sea as adapter;
use crate::domain::actors::{ActorId, RoomId, RoomRef};
use crate::domain::auction::{AuctionState, AuctionStatus, AuctionType};
use crate::domain::bid::{Bid, BidValue, Bidder};
use crate::entities::auction_states;
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Persistence seam for the workflow controller.
///
/// `load` never fails for a missing record: it returns the default state for
/// the room. Storage failures still surface as errors.
#[async_trait]
pub trait AuctionStateRepo: Send + Sync {
    async fn load(&self, room: &RoomRef) -> Result<AuctionState, DomainError>;

    async fn save(&self, room_id: &RoomId, state: &AuctionState) -> Result<(), DomainError>;
}

// Free functions (generic) used by the SeaORM-backed store

pub async fn find_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: &RoomId,
) -> Result<Option<AuctionState>, DomainError> {
    let row = adapter::find_by_room_id(conn, room_id.as_str()).await?;
    row.map(AuctionState::try_from).transpose()
}

pub async fn upsert_state<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: &RoomId,
    state: &AuctionState,
) -> Result<(), DomainError> {
    adapter::upsert(conn, to_upsert(room_id, state)).await?;
    Ok(())
}

fn to_upsert(room_id: &RoomId, state: &AuctionState) -> adapter::AuctionStateUpsert {
    let winning = state.winning_bid();
    adapter::AuctionStateUpsert {
        room_id: room_id.as_str().to_string(),
        status: state.status().as_str().to_string(),
        auction_type: state.auction_type().map(|t| t.as_str().to_string()),
        questions_room_name: state.questions_room_name().to_string(),
        winning_bidder_id: winning.map(|b| b.bidder.id.as_str().to_string()),
        winning_bidder_name: winning.map(|b| b.bidder.username.clone()),
        winning_bid_value: winning.map(|b| b.bid_value.get()),
    }
}

fn corrupt(room_id: &str, detail: impl std::fmt::Display) -> DomainError {
    DomainError::infra(
        InfraErrorKind::DataCorruption,
        format!("{detail} stored for room_id={room_id}"),
    )
}

impl TryFrom<auction_states::Model> for AuctionState {
    type Error = DomainError;

    fn try_from(model: auction_states::Model) -> Result<Self, Self::Error> {
        let room_id = model.room_id.as_str();

        let status: AuctionStatus = model
            .status
            .parse()
            .map_err(|_| corrupt(room_id, format!("invalid status '{}'", model.status)))?;

        let auction_type = model
            .auction_type
            .as_deref()
            .map(|raw| {
                raw.parse::<AuctionType>()
                    .map_err(|_| corrupt(room_id, format!("invalid auction_type '{raw}'")))
            })
            .transpose()?;

        let winning_bid = match (
            model.winning_bidder_id,
            model.winning_bidder_name,
            model.winning_bid_value,
        ) {
            (None, None, None) => None,
            (Some(id), Some(username), Some(value)) => {
                let bid_value = BidValue::new(value)
                    .map_err(|_| corrupt(room_id, format!("invalid winning_bid_value {value}")))?;
                Some(Bid::new(
                    Bidder {
                        id: ActorId::new(id),
                        username,
                    },
                    bid_value,
                ))
            }
            _ => return Err(corrupt(room_id, "partial winning bid")),
        };

        AuctionState::builder(model.questions_room_name)
            .status(status)
            .auction_type(auction_type)
            .winning_bid(winning_bid)
            .build()
    }
}

/// Relational store over a pooled SeaORM connection.
#[derive(Debug, Clone)]
pub struct SeaAuctionStateRepo {
    db: DatabaseConnection,
}

impl SeaAuctionStateRepo {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AuctionStateRepo for SeaAuctionStateRepo {
    async fn load(&self, room: &RoomRef) -> Result<AuctionState, DomainError> {
        match find_state(&self.db, &room.id).await? {
            Some(state) => Ok(state),
            None => {
                debug!(room_id = %room.id, "No auction record, using default state");
                Ok(AuctionState::new_for_room(room))
            }
        }
    }

    async fn save(&self, room_id: &RoomId, state: &AuctionState) -> Result<(), DomainError> {
        upsert_state(&self.db, room_id, state).await
    }
}

/// Process-local store; state is lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryAuctionStateRepo {
    store: MemAuctionStates,
}

impl InMemoryAuctionStateRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored_rooms(&self) -> usize {
        self.store.room_count()
    }
}

#[async_trait]
impl AuctionStateRepo for InMemoryAuctionStateRepo {
    async fn load(&self, room: &RoomRef) -> Result<AuctionState, DomainError> {
        Ok(self
            .store
            .find(&room.id)
            .unwrap_or_else(|| AuctionState::new_for_room(room)))
    }

    async fn save(&self, room_id: &RoomId, state: &AuctionState) -> Result<(), DomainError> {
        self.store.put(room_id.clone(), state.clone());
        Ok(())
    }
}
