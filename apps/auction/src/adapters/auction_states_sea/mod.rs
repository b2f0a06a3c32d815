//! SeaORM adapter for the auction state repository.

use sea_orm::{ActiveModelTrait, ConnectionTrait, EntityTrait, Set};
use time::OffsetDateTime;

use crate::entities::auction_states;

pub mod dto;

pub use dto::AuctionStateUpsert;

// Adapter functions return DbErr; repos layer maps to DomainError via From<DbErr>.

pub async fn find_by_room_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    room_id: &str,
) -> Result<Option<auction_states::Model>, sea_orm::DbErr> {
    auction_states::Entity::find_by_id(room_id.to_string())
        .one(conn)
        .await
}

pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AuctionStateUpsert,
) -> Result<auction_states::Model, sea_orm::DbErr> {
    let now = OffsetDateTime::now_utc();

    if let Some(existing) = find_by_room_id(conn, &dto.room_id).await? {
        let mut active: auction_states::ActiveModel = existing.into();
        active.status = Set(dto.status);
        active.auction_type = Set(dto.auction_type);
        active.questions_room_name = Set(dto.questions_room_name);
        active.winning_bidder_id = Set(dto.winning_bidder_id);
        active.winning_bidder_name = Set(dto.winning_bidder_name);
        active.winning_bid_value = Set(dto.winning_bid_value);
        active.updated_at = Set(now);
        return active.update(conn).await;
    }

    let active = auction_states::ActiveModel {
        room_id: Set(dto.room_id),
        status: Set(dto.status),
        auction_type: Set(dto.auction_type),
        questions_room_name: Set(dto.questions_room_name),
        winning_bidder_id: Set(dto.winning_bidder_id),
        winning_bidder_name: Set(dto.winning_bidder_name),
        winning_bid_value: Set(dto.winning_bid_value),
        updated_at: Set(now),
    };
    active.insert(conn).await
}
