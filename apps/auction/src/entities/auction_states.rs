use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "auction_states")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub room_id: String,
    #[sea_orm(column_name = "status")]
    pub status: String,
    #[sea_orm(column_name = "auction_type")]
    pub auction_type: Option<String>,
    #[sea_orm(column_name = "questions_room_name")]
    pub questions_room_name: String,
    #[sea_orm(column_name = "winning_bidder_id")]
    pub winning_bidder_id: Option<String>,
    #[sea_orm(column_name = "winning_bidder_name")]
    pub winning_bidder_name: Option<String>,
    #[sea_orm(column_name = "winning_bid_value")]
    pub winning_bid_value: Option<f64>,
    #[sea_orm(column_name = "updated_at")]
    pub updated_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
