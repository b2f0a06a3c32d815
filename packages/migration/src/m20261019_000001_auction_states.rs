use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum AuctionStates {
    Table,
    RoomId,
    Status,
    AuctionType,
    QuestionsRoomName,
    WinningBidderId,
    WinningBidderName,
    WinningBidValue,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Status and type are stored as lowercase strings so the table stays
        // portable between Postgres and SQLite.
        manager
            .create_table(
                Table::create()
                    .table(AuctionStates::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AuctionStates::RoomId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AuctionStates::Status).string().not_null())
                    .col(ColumnDef::new(AuctionStates::AuctionType).string().null())
                    .col(
                        ColumnDef::new(AuctionStates::QuestionsRoomName)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AuctionStates::WinningBidderId).string().null())
                    .col(
                        ColumnDef::new(AuctionStates::WinningBidderName)
                            .string()
                            .null(),
                    )
                    .col(ColumnDef::new(AuctionStates::WinningBidValue).double().null())
                    .col(
                        ColumnDef::new(AuctionStates::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuctionStates::Table).to_owned())
            .await
    }
}
