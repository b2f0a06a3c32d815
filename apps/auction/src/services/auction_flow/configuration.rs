use std::str::FromStr;

use tracing::info;

use super::{ensure_not_finished, AuctionFlowService};
use crate::domain::actors::{ActorRef, RoomRef};
use crate::domain::auction::{AuctionConfig, AuctionStatus, AuctionType};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::platform::FormValues;
use crate::services::forms::{self, QUESTIONS_ROOM_FIELD, STATUS_FIELD, TYPE_FIELD};
use crate::services::notices;

fn required<T>(values: &FormValues, field: &str, what: &str) -> Result<T, DomainError>
where
    T: FromStr<Err = DomainError>,
{
    let raw = values.text(field).unwrap_or_default();
    if raw.trim().is_empty() {
        return Err(DomainError::validation(
            ValidationKind::InvalidConfiguration,
            format!("Please choose an auction {what}"),
        ));
    }
    raw.trim().parse()
}

fn parse_config(values: &FormValues) -> Result<AuctionConfig, DomainError> {
    let status: AuctionStatus = required(values, STATUS_FIELD, "status")?;
    let auction_type: AuctionType = required(values, TYPE_FIELD, "type")?;
    let questions_room = values.text(QUESTIONS_ROOM_FIELD).unwrap_or_default();
    AuctionConfig::new(status, auction_type, &questions_room)
}

impl AuctionFlowService {
    /// configure-auction: validates the form, stores the configuration and
    /// announces it in the auction room.
    pub(super) async fn configure(
        &self,
        values: &FormValues,
        room: &RoomRef,
        actor: &ActorRef,
    ) -> Result<(), AppError> {
        let state = {
            let _guard = self.locks.lock(&room.id).await;
            let mut state = self.store.load(room).await?;
            ensure_not_finished(&state)?;
            self.ensure_manager(actor)?;

            state.configure(parse_config(values)?)?;
            self.store.save(&room.id, &state).await?;
            state
        };
        info!(
            room_id = %room.id,
            actor_id = %actor.id,
            status = %state.status(),
            auction_type = ?state.auction_type(),
            "Auction configured"
        );

        self.platform
            .messenger
            .send_message(forms::bid_actions_message(notices::configured(&state)), room)
            .await?;
        Ok(())
    }
}
