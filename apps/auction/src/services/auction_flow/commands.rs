use tracing::{debug, info};

use super::{ensure_not_finished, AuctionFlowService};
use crate::domain::actors::{ActorRef, RoomRef};
use crate::error::AppError;
use crate::errors::domain::{DomainError, ValidationKind};
use crate::errors::ErrorCode;
use crate::platform::{InteractionTrigger, OutboundMessage};
use crate::services::{forms, notices};

impl AuctionFlowService {
    /// The auction command: opens the configuration form for the auctioneer.
    ///
    /// A finished auction is reported to every role. A missing interaction
    /// trigger is a precondition failure and is returned as `Err`.
    pub async fn process_command(
        &self,
        actor: &ActorRef,
        room: &RoomRef,
        trigger: Option<&InteractionTrigger>,
    ) -> Result<(), AppError> {
        debug!(room_id = %room.id, actor_id = %actor.id, "Auction command");
        let outcome = self.open_configuration(actor, room, trigger).await;
        self.settle(outcome, room, actor).await.map(|_| ())
    }

    async fn open_configuration(
        &self,
        actor: &ActorRef,
        room: &RoomRef,
        trigger: Option<&InteractionTrigger>,
    ) -> Result<(), AppError> {
        let state = self.store.load(room).await?;
        debug!(room_id = %room.id, status = %state.status(), "Loaded auction state");

        ensure_not_finished(&state)?;
        self.ensure_manager(actor)?;

        let trigger = trigger.ok_or_else(|| {
            AppError::precondition(
                ErrorCode::MissingTrigger,
                "auction command has no interaction trigger to open a form with",
            )
        })?;

        let form = forms::config_form(room, &state)?;
        self.platform.forms.open_form(form, trigger, actor).await?;
        Ok(())
    }

    /// The finish command: closes the auction of `room`, or of the room named
    /// by `argument`, for good.
    pub async fn process_finish_command(
        &self,
        actor: &ActorRef,
        room: &RoomRef,
        argument: Option<&str>,
    ) -> Result<(), AppError> {
        debug!(room_id = %room.id, actor_id = %actor.id, ?argument, "Finish command");
        let outcome = self.finish_auction(actor, room, argument).await;
        self.settle(outcome, room, actor).await.map(|_| ())
    }

    async fn finish_auction(
        &self,
        actor: &ActorRef,
        room: &RoomRef,
        argument: Option<&str>,
    ) -> Result<(), AppError> {
        self.ensure_manager(actor)?;

        let target = match argument.map(str::trim).filter(|name| !name.is_empty()) {
            None => room.clone(),
            Some(name) => self
                .platform
                .directory
                .room_by_name(name)
                .await?
                .ok_or_else(|| {
                    DomainError::validation(ValidationKind::UnknownRoom, notices::unknown_room(name))
                })?,
        };

        let state = {
            let _guard = self.locks.lock(&target.id).await;
            let mut state = self.store.load(&target).await?;
            ensure_not_finished(&state)?;
            state.finish()?;
            self.store.save(&target.id, &state).await?;
            state
        };
        info!(room_id = %target.id, actor_id = %actor.id, "Auction finished");

        self.platform
            .messenger
            .send_message(OutboundMessage::text(notices::auction_closed(&state)), &target)
            .await?;
        Ok(())
    }
}
