use tracing::{debug, info, warn};

use super::AuctionFlowService;
use crate::domain::actors::{ActorRef, RoomRef};
use crate::domain::bid_flow::BidAttempt;
use crate::error::{AppError, ErrorClass};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::errors::ErrorCode;
use crate::platform::{FormValues, InteractionTrigger};
use crate::protocol::action_token::{self, ActionPayload, ActionTag};

impl AuctionFlowService {
    /// Form submission entry point. `token` is the continuation token the
    /// form was opened with; it names the step and the auction room.
    ///
    /// Returns `Ok(false)` when the token cannot be routed.
    pub async fn process_form_submit(
        &self,
        token: &str,
        values: &FormValues,
        trigger: &InteractionTrigger,
        actor: &ActorRef,
    ) -> Result<bool, AppError> {
        let payload = match action_token::decode(token) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(actor_id = %actor.id, error = %err, "Dropping form submission");
                return Ok(false);
            }
        };
        let room = match self.room_for(&payload).await {
            Ok(room) => room,
            Err(err) if err.class() == ErrorClass::Routing => {
                warn!(
                    room_id = %payload.room_id,
                    actor_id = %actor.id,
                    code = %err.code(),
                    error = %err,
                    "Dropping form submission"
                );
                return Ok(false);
            }
            Err(err) => return Err(err),
        };
        debug!(
            room_id = %room.id,
            actor_id = %actor.id,
            action = %payload.action_tag,
            "Form submission"
        );

        let tag = payload.action_tag;
        let outcome = match tag {
            ActionTag::ConfigureAuction => self.configure(values, &room, actor).await,
            ActionTag::SendBid => self.send_bid(payload, values, trigger, &room, actor).await,
            ActionTag::ConfirmBid => self.confirm_bid(payload, &room, actor).await,
            ActionTag::SendQuestion => self.send_question(values, &room, actor).await,
            ActionTag::StartBid | ActionTag::Help => Err(AppError::routing(
                ErrorCode::UnknownAction,
                format!("{tag} is not a form submission"),
            )),
        };
        self.settle(outcome, &room, actor).await
    }

    /// Button click entry point; `discriminator` is the button's action id.
    pub async fn process_button_click(
        &self,
        discriminator: &str,
        trigger: &InteractionTrigger,
        room: &RoomRef,
        actor: &ActorRef,
    ) -> Result<bool, AppError> {
        debug!(room_id = %room.id, actor_id = %actor.id, action = discriminator, "Button click");
        let outcome = match discriminator.parse::<ActionTag>() {
            Ok(ActionTag::StartBid) => self.start_bid(trigger, room, actor).await,
            Ok(ActionTag::Help) => self.help(trigger, room, actor).await,
            _ => Err(AppError::routing(
                ErrorCode::UnknownAction,
                format!("unsupported button action '{discriminator}'"),
            )),
        };
        self.settle(outcome, room, actor).await
    }

    /// Form dismissal entry point. Dismissing a bid form abandons the attempt;
    /// nothing is stored either way.
    pub async fn process_form_close(&self, token: &str, actor: &ActorRef) -> Result<bool, AppError> {
        let payload = match action_token::decode(token) {
            Ok(payload) => payload,
            Err(err) => {
                warn!(actor_id = %actor.id, error = %err, "Dropping form dismissal");
                return Ok(false);
            }
        };
        let room_id = payload.room_id.clone();
        match payload.action_tag {
            ActionTag::SendBid | ActionTag::ConfirmBid => match BidAttempt::resume(payload) {
                Ok(attempt) => {
                    let from = attempt.stage();
                    let stage = attempt.abandon();
                    info!(
                        room_id = %room_id,
                        actor_id = %actor.id,
                        ?from,
                        ?stage,
                        "Bid attempt abandoned"
                    );
                    Ok(true)
                }
                Err(err) => {
                    warn!(room_id = %room_id, actor_id = %actor.id, error = %err, "Dropping form dismissal");
                    Ok(false)
                }
            },
            tag => {
                debug!(room_id = %room_id, actor_id = %actor.id, action = %tag, "Form dismissed");
                Ok(true)
            }
        }
    }

    /// Room the token points at. A room that no longer exists is a routing
    /// failure.
    async fn room_for(&self, payload: &ActionPayload) -> Result<RoomRef, AppError> {
        let room = self.platform.directory.room_by_id(&payload.room_id).await?;
        room.ok_or_else(|| {
            DomainError::not_found(
                NotFoundKind::Room,
                format!("room {} no longer exists", payload.room_id),
            )
            .into()
        })
    }
}
