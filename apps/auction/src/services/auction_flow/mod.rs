//! Auction workflow controller - routes inbound chat events to workflow steps.
//!
//! Every entry point resolves failures the same way (see [`ErrorClass`]):
//! authorization and validation failures become a private notice to the
//! actor and a successful no-op, routing failures are logged and reported as
//! `false`, everything else propagates.

mod bidding;
mod commands;
mod configuration;
mod questions;
mod routing;

use std::sync::Arc;

use tracing::{error, warn};

use crate::domain::actors::{ActorRef, RoomRef};
use crate::domain::auction::{AuctionState, AuctionStatus};
use crate::domain::role::RoleResolver;
use crate::error::{AppError, ErrorClass};
use crate::errors::ErrorCode;
use crate::platform::Platform;
use crate::repos::auction_states::AuctionStateRepo;
use crate::services::notices;
use crate::services::room_locks::RoomLocks;
use crate::state::AppState;

pub struct AuctionFlowService {
    store: Arc<dyn AuctionStateRepo>,
    roles: RoleResolver,
    platform: Platform,
    locks: Arc<RoomLocks>,
}

impl AuctionFlowService {
    pub fn new(state: &AppState, platform: Platform) -> Self {
        Self {
            store: state.store.clone(),
            roles: state.roles.clone(),
            platform,
            locks: state.locks.clone(),
        }
    }

    async fn notify(&self, text: &str, room: &RoomRef, actor: &ActorRef) -> Result<(), AppError> {
        self.platform
            .messenger
            .send_private_notification(text, room, actor)
            .await?;
        Ok(())
    }

    /// Turns a step's outcome into the entry point's result.
    async fn settle(
        &self,
        outcome: Result<(), AppError>,
        room: &RoomRef,
        actor: &ActorRef,
    ) -> Result<bool, AppError> {
        let err = match outcome {
            Ok(()) => return Ok(true),
            Err(err) => err,
        };
        match err.class() {
            ErrorClass::Authorization | ErrorClass::Validation => {
                self.notify(err.detail(), room, actor).await?;
                Ok(true)
            }
            ErrorClass::Routing => {
                warn!(
                    room_id = %room.id,
                    actor_id = %actor.id,
                    code = %err.code(),
                    error = %err,
                    "Routing failure"
                );
                Ok(false)
            }
            ErrorClass::Precondition
            | ErrorClass::Lookup
            | ErrorClass::StateInvariant
            | ErrorClass::Infrastructure => {
                error!(
                    room_id = %room.id,
                    actor_id = %actor.id,
                    code = %err.code(),
                    error = %err,
                    "Workflow step failed"
                );
                Err(err)
            }
        }
    }
}

fn ensure_not_finished(state: &AuctionState) -> Result<(), AppError> {
    if state.is_finished() {
        return Err(AppError::forbidden(
            ErrorCode::AuctionFinished,
            notices::AUCTION_FINISHED,
        ));
    }
    Ok(())
}

fn ensure_accepting_bids(state: &AuctionState) -> Result<(), AppError> {
    ensure_not_finished(state)?;
    if state.status() != AuctionStatus::Running {
        return Err(AppError::forbidden(
            ErrorCode::AuctionNotRunning,
            notices::NOT_ACCEPTING_BIDS,
        ));
    }
    Ok(())
}

impl AuctionFlowService {
    fn ensure_manager(&self, actor: &ActorRef) -> Result<(), AppError> {
        let role = self.roles.resolve(actor);
        if !role.can_manage_auction() {
            return Err(AppError::forbidden(
                ErrorCode::NotAuctioneer,
                notices::ONLY_AUCTIONEER,
            ));
        }
        Ok(())
    }
}
