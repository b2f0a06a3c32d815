use tracing::{debug, info};

use super::{ensure_accepting_bids, AuctionFlowService};
use crate::domain::actors::{ActorRef, RoomRef};
use crate::domain::bid::Bidder;
use crate::domain::bid_flow::BidAttempt;
use crate::error::AppError;
use crate::platform::{FormValues, InteractionTrigger};
use crate::protocol::action_token::ActionPayload;
use crate::services::forms::{self, BID_VALUE_FIELD};
use crate::services::notices;

impl AuctionFlowService {
    /// start-bid: Idle -> Proposed, opens the bid entry form.
    pub(super) async fn start_bid(
        &self,
        trigger: &InteractionTrigger,
        room: &RoomRef,
        actor: &ActorRef,
    ) -> Result<(), AppError> {
        let state = self.store.load(room).await?;
        ensure_accepting_bids(&state)?;

        let attempt = BidAttempt::start(room.id.clone(), &state, &actor.id);
        let form = forms::bid_form(&attempt)?;
        self.platform.forms.open_form(form, trigger, actor).await?;
        debug!(room_id = %room.id, actor_id = %actor.id, "Bid attempt started");
        Ok(())
    }

    /// send-bid: Proposed -> Confirming, opens the confirmation form.
    pub(super) async fn send_bid(
        &self,
        payload: ActionPayload,
        values: &FormValues,
        trigger: &InteractionTrigger,
        room: &RoomRef,
        actor: &ActorRef,
    ) -> Result<(), AppError> {
        let attempt = BidAttempt::resume(payload)?;
        let state = self.store.load(room).await?;
        ensure_accepting_bids(&state)?;

        let raw = values.text(BID_VALUE_FIELD);
        let attempt = attempt.propose(raw.as_deref(), &state)?;
        let form = forms::bid_form(&attempt)?;
        self.platform.forms.open_form(form, trigger, actor).await?;
        debug!(
            room_id = %room.id,
            actor_id = %actor.id,
            new_bid = ?attempt.new_bid_value().map(|v| v.get()),
            "Bid proposed"
        );
        Ok(())
    }

    /// confirm-bid: Confirming -> Confirmed. Records and announces the bid.
    pub(super) async fn confirm_bid(
        &self,
        payload: ActionPayload,
        room: &RoomRef,
        actor: &ActorRef,
    ) -> Result<(), AppError> {
        let attempt = BidAttempt::resume(payload)?;

        let bid = {
            let _guard = self.locks.lock(&room.id).await;
            let mut state = self.store.load(room).await?;
            ensure_accepting_bids(&state)?;
            let bid = attempt.confirm(Bidder::from(actor), &mut state)?;
            self.store.save(&room.id, &state).await?;
            bid
        };
        info!(
            room_id = %room.id,
            actor_id = %actor.id,
            bid_value = bid.bid_value.get(),
            "Winning bid recorded"
        );

        self.platform
            .messenger
            .send_message(forms::bid_actions_message(notices::new_bid(&bid)), room)
            .await?;
        Ok(())
    }
}
