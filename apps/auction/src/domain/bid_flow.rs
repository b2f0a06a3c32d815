//! Propose/confirm state machine for a single bidding attempt.
//!
//! An attempt lives only inside its continuation token: the `send-bid` tag
//! means the bidder is looking at the entry form (Proposed), `confirm-bid`
//! means they are looking at the confirmation form (Confirming).

use crate::domain::actors::{ActorId, RoomId};
use crate::domain::auction::{AuctionState, AuctionType};
use crate::domain::bid::{Bid, BidValue, Bidder};
use crate::errors::domain::{DomainError, ValidationKind};
use crate::protocol::action_token::{ActionPayload, ActionTag};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BidStage {
    Idle,
    Proposed,
    Confirming,
    Confirmed,
    Abandoned,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BidAttempt {
    stage: BidStage,
    context: ActionPayload,
}

impl BidAttempt {
    /// Idle -> Proposed. Context carries the current winning value, and the
    /// bidder's own value when they hold the winning bid.
    pub fn start(room_id: RoomId, state: &AuctionState, bidder: &ActorId) -> Self {
        let winning = state.winning_bid();
        let winning_value = winning.map(|bid| bid.bid_value);
        let previous_value = winning
            .filter(|bid| &bid.bidder.id == bidder)
            .map(|bid| bid.bid_value);

        let context = ActionPayload::new(ActionTag::SendBid, room_id)
            .with_winning_bid(winning_value)
            .with_previous_bid(previous_value);

        Self {
            stage: BidStage::Proposed,
            context,
        }
    }

    /// Rebuild an attempt from a decoded token.
    pub fn resume(payload: ActionPayload) -> Result<Self, DomainError> {
        let stage = match payload.action_tag {
            ActionTag::SendBid => BidStage::Proposed,
            ActionTag::ConfirmBid => {
                if payload.new_bid_value.is_none() {
                    return Err(DomainError::malformed_token(
                        "confirm-bid token carries no bid value",
                    ));
                }
                BidStage::Confirming
            }
            other => {
                return Err(DomainError::stage_mismatch(format!(
                    "{other} is not a bidding step"
                )))
            }
        };
        Ok(Self {
            stage,
            context: payload,
        })
    }

    pub fn stage(&self) -> BidStage {
        self.stage
    }

    /// Token payload for the form of the current stage.
    pub fn context(&self) -> &ActionPayload {
        &self.context
    }

    pub fn room_id(&self) -> &RoomId {
        &self.context.room_id
    }

    pub fn new_bid_value(&self) -> Option<BidValue> {
        self.context.new_bid_value
    }

    fn expect_stage(&self, expected: BidStage) -> Result<(), DomainError> {
        if self.stage != expected {
            return Err(DomainError::stage_mismatch(format!(
                "bid attempt is {:?}, expected {expected:?}",
                self.stage
            )));
        }
        Ok(())
    }

    /// Proposed -> Confirming. `raw_value` is the text typed into the form.
    pub fn propose(self, raw_value: Option<&str>, state: &AuctionState) -> Result<Self, DomainError> {
        self.expect_stage(BidStage::Proposed)?;

        let value = BidValue::parse(raw_value.unwrap_or_default())?;
        ensure_improves(value, state)?;

        let context = self
            .context
            .advance(ActionTag::ConfirmBid)
            .with_winning_bid(state.winning_bid().map(|bid| bid.bid_value))
            .with_new_bid(Some(value));

        Ok(Self {
            stage: BidStage::Confirming,
            context,
        })
    }

    /// Confirming -> Confirmed. Records the bid as the auction's winning bid.
    pub fn confirm(self, bidder: Bidder, state: &mut AuctionState) -> Result<Bid, DomainError> {
        self.expect_stage(BidStage::Confirming)?;

        let value = self.context.new_bid_value.ok_or_else(|| {
            DomainError::malformed_token("confirm-bid token carries no bid value")
        })?;
        // The winning bid may have moved since the value was proposed.
        ensure_improves(value, state)?;

        let bid = Bid::new(bidder, value);
        state.set_winning_bid(bid.clone())?;
        Ok(bid)
    }

    /// Any stage -> Abandoned. Nothing is recorded.
    pub fn abandon(self) -> BidStage {
        BidStage::Abandoned
    }
}

fn ensure_improves(value: BidValue, state: &AuctionState) -> Result<(), DomainError> {
    let (Some(auction_type), Some(winning)) = (state.auction_type(), state.winning_bid()) else {
        return Ok(());
    };
    if auction_type.improves_on(value.get(), winning.bid_value.get()) {
        return Ok(());
    }
    let direction = match auction_type {
        AuctionType::Forward => "higher",
        AuctionType::Reverse => "lower",
    };
    Err(DomainError::validation(
        ValidationKind::BidNotImproving,
        format!(
            "Your bid of {value} must be {direction} than the winning bid of {}",
            winning.bid_value
        ),
    ))
}
