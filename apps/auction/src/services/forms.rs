//! Form and announcement builders for each workflow step.

use crate::domain::actors::RoomRef;
use crate::domain::auction::{AuctionState, AuctionStatus, AuctionType};
use crate::domain::bid::BidValue;
use crate::domain::bid_flow::{BidAttempt, BidStage};
use crate::errors::domain::DomainError;
use crate::platform::{ButtonStyle, FormBlock, FormSpec, OutboundMessage, SelectOption};
use crate::protocol::action_token::{self, ActionPayload, ActionTag};

pub const QUESTIONS_ROOM_FIELD: &str = "questionsRoomName";
pub const STATUS_FIELD: &str = "auctionStatus";
pub const TYPE_FIELD: &str = "auctionType";
pub const BID_VALUE_FIELD: &str = "bidValue";
pub const QUESTION_FIELD: &str = "helpQuestion";

pub fn config_form(room: &RoomRef, state: &AuctionState) -> Result<FormSpec, DomainError> {
    let token = action_token::encode(&ActionPayload::new(
        ActionTag::ConfigureAuction,
        room.id.clone(),
    ))?;

    let status_options = [AuctionStatus::Running, AuctionStatus::Stopped];
    let initial_status = status_options
        .contains(&state.status())
        .then(|| state.status().as_str().to_string());

    Ok(FormSpec::new("Auction Configuration", token)
        .block(FormBlock::TextInput {
            field: QUESTIONS_ROOM_FIELD.into(),
            label: "Questions will be directed to room".into(),
            initial_value: Some(state.questions_room_name().to_string()),
            placeholder: None,
        })
        .block(FormBlock::Select {
            field: STATUS_FIELD.into(),
            label: "Auction status".into(),
            options: status_options
                .iter()
                .map(|s| SelectOption::new(s.label(), s.as_str()))
                .collect(),
            initial_value: initial_status,
        })
        .block(FormBlock::Select {
            field: TYPE_FIELD.into(),
            label: "Auction type".into(),
            options: [AuctionType::Forward, AuctionType::Reverse]
                .iter()
                .map(|t| SelectOption::new(t.as_str(), t.as_str()))
                .collect(),
            initial_value: state.auction_type().map(|t| t.as_str().to_string()),
        }))
}

fn shown(value: Option<BidValue>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Bid entry form (Proposed) or confirmation form (Confirming).
pub fn bid_form(attempt: &BidAttempt) -> Result<FormSpec, DomainError> {
    let context = attempt.context();
    let title = match attempt.stage() {
        BidStage::Proposed => "Send bid",
        BidStage::Confirming => "Confirm bid",
        other => {
            return Err(DomainError::stage_mismatch(format!(
                "no bid form for a {other:?} attempt"
            )))
        }
    };

    let mut form = FormSpec::new(title, action_token::encode(context)?)
        .block(FormBlock::Section {
            block_id: "previousBid".into(),
            markdown: format!("Your previous bid: *{}*", shown(context.previous_bid_value)),
        })
        .block(FormBlock::Section {
            block_id: "winningBid".into(),
            markdown: format!("Winning bid so far: *{}*", shown(context.winning_bid_value)),
        });

    form = if attempt.stage() == BidStage::Proposed {
        form.block(FormBlock::TextInput {
            field: BID_VALUE_FIELD.into(),
            label: "Your new bid".into(),
            initial_value: None,
            placeholder: None,
        })
    } else {
        form.block(FormBlock::Section {
            block_id: "confirmBid".into(),
            markdown: format!("Your new bid: *{}*", shown(context.new_bid_value)),
        })
    };
    Ok(form)
}

pub fn help_form(room: &RoomRef) -> Result<FormSpec, DomainError> {
    let token = action_token::encode(&ActionPayload::new(
        ActionTag::SendQuestion,
        room.id.clone(),
    ))?;
    Ok(FormSpec::new("Help", token)
        .block(FormBlock::Section {
            block_id: "helpText".into(),
            markdown: "Send a question to the *auctioneer*".into(),
        })
        .block(FormBlock::TextInput {
            field: QUESTION_FIELD.into(),
            label: "Question for the auctioneer".into(),
            initial_value: None,
            placeholder: Some("Type your question".into()),
        }))
}

/// Room message with the place-bid and help buttons attached.
pub fn bid_actions_message(markdown: impl Into<String>) -> OutboundMessage {
    OutboundMessage::text(markdown)
        .with_action(ActionTag::StartBid, "Place bid", ButtonStyle::Primary)
        .with_action(ActionTag::Help, "Help", ButtonStyle::Danger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::actors::RoomId;
    use crate::domain::auction::AuctionConfig;

    fn room() -> RoomRef {
        RoomRef::new("r-1", "sale")
    }

    #[test]
    fn config_form_prefills_current_values() {
        let mut state = AuctionState::new_for_room(&room());
        let fresh = config_form(&room(), &state).unwrap();
        match fresh.find_field(STATUS_FIELD) {
            Some(FormBlock::Select { initial_value, options, .. }) => {
                assert_eq!(initial_value, &None);
                assert_eq!(options.len(), 2);
            }
            other => panic!("unexpected {other:?}"),
        }

        state
            .configure(AuctionConfig::new(AuctionStatus::Stopped, AuctionType::Reverse, "qs").unwrap())
            .unwrap();
        let form = config_form(&room(), &state).unwrap();
        assert!(matches!(
            form.find_field(TYPE_FIELD),
            Some(FormBlock::Select { initial_value: Some(v), .. }) if v == "reverse"
        ));
        assert!(matches!(
            form.find_field(QUESTIONS_ROOM_FIELD),
            Some(FormBlock::TextInput { initial_value: Some(v), .. }) if v == "qs"
        ));
        let payload = action_token::decode(&form.submit_token).unwrap();
        assert_eq!(payload.action_tag, ActionTag::ConfigureAuction);
        assert_eq!(payload.room_id, RoomId::new("r-1"));
    }

    #[test]
    fn bid_form_follows_the_stage() {
        let mut state = AuctionState::new_for_room(&room());
        state
            .configure(AuctionConfig::new(AuctionStatus::Running, AuctionType::Forward, "q").unwrap())
            .unwrap();
        let proposed = BidAttempt::start(RoomId::new("r-1"), &state, &crate::domain::ActorId::new("u"));
        let form = bid_form(&proposed).unwrap();
        assert_eq!(form.title, "Send bid");
        assert!(form.find_field(BID_VALUE_FIELD).is_some());

        let confirming = proposed.propose(Some("12.5"), &state).unwrap();
        let form = bid_form(&confirming).unwrap();
        assert_eq!(form.title, "Confirm bid");
        assert!(form.find_field(BID_VALUE_FIELD).is_none());
        assert!(form.blocks.iter().any(|b| matches!(
            b,
            FormBlock::Section { markdown, .. } if markdown == "Your new bid: *12.5*"
        )));
        let payload = action_token::decode(&form.submit_token).unwrap();
        assert_eq!(payload.action_tag, ActionTag::ConfirmBid);
    }

    #[test]
    fn announcements_carry_bid_and_help_buttons() {
        let msg = bid_actions_message("hello");
        let tags: Vec<_> = msg.actions.iter().map(|a| a.action).collect();
        assert_eq!(tags, vec![ActionTag::StartBid, ActionTag::Help]);
        assert_eq!(msg.actions[1].style, ButtonStyle::Danger);
    }
}
