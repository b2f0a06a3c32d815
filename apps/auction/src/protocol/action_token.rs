//! Continuation tokens passed through the chat platform's UI layer.
//!
//! The platform treats a token as an opaque identifier attached to a form's
//! submit button and hands it back on submission. There is no server-side
//! session between form steps, so everything a later step needs travels in
//! the token.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::actors::RoomId;
use crate::domain::bid::BidValue;
use crate::errors::domain::DomainError;

pub const TOKEN_VERSION: u8 = 1;

/// Workflow step discriminator, shared by button action ids and token tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionTag {
    ConfigureAuction,
    StartBid,
    SendBid,
    ConfirmBid,
    Help,
    SendQuestion,
}

impl ActionTag {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConfigureAuction => "configure-auction",
            Self::StartBid => "start-bid",
            Self::SendBid => "send-bid",
            Self::ConfirmBid => "confirm-bid",
            Self::Help => "help",
            Self::SendQuestion => "send-question",
        }
    }
}

impl fmt::Display for ActionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActionTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "configure-auction" => Ok(Self::ConfigureAuction),
            "start-bid" => Ok(Self::StartBid),
            "send-bid" => Ok(Self::SendBid),
            "confirm-bid" => Ok(Self::ConfirmBid),
            "help" => Ok(Self::Help),
            "send-question" => Ok(Self::SendQuestion),
            other => Err(DomainError::malformed_token(format!(
                "unknown action tag '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ActionPayload {
    pub version: u8,
    pub action_tag: ActionTag,
    pub room_id: RoomId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_bid_value: Option<BidValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winning_bid_value: Option<BidValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_bid_value: Option<BidValue>,
}

impl ActionPayload {
    pub fn new(action_tag: ActionTag, room_id: RoomId) -> Self {
        Self {
            version: TOKEN_VERSION,
            action_tag,
            room_id,
            previous_bid_value: None,
            winning_bid_value: None,
            new_bid_value: None,
        }
    }

    pub fn with_previous_bid(mut self, value: Option<BidValue>) -> Self {
        self.previous_bid_value = value;
        self
    }

    pub fn with_winning_bid(mut self, value: Option<BidValue>) -> Self {
        self.winning_bid_value = value;
        self
    }

    pub fn with_new_bid(mut self, value: Option<BidValue>) -> Self {
        self.new_bid_value = value;
        self
    }

    /// Same bid context, next workflow step.
    pub fn advance(&self, action_tag: ActionTag) -> Self {
        Self {
            action_tag,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed action token: {reason}")]
pub struct MalformedTokenError {
    pub reason: String,
}

impl From<MalformedTokenError> for DomainError {
    fn from(e: MalformedTokenError) -> Self {
        DomainError::malformed_token(e.reason)
    }
}

pub fn encode(payload: &ActionPayload) -> Result<String, DomainError> {
    serde_json::to_string(payload)
        .map_err(|e| DomainError::malformed_token(format!("could not encode payload: {e}")))
}

pub fn decode(token: &str) -> Result<ActionPayload, MalformedTokenError> {
    let payload: ActionPayload =
        serde_json::from_str(token).map_err(|e| MalformedTokenError {
            reason: e.to_string(),
        })?;
    if payload.version != TOKEN_VERSION {
        return Err(MalformedTokenError {
            reason: format!(
                "unsupported token version {} (expected {TOKEN_VERSION})",
                payload.version
            ),
        });
    }
    Ok(payload)
}
