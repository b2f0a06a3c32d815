use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::actors::{ActorId, ActorRef};
use crate::errors::domain::{DomainError, ValidationKind};

/// A bid amount. Always finite and strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct BidValue(f64);

impl BidValue {
    pub fn new(value: f64) -> Result<Self, DomainError> {
        if !value.is_finite() {
            return Err(DomainError::validation(
                ValidationKind::InvalidBid,
                "Bid value must be a finite number",
            ));
        }
        if value <= 0.0 {
            return Err(DomainError::validation(
                ValidationKind::InvalidBid,
                "Bid value must be greater than zero",
            ));
        }
        Ok(Self(value))
    }

    /// Parse the raw text a bidder typed into the bid form.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidBid,
                "Please enter a bid value",
            ));
        }
        let value: f64 = trimmed.parse().map_err(|_| {
            DomainError::validation(
                ValidationKind::InvalidBid,
                format!("'{trimmed}' is not a valid bid value"),
            )
        })?;
        Self::new(value)
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for BidValue {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BidValue> for f64 {
    fn from(value: BidValue) -> Self {
        value.0
    }
}

impl fmt::Display for BidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who placed a bid. Capabilities are not part of a stored bid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bidder {
    pub id: ActorId,
    pub username: String,
}

impl From<&ActorRef> for Bidder {
    fn from(actor: &ActorRef) -> Self {
        Self {
            id: actor.id.clone(),
            username: actor.username.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bid {
    pub bidder: Bidder,
    pub bid_value: BidValue,
}

impl Bid {
    pub fn new(bidder: Bidder, bid_value: BidValue) -> Self {
        Self { bidder, bid_value }
    }
}
