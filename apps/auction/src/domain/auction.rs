//! Per-room auction record and its lifecycle rules.
//!
//! Once an auction reaches [`AuctionStatus::Finished`] the record is frozen:
//! every mutator returns [`DomainError::StateInvariant`] and leaves the
//! state untouched.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::actors::RoomRef;
use crate::domain::bid::Bid;
use crate::errors::domain::{DomainError, InfraErrorKind, ValidationKind};

const QUESTIONS_ROOM_PREFIX: &str = "questions_";

/// Questions room used when a room has no stored auction record.
pub fn default_questions_room_name(room: &RoomRef) -> String {
    format!("{QUESTIONS_ROOM_PREFIX}{}", room.slug)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuctionStatus {
    NoAuction,
    Running,
    Stopped,
    Finished,
}

impl AuctionStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoAuction => "no_auction",
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Finished => "finished",
        }
    }

    /// Human-readable label used in announcements and form options.
    pub const fn label(self) -> &'static str {
        match self {
            Self::NoAuction => "no auction",
            Self::Running => "running",
            Self::Stopped => "stopped",
            Self::Finished => "finished",
        }
    }
}

impl fmt::Display for AuctionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AuctionStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no_auction" => Ok(Self::NoAuction),
            "running" => Ok(Self::Running),
            "stopped" => Ok(Self::Stopped),
            "finished" => Ok(Self::Finished),
            other => Err(DomainError::validation(
                ValidationKind::InvalidConfiguration,
                format!("Unknown auction status '{other}'"),
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuctionType {
    /// Highest bid wins.
    Forward,
    /// Lowest bid wins.
    Reverse,
}

impl AuctionType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Reverse => "reverse",
        }
    }

    /// Whether `candidate` beats `current` under this auction type.
    pub fn improves_on(self, candidate: f64, current: f64) -> bool {
        match self {
            Self::Forward => candidate > current,
            Self::Reverse => candidate < current,
        }
    }
}

impl fmt::Display for AuctionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuctionType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "forward" => Ok(Self::Forward),
            "reverse" => Ok(Self::Reverse),
            other => Err(DomainError::validation(
                ValidationKind::InvalidConfiguration,
                format!("Unknown auction type '{other}'"),
            )),
        }
    }
}

/// Values accepted from the configuration form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionConfig {
    pub status: AuctionStatus,
    pub auction_type: AuctionType,
    pub questions_room_name: String,
}

impl AuctionConfig {
    /// Validates raw form values. The configuration form only opens or
    /// pauses an auction; finishing goes through the finish command.
    pub fn new(
        status: AuctionStatus,
        auction_type: AuctionType,
        questions_room_name: &str,
    ) -> Result<Self, DomainError> {
        if !matches!(status, AuctionStatus::Running | AuctionStatus::Stopped) {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfiguration,
                format!("Auction status must be running or stopped, got {status}"),
            ));
        }
        let questions_room_name = questions_room_name.trim();
        if questions_room_name.is_empty() {
            return Err(DomainError::validation(
                ValidationKind::InvalidConfiguration,
                "Questions room name cannot be empty",
            ));
        }
        Ok(Self {
            status,
            auction_type,
            questions_room_name: questions_room_name.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuctionState {
    status: AuctionStatus,
    auction_type: Option<AuctionType>,
    questions_room_name: String,
    winning_bid: Option<Bid>,
}

impl AuctionState {
    /// Fresh state for a room that has never been configured.
    pub fn new_for_room(room: &RoomRef) -> Self {
        Self {
            status: AuctionStatus::NoAuction,
            auction_type: None,
            questions_room_name: default_questions_room_name(room),
            winning_bid: None,
        }
    }

    pub fn builder(questions_room_name: impl Into<String>) -> AuctionStateBuilder {
        AuctionStateBuilder::new(questions_room_name)
    }

    pub fn status(&self) -> AuctionStatus {
        self.status
    }

    pub fn auction_type(&self) -> Option<AuctionType> {
        self.auction_type
    }

    pub fn questions_room_name(&self) -> &str {
        &self.questions_room_name
    }

    pub fn winning_bid(&self) -> Option<&Bid> {
        self.winning_bid.as_ref()
    }

    pub fn is_finished(&self) -> bool {
        self.status == AuctionStatus::Finished
    }

    fn ensure_mutable(&self) -> Result<(), DomainError> {
        if self.is_finished() {
            return Err(DomainError::state_invariant(
                "Cannot change an auction that is already finished",
            ));
        }
        Ok(())
    }

    pub fn set_status(&mut self, status: AuctionStatus) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.status = status;
        Ok(())
    }

    pub fn set_auction_type(&mut self, auction_type: AuctionType) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.auction_type = Some(auction_type);
        Ok(())
    }

    pub fn set_questions_room_name(&mut self, name: impl Into<String>) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.questions_room_name = name.into();
        Ok(())
    }

    pub fn set_winning_bid(&mut self, bid: Bid) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.winning_bid = Some(bid);
        Ok(())
    }

    /// Apply a validated configuration in one step.
    pub fn configure(&mut self, config: AuctionConfig) -> Result<(), DomainError> {
        self.ensure_mutable()?;
        self.status = config.status;
        self.auction_type = Some(config.auction_type);
        self.questions_room_name = config.questions_room_name;
        Ok(())
    }

    /// Close the auction for good.
    pub fn finish(&mut self) -> Result<(), DomainError> {
        self.set_status(AuctionStatus::Finished)
    }
}

/// Rebuilds an [`AuctionState`] from stored parts, checking required fields.
#[derive(Debug, Clone)]
pub struct AuctionStateBuilder {
    status: AuctionStatus,
    auction_type: Option<AuctionType>,
    questions_room_name: String,
    winning_bid: Option<Bid>,
}

impl AuctionStateBuilder {
    pub fn new(questions_room_name: impl Into<String>) -> Self {
        Self {
            status: AuctionStatus::NoAuction,
            auction_type: None,
            questions_room_name: questions_room_name.into(),
            winning_bid: None,
        }
    }

    pub fn status(mut self, status: AuctionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn auction_type(mut self, auction_type: Option<AuctionType>) -> Self {
        self.auction_type = auction_type;
        self
    }

    pub fn winning_bid(mut self, winning_bid: Option<Bid>) -> Self {
        self.winning_bid = winning_bid;
        self
    }

    pub fn build(self) -> Result<AuctionState, DomainError> {
        if self.questions_room_name.trim().is_empty() {
            return Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                "auction record has an empty questions room name",
            ));
        }
        if matches!(self.status, AuctionStatus::Running | AuctionStatus::Stopped)
            && self.auction_type.is_none()
        {
            return Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("auction record is {} but has no type", self.status),
            ));
        }
        Ok(AuctionState {
            status: self.status,
            auction_type: self.auction_type,
            questions_room_name: self.questions_room_name,
            winning_bid: self.winning_bid,
        })
    }
}
