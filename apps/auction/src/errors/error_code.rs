//! Error codes for the auction workflow.
//!
//! Every failure the controller reports, logs or notifies carries one of
//! these codes. Add new codes here; never pass ad-hoc strings as error codes.

use core::fmt;

/// Centralized error codes, rendered as SCREAMING_SNAKE_CASE strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Preconditions
    /// Command needs an interaction trigger to open a form
    MissingTrigger,

    // Authorization
    /// Actor is neither admin nor auctioneer
    NotAuctioneer,
    /// Auction is finished and locked
    AuctionFinished,
    /// Auction is not open for bids
    AuctionNotRunning,

    // Routing
    /// Discriminator or action tag is not handled
    UnknownAction,
    /// Action token could not be decoded
    MalformedToken,
    /// Action token reached the wrong workflow step
    StageMismatch,
    /// Room referenced by a token does not exist
    RoomNotFound,

    // Validation
    /// Bid value could not be used
    InvalidBid,
    /// Bid does not beat the winning bid
    BidNotImproving,
    /// Question text is empty
    EmptyQuestion,
    /// Configuration form input is invalid
    InvalidConfiguration,
    /// Named room does not exist
    UnknownRoom,
    /// General validation error
    ValidationError,

    // Lookup
    /// Configured questions room does not exist
    QuestionsRoomNotFound,
    /// General not found error
    NotFound,

    // Invariants
    /// Mutation attempted after the auction finished
    AuctionLocked,

    // System
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Stored record could not be rebuilt
    DataCorruption,
    /// Chat platform collaborator failed
    PlatformError,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingTrigger => "MISSING_TRIGGER",
            Self::NotAuctioneer => "NOT_AUCTIONEER",
            Self::AuctionFinished => "AUCTION_FINISHED",
            Self::AuctionNotRunning => "AUCTION_NOT_RUNNING",
            Self::UnknownAction => "UNKNOWN_ACTION",
            Self::MalformedToken => "MALFORMED_TOKEN",
            Self::StageMismatch => "STAGE_MISMATCH",
            Self::RoomNotFound => "ROOM_NOT_FOUND",
            Self::InvalidBid => "INVALID_BID",
            Self::BidNotImproving => "BID_NOT_IMPROVING",
            Self::EmptyQuestion => "EMPTY_QUESTION",
            Self::InvalidConfiguration => "INVALID_CONFIGURATION",
            Self::UnknownRoom => "UNKNOWN_ROOM",
            Self::ValidationError => "VALIDATION_ERROR",
            Self::QuestionsRoomNotFound => "QUESTIONS_ROOM_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",
            Self::AuctionLocked => "AUCTION_LOCKED",
            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::PlatformError => "PLATFORM_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Every code, in declaration order.
    pub const ALL: [ErrorCode; 22] = [
        Self::MissingTrigger,
        Self::NotAuctioneer,
        Self::AuctionFinished,
        Self::AuctionNotRunning,
        Self::UnknownAction,
        Self::MalformedToken,
        Self::StageMismatch,
        Self::RoomNotFound,
        Self::InvalidBid,
        Self::BidNotImproving,
        Self::EmptyQuestion,
        Self::InvalidConfiguration,
        Self::UnknownRoom,
        Self::ValidationError,
        Self::QuestionsRoomNotFound,
        Self::NotFound,
        Self::AuctionLocked,
        Self::DbError,
        Self::DbUnavailable,
        Self::DataCorruption,
        Self::PlatformError,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
