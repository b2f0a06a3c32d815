#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Room-scoped auction workflow for chat platforms.
//!
//! An auctioneer configures an auction per room, competitors place bids
//! through a propose/confirm form pair, questions are relayed to a separate
//! room, and a finished auction stays locked for good. The chat platform is
//! reached only through the collaborator traits in [`platform`].

pub mod adapters;
pub mod config;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod platform;
pub mod protocol;
pub mod repos;
pub mod services;
pub mod state;

// Re-exports for public API
pub use config::db::{db_url, DbProfile};
pub use config::roles::RoleTable;
pub use error::{AppError, ErrorClass};
pub use errors::domain::DomainError;
pub use errors::ErrorCode;
pub use infra::db::{bootstrap_db, connect_db};
pub use infra::state::build_state;
pub use platform::{Directory, FormRenderer, InteractionTrigger, Messenger, Platform, PlatformError};
pub use services::auction_flow::AuctionFlowService;
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    auction_test_support::logging::init();
}
