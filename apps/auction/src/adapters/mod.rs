//! Adapters for external dependencies.

pub mod auction_states_mem;
pub mod auction_states_sea;
