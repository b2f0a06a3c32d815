//! Shared test utilities for the auction workspace.
//!
//! Holds the one-time tracing subscriber used by unit and integration tests.

pub mod logging;
