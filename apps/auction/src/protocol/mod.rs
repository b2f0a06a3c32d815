pub mod action_token;

pub use action_token::{ActionPayload, ActionTag, MalformedTokenError, TOKEN_VERSION};
