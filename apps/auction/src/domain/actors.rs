//! Identities of the people and rooms the workflow talks about.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Capability string the platform attaches to administrators.
pub const ADMIN_CAPABILITY: &str = "admin";
/// Capability string the platform attaches to application/service accounts.
pub const APP_CAPABILITY: &str = "app";

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActorId(String);

impl ActorId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(String);

impl RoomId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An actor as the chat platform presents it on each inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorRef {
    pub id: ActorId,
    pub username: String,
    /// Platform roles such as `"admin"` or `"app"`.
    pub capabilities: Vec<String>,
}

impl ActorRef {
    pub fn new(id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            id: ActorId::new(id),
            username: username.into(),
            capabilities: Vec::new(),
        }
    }

    pub fn with_capability(mut self, capability: impl Into<String>) -> Self {
        self.capabilities.push(capability.into());
        self
    }

    pub fn has_capability(&self, capability: &str) -> bool {
        self.capabilities.iter().any(|c| c == capability)
    }
}

/// A chat room. `slug` is the platform's slugified room name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomRef {
    pub id: RoomId,
    pub slug: String,
}

impl RoomRef {
    pub fn new(id: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: RoomId::new(id),
            slug: slug.into(),
        }
    }
}
