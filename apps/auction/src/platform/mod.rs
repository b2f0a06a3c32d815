//! Boundary to the chat platform.
//!
//! The workflow never talks to a chat transport directly. It asks these
//! collaborators to post messages, open forms and look up rooms; the
//! platform adapter that hosts the workflow implements them.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::actors::{ActorRef, RoomId, RoomRef};

pub mod forms;
pub mod messages;

pub use forms::{FormBlock, FormSpec, FormValues, SelectOption, ViewHandle};
pub use messages::{ButtonStyle, MessageAction, OutboundMessage};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlatformError {
    #[error("messaging failed: {0}")]
    Messaging(String),
    #[error("form rendering failed: {0}")]
    Rendering(String),
    #[error("directory lookup failed: {0}")]
    Directory(String),
}

/// Short-lived platform handle that allows opening a form in response to a
/// user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionTrigger(String);

impl InteractionTrigger {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InteractionTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[async_trait]
pub trait Messenger: Send + Sync {
    /// Post a message visible to everyone in `room`.
    async fn send_message(
        &self,
        message: OutboundMessage,
        room: &RoomRef,
    ) -> Result<(), PlatformError>;

    /// Show `text` to `actor` only, in the context of `room`.
    async fn send_private_notification(
        &self,
        text: &str,
        room: &RoomRef,
        actor: &ActorRef,
    ) -> Result<(), PlatformError>;
}

#[async_trait]
pub trait FormRenderer: Send + Sync {
    async fn open_form(
        &self,
        form: FormSpec,
        trigger: &InteractionTrigger,
        actor: &ActorRef,
    ) -> Result<ViewHandle, PlatformError>;
}

#[async_trait]
pub trait Directory: Send + Sync {
    async fn room_by_name(&self, name: &str) -> Result<Option<RoomRef>, PlatformError>;

    async fn room_by_id(&self, id: &RoomId) -> Result<Option<RoomRef>, PlatformError>;
}

/// The collaborators one workflow instance talks to.
#[derive(Clone)]
pub struct Platform {
    pub messenger: Arc<dyn Messenger>,
    pub forms: Arc<dyn FormRenderer>,
    pub directory: Arc<dyn Directory>,
}

impl Platform {
    pub fn new(
        messenger: Arc<dyn Messenger>,
        forms: Arc<dyn FormRenderer>,
        directory: Arc<dyn Directory>,
    ) -> Self {
        Self {
            messenger,
            forms,
            directory,
        }
    }
}

impl fmt::Debug for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Platform").finish_non_exhaustive()
    }
}
