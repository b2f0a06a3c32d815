use crate::protocol::action_token::ActionTag;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Danger,
}

/// A button attached to a room message. Clicking it comes back as a button
/// click carrying `action` as the discriminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageAction {
    pub action: ActionTag,
    pub label: String,
    pub style: ButtonStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    /// Markdown body.
    pub text: String,
    pub actions: Vec<MessageAction>,
}

impl OutboundMessage {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            actions: Vec::new(),
        }
    }

    pub fn with_action(
        mut self,
        action: ActionTag,
        label: impl Into<String>,
        style: ButtonStyle,
    ) -> Self {
        self.actions.push(MessageAction {
            action,
            label: label.into(),
            style,
        });
        self
    }
}
