//! Chat message types.
//!
//! This module contains the types for entries in the support
//! conversation log: the sender tag and the message itself.

use serde::{Deserialize, Serialize};

/// The author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageSender {
    /// Typed (or quick-action-clicked) by the person using the widget.
    User,
    /// Produced by the canned-response selector.
    Assistant,
}

/// A single message in the support conversation.
///
/// Messages are immutable once created and owned by the session that
/// produced them; the session only ever appends. Canned bodies may carry
/// markdown-style markers for emphasis and bullets, which the message
/// view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Creation-ordered id, unique within one session.
    pub id: u64,
    /// Who authored the message.
    pub sender: MessageSender,
    /// The message body.
    pub text: String,
    /// Timestamp when the message was created (ISO 8601 format).
    pub created_at: String,
}

impl ChatMessage {
    fn new(id: u64, sender: MessageSender, text: impl Into<String>) -> Self {
        Self {
            id,
            sender,
            text: text.into(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Creates a user message.
    pub fn user(id: u64, text: impl Into<String>) -> Self {
        Self::new(id, MessageSender::User, text)
    }

    /// Creates an assistant message.
    pub fn assistant(id: u64, text: impl Into<String>) -> Self {
        Self::new(id, MessageSender::Assistant, text)
    }
}
