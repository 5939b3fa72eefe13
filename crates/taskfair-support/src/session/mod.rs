//! Support chat session domain module.
//!
//! This module contains the conversation log, the message types it is
//! made of, and the widget-local UI state wrapped around it.
//!
//! # Module Structure
//!
//! - `message`: message types (`MessageSender`, `ChatMessage`)
//! - `model`: the append-only conversation log (`ChatSession`)
//! - `widget`: open/closed flag and draft input (`SupportWidget`)

mod message;
mod model;
mod widget;

// Re-export public API
pub use message::{ChatMessage, MessageSender};
pub use model::ChatSession;
pub use widget::SupportWidget;
