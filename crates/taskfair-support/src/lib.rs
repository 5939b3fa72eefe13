pub mod quick_action;
pub mod responder;
pub mod session;

// Re-export the surface the rendering layer works against
pub use quick_action::{QuickAction, quick_actions};
pub use responder::{Topic, select_response};
pub use session::{ChatMessage, ChatSession, MessageSender, SupportWidget};
