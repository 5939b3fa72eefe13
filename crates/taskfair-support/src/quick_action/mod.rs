//! Quick Action catalog.
//!
//! Quick actions are the predefined shortcut buttons displayed above the
//! chat input, each mapped 1:1 to a response topic.

mod builtin;
mod model;

pub use builtin::{find_by_display_text, find_quick_action, quick_actions};
pub use model::QuickAction;
