//! Quick Action domain model.

use crate::responder::Topic;
use serde::Serialize;

/// A predefined support shortcut shown as a button above the chat input.
///
/// Clicking one submits its `display_text` as if the user had typed it
/// and resolves directly to the canned response for `topic`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    /// Unique id the widget dispatches on.
    pub id: &'static str,
    /// Button label; also the user-message text recorded on click.
    pub display_text: &'static str,
    /// Grouping label for the button row.
    pub category: &'static str,
    /// The response-table entry this action resolves to.
    pub topic: Topic,
}

impl QuickAction {
    /// Creates a new quick action.
    pub const fn new(
        id: &'static str,
        display_text: &'static str,
        category: &'static str,
        topic: Topic,
    ) -> Self {
        Self {
            id,
            display_text,
            category,
            topic,
        }
    }
}
