//! Widget-local UI state for the floating support chat.

use super::model::ChatSession;

/// Owns the reactive state behind the chat launcher: the open/closed
/// flag, the draft text in the input box, and the conversation itself.
///
/// Updates are plain synchronous field mutations; the rendering layer
/// re-reads the widget after each call.
#[derive(Debug, Clone)]
pub struct SupportWidget {
    session: ChatSession,
    is_open: bool,
    draft: String,
}

impl SupportWidget {
    /// Creates a closed widget with a fresh session and an empty input box.
    pub fn new() -> Self {
        Self {
            session: ChatSession::new(),
            is_open: false,
            draft: String::new(),
        }
    }

    /// Opens the chat panel.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Closes the chat panel. The session is kept; reopening shows the
    /// same conversation.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Toggles the chat panel, as the launcher button does.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Whether the chat panel is currently open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The current content of the input box.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replaces the input box content (one call per keystroke batch).
    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    /// Sends the current draft as a user message and clears the input
    /// box. A blank draft is left in place and nothing is submitted.
    pub fn send_draft(&mut self) {
        if self.draft.trim().is_empty() {
            return;
        }
        let draft = std::mem::take(&mut self.draft);
        self.session.submit_user_message(&draft);
    }

    /// Dispatches a quick action button press to the session.
    pub fn quick_action(&mut self, action_id: &str) {
        self.session.submit_quick_action(action_id);
    }

    /// Read access to the conversation for rendering.
    pub fn session(&self) -> &ChatSession {
        &self.session
    }
}

impl Default for SupportWidget {
    fn default() -> Self {
        Self::new()
    }
}
