//! Conversation state for one open support chat.

use super::message::ChatMessage;
use crate::quick_action::find_quick_action;
use crate::responder;
use uuid::Uuid;

/// The append-only conversation log behind one open chat widget.
///
/// A fresh session always starts with the assistant greeting, and every
/// accepted submission appends exactly two messages: the user's message
/// followed by the selected canned response. Messages are never edited,
/// removed, or reordered.
///
/// All updates happen synchronously through `&mut self`; there is one
/// session per open widget and a single UI thread driving it, so no
/// locking is involved.
#[derive(Debug, Clone)]
pub struct ChatSession {
    /// Unique session identifier (UUID format).
    id: String,
    /// The ordered message log, render order = chat order.
    messages: Vec<ChatMessage>,
    /// Next message id; ids are creation-ordered within the session.
    next_message_id: u64,
}

impl ChatSession {
    /// Creates a new session seeded with the assistant greeting.
    pub fn new() -> Self {
        let mut session = Self {
            id: Uuid::new_v4().to_string(),
            messages: Vec::new(),
            next_message_id: 1,
        };
        let id = session.take_message_id();
        session
            .messages
            .push(ChatMessage::assistant(id, responder::greeting()));
        session
    }

    /// Returns the session identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the full message log in chat order.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Returns the number of messages in the log.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Submits free text typed by the user.
    ///
    /// Blank input (empty or whitespace-only after trimming) is silently
    /// ignored. Otherwise the user message is recorded with the text
    /// exactly as given and the paired response is appended right after
    /// it, in one state transition.
    pub fn submit_user_message(&mut self, text: &str) {
        if text.trim().is_empty() {
            log::debug!("Ignoring blank chat submission");
            return;
        }

        let response = responder::select_response(text, false);
        self.append_exchange(text.to_string(), response);
    }

    /// Dispatches one of the predefined quick actions by id.
    ///
    /// The action's display text is recorded as the user message, and the
    /// response is resolved through the quick-action path rather than the
    /// keyword rules. Unknown ids are ignored.
    pub fn submit_quick_action(&mut self, action_id: &str) {
        let action = match find_quick_action(action_id) {
            Some(action) => action,
            None => {
                log::warn!("Unknown quick action id: {}", action_id);
                return;
            }
        };

        let response = responder::select_response(action.display_text, true);
        self.append_exchange(action.display_text.to_string(), response);
    }

    /// Appends a user message and its paired response.
    ///
    /// The response is computed before either message is constructed, so
    /// a reader of the log never sees a user message without its answer.
    fn append_exchange(&mut self, user_text: String, response: String) {
        let user = ChatMessage::user(self.take_message_id(), user_text);
        let assistant = ChatMessage::assistant(self.take_message_id(), response);
        self.messages.push(user);
        self.messages.push(assistant);
        log::debug!("Session {} grew to {} messages", self.id, self.messages.len());
    }

    fn take_message_id(&mut self) -> u64 {
        let id = self.next_message_id;
        self.next_message_id += 1;
        id
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::responder::{Topic, greeting, response_for};
    use crate::session::message::MessageSender;

    #[test]
    fn test_new_session_opens_with_the_greeting() {
        let session = ChatSession::new();

        assert_eq!(session.len(), 1);
        assert_eq!(session.messages()[0].sender, MessageSender::Assistant);
        assert_eq!(session.messages()[0].text, greeting());
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        assert_ne!(ChatSession::new().id(), ChatSession::new().id());
    }

    #[test]
    fn test_submission_appends_user_then_assistant() {
        let mut session = ChatSession::new();
        session.submit_user_message("How do refunds work after a dispute?");

        assert_eq!(session.len(), 3);
        let user = &session.messages()[1];
        let assistant = &session.messages()[2];
        assert_eq!(user.sender, MessageSender::User);
        assert_eq!(user.text, "How do refunds work after a dispute?");
        assert_eq!(assistant.sender, MessageSender::Assistant);
        assert_eq!(assistant.text, response_for(Topic::DisputeHelp));
    }

    #[test]
    fn test_raw_text_is_recorded_verbatim() {
        let mut session = ChatSession::new();
        session.submit_user_message("  payment  ");

        assert_eq!(session.messages()[1].text, "  payment  ");
        assert_eq!(session.messages()[2].text, response_for(Topic::PaymentHelp));
    }

    #[test]
    fn test_blank_submission_is_a_no_op() {
        let mut session = ChatSession::new();
        session.submit_user_message("   ");
        session.submit_user_message("");
        session.submit_user_message("\n\t");

        assert_eq!(session.len(), 1);
    }

    #[test]
    fn test_order_is_preserved_across_submissions() {
        let mut session = ChatSession::new();
        session.submit_user_message("first question about money");
        session.submit_user_message("second question about hiring");

        let texts: Vec<&str> = session
            .messages()
            .iter()
            .map(|message| message.text.as_str())
            .collect();
        assert_eq!(texts[1], "first question about money");
        assert_eq!(texts[2], response_for(Topic::PaymentHelp));
        assert_eq!(texts[3], "second question about hiring");
        assert_eq!(texts[4], response_for(Topic::FindTaskers));
    }

    #[test]
    fn test_message_ids_are_unique_and_increasing() {
        let mut session = ChatSession::new();
        session.submit_user_message("password reset");
        session.submit_user_message("post something");

        let ids: Vec<u64> = session.messages().iter().map(|message| message.id).collect();
        assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_quick_action_records_its_display_text() {
        let mut session = ChatSession::new();
        session.submit_quick_action("qa-disputes");

        assert_eq!(session.len(), 3);
        assert_eq!(session.messages()[1].text, "I have a problem with a task");
        assert_eq!(
            session.messages()[2].text,
            response_for(Topic::DisputeHelp)
        );
    }

    #[test]
    fn test_unknown_quick_action_id_is_a_no_op() {
        let mut session = ChatSession::new();
        session.submit_quick_action("qa-missing");

        assert_eq!(session.len(), 1);
    }
}
