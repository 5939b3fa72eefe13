//! Builtin quick actions provided by the widget.
//!
//! These are always available and cannot be modified by users. They are
//! loaded once at startup and cached for the lifetime of the process.

use super::model::QuickAction;
use crate::responder::Topic;
use std::sync::OnceLock;

/// Static storage for the builtin quick actions (initialized once).
static QUICK_ACTIONS: OnceLock<Vec<QuickAction>> = OnceLock::new();

/// Returns the builtin quick actions, in display order.
///
/// The list is initialized on first access and cached for subsequent
/// calls.
pub fn quick_actions() -> &'static [QuickAction] {
    QUICK_ACTIONS.get_or_init(|| {
        vec![
            QuickAction::new(
                "qa-payments",
                "How do payments work?",
                "Payments",
                Topic::PaymentHelp,
            ),
            QuickAction::new(
                "qa-security",
                "Keep my account secure",
                "Account",
                Topic::AccountSecurity,
            ),
            QuickAction::new(
                "qa-post-task",
                "Help me post a task",
                "Getting started",
                Topic::HowToPost,
            ),
            QuickAction::new(
                "qa-find-taskers",
                "Find the right tasker",
                "Hiring",
                Topic::FindTaskers,
            ),
            QuickAction::new(
                "qa-disputes",
                "I have a problem with a task",
                "Resolution",
                Topic::DisputeHelp,
            ),
        ]
    })
}

/// Finds a quick action by its id.
pub fn find_quick_action(id: &str) -> Option<&'static QuickAction> {
    quick_actions().iter().find(|action| action.id == id)
}

/// Finds a quick action whose display text equals `text` exactly.
///
/// Quick-action dispatch matches on the full label, not on keywords, so
/// only the verbatim button text resolves here.
pub fn find_by_display_text(text: &str) -> Option<&'static QuickAction> {
    quick_actions()
        .iter()
        .find(|action| action.display_text == text)
}
