//! Response selection for the support chat.
//!
//! This is the whole of the widget's "AI": a fixed, ordered decision
//! table over keyword substrings, plus an exact-label path for quick
//! actions.

use super::catalog::response_for;
use super::topic::Topic;
use crate::quick_action::find_by_display_text;

/// Ordered keyword rules for free-text input, first match wins.
///
/// Rule order is significant: earlier rules win when several keyword
/// sets match, so "post a task with a dispute" resolves to `HowToPost`,
/// never `DisputeHelp`. Matching is substring-based on the lowercased
/// input ("disputed" matches "dispute").
const KEYWORD_RULES: [(Topic, &[&str]); 5] = [
    (Topic::PaymentHelp, &["payment", "money"]),
    (Topic::AccountSecurity, &["security", "password"]),
    (Topic::HowToPost, &["post", "task", "create"]),
    (Topic::FindTaskers, &["tasker", "find", "hire"]),
    (Topic::DisputeHelp, &["dispute", "problem", "issue"]),
];

/// Selects the canned response for one user action.
///
/// With `is_quick_action` set, `input` is a quick action's display text
/// and is matched by exact equality; a label nothing matches falls back
/// to the `General` entry. Otherwise `input` is free text and runs
/// through [`KEYWORD_RULES`]; text no rule matches gets a fallback that
/// echoes the input and lists the supported topics.
///
/// Pure function of the input and the static tables. Every input,
/// including the empty string, produces a response; there is no error
/// path.
pub fn select_response(input: &str, is_quick_action: bool) -> String {
    if is_quick_action {
        return match find_by_display_text(input) {
            Some(action) => response_for(action.topic).to_string(),
            None => response_for(Topic::General).to_string(),
        };
    }

    let lowered = input.to_lowercase();
    for (topic, keywords) in KEYWORD_RULES {
        if keywords.iter().any(|keyword| lowered.contains(keyword)) {
            return response_for(topic).to_string();
        }
    }

    fallback_response(input)
}

/// Builds the catch-all reply for free text no rule matched.
///
/// Echoes the user's input verbatim so they can see what was (not)
/// understood, then lists the supported topics.
fn fallback_response(input: &str) -> String {
    let topics = Topic::SUPPORTED
        .iter()
        .map(|topic| format!("- {}", topic.label()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "I don't have a good answer for \"{}\" yet. I'm a simple helper with a short list of specialities:\n\n{}\n\nTry a quick action below, or rephrase your question.",
        input, topics
    )
}
