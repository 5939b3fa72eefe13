//! The canned response bodies, one per topic.
//!
//! Bodies carry lightweight markdown markers (bold, bullets, numbered
//! steps) that the message view renders; the chat core treats them as
//! opaque text.

use super::topic::Topic;

const GENERAL: &str = r#"Hi there! I'm the Taskfair assistant. I can help with **payments**, **account security**, **posting tasks**, **finding taskers**, and **disputes**.

Pick a quick action below or just type your question."#;

const PAYMENT_HELP: &str = r#"Here's how payments work on Taskfair:

- When you accept an offer, the agreed amount is held securely in **escrow**.
- Funds are released to the tasker once you confirm the task is complete.
- If you don't confirm, escrow auto-releases 7 days after the tasker marks the task done.
- The service fee comes out of the tasker's side; it is never added on top of your price.

You can review every transaction under **Account → Payments**."#;

const ACCOUNT_SECURITY: &str = r#"Keeping your account safe is simple:

- Use a strong, unique password — you can change it under **Account → Security**.
- Turn on two-factor authentication to get alerts for sign-ins from new devices.
- Taskfair staff will **never** ask for your password or a verification code.
- If anything looks off, use *Sign out everywhere* and reset your password straight away."#;

const HOW_TO_POST: &str = r#"Posting a task takes about two minutes:

1. Tap **Post a task** and describe what you need done.
2. Add a location, or mark the task as remote, and pick a date.
3. Set your budget — fixed price or hourly.
4. Publish and watch the offers come in.

*Tip: tasks with photos and a clear budget get offers much faster.*"#;

const FIND_TASKERS: &str = r#"You don't have to go looking — taskers come to you once you post. While offers arrive you can:

- Browse tasker profiles, ratings and completion rates.
- Compare offers side by side and message taskers with questions.
- Look for the **Verified** badge: ID-checked taskers with a proven history.

When you're ready, accept an offer and your tasker is booked."#;

const DISPUTE_HELP: &str = r#"Sorry to hear something's gone wrong. Here's how disputes work:

1. Message the tasker first — most issues get sorted out directly.
2. If that fails, open a dispute from the task page within 14 days.
3. While a dispute is open, the escrowed funds stay **frozen**.
4. Our resolution team reviews both sides and decides within 5 business days.

You can start a dispute under **Task → Get help**."#;

/// Returns the canned response body for a topic.
///
/// The match is exhaustive, so every topic — including every topic a
/// quick action can point at — always resolves to a body.
pub fn response_for(topic: Topic) -> &'static str {
    match topic {
        Topic::PaymentHelp => PAYMENT_HELP,
        Topic::AccountSecurity => ACCOUNT_SECURITY,
        Topic::HowToPost => HOW_TO_POST,
        Topic::FindTaskers => FIND_TASKERS,
        Topic::DisputeHelp => DISPUTE_HELP,
        Topic::General => GENERAL,
    }
}

/// The greeting a fresh chat session opens with.
pub fn greeting() -> &'static str {
    response_for(Topic::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_topic_has_a_body() {
        for topic in Topic::ALL {
            assert!(
                !response_for(topic).trim().is_empty(),
                "empty response body for {}",
                topic
            );
        }
    }

    #[test]
    fn test_bodies_are_distinct() {
        for a in Topic::ALL {
            for b in Topic::ALL {
                if a != b {
                    assert_ne!(response_for(a), response_for(b), "{} and {} share a body", a, b);
                }
            }
        }
    }

    #[test]
    fn test_greeting_is_the_general_entry() {
        assert_eq!(greeting(), response_for(Topic::General));
    }
}
