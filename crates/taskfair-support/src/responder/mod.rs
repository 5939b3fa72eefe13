//! Canned-response selection.
//!
//! The "AI" behind the support chat: a static response table keyed by
//! [`Topic`] and a deterministic selector over it. No model, no service
//! call, no learned state.
//!
//! # Module Structure
//!
//! - `topic`: the topic keys the response table is indexed by
//! - `catalog`: the canned response bodies
//! - `selector`: first-match-wins keyword matching over free text

mod catalog;
mod selector;
mod topic;

pub use catalog::{greeting, response_for};
pub use selector::select_response;
pub use topic::{ParseTopicError, Topic};
