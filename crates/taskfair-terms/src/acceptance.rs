//! Acceptance-checkbox state for the terms dialog.
//!
//! The dialog shows the terms, a single "I have read and agree"
//! checkbox, and a confirm button. This holds that state; what happens
//! after acceptance (closing the dialog, unlocking the product) belongs
//! to the caller.

use crate::content::TERMS_VERSION;
use serde::Serialize;
use thiserror::Error;

/// Error returned when confirmation is attempted without consent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AcceptanceError {
    /// The confirm button was pressed with the checkbox unticked.
    #[error("the terms checkbox must be ticked before confirming")]
    NotChecked,
}

/// State behind the terms acceptance checkbox and confirm button.
///
/// Acceptance is a one-way door: once confirmed, the timestamp and the
/// terms version in force at that moment are recorded and kept, even if
/// the checkbox is unticked afterwards. Confirming again is a no-op.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsAcceptance {
    /// Current checkbox state.
    checked: bool,
    /// RFC 3339 timestamp of the first successful confirmation.
    accepted_at: Option<String>,
    /// Terms revision in force when acceptance was confirmed.
    accepted_version: Option<&'static str>,
}

impl TermsAcceptance {
    /// Creates the initial state: unticked, not accepted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the checkbox state.
    ///
    /// Unticking after a successful confirmation does not revoke the
    /// recorded acceptance.
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// Whether the checkbox is currently ticked.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Whether the terms have been accepted.
    pub fn is_accepted(&self) -> bool {
        self.accepted_at.is_some()
    }

    /// When the terms were accepted, if they were.
    pub fn accepted_at(&self) -> Option<&str> {
        self.accepted_at.as_deref()
    }

    /// The terms revision that was accepted, if any.
    pub fn accepted_version(&self) -> Option<&'static str> {
        self.accepted_version
    }

    /// Confirms acceptance of the terms.
    ///
    /// Fails with [`AcceptanceError::NotChecked`] while the checkbox is
    /// unticked. On success the current time and [`TERMS_VERSION`] are
    /// recorded; repeat confirmations keep the first record.
    pub fn confirm(&mut self) -> Result<(), AcceptanceError> {
        if self.is_accepted() {
            log::debug!("Terms already accepted at {:?}", self.accepted_at);
            return Ok(());
        }
        if !self.checked {
            return Err(AcceptanceError::NotChecked);
        }

        self.accepted_at = Some(chrono::Utc::now().to_rfc3339());
        self.accepted_version = Some(TERMS_VERSION);
        log::debug!("Terms version {} accepted", TERMS_VERSION);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unticked_and_unaccepted() {
        let acceptance = TermsAcceptance::new();

        assert!(!acceptance.is_checked());
        assert!(!acceptance.is_accepted());
        assert_eq!(acceptance.accepted_at(), None);
        assert_eq!(acceptance.accepted_version(), None);
    }

    #[test]
    fn test_confirm_without_checkbox_fails() {
        let mut acceptance = TermsAcceptance::new();

        assert_eq!(acceptance.confirm(), Err(AcceptanceError::NotChecked));
        assert!(!acceptance.is_accepted());
    }

    #[test]
    fn test_confirm_records_timestamp_and_version() {
        let mut acceptance = TermsAcceptance::new();
        acceptance.set_checked(true);
        acceptance.confirm().unwrap();

        assert!(acceptance.is_accepted());
        assert_eq!(acceptance.accepted_version(), Some(TERMS_VERSION));
        let stamp = acceptance.accepted_at().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(stamp).is_ok());
    }

    #[test]
    fn test_repeat_confirmation_keeps_the_first_record() {
        let mut acceptance = TermsAcceptance::new();
        acceptance.set_checked(true);
        acceptance.confirm().unwrap();
        let first = acceptance.accepted_at().unwrap().to_string();

        acceptance.confirm().unwrap();
        assert_eq!(acceptance.accepted_at(), Some(first.as_str()));
    }

    #[test]
    fn test_unticking_does_not_revoke_acceptance() {
        let mut acceptance = TermsAcceptance::new();
        acceptance.set_checked(true);
        acceptance.confirm().unwrap();

        acceptance.set_checked(false);
        assert!(!acceptance.is_checked());
        assert!(acceptance.is_accepted());
    }

    #[test]
    fn test_serializes_with_camel_case_fields() {
        let mut acceptance = TermsAcceptance::new();
        acceptance.set_checked(true);
        acceptance.confirm().unwrap();

        let value = serde_json::to_value(&acceptance).unwrap();
        assert_eq!(value["checked"], true);
        assert!(value.get("acceptedAt").is_some());
        assert_eq!(value["acceptedVersion"], TERMS_VERSION);
    }
}
