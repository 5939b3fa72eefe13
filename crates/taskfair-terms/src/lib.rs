pub mod acceptance;
pub mod content;
pub mod document;

// Re-export the surface the rendering layer works against
pub use acceptance::{AcceptanceError, TermsAcceptance};
pub use content::{TERMS_VERSION, terms_document};
pub use document::{FeeRow, FeeTable, TermsBlock, TermsDocument, TermsSection, TermsSubsection};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_the_current_terms_end_to_end() {
        let document = terms_document();
        assert!(!document.sections.is_empty());

        let mut acceptance = TermsAcceptance::new();
        acceptance.set_checked(true);
        acceptance.confirm().unwrap();
        assert_eq!(acceptance.accepted_version(), Some(TERMS_VERSION));
    }
}
