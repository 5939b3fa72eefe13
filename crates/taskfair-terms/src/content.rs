//! The Taskfair Terms of Service content.
//!
//! Static and immutable for the process lifetime; built once on first
//! access. Wording changes bump [`TERMS_VERSION`] so acceptance records
//! stay meaningful.

use crate::document::{FeeRow, FeeTable, TermsBlock, TermsDocument, TermsSection, TermsSubsection};
use std::sync::OnceLock;

/// Revision identifier stamped on acceptance records.
pub const TERMS_VERSION: &str = "1.2.0";

/// Static storage for the terms document (initialized once).
static TERMS: OnceLock<TermsDocument> = OnceLock::new();

/// Returns the current Terms of Service document.
pub fn terms_document() -> &'static TermsDocument {
    TERMS.get_or_init(build_document)
}

fn build_document() -> TermsDocument {
    TermsDocument {
        title: "Taskfair Terms of Service",
        last_updated: "June 12, 2026",
        preamble: "These terms govern your use of Taskfair, the marketplace where people post everyday tasks and skilled taskers offer to complete them. Please read them before creating an account; by using Taskfair you agree to everything below.",
        sections: vec![
            TermsSection::new(
                "acceptance",
                "1. Acceptance of These Terms",
                vec![
                    TermsBlock::paragraph(
                        "By creating an account, posting a task, or making an offer, you agree to be bound by these Terms of Service and our Privacy Policy. If you do not agree, do not use Taskfair.",
                    ),
                    TermsBlock::paragraph(
                        "You must be at least 18 years old and able to enter a binding contract in your place of residence to use the marketplace.",
                    ),
                ],
            ),
            TermsSection::new(
                "marketplace",
                "2. The Taskfair Marketplace",
                vec![
                    TermsBlock::paragraph(
                        "Taskfair is a venue. We connect people who need tasks done (posters) with people who do them (taskers); the contract for the work itself forms directly between the poster and the tasker when an offer is accepted.",
                    ),
                    TermsBlock::bullets(&[
                        "We do not employ taskers, supervise work, or guarantee outcomes.",
                        "We verify tasker identity where the Verified badge is shown, but verification is not an endorsement.",
                        "Ratings and reviews are provided by users, not by Taskfair.",
                    ]),
                ],
            ),
            TermsSection::new(
                "accounts",
                "3. Your Account",
                vec![
                    TermsBlock::bullets(&[
                        "Keep your registration details accurate and up to date.",
                        "One person per account; accounts are not transferable.",
                        "You are responsible for everything that happens under your credentials.",
                    ]),
                ],
            )
            .with_subsection(TermsSubsection::new(
                "Keeping your account secure",
                vec![
                    TermsBlock::bullets(&[
                        "Choose a strong, unique password and do not reuse it elsewhere.",
                        "Enable two-factor authentication in your account settings.",
                        "Tell us immediately at security@taskfair.app if you suspect unauthorized access.",
                        "Taskfair staff will never ask you for your password or a verification code.",
                    ]),
                ],
            )),
            TermsSection::new(
                "posting",
                "4. Posting Tasks and Making Offers",
                vec![
                    TermsBlock::paragraph(
                        "Task posts must describe the work honestly, including location, timing, and budget. Offers are binding proposals: if the poster accepts your offer, you commit to completing the task as described for the agreed price.",
                    ),
                    TermsBlock::bullets(&[
                        "Tasks must be legal and safe to perform.",
                        "The agreed price covers the work described in the post; scope changes need a new agreement in the task thread.",
                        "Arranging payment outside the platform to avoid fees is a breach of these terms.",
                    ]),
                ],
            ),
            TermsSection::new(
                "payments",
                "5. Payments, Fees and Escrow",
                vec![
                    TermsBlock::paragraph(
                        "When a poster accepts an offer, the agreed amount is charged and held in escrow. Escrowed funds are released to the tasker when the poster confirms completion, or automatically 7 days after the tasker marks the task complete if the poster neither confirms nor raises a dispute.",
                    ),
                    TermsBlock::paragraph(
                        "Taskfair charges taskers a service fee of 15% of the agreed price, deducted when escrow is released. Posters pay exactly the agreed price; the fee is never added on top.",
                    ),
                    TermsBlock::fee_schedule(FeeTable {
                        caption: "Worked examples at the standard 15% service fee",
                        columns: vec!["Task value", "Service fee", "Tasker receives"],
                        rows: vec![
                            FeeRow {
                                task_value: "$50.00",
                                service_fee: "$7.50",
                                tasker_receives: "$42.50",
                            },
                            FeeRow {
                                task_value: "$120.00",
                                service_fee: "$18.00",
                                tasker_receives: "$102.00",
                            },
                            FeeRow {
                                task_value: "$400.00",
                                service_fee: "$60.00",
                                tasker_receives: "$340.00",
                            },
                        ],
                    }),
                ],
            ),
            TermsSection::new(
                "cancellations",
                "6. Cancellations and Refunds",
                vec![
                    TermsBlock::bullets(&[
                        "Posters may cancel free of charge before an offer is accepted.",
                        "After acceptance, cancellations by either side should be agreed in the task thread; escrowed funds return to the poster when both sides agree.",
                        "Repeated no-shows or late cancellations can lead to account limits.",
                    ]),
                ],
            ),
            TermsSection::new(
                "disputes",
                "7. Disputes",
                vec![
                    TermsBlock::paragraph(
                        "If something goes wrong with a task, this is the process:",
                    ),
                    TermsBlock::steps(&[
                        "Raise the problem with the other party in the task thread; most issues are resolved directly.",
                        "If that fails, open a dispute from the task page within 14 days of the task being marked complete.",
                        "While a dispute is open, the escrowed funds for that task are frozen.",
                        "Our resolution team reviews the evidence from both sides and issues a decision within 5 business days.",
                        "The decision is final as far as the escrowed funds are concerned; it does not limit rights either party has against the other under law.",
                    ]),
                ],
            ),
            TermsSection::new(
                "conduct",
                "8. Acceptable Use",
                vec![
                    TermsBlock::paragraph("You agree not to:"),
                    TermsBlock::bullets(&[
                        "Post tasks that are unlawful, dangerous, or require licenses the tasker does not hold.",
                        "Take agreed work off-platform to circumvent fees or escrow.",
                        "Impersonate another person or misrepresent your identity or qualifications.",
                        "Harass other users, or scrape, probe, or disrupt the service.",
                    ]),
                ],
            ),
            TermsSection::new(
                "liability",
                "9. Liability and Warranty",
                vec![
                    TermsBlock::paragraph(
                        "The service is provided \"as is\" without warranties of any kind. To the maximum extent permitted by law, Taskfair is not liable for indirect, incidental, or consequential damages arising from tasks arranged through the marketplace, and our total liability for any claim is capped at the fees we received for the task concerned.",
                    ),
                    TermsBlock::paragraph(
                        "Nothing in these terms excludes liability that cannot be excluded by law.",
                    ),
                ],
            ),
            TermsSection::new(
                "changes",
                "10. Changes and Contact",
                vec![
                    TermsBlock::paragraph(
                        "We may update these terms from time to time. Material changes are announced in the app at least 14 days before they take effect; continuing to use Taskfair after that date constitutes acceptance of the new terms.",
                    ),
                    TermsBlock::paragraph(
                        "Questions about these terms go to support@taskfair.app.",
                    ),
                ],
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn all_blocks(document: &TermsDocument) -> Vec<&TermsBlock> {
        document
            .sections
            .iter()
            .flat_map(|section| {
                section.blocks.iter().chain(
                    section
                        .subsections
                        .iter()
                        .flat_map(|subsection| subsection.blocks.iter()),
                )
            })
            .collect()
    }

    #[test]
    fn test_section_keys_are_unique_and_resolvable() {
        let document = terms_document();
        let mut keys = HashSet::new();
        for section in &document.sections {
            assert!(keys.insert(section.key), "duplicate section key: {}", section.key);
            assert!(document.section(section.key).is_some());
        }
    }

    #[test]
    fn test_document_has_exactly_one_fee_table() {
        let tables = all_blocks(terms_document())
            .into_iter()
            .filter(|block| matches!(block, TermsBlock::FeeSchedule { .. }))
            .count();
        assert_eq!(tables, 1);
    }

    #[test]
    fn test_fee_rows_match_the_table_columns() {
        let document = terms_document();
        let payments = document.section("payments").unwrap();
        let table = payments
            .blocks
            .iter()
            .find_map(|block| match block {
                TermsBlock::FeeSchedule { table } => Some(table),
                _ => None,
            })
            .expect("payments section should carry the fee table");

        assert_eq!(table.columns.len(), 3);
        assert!(!table.rows.is_empty());
    }

    #[test]
    fn test_payments_section_covers_escrow() {
        let payments = terms_document().section("payments").unwrap();
        let mentions_escrow = payments.blocks.iter().any(|block| match block {
            TermsBlock::Paragraph { text } => text.contains("escrow"),
            _ => false,
        });
        assert!(mentions_escrow);
    }

    #[test]
    fn test_every_section_has_content() {
        for section in &terms_document().sections {
            assert!(
                !section.blocks.is_empty() || !section.subsections.is_empty(),
                "section {} is empty",
                section.key
            );
        }
    }

    #[test]
    fn test_document_is_built_once() {
        let first = terms_document() as *const TermsDocument;
        let second = terms_document() as *const TermsDocument;
        assert_eq!(first, second);
    }
}
