//! Structured Terms of Service document model.
//!
//! The document is purely declarative content: sections holding
//! paragraph, list, and fee-table blocks, with stable section keys the
//! accordion UI uses for its expand/collapse state. Nothing in here is
//! computed; the rendering layer walks the structure as-is.

use serde::Serialize;

/// The full terms document handed to the rendering layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsDocument {
    pub title: &'static str,
    /// Human-readable revision date shown under the title.
    pub last_updated: &'static str,
    /// Short lead-in paragraph shown above the sections.
    pub preamble: &'static str,
    pub sections: Vec<TermsSection>,
}

impl TermsDocument {
    /// Finds a section by its stable key.
    pub fn section(&self, key: &str) -> Option<&TermsSection> {
        self.sections.iter().find(|section| section.key == key)
    }
}

/// One expandable section of the terms document.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsSection {
    /// Stable key the accordion UI keys its open/closed state by.
    pub key: &'static str,
    pub heading: &'static str,
    pub blocks: Vec<TermsBlock>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<TermsSubsection>,
}

impl TermsSection {
    /// Creates a section with no subsections.
    pub fn new(key: &'static str, heading: &'static str, blocks: Vec<TermsBlock>) -> Self {
        Self {
            key,
            heading,
            blocks,
            subsections: Vec::new(),
        }
    }

    /// Adds a subsection.
    pub fn with_subsection(mut self, subsection: TermsSubsection) -> Self {
        self.subsections.push(subsection);
        self
    }
}

/// A titled subsection nested under a section.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsSubsection {
    pub heading: &'static str,
    pub blocks: Vec<TermsBlock>,
}

impl TermsSubsection {
    pub fn new(heading: &'static str, blocks: Vec<TermsBlock>) -> Self {
        Self { heading, blocks }
    }
}

/// One block of section content.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TermsBlock {
    /// A plain paragraph.
    Paragraph { text: &'static str },
    /// An unordered bullet list.
    Bullets { items: Vec<&'static str> },
    /// An ordered list (numbered steps).
    Steps { items: Vec<&'static str> },
    /// Worked fee examples rendered as a small table.
    FeeSchedule { table: FeeTable },
}

impl TermsBlock {
    pub fn paragraph(text: &'static str) -> Self {
        TermsBlock::Paragraph { text }
    }

    pub fn bullets(items: &[&'static str]) -> Self {
        TermsBlock::Bullets {
            items: items.to_vec(),
        }
    }

    pub fn steps(items: &[&'static str]) -> Self {
        TermsBlock::Steps {
            items: items.to_vec(),
        }
    }

    pub fn fee_schedule(table: FeeTable) -> Self {
        TermsBlock::FeeSchedule { table }
    }
}

/// Worked service-fee examples.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeTable {
    pub caption: &'static str,
    pub columns: Vec<&'static str>,
    pub rows: Vec<FeeRow>,
}

/// One worked example in the fee table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeRow {
    pub task_value: &'static str,
    pub service_fee: &'static str,
    pub tasker_receives: &'static str,
}
