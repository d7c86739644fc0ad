//! Section renderers, one module per document kind
//!
//! Each renderer is a pure function from the questionnaire input to one
//! markup-dialect document body. All five share the same outer frame:
//! disclaimer preamble, title block with company name and dates, numbered
//! sections, disclaimer footer.

pub mod cookie_policy;
pub mod disclaimer;
pub mod privacy_policy;
pub mod refund_policy;
pub mod terms_of_service;

use crate::disclaimers;
use chrono::{NaiveDate, Utc};
use legalkit_types::{DocumentKind, QuestionnaireInput};

/// Render one document kind from the questionnaire input
pub fn render(kind: DocumentKind, input: &QuestionnaireInput) -> String {
    match kind {
        DocumentKind::PrivacyPolicy => privacy_policy::render(input),
        DocumentKind::TermsOfService => terms_of_service::render(input),
        DocumentKind::CookiePolicy => cookie_policy::render(input),
        DocumentKind::RefundPolicy => refund_policy::render(input),
        DocumentKind::Disclaimer => disclaimer::render(input),
    }
}

/// Effective and last-updated dates embedded in the title block.
///
/// The effective date is user-supplied and may lie in the past or future;
/// the last-updated date always reflects generation time.
pub(crate) struct DocumentDates {
    pub effective: NaiveDate,
    pub updated: NaiveDate,
}

pub(crate) fn document_dates(input: &QuestionnaireInput) -> DocumentDates {
    let today = Utc::now().date_naive();
    DocumentDates {
        effective: input.effective_date.unwrap_or(today),
        updated: today,
    }
}

/// Wrap a document body in the shared frame: preamble, title block, body,
/// footer. Identical in shape across all five document kinds.
pub(crate) fn wrap_document(kind: DocumentKind, input: &QuestionnaireInput, body: &str) -> String {
    let dates = document_dates(input);
    format!(
        "{header}\n\n\
         # {name}\n\n\
         **{company}**\n\n\
         **Effective Date:** {effective}\n\
         **Last Updated:** {updated}\n\n\
         ---\n\n\
         {body}\n\
         ---\n\n\
         {footer}\n",
        header = disclaimers::DOCUMENT_HEADER,
        name = kind.display_name(),
        company = input.company_name,
        effective = dates.effective,
        updated = dates.updated,
        body = body.trim_end_matches('\n'),
        footer = disclaimers::DOCUMENT_FOOTER,
    )
}

/// Contact bullet list shared by every renderer's Contact section
pub(crate) fn contact_lines(input: &QuestionnaireInput) -> String {
    let mut lines = format!("- **Email:** {}\n", input.company_email);
    if let Some(address) = &input.company_address {
        lines.push_str(&format!("- **Address:** {}\n", address));
    }
    if let Some(website) = &input.company_website {
        lines.push_str(&format!("- **Website:** {}\n", website));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use legalkit_types::DocumentKind;

    fn input() -> QuestionnaireInput {
        QuestionnaireInput {
            company_name: "Acme Inc.".to_string(),
            company_email: "legal@acme.com".to_string(),
            company_website: Some("https://acme.com".to_string()),
            effective_date: NaiveDate::from_ymd_opt(2026, 1, 1),
            ..Default::default()
        }
    }

    #[test]
    fn test_frame_shape() {
        let doc = wrap_document(DocumentKind::Disclaimer, &input(), "## 1. Body\n\nText.\n");
        assert!(doc.starts_with("⚠️ IMPORTANT DISCLAIMER:"));
        assert!(doc.contains("# Disclaimer\n"));
        assert!(doc.contains("**Acme Inc.**"));
        assert!(doc.contains("**Effective Date:** 2026-01-01"));
        assert!(doc.contains("**Last Updated:**"));
        assert!(doc.trim_end().ends_with(crate::disclaimers::DOCUMENT_FOOTER));
        // Body sits between the two horizontal rules
        assert_eq!(doc.matches("\n---\n").count(), 2);
    }

    #[test]
    fn test_effective_date_defaults_to_today() {
        let mut input = input();
        input.effective_date = None;
        let dates = document_dates(&input);
        assert_eq!(dates.effective, dates.updated);
    }

    #[test]
    fn test_contact_lines_omit_missing_fields() {
        let mut input = input();
        input.company_address = None;
        input.company_website = None;
        let lines = contact_lines(&input);
        assert_eq!(lines, "- **Email:** legal@acme.com\n");
    }
}
