//! Input validation boundary
//!
//! Renderers assume valid input and never raise; preconditions are checked
//! here, before any rendering starts.

use legalkit_types::{DocumentKind, QuestionnaireInput};
use thiserror::Error;

/// Precondition violations in the questionnaire input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    #[error("company name is required")]
    MissingCompanyName,

    #[error("contact email is required")]
    MissingContactEmail,

    #[error("at least one document kind must be requested")]
    NoDocumentsRequested,

    #[error("privacy policy requires at least one collected data category")]
    EmptyDataCollected,

    #[error("privacy policy requires at least one data usage purpose")]
    EmptyDataUsage,

    #[error("third-party sharing is enabled but no third parties are named")]
    NoThirdPartiesNamed,
}

/// Check the preconditions the renderers rely on
pub fn validate(input: &QuestionnaireInput) -> Result<(), InvalidInput> {
    if input.company_name.trim().is_empty() {
        return Err(InvalidInput::MissingCompanyName);
    }
    if input.company_email.trim().is_empty() {
        return Err(InvalidInput::MissingContactEmail);
    }
    if input.documents.is_empty() {
        return Err(InvalidInput::NoDocumentsRequested);
    }
    if input.documents.contains(&DocumentKind::PrivacyPolicy) {
        if input.data_collected.is_empty() {
            return Err(InvalidInput::EmptyDataCollected);
        }
        if input.data_usage.is_empty() {
            return Err(InvalidInput::EmptyDataUsage);
        }
    }
    if input.third_party_sharing && input.third_parties.is_empty() {
        return Err(InvalidInput::NoThirdPartiesNamed);
    }
    Ok(())
}
