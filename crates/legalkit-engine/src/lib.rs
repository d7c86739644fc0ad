//! Document assembly engine
//!
//! Takes a validated questionnaire input and produces the requested legal
//! documents in a fixed canonical order, each carrying both its markup body
//! and a standalone HTML rendering.

pub mod disclaimers;
pub mod numbering;
pub mod templates;
pub mod validate;

pub use validate::{validate, InvalidInput};

use chrono::Utc;
use legalkit_markup::html;
use legalkit_types::{DocumentKind, GeneratedDocument, QuestionnaireInput};
use uuid::Uuid;

/// Stateless façade over validation, rendering, and HTML export.
///
/// One call to [`DocumentEngine::generate`] produces every document the
/// input requests; documents are emitted in [`DocumentKind::GENERATION_ORDER`]
/// regardless of the order the input listed them in.
#[derive(Debug, Default, Clone, Copy)]
pub struct DocumentEngine;

impl DocumentEngine {
    pub fn new() -> Self {
        Self
    }

    /// Generate all requested documents from the questionnaire input.
    ///
    /// Validation runs first; nothing is rendered on invalid input.
    pub fn generate(
        &self,
        input: &QuestionnaireInput,
    ) -> Result<Vec<GeneratedDocument>, InvalidInput> {
        validate::validate(input)?;

        let mut documents = Vec::with_capacity(input.documents.len());
        for kind in DocumentKind::GENERATION_ORDER {
            if !input.documents.contains(&kind) {
                continue;
            }
            documents.push(self.generate_one(kind, input));
        }
        Ok(documents)
    }

    fn generate_one(&self, kind: DocumentKind, input: &QuestionnaireInput) -> GeneratedDocument {
        tracing::debug!(kind = kind.slug(), company = %input.company_name, "rendering document");
        let markup_body = templates::render(kind, input);
        let blocks = legalkit_markup::parse(&markup_body);
        let fragment = html::render_blocks(&blocks);
        let title = format!("{} — {}", kind.display_name(), input.company_name);
        let html_body = html::render_page(&title, &fragment);
        GeneratedDocument {
            id: format!("{}-{}", kind.id_prefix(), Uuid::new_v4()),
            kind,
            title,
            markup_body,
            html_body,
            created_at: Utc::now(),
            company_name: input.company_name.clone(),
        }
    }
}
