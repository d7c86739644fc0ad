//! End-to-end generation tests across the full engine pipeline

use legalkit_engine::{DocumentEngine, InvalidInput};
use legalkit_markup::Block;
use legalkit_types::{
    CookieCategory, DisclaimerSection, DocumentKind, GeneratedDocument, Jurisdiction,
    QuestionnaireInput,
};
use pretty_assertions::assert_eq;

fn full_input() -> QuestionnaireInput {
    QuestionnaireInput {
        company_name: "Acme Inc.".to_string(),
        company_email: "legal@acme.com".to_string(),
        company_website: Some("https://acme.com".to_string()),
        company_address: Some("123 Main St, Springfield".to_string()),
        jurisdiction: Jurisdiction::California,
        data_collected: vec![
            "Name and email address".to_string(),
            "Payment information".to_string(),
        ],
        data_usage: vec!["Provide and maintain services".to_string()],
        third_party_sharing: true,
        third_parties: vec!["Stripe".to_string()],
        documents: vec![
            DocumentKind::Disclaimer,
            DocumentKind::PrivacyPolicy,
            DocumentKind::RefundPolicy,
            DocumentKind::TermsOfService,
            DocumentKind::CookiePolicy,
        ],
        uses_cookies: true,
        cookie_categories: vec![CookieCategory::Essential, CookieCategory::Analytics],
        gdpr_applicable: true,
        ccpa_applicable: true,
        has_user_accounts: true,
        accepts_payments: true,
        disclaimer_sections: vec![DisclaimerSection::NoGuarantees, DisclaimerSection::FairUse],
        ..Default::default()
    }
}

#[test]
fn test_output_order_is_canonical() {
    // Input lists the kinds in a scrambled order
    let docs = DocumentEngine::new().generate(&full_input()).unwrap();
    let kinds: Vec<DocumentKind> = docs.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![
            DocumentKind::PrivacyPolicy,
            DocumentKind::TermsOfService,
            DocumentKind::CookiePolicy,
            DocumentKind::RefundPolicy,
            DocumentKind::Disclaimer,
        ]
    );
}

#[test]
fn test_generation_is_deterministic_up_to_identity() {
    let engine = DocumentEngine::new();
    let input = full_input();
    let first = engine.generate(&input).unwrap();
    let second = engine.generate(&input).unwrap();
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.markup_body, b.markup_body);
        assert_eq!(a.html_body, b.html_body);
        assert_eq!(a.title, b.title);
        assert_ne!(a.id, b.id);
    }
}

#[test]
fn test_validation_failures_surface() {
    let mut input = full_input();
    input.company_email.clear();
    assert!(matches!(
        DocumentEngine::new().generate(&input),
        Err(InvalidInput::MissingContactEmail)
    ));

    let mut input = full_input();
    input.documents.clear();
    assert!(matches!(
        DocumentEngine::new().generate(&input),
        Err(InvalidInput::NoDocumentsRequested)
    ));
}

/// Every generated body parses into at least one heading per numbered
/// section marker, and the block count of a reparse is stable.
#[test]
fn test_markup_bodies_reparse_cleanly() {
    let docs = DocumentEngine::new().generate(&full_input()).unwrap();
    for doc in &docs {
        let blocks = legalkit_markup::parse(&doc.markup_body);
        let heading_blocks = blocks.iter().filter(|b| b.is_heading()).count();
        let marker_lines = doc
            .markup_body
            .lines()
            .filter(|l| l.starts_with("# ") || l.starts_with("## ") || l.starts_with("### "))
            .count();
        assert_eq!(
            heading_blocks, marker_lines,
            "heading count mismatch in {}",
            doc.title
        );
        // Title block always contributes the document name as the sole h1
        let h1s = blocks
            .iter()
            .filter(|b| matches!(b, Block::Heading { level: 1, .. }))
            .count();
        assert_eq!(h1s, 1, "expected exactly one top heading in {}", doc.title);
    }
}

#[test]
fn test_html_bodies_are_standalone_pages() {
    let docs = DocumentEngine::new().generate(&full_input()).unwrap();
    for doc in &docs {
        assert!(doc.html_body.starts_with("<!DOCTYPE html>"));
        assert!(doc.html_body.contains(&format!("<title>{}</title>", doc.title)));
        assert!(doc.html_body.trim_end().ends_with("</html>"));
    }
}

#[test]
fn test_documents_serialize_round_trip() {
    let docs = DocumentEngine::new().generate(&full_input()).unwrap();
    let json = serde_json::to_string(&docs).unwrap();
    let back: Vec<GeneratedDocument> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), docs.len());
    assert_eq!(back[0].id, docs[0].id);
    assert_eq!(back[0].markup_body, docs[0].markup_body);
}

#[test]
fn test_file_stems_derive_from_kind_and_company() {
    let docs = DocumentEngine::new().generate(&full_input()).unwrap();
    for doc in &docs {
        let stem = doc.file_stem();
        assert!(!stem.chars().any(char::is_whitespace));
        assert!(!stem.chars().any(char::is_uppercase));
        assert!(stem.starts_with(doc.kind.slug()));
        assert!(stem.ends_with("acme-inc."));
    }
}
