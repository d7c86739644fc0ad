//! Shared data model for LegalKit document generation
//!
//! The questionnaire input describes a business's practices; the generated
//! document is the immutable record handed back to the caller. Everything in
//! this crate is plain data; no rendering logic lives here.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// The five supported legal document categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    PrivacyPolicy,
    TermsOfService,
    CookiePolicy,
    RefundPolicy,
    Disclaimer,
}

impl DocumentKind {
    /// Fixed generation order for a multi-document request
    pub const GENERATION_ORDER: [DocumentKind; 5] = [
        DocumentKind::PrivacyPolicy,
        DocumentKind::TermsOfService,
        DocumentKind::CookiePolicy,
        DocumentKind::RefundPolicy,
        DocumentKind::Disclaimer,
    ];

    /// Human-readable document name
    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentKind::PrivacyPolicy => "Privacy Policy",
            DocumentKind::TermsOfService => "Terms of Service",
            DocumentKind::CookiePolicy => "Cookie Policy",
            DocumentKind::RefundPolicy => "Refund Policy",
            DocumentKind::Disclaimer => "Disclaimer",
        }
    }

    /// Short tag used as the identifier prefix
    pub fn id_prefix(&self) -> &'static str {
        match self {
            DocumentKind::PrivacyPolicy => "pp",
            DocumentKind::TermsOfService => "tos",
            DocumentKind::CookiePolicy => "cp",
            DocumentKind::RefundPolicy => "rp",
            DocumentKind::Disclaimer => "dc",
        }
    }

    /// Kind slug used in derived filenames
    pub fn slug(&self) -> &'static str {
        match self {
            DocumentKind::PrivacyPolicy => "privacy-policy",
            DocumentKind::TermsOfService => "terms-of-service",
            DocumentKind::CookiePolicy => "cookie-policy",
            DocumentKind::RefundPolicy => "refund-policy",
            DocumentKind::Disclaimer => "disclaimer",
        }
    }
}

/// Business category, selects service-description and refund language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanyCategory {
    Saas,
    Ecommerce,
    MobileApp,
    Website,
    Marketplace,
    Other,
}

impl CompanyCategory {
    pub fn label(&self) -> &'static str {
        match self {
            CompanyCategory::Saas => "SaaS / Web Application",
            CompanyCategory::Ecommerce => "E-Commerce / Online Store",
            CompanyCategory::MobileApp => "Mobile Application",
            CompanyCategory::Website => "Website / Blog",
            CompanyCategory::Marketplace => "Marketplace / Platform",
            CompanyCategory::Other => "Other",
        }
    }
}

/// Primary jurisdiction selected in the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Jurisdiction {
    UnitedStates,
    EuropeanUnion,
    UnitedKingdom,
    California,
    Canada,
    Australia,
    Brazil,
    India,
    International,
}

impl Jurisdiction {
    pub fn label(&self) -> &'static str {
        match self {
            Jurisdiction::UnitedStates => "United States",
            Jurisdiction::EuropeanUnion => "European Union (GDPR)",
            Jurisdiction::UnitedKingdom => "United Kingdom",
            Jurisdiction::California => "California (CCPA/CPRA)",
            Jurisdiction::Canada => "Canada (PIPEDA)",
            Jurisdiction::Australia => "Australia",
            Jurisdiction::Brazil => "Brazil (LGPD)",
            Jurisdiction::India => "India",
            Jurisdiction::International => "International / Multiple",
        }
    }

    /// Parse from a questionnaire label (case-insensitive, prefix match)
    pub fn parse_label(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        let jurisdiction = if lower.contains("european") {
            Jurisdiction::EuropeanUnion
        } else if lower.contains("united kingdom") {
            Jurisdiction::UnitedKingdom
        } else if lower.contains("california") {
            Jurisdiction::California
        } else if lower.contains("canada") {
            Jurisdiction::Canada
        } else if lower.contains("australia") {
            Jurisdiction::Australia
        } else if lower.contains("brazil") {
            Jurisdiction::Brazil
        } else if lower.contains("india") {
            Jurisdiction::India
        } else if lower.contains("international") {
            Jurisdiction::International
        } else if lower.contains("united states") {
            Jurisdiction::UnitedStates
        } else {
            return None;
        };
        Some(jurisdiction)
    }
}

/// Cookie categories, exhaustively covered by the cookie policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CookieCategory {
    Essential,
    Analytics,
    Functional,
    Advertising,
    SocialMedia,
}

impl CookieCategory {
    /// Fixed presentation order, independent of questionnaire selection order
    pub const ALL: [CookieCategory; 5] = [
        CookieCategory::Essential,
        CookieCategory::Analytics,
        CookieCategory::Functional,
        CookieCategory::Advertising,
        CookieCategory::SocialMedia,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CookieCategory::Essential => "Essential / Strictly Necessary",
            CookieCategory::Analytics => "Analytics / Performance",
            CookieCategory::Functional => "Functional / Preferences",
            CookieCategory::Advertising => "Advertising / Targeting",
            CookieCategory::SocialMedia => "Social Media",
        }
    }
}

/// How approved refunds are paid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundMethod {
    OriginalPayment,
    StoreCredit,
    Both,
}

/// Optional disclaimer sections selectable in the questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisclaimerSection {
    ProfessionalAdvice,
    NoGuarantees,
    ExternalLinks,
    Testimonials,
    ErrorsOmissions,
    FairUse,
}

impl DisclaimerSection {
    /// Canonical render order; section numbers follow this order regardless
    /// of the order sections were selected in
    pub const CANONICAL_ORDER: [DisclaimerSection; 6] = [
        DisclaimerSection::ProfessionalAdvice,
        DisclaimerSection::NoGuarantees,
        DisclaimerSection::ExternalLinks,
        DisclaimerSection::Testimonials,
        DisclaimerSection::ErrorsOmissions,
        DisclaimerSection::FairUse,
    ];
}

/// The structured questionnaire describing a business's practices.
///
/// Sole input to the document engine. Every renderer is a pure function of
/// this record; the only non-input data embedded in output is the
/// "last updated" date, which is read from the clock at generation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionnaireInput {
    // Company identity
    pub company_name: String,
    pub company_website: Option<String>,
    pub company_email: String,
    pub company_address: Option<String>,
    pub company_category: CompanyCategory,

    // Data practices
    pub data_collected: Vec<String>,
    pub data_usage: Vec<String>,
    pub third_party_sharing: bool,
    pub third_parties: Vec<String>,

    // Jurisdiction
    pub jurisdiction: Jurisdiction,
    pub gdpr_applicable: bool,
    pub ccpa_applicable: bool,
    pub children_data: bool,
    /// User-supplied effective date; defaults to the generation date
    pub effective_date: Option<NaiveDate>,

    // Cookies
    pub uses_cookies: bool,
    pub cookie_categories: Vec<CookieCategory>,

    // Behavioral flags
    pub has_user_accounts: bool,
    pub accepts_payments: bool,
    pub has_user_content: bool,
    pub has_subscription: bool,

    // Refund policy
    pub refund_window_days: u32,
    pub refund_method: RefundMethod,
    pub digital_goods: bool,
    pub subscription_refunds: bool,

    // Disclaimer
    pub disclaimer_sections: Vec<DisclaimerSection>,

    // Requested output kinds
    pub documents: Vec<DocumentKind>,
}

impl Default for QuestionnaireInput {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            company_website: None,
            company_email: String::new(),
            company_address: None,
            company_category: CompanyCategory::Other,
            data_collected: Vec::new(),
            data_usage: Vec::new(),
            third_party_sharing: false,
            third_parties: Vec::new(),
            jurisdiction: Jurisdiction::UnitedStates,
            gdpr_applicable: false,
            ccpa_applicable: false,
            children_data: false,
            effective_date: None,
            uses_cookies: false,
            cookie_categories: Vec::new(),
            has_user_accounts: false,
            accepts_payments: false,
            has_user_content: false,
            has_subscription: false,
            refund_window_days: 30,
            refund_method: RefundMethod::OriginalPayment,
            digital_goods: false,
            subscription_refunds: false,
            disclaimer_sections: vec![DisclaimerSection::NoGuarantees],
            documents: Vec::new(),
        }
    }
}

impl QuestionnaireInput {
    /// Check whether a cookie category was selected
    pub fn has_cookie_category(&self, category: CookieCategory) -> bool {
        self.cookie_categories.contains(&category)
    }

    /// Check whether a disclaimer section was selected
    pub fn has_disclaimer_section(&self, section: DisclaimerSection) -> bool {
        self.disclaimer_sections.contains(&section)
    }
}

/// One generated legal document, immutable after creation.
///
/// Ownership passes to the caller; the engine never reads a document back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDocument {
    /// Unique identifier, `<kind prefix>-<uuid>`
    pub id: String,
    pub kind: DocumentKind,
    /// Display title, "<Document Name> — <Company>"
    pub title: String,
    /// Raw markup-dialect body
    pub markup_body: String,
    /// Standalone styled HTML page rendering of the body
    pub html_body: String,
    pub created_at: DateTime<Utc>,
    /// Denormalized for filename derivation by export collaborators
    pub company_name: String,
}

impl GeneratedDocument {
    /// Filename stem for exported artifacts, e.g. `privacy-policy-acme-inc`
    pub fn file_stem(&self) -> String {
        let company = self
            .company_name
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        format!("{}-{}", self.kind.slug(), company)
    }
}

/// Personal data categories offered by the questionnaire
pub const DATA_TYPES: &[&str] = &[
    "Name and email address",
    "Phone number",
    "Mailing address",
    "Payment information",
    "IP address",
    "Browser and device information",
    "Usage data and analytics",
    "Location data",
    "Social media profiles",
    "Cookies and tracking data",
    "User-generated content",
    "Employment information",
    "Health information",
    "Biometric data",
];

/// Data-usage purposes offered by the questionnaire
pub const DATA_USAGE: &[&str] = &[
    "Provide and maintain services",
    "Process transactions",
    "Send marketing communications",
    "Improve user experience",
    "Analytics and research",
    "Customer support",
    "Legal compliance",
    "Fraud prevention",
    "Personalization",
];

/// Commonly disclosed third-party services
pub const THIRD_PARTIES: &[&str] = &[
    "Google Analytics",
    "Stripe",
    "PayPal",
    "AWS",
    "Cloudflare",
    "Mailchimp / SendGrid",
    "Facebook / Meta",
    "Intercom",
    "Sentry",
    "Mixpanel",
];

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_kind_serde_tags() {
        let json = serde_json::to_string(&DocumentKind::PrivacyPolicy).unwrap();
        assert_eq!(json, "\"privacy_policy\"");
        let kind: DocumentKind = serde_json::from_str("\"refund_policy\"").unwrap();
        assert_eq!(kind, DocumentKind::RefundPolicy);
    }

    #[test]
    fn test_jurisdiction_parse_label() {
        assert_eq!(
            Jurisdiction::parse_label("European Union (GDPR)"),
            Some(Jurisdiction::EuropeanUnion)
        );
        assert_eq!(
            Jurisdiction::parse_label("california (ccpa/cpra)"),
            Some(Jurisdiction::California)
        );
        assert_eq!(
            Jurisdiction::parse_label("United States"),
            Some(Jurisdiction::UnitedStates)
        );
        assert_eq!(Jurisdiction::parse_label("Mars"), None);
    }

    #[test]
    fn test_questionnaire_deserializes_with_defaults() {
        let input: QuestionnaireInput = serde_json::from_str(
            r#"{"company_name": "Acme Inc.", "company_email": "legal@acme.com"}"#,
        )
        .unwrap();
        assert_eq!(input.company_name, "Acme Inc.");
        assert_eq!(input.refund_window_days, 30);
        assert_eq!(input.refund_method, RefundMethod::OriginalPayment);
        assert!(input.documents.is_empty());
    }

    #[test]
    fn test_file_stem() {
        let doc = GeneratedDocument {
            id: "pp-123".to_string(),
            kind: DocumentKind::PrivacyPolicy,
            title: "Privacy Policy — Acme Inc.".to_string(),
            markup_body: String::new(),
            html_body: String::new(),
            created_at: Utc::now(),
            company_name: "Acme Inc.".to_string(),
        };
        assert_eq!(doc.file_stem(), "privacy-policy-acme-inc.");
    }

    #[test]
    fn test_cookie_category_order_is_fixed() {
        let labels: Vec<&str> = CookieCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Essential / Strictly Necessary",
                "Analytics / Performance",
                "Functional / Preferences",
                "Advertising / Targeting",
                "Social Media",
            ]
        );
    }
}
