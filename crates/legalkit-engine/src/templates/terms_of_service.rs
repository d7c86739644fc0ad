//! Terms of service renderer

use super::{contact_lines, wrap_document};
use crate::numbering::{write_sections, PlannedSection, SectionCounter};
use legalkit_types::{CompanyCategory, DocumentKind, Jurisdiction, QuestionnaireInput};

/// Render a terms-of-service body from the questionnaire input
pub fn render(input: &QuestionnaireInput) -> String {
    let mut body = String::new();
    let mut counter = SectionCounter::new();

    write_agreement(counter.next(), input, &mut body);
    write_description(counter.next(), input, &mut body);
    write_eligibility(counter.next(), &mut body);

    write_sections(
        &mut body,
        &mut counter,
        vec![
            PlannedSection::when(input.has_user_accounts, |n, out| {
                write_user_accounts(n, out)
            }),
            PlannedSection::when(input.has_user_content, |n, out| write_user_content(n, out)),
            PlannedSection::when(input.accepts_payments, |n, out| {
                write_payment_terms(n, input, out)
            }),
            PlannedSection::always(|n, out| write_intellectual_property(n, input, out)),
            PlannedSection::always(|n, out| write_limitation_of_liability(n, input, out)),
            PlannedSection::always(|n, out| write_warranty_disclaimer(n, out)),
            PlannedSection::always(|n, out| write_indemnification(n, input, out)),
            PlannedSection::always(|n, out| write_governing_law(n, input, out)),
            PlannedSection::always(|n, out| write_dispute_resolution(n, out)),
            PlannedSection::always(|n, out| write_severability(n, out)),
            PlannedSection::always(|n, out| write_entire_agreement(n, input, out)),
            PlannedSection::always(|n, out| write_contact(n, input, out)),
        ],
    );

    wrap_document(DocumentKind::TermsOfService, input, &body)
}

/// Service description selected from the company category
fn service_description(category: CompanyCategory) -> &'static str {
    match category {
        CompanyCategory::Saas => "software-as-a-service (SaaS) and web application",
        CompanyCategory::Ecommerce => "e-commerce and online retail",
        CompanyCategory::MobileApp => "mobile application",
        CompanyCategory::Website => "website and online content",
        CompanyCategory::Marketplace => "marketplace and platform",
        CompanyCategory::Other => "online",
    }
}

/// Governing-law clause selected from the primary jurisdiction
fn governing_law_clause(jurisdiction: Jurisdiction) -> &'static str {
    match jurisdiction {
        Jurisdiction::EuropeanUnion => {
            "These Terms shall be governed by and construed in accordance with the \
             laws of the European Union and the applicable member state, without \
             regard to conflict of law principles."
        }
        Jurisdiction::California => {
            "These Terms shall be governed by and construed in accordance with the \
             laws of the State of California, United States, without regard to its \
             conflict of law provisions."
        }
        Jurisdiction::UnitedKingdom => {
            "These Terms shall be governed by and construed in accordance with the \
             laws of England and Wales, without regard to its conflict of law \
             provisions."
        }
        Jurisdiction::Canada => {
            "These Terms shall be governed by and construed in accordance with the \
             laws of Canada and the applicable province, without regard to its \
             conflict of law provisions."
        }
        _ => {
            "These Terms shall be governed by and construed in accordance with the \
             laws of the United States and the applicable state, without regard to \
             its conflict of law provisions."
        }
    }
}

fn write_agreement(n: u32, input: &QuestionnaireInput, out: &mut String) {
    let website = input
        .company_website
        .as_deref()
        .map(|w| format!(", including our website at {}", w))
        .unwrap_or_default();
    out.push_str(&format!(
        "## {n}. Agreement to Terms\n\n\
         By accessing or using the services provided by {company} (\"Company,\" \
         \"we,\" \"our,\" or \"us\"){website}, you (\"User,\" \"you,\" or \"your\") \
         agree to be bound by these Terms of Service (\"Terms\"). If you do not \
         agree to these Terms, you must not access or use our services.\n\n\
         We reserve the right to update or modify these Terms at any time. Your \
         continued use of our services after any such changes constitutes your \
         acceptance of the new Terms.\n\n",
        company = input.company_name,
    ));
}

fn write_description(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Description of Services\n\n\
         {company} provides {description} services. These Terms govern your use of \
         all services, features, and content offered by {company}.\n\n",
        company = input.company_name,
        description = service_description(input.company_category),
    ));
}

fn write_eligibility(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Eligibility\n\n\
         You must be at least 18 years old (or the age of majority in your \
         jurisdiction) to use our services. By using our services, you represent \
         and warrant that you meet this eligibility requirement.\n\n"
    ));
}

fn write_user_accounts(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. User Accounts\n\n\
         ### {n}.1 Account Creation\n\n\
         To access certain features, you may need to create an account. You agree to:\n\
         - Provide accurate, current, and complete information\n\
         - Maintain and update your information\n\
         - Keep your password secure and confidential\n\
         - Accept responsibility for all activities under your account\n\
         - Notify us immediately of any unauthorized access\n\n\
         ### {n}.2 Account Termination\n\n\
         We reserve the right to suspend or terminate your account at any time, \
         with or without cause, and with or without notice. You may also delete \
         your account at any time by contacting us.\n\n"
    ));
}

fn write_user_content(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. User Content\n\n\
         ### {n}.1 User-Generated Content\n\n\
         You may submit, post, or display content through our services (\"User \
         Content\"). By submitting User Content, you:\n\n\
         - Retain ownership of your User Content\n\
         - Grant us a non-exclusive, worldwide, royalty-free license to use, display, reproduce, and distribute your User Content in connection with operating our services\n\
         - Represent that you have the right to submit such content\n\
         - Agree not to submit content that is illegal, harmful, threatening, abusive, defamatory, or otherwise objectionable\n\n\
         ### {n}.2 Content Moderation\n\n\
         We reserve the right to remove or disable access to any User Content that \
         violates these Terms or is otherwise objectionable, at our sole \
         discretion.\n\n"
    ));
}

fn write_payment_terms(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!("## {n}. Payment Terms\n\n"));
    if input.has_subscription {
        out.push_str(&format!(
            "### {n}.1 Pricing and Billing\n\n\
             Our services are offered on a subscription basis. By subscribing, you \
             agree to pay the applicable fees as described at the time of purchase. \
             Subscription fees are billed in advance on a recurring basis.\n\n\
             ### {n}.2 Cancellation and Refunds\n\n\
             You may cancel your subscription at any time. Cancellation will take \
             effect at the end of the current billing period. We do not provide \
             refunds for partial billing periods unless required by law.\n\n\
             ### {n}.3 Price Changes\n\n\
             We reserve the right to change our prices at any time. We will provide \
             reasonable notice before any price changes take effect.\n\n"
        ));
    } else {
        out.push_str(
            "By making a purchase through our services, you agree to pay all \
             applicable fees and charges. All payments are processed through our \
             third-party payment processor. Refunds are handled in accordance with \
             our refund policy.\n\n",
        );
    }
}

fn write_intellectual_property(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Intellectual Property\n\n\
         ### {n}.1 Our Content\n\n\
         All content, features, and functionality of our services — including but \
         not limited to text, graphics, logos, icons, images, audio, software, and \
         design — are owned by {company} or our licensors and are protected by \
         copyright, trademark, and other intellectual property laws.\n\n\
         ### {n}.2 Limited License\n\n\
         We grant you a limited, non-exclusive, non-transferable, revocable license \
         to access and use our services for your personal or internal business \
         purposes.\n\n\
         ### {n}.3 Restrictions\n\n\
         You agree not to:\n\
         - Copy, modify, or distribute our content without permission\n\
         - Reverse engineer or attempt to extract source code\n\
         - Use our services for any illegal or unauthorized purpose\n\
         - Interfere with or disrupt the integrity of our services\n\
         - Attempt to gain unauthorized access to our systems\n\
         - Use automated systems (bots, scrapers) without permission\n\n",
        company = input.company_name,
    ));
}

fn write_limitation_of_liability(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Limitation of Liability\n\n\
         TO THE MAXIMUM EXTENT PERMITTED BY APPLICABLE LAW, {company} AND ITS \
         OFFICERS, DIRECTORS, EMPLOYEES, AND AGENTS SHALL NOT BE LIABLE FOR ANY \
         INDIRECT, INCIDENTAL, SPECIAL, CONSEQUENTIAL, OR PUNITIVE DAMAGES, \
         INCLUDING BUT NOT LIMITED TO LOSS OF PROFITS, DATA, USE, OR GOODWILL, \
         ARISING OUT OF OR IN CONNECTION WITH YOUR USE OF OUR SERVICES.\n\n\
         OUR TOTAL LIABILITY FOR ALL CLAIMS ARISING OUT OF OR RELATING TO THESE \
         TERMS OR OUR SERVICES SHALL NOT EXCEED THE AMOUNT YOU PAID TO US IN THE \
         TWELVE (12) MONTHS PRECEDING THE CLAIM, OR ONE HUNDRED DOLLARS ($100), \
         WHICHEVER IS GREATER.\n\n",
        company = input.company_name.to_uppercase(),
    ));
}

fn write_warranty_disclaimer(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Disclaimer of Warranties\n\n\
         OUR SERVICES ARE PROVIDED \"AS IS\" AND \"AS AVAILABLE\" WITHOUT \
         WARRANTIES OF ANY KIND, EITHER EXPRESS OR IMPLIED, INCLUDING BUT NOT \
         LIMITED TO IMPLIED WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR \
         PURPOSE, AND NON-INFRINGEMENT.\n\n\
         WE DO NOT WARRANT THAT OUR SERVICES WILL BE UNINTERRUPTED, SECURE, OR \
         ERROR-FREE, OR THAT ANY DEFECTS WILL BE CORRECTED.\n\n"
    ));
}

fn write_indemnification(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Indemnification\n\n\
         You agree to indemnify, defend, and hold harmless {company} and its \
         officers, directors, employees, agents, and affiliates from and against \
         any and all claims, damages, losses, liabilities, costs, and expenses \
         (including reasonable attorneys' fees) arising out of or relating to:\n\
         - Your use of our services\n\
         - Your violation of these Terms\n\
         - Your violation of any rights of a third party\n\
         - Any User Content you submit\n\n",
        company = input.company_name,
    ));
}

fn write_governing_law(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Governing Law\n\n{clause}\n\n",
        clause = governing_law_clause(input.jurisdiction),
    ));
}

fn write_dispute_resolution(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Dispute Resolution\n\n\
         Any disputes arising out of or relating to these Terms or our services \
         shall first be attempted to be resolved through good-faith negotiation. If \
         negotiation fails, disputes shall be resolved through binding arbitration \
         in accordance with the rules of the American Arbitration Association, \
         unless you opt out within 30 days of accepting these Terms.\n\n"
    ));
}

fn write_severability(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Severability\n\n\
         If any provision of these Terms is held to be invalid or unenforceable, \
         the remaining provisions shall continue in full force and effect.\n\n"
    ));
}

fn write_entire_agreement(n: u32, input: &QuestionnaireInput, out: &mut String) {
    let cookie_policy = if input.uses_cookies {
        " and Cookie Policy"
    } else {
        ""
    };
    out.push_str(&format!(
        "## {n}. Entire Agreement\n\n\
         These Terms, together with our Privacy Policy{cookie_policy}, constitute \
         the entire agreement between you and {company} regarding your use of our \
         services.\n\n",
        company = input.company_name,
    ));
}

fn write_contact(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Contact Us\n\n\
         If you have any questions about these Terms of Service, please contact us:\n\n\
         {lines}\n",
        lines = contact_lines(input),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> QuestionnaireInput {
        QuestionnaireInput {
            company_name: "Acme Inc.".to_string(),
            company_email: "legal@acme.com".to_string(),
            company_category: CompanyCategory::Saas,
            documents: vec![DocumentKind::TermsOfService],
            ..Default::default()
        }
    }

    #[test]
    fn test_fixed_spine_without_conditionals() {
        let doc = render(&input());
        assert!(doc.contains("## 1. Agreement to Terms"));
        assert!(doc.contains("## 2. Description of Services"));
        assert!(doc.contains("## 3. Eligibility"));
        // No conditional sections, so the tail starts at 4
        assert!(doc.contains("## 4. Intellectual Property"));
        assert!(doc.contains("## 5. Limitation of Liability"));
        assert!(doc.contains("## 12. Contact Us"));
        assert!(!doc.contains("User Accounts"));
        assert!(!doc.contains("Payment Terms"));
    }

    #[test]
    fn test_all_conditionals_shift_the_tail() {
        let mut input = input();
        input.has_user_accounts = true;
        input.has_user_content = true;
        input.accepts_payments = true;
        let doc = render(&input);
        assert!(doc.contains("## 4. User Accounts"));
        assert!(doc.contains("### 4.1 Account Creation"));
        assert!(doc.contains("## 5. User Content"));
        assert!(doc.contains("## 6. Payment Terms"));
        assert!(doc.contains("## 7. Intellectual Property"));
        assert!(doc.contains("## 15. Contact Us"));
    }

    #[test]
    fn test_service_description_lookup() {
        assert_eq!(
            service_description(CompanyCategory::Marketplace),
            "marketplace and platform"
        );
        assert_eq!(service_description(CompanyCategory::Other), "online");
        let doc = render(&input());
        assert!(doc.contains(
            "Acme Inc. provides software-as-a-service (SaaS) and web application services."
        ));
    }

    #[test]
    fn test_payment_terms_branch_on_subscription() {
        let mut input = input();
        input.accepts_payments = true;
        let doc = render(&input);
        assert!(doc.contains("By making a purchase through our services"));
        assert!(!doc.contains("billed in advance on a recurring basis"));

        input.has_subscription = true;
        let doc = render(&input);
        assert!(doc.contains("billed in advance on a recurring basis"));
        assert!(doc.contains("Cancellation and Refunds"));
    }

    #[test]
    fn test_governing_law_lookup() {
        for (jurisdiction, needle) in [
            (Jurisdiction::EuropeanUnion, "European Union"),
            (Jurisdiction::California, "State of California"),
            (Jurisdiction::UnitedKingdom, "England and Wales"),
            (Jurisdiction::Canada, "laws of Canada"),
            (Jurisdiction::Australia, "laws of the United States"),
            (Jurisdiction::UnitedStates, "laws of the United States"),
        ] {
            assert!(
                governing_law_clause(jurisdiction).contains(needle),
                "{:?} should select the clause containing {:?}",
                jurisdiction,
                needle
            );
        }
    }

    #[test]
    fn test_liability_cap_and_uppercased_name() {
        let doc = render(&input());
        assert!(doc.contains("ACME INC. AND ITS"));
        assert!(doc.contains("ONE HUNDRED DOLLARS ($100), WHICHEVER IS GREATER"));
    }

    #[test]
    fn test_entire_agreement_mentions_cookie_policy_only_with_cookies() {
        let doc = render(&input());
        assert!(doc.contains("together with our Privacy Policy, constitute"));

        let mut input = input();
        input.uses_cookies = true;
        let doc = render(&input);
        assert!(doc.contains("together with our Privacy Policy and Cookie Policy, constitute"));
    }
}
