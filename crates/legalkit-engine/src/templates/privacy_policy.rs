//! Privacy policy renderer

use super::{contact_lines, wrap_document};
use crate::numbering::{write_sections, PlannedSection, SectionCounter};
use legalkit_types::{CookieCategory, DocumentKind, QuestionnaireInput};

/// Render a privacy policy body from the questionnaire input
pub fn render(input: &QuestionnaireInput) -> String {
    let mut body = String::new();
    let mut counter = SectionCounter::new();

    write_introduction(counter.next(), input, &mut body);
    write_information_collected(counter.next(), input, &mut body);
    write_information_use(counter.next(), input, &mut body);
    write_information_sharing(counter.next(), input, &mut body);
    write_retention(counter.next(), &mut body);
    write_security(counter.next(), &mut body);

    // Conditional blocks in fixed relative order, then the fixed tail,
    // all numbered by the running counter
    write_sections(
        &mut body,
        &mut counter,
        vec![
            PlannedSection::when(input.uses_cookies, |n, out| write_cookies(n, input, out)),
            PlannedSection::when(input.gdpr_applicable, |n, out| {
                write_gdpr_rights(n, input, out)
            }),
            PlannedSection::when(input.ccpa_applicable, |n, out| {
                write_ccpa_rights(n, input, out)
            }),
            PlannedSection::when(input.children_data, |n, out| {
                write_childrens_privacy(n, input, out)
            }),
            PlannedSection::always(|n, out| write_contact(n, input, out)),
            PlannedSection::always(|n, out| write_changes(n, out)),
        ],
    );

    wrap_document(DocumentKind::PrivacyPolicy, input, &body)
}

fn write_introduction(n: u32, input: &QuestionnaireInput, out: &mut String) {
    let website = input
        .company_website
        .as_deref()
        .map(|w| format!(" ({})", w))
        .unwrap_or_default();
    out.push_str(&format!(
        "## {n}. Introduction\n\n\
         Welcome to {company} (\"we,\" \"our,\" or \"us\"). We are committed to \
         protecting your personal information and your right to privacy. This \
         Privacy Policy explains how we collect, use, disclose, and safeguard your \
         information when you visit our website{website} and use our services.\n\n\
         Please read this Privacy Policy carefully. By accessing or using our \
         services, you agree to the collection and use of information in accordance \
         with this policy. If you do not agree with the terms of this Privacy \
         Policy, please do not access our services.\n\n",
        company = input.company_name,
    ));
}

fn write_information_collected(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!("## {n}. Information We Collect\n\n"));

    // Sub-numbers are recomputed from the flags that are true
    let mut sub = 1u32;
    out.push_str(&format!(
        "### {n}.{sub} Personal Information You Provide\n\n\
         We may collect personal information that you voluntarily provide to us \
         when you:\n\
         - Register for an account\n\
         - Make a purchase or transaction\n\
         - Contact us for support\n\
         - Subscribe to our newsletter\n\
         - Participate in surveys or promotions\n\n\
         The types of personal information we collect include:\n\n"
    ));
    for category in &input.data_collected {
        out.push_str(&format!("- {}\n", category));
    }
    out.push('\n');

    if input.has_user_accounts {
        sub += 1;
        out.push_str(&format!(
            "### {n}.{sub} Account Information\n\n\
             When you create an account with us, we collect your registration \
             information, including your name, email address, and password. You are \
             responsible for maintaining the confidentiality of your account \
             credentials.\n\n"
        ));
    }

    if input.accepts_payments {
        sub += 1;
        out.push_str(&format!(
            "### {n}.{sub} Payment Information\n\n\
             When you make a purchase, we collect payment information necessary to \
             process your transaction. This may include your credit card number, \
             billing address, and other financial data. We use third-party payment \
             processors and do not store your full payment card details on our \
             servers.\n\n"
        ));
    }

    out.push_str(
        "### Automatically Collected Information\n\n\
         When you access our services, we may automatically collect certain \
         information, including:\n\
         - Device information (type, operating system, unique device identifiers)\n\
         - Browser information (type, version, language)\n\
         - IP address\n\
         - Usage data (pages visited, time spent, click patterns)\n\
         - Referring URLs\n\n",
    );
}

fn write_information_use(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. How We Use Your Information\n\n\
         We use the information we collect for the following purposes:\n\n"
    ));
    for purpose in &input.data_usage {
        out.push_str(&format!("- {}\n", purpose));
    }
    out.push('\n');
}

fn write_information_sharing(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!("## {n}. How We Share Your Information\n\n"));
    if input.third_party_sharing {
        out.push_str(
            "We may share your information with the following types of third \
             parties:\n\n",
        );
        for party in &input.third_parties {
            out.push_str(&format!(
                "- **{}**: To help us provide, maintain, and improve our services\n",
                party
            ));
        }
        out.push_str(
            "\nWe require all third parties to respect the security of your \
             personal data and to treat it in accordance with applicable law.\n\n",
        );
    } else {
        out.push_str(
            "We do not sell, trade, or otherwise transfer your personal information \
             to outside parties except as described in this Privacy Policy. We may \
             share information with service providers who assist us in operating our \
             services, conducting our business, or serving our users, so long as \
             those parties agree to keep this information confidential.\n\n",
        );
    }
}

fn write_retention(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Data Retention\n\n\
         We will retain your personal information only for as long as is necessary \
         for the purposes set out in this Privacy Policy. We will retain and use \
         your information to the extent necessary to comply with our legal \
         obligations, resolve disputes, and enforce our policies.\n\n"
    ));
}

fn write_security(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Data Security\n\n\
         We implement appropriate technical and organizational security measures to \
         protect your personal information against unauthorized access, alteration, \
         disclosure, or destruction. However, no method of transmission over the \
         Internet or electronic storage is 100% secure, and we cannot guarantee \
         absolute security.\n\n"
    ));
}

fn write_cookies(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Cookies and Tracking Technologies\n\n\
         We use cookies and similar tracking technologies to track activity on our \
         services and hold certain information. Cookies are files with small \
         amounts of data that are sent to your browser from a website and stored on \
         your device.\n\n\
         Types of cookies we use:\n"
    ));
    // Selected categories, listed in the fixed catalog order
    for category in CookieCategory::ALL {
        if input.has_cookie_category(category) {
            out.push_str(&format!("- **{}**\n", category.label()));
        }
    }
    out.push_str(
        "\nYou can instruct your browser to refuse all cookies or to indicate when \
         a cookie is being sent. However, if you do not accept cookies, you may not \
         be able to use some portions of our services.\n\n\
         For more details, please see our Cookie Policy.\n\n",
    );
}

fn write_gdpr_rights(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Your Rights Under GDPR\n\n\
         If you are a resident of the European Economic Area (EEA), you have \
         certain data protection rights under the General Data Protection \
         Regulation (GDPR):\n\n\
         - **Right of Access** — You have the right to request copies of your personal data.\n\
         - **Right to Rectification** — You have the right to request correction of inaccurate personal data.\n\
         - **Right to Erasure** — You have the right to request deletion of your personal data (\"right to be forgotten\").\n\
         - **Right to Restrict Processing** — You have the right to request restriction of processing of your personal data.\n\
         - **Right to Data Portability** — You have the right to request transfer of your data to another organization.\n\
         - **Right to Object** — You have the right to object to processing of your personal data.\n\
         - **Right to Withdraw Consent** — You have the right to withdraw consent where processing is based on consent.\n\
         - **Rights Related to Automated Decision-Making** — You have the right not to be subject to decisions based solely on automated processing.\n\n\
         To exercise any of these rights, please contact us at {email}.\n\n\
         **Legal Basis for Processing:** We process your personal data on the \
         following legal bases:\n\
         - Your consent\n\
         - Performance of a contract\n\
         - Compliance with legal obligations\n\
         - Our legitimate interests\n\n",
        email = input.company_email,
    ));
}

fn write_ccpa_rights(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. California Privacy Rights (CCPA/CPRA)\n\n\
         If you are a California resident, you have the following rights under the \
         California Consumer Privacy Act (CCPA) and California Privacy Rights Act \
         (CPRA):\n\n\
         - **Right to Know** — You have the right to request disclosure of the personal information we collect, use, and share.\n\
         - **Right to Delete** — You have the right to request deletion of your personal information.\n\
         - **Right to Opt-Out** — You have the right to opt out of the sale or sharing of your personal information.\n\
         - **Right to Non-Discrimination** — We will not discriminate against you for exercising your privacy rights.\n\
         - **Right to Correct** — You have the right to request correction of inaccurate personal information.\n\n\
         We do not sell personal information as defined by the CCPA.\n\n\
         To exercise your rights, contact us at {email} or submit a request through \
         our website.\n\n",
        email = input.company_email,
    ));
}

fn write_childrens_privacy(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Children's Privacy\n\n\
         Our services are not directed to children under the age of 13 (or 16 in \
         the EEA). We do not knowingly collect personal information from children. \
         If we become aware that we have collected personal data from a child \
         without parental consent, we will take steps to remove that information \
         from our servers. If you believe we have collected information from a \
         child, please contact us at {email}.\n\n",
        email = input.company_email,
    ));
}

fn write_contact(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Contact Us\n\n\
         If you have any questions about this Privacy Policy, please contact us:\n\n\
         {lines}\n",
        lines = contact_lines(input),
    ));
}

fn write_changes(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Changes to This Privacy Policy\n\n\
         We may update this Privacy Policy from time to time. We will notify you of \
         any changes by posting the new Privacy Policy on this page and updating \
         the \"Last Updated\" date. You are advised to review this Privacy Policy \
         periodically for any changes.\n\n"
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_input() -> QuestionnaireInput {
        QuestionnaireInput {
            company_name: "Acme Inc.".to_string(),
            company_email: "legal@acme.com".to_string(),
            data_collected: vec!["Name and email address".to_string()],
            data_usage: vec!["Provide and maintain services".to_string()],
            documents: vec![DocumentKind::PrivacyPolicy],
            ..Default::default()
        }
    }

    #[test]
    fn test_collected_categories_appear_verbatim() {
        let mut input = minimal_input();
        input.data_collected = vec![
            "Name and email address".to_string(),
            "IP address".to_string(),
            "Biometric data".to_string(),
        ];
        let doc = render(&input);
        for category in &input.data_collected {
            let line = format!("- {}", category);
            assert!(
                doc.lines().any(|l| l == line),
                "missing verbatim line {:?}",
                line
            );
        }
    }

    #[test]
    fn test_minimal_input_omits_all_conditional_sections() {
        let doc = render(&minimal_input());
        assert!(doc.contains("## 4. How We Share Your Information"));
        assert!(doc.contains("We do not sell, trade, or otherwise transfer"));
        assert!(!doc.contains("Account Information"));
        assert!(!doc.contains("Payment Information"));
        assert!(!doc.contains("Cookies and Tracking Technologies"));
        assert!(!doc.contains("Your Rights Under GDPR"));
        assert!(!doc.contains("California Privacy Rights"));
        assert!(!doc.contains("Children's Privacy"));
        // Tail follows data security with no gap
        assert!(doc.contains("## 6. Data Security"));
        assert!(doc.contains("## 7. Contact Us"));
        assert!(doc.contains("## 8. Changes to This Privacy Policy"));
    }

    #[test]
    fn test_payment_subsection_number_depends_on_accounts() {
        let mut input = minimal_input();
        input.accepts_payments = true;
        let doc = render(&input);
        assert!(doc.contains("### 2.2 Payment Information"));

        input.has_user_accounts = true;
        let doc = render(&input);
        assert!(doc.contains("### 2.2 Account Information"));
        assert!(doc.contains("### 2.3 Payment Information"));
    }

    #[test]
    fn test_sharing_branch_lists_each_third_party() {
        let mut input = minimal_input();
        input.third_party_sharing = true;
        input.third_parties = vec!["Stripe".to_string(), "Google Analytics".to_string()];
        let doc = render(&input);
        assert!(doc.contains("- **Stripe**: To help us provide"));
        assert!(doc.contains("- **Google Analytics**: To help us provide"));
        assert!(!doc.contains("We do not sell, trade, or otherwise transfer"));
    }

    #[test]
    fn test_conditional_sections_are_numbered_in_order_without_gaps() {
        let mut input = minimal_input();
        input.uses_cookies = true;
        input.cookie_categories = vec![CookieCategory::Analytics, CookieCategory::Essential];
        input.gdpr_applicable = true;
        input.ccpa_applicable = true;
        input.children_data = true;
        let doc = render(&input);
        assert!(doc.contains("## 7. Cookies and Tracking Technologies"));
        assert!(doc.contains("## 8. Your Rights Under GDPR"));
        assert!(doc.contains("## 9. California Privacy Rights (CCPA/CPRA)"));
        assert!(doc.contains("## 10. Children's Privacy"));
        assert!(doc.contains("## 11. Contact Us"));
        assert!(doc.contains("## 12. Changes to This Privacy Policy"));
        // Selected cookie categories listed in catalog order
        let essential = doc.find("- **Essential / Strictly Necessary**").unwrap();
        let analytics = doc.find("- **Analytics / Performance**").unwrap();
        assert!(essential < analytics);
    }

    #[test]
    fn test_gdpr_block_skipped_without_flag() {
        let mut input = minimal_input();
        input.ccpa_applicable = true;
        let doc = render(&input);
        // CCPA takes the first conditional slot when GDPR is off
        assert!(doc.contains("## 7. California Privacy Rights (CCPA/CPRA)"));
        assert!(doc.contains("## 8. Contact Us"));
    }
}
