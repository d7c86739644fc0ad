//! Refund policy renderer
//!
//! Numbering is fully dynamic: everything from Chargebacks onward shifts by
//! the number of conditional sections actually included. The refund window
//! parameterizes several clauses, capped per clause (digital goods at 14
//! days, annual subscriptions at 30).

use super::{contact_lines, wrap_document};
use crate::numbering::{write_sections, PlannedSection, SectionCounter};
use legalkit_types::{CompanyCategory, DocumentKind, QuestionnaireInput, RefundMethod};

/// Render a refund policy body from the questionnaire input
pub fn render(input: &QuestionnaireInput) -> String {
    let mut body = String::new();
    let mut counter = SectionCounter::new();

    write_overview(counter.next(), input, &mut body);
    write_eligibility(counter.next(), input, &mut body);
    write_acceptable_reasons(counter.next(), input, &mut body);
    write_how_to_request(counter.next(), input, &mut body);
    write_processing(counter.next(), input, &mut body);

    let has_subscription_block = input.subscription_refunds || input.has_subscription;
    write_sections(
        &mut body,
        &mut counter,
        vec![
            PlannedSection::when(has_subscription_block, |n, out| {
                write_subscription_refunds(n, input, out)
            }),
            PlannedSection::always(|n, out| write_chargebacks(n, out)),
            PlannedSection::always(|n, out| write_exceptions(n, out)),
            PlannedSection::always(|n, out| write_changes(n, out)),
            PlannedSection::always(|n, out| write_contact(n, input, out)),
        ],
    );

    wrap_document(DocumentKind::RefundPolicy, input, &body)
}

fn write_overview(n: u32, input: &QuestionnaireInput, out: &mut String) {
    let storefront = input
        .company_website
        .as_deref()
        .map(|w| format!("website ({})", w))
        .unwrap_or_else(|| "platform".to_string());
    out.push_str(&format!(
        "## {n}. Overview\n\n\
         At {company}, we want you to be completely satisfied with your purchase. \
         This Refund Policy outlines the terms and conditions under which you may \
         request a refund for products or services purchased through our \
         {storefront}.\n\n\
         Please read this policy carefully before making a purchase. By completing \
         a transaction with us, you acknowledge that you have read, understood, and \
         agree to be bound by this Refund Policy.\n\n",
        company = input.company_name,
    ));
}

fn write_eligibility(n: u32, input: &QuestionnaireInput, out: &mut String) {
    let window = input.refund_window_days;
    out.push_str(&format!(
        "## {n}. Refund Eligibility\n\n\
         ### {n}.1 Refund Window\n\n\
         You may request a refund within **{window} days** of your original \
         purchase date, subject to the conditions outlined in this policy.\n\n\
         ### {n}.2 Conditions for Refund\n\n\
         To be eligible for a refund, the following conditions must be met:\n\n\
         - The refund request must be made within {window} days of purchase\n\
         - You must provide your order number or proof of purchase\n\
         - The reason for the refund must fall within our acceptable refund reasons (see Section 3)\n"
    ));
    if input.company_category == CompanyCategory::Ecommerce {
        out.push_str(
            "- For physical products: items must be returned in their original condition, unused and in original packaging\n\
             - For physical products: you are responsible for return shipping costs unless the item was defective or we made an error\n\
             - Items marked as \"final sale\" or \"non-refundable\" at the time of purchase are not eligible\n",
        );
    }
    out.push('\n');

    // Conditional subsections with recomputed sub-numbers
    let mut sub = 2u32;
    if input.company_category == CompanyCategory::Ecommerce {
        sub += 1;
        out.push_str(&format!(
            "### {n}.{sub} Non-Refundable Items\n\n\
             The following items cannot be refunded:\n\
             - Gift cards and promotional credits\n\
             - Items marked as \"final sale\"\n\
             - Personalized or custom-made products\n\
             - Items that have been used, worn, or damaged by the customer\n\
             - Perishable goods\n\n"
        ));
    }
    if input.digital_goods {
        sub += 1;
        let digital_window = window.min(14);
        out.push_str(&format!(
            "### {n}.{sub} Digital Products\n\n\
             For digital products, downloads, and electronically delivered content:\n\
             - Refunds may be issued within {digital_window} days of purchase if you have not accessed, downloaded, or used the digital product\n\
             - Once a digital product has been accessed or downloaded, refund eligibility may be limited\n\
             - If a digital product is defective or not as described, you are entitled to a full refund regardless of access status\n\n"
        ));
    }
}

fn write_acceptable_reasons(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Acceptable Refund Reasons\n\n\
         We accept refund requests for the following reasons:\n\n\
         - Product or service not as described\n\
         - Technical issues preventing use of the product or service\n\
         - Duplicate charge or billing error\n\
         - Service downtime or unavailability beyond reasonable expectations\n"
    ));
    if input.company_category == CompanyCategory::Ecommerce {
        out.push_str(
            "- Damaged or defective product received\n\
             - Wrong item shipped\n\
             - Product not received within the estimated delivery window\n",
        );
    }
    if matches!(
        input.company_category,
        CompanyCategory::Saas | CompanyCategory::MobileApp
    ) {
        out.push_str(
            "- Features advertised are not available or functional\n\
             - Significant changes to the service that affect your use case\n",
        );
    }
    out.push('\n');
}

fn write_how_to_request(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. How to Request a Refund\n\n\
         To request a refund, please follow these steps:\n\n\
         1. **Contact Us:** Send an email to {email} with the subject line \"Refund Request\"\n\
         2. **Include Required Information:** your full name and email address associated with the purchase, order number or transaction ID, date of purchase, reason for the refund request, and any supporting documentation\n\
         3. **Wait for Confirmation:** We will review your request and respond within **5 business days**\n\n",
        email = input.company_email,
    ));
}

fn write_processing(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Refund Processing\n\n\
         ### {n}.1 Review Timeline\n\n\
         All refund requests are reviewed within 5 business days of receipt. We may \
         contact you for additional information if needed.\n\n\
         ### {n}.2 Refund Method\n\n"
    ));
    match input.refund_method {
        RefundMethod::OriginalPayment => out.push_str(
            "Approved refunds will be credited back to your **original payment \
             method**. Please allow:\n\
             - **Credit/Debit Card:** 5-10 business days for the refund to appear on your statement\n\
             - **PayPal:** 3-5 business days\n\
             - **Bank Transfer:** 5-10 business days\n\
             - **Other Methods:** Processing times may vary\n\n",
        ),
        RefundMethod::StoreCredit => out.push_str(
            "Approved refunds will be issued as **store credit** that can be used \
             toward future purchases. Store credits:\n\
             - Are applied to your account within 1-2 business days\n\
             - Do not expire\n\
             - Are non-transferable\n\
             - Cannot be redeemed for cash\n\n",
        ),
        RefundMethod::Both => out.push_str(
            "Approved refunds may be processed as either:\n\n\
             **Original Payment Method:**\n\
             - Credit/Debit Card: 5-10 business days\n\
             - PayPal: 3-5 business days\n\
             - Bank Transfer: 5-10 business days\n\n\
             **Store Credit:**\n\
             - Applied within 1-2 business days\n\
             - Does not expire\n\
             - Can be used toward any future purchase\n\n",
        ),
    }
    out.push_str(&format!(
        "### {n}.3 Partial Refunds\n\n\
         In some cases, we may issue a partial refund. This may occur when:\n\
         - A portion of the service was used before the refund request\n\
         - Only part of an order is eligible for a refund\n\
         - The product was returned in a condition different from how it was received\n\n"
    ));
}

fn write_subscription_refunds(n: u32, input: &QuestionnaireInput, out: &mut String) {
    let annual_window = input.refund_window_days.min(30);
    out.push_str(&format!(
        "## {n}. Subscription Refunds\n\n\
         ### {n}.1 Monthly Subscriptions\n\n\
         - You may cancel your subscription at any time\n\
         - Upon cancellation, you will retain access until the end of your current billing period\n\
         - Refunds for the current billing period are available if requested within 48 hours of the charge\n\n\
         ### {n}.2 Annual Subscriptions\n\n\
         - Annual subscriptions may be refunded in full within the first {annual_window} days\n\
         - After {annual_window} days, a prorated refund may be issued based on the remaining months\n\
         - Prorated refunds are calculated based on the monthly rate, not the discounted annual rate\n\n\
         ### {n}.3 Free Trials\n\n\
         - If you cancel during a free trial period, you will not be charged\n\
         - If you do not cancel before the trial expires, the subscription will automatically renew at the stated price\n\
         - Charges incurred after the trial period are subject to this Refund Policy\n\n"
    ));
}

fn write_chargebacks(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Chargebacks and Disputes\n\n\
         We encourage you to contact us directly before initiating a chargeback or \
         payment dispute with your bank or payment provider. We are committed to \
         resolving issues quickly and fairly. Filing a chargeback without first \
         contacting us may result in:\n\n\
         - Suspension of your account\n\
         - Loss of eligibility for future refunds\n\
         - Additional fees being assessed\n\n"
    ));
}

fn write_exceptions(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Exceptions\n\n\
         We reserve the right to:\n\
         - Deny refund requests that do not meet the criteria outlined in this policy\n\
         - Deny refund requests that we determine to be fraudulent or abusive\n\
         - Modify refund terms for specific promotions or sales events\n\
         - Make exceptions to this policy on a case-by-case basis at our discretion\n\n"
    ));
}

fn write_changes(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Changes to This Policy\n\n\
         We reserve the right to update or modify this Refund Policy at any time. \
         Changes will be effective immediately upon posting the updated policy on \
         our website. The \"Last Updated\" date at the top of this policy will be \
         revised accordingly.\n\n\
         We encourage you to review this policy periodically. Your continued use of \
         our services after changes are posted constitutes acceptance of the \
         modified policy.\n\n"
    ));
}

fn write_contact(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Contact Us\n\n\
         If you have any questions about this Refund Policy or need to request a \
         refund, please contact us:\n\n\
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
            documents: vec![DocumentKind::RefundPolicy],
            ..Default::default()
        }
    }

    #[test]
    fn test_tail_numbering_without_conditionals() {
        let doc = render(&input());
        assert!(doc.contains("## 6. Chargebacks and Disputes"));
        assert!(doc.contains("## 7. Exceptions"));
        assert!(doc.contains("## 8. Changes to This Policy"));
        assert!(doc.contains("## 9. Contact Us"));
        assert!(!doc.contains("Subscription Refunds"));
    }

    #[test]
    fn test_subscription_block_shifts_tail() {
        let mut input = input();
        input.has_subscription = true;
        let doc = render(&input);
        assert!(doc.contains("## 6. Subscription Refunds"));
        assert!(doc.contains("## 7. Chargebacks and Disputes"));
        assert!(doc.contains("## 10. Contact Us"));
    }

    #[test]
    fn test_subscription_refunds_flag_alone_enables_block() {
        let mut input = input();
        input.subscription_refunds = true;
        let doc = render(&input);
        assert!(doc.contains("## 6. Subscription Refunds"));
    }

    #[test]
    fn test_digital_goods_window_is_capped_at_14() {
        let mut input = input();
        input.digital_goods = true;
        input.refund_window_days = 7;
        let doc = render(&input);
        assert!(doc.contains("within 7 days of purchase if you have not accessed"));

        input.refund_window_days = 60;
        let doc = render(&input);
        assert!(doc.contains("within 14 days of purchase if you have not accessed"));
    }

    #[test]
    fn test_annual_subscription_window_is_capped_at_30() {
        let mut input = input();
        input.has_subscription = true;
        input.refund_window_days = 90;
        let doc = render(&input);
        assert!(doc.contains("refunded in full within the first 30 days"));

        input.refund_window_days = 14;
        let doc = render(&input);
        assert!(doc.contains("refunded in full within the first 14 days"));
    }

    #[test]
    fn test_ecommerce_subsections_recompute_sub_numbers() {
        let mut input = input();
        input.company_category = CompanyCategory::Ecommerce;
        input.digital_goods = true;
        let doc = render(&input);
        assert!(doc.contains("### 2.3 Non-Refundable Items"));
        assert!(doc.contains("### 2.4 Digital Products"));

        input.company_category = CompanyCategory::Saas;
        let doc = render(&input);
        assert!(doc.contains("### 2.3 Digital Products"));
        assert!(!doc.contains("Non-Refundable Items"));
    }

    #[test]
    fn test_refund_method_variants_are_mutually_exclusive() {
        let mut input = input();
        input.refund_method = RefundMethod::OriginalPayment;
        let doc = render(&input);
        assert!(doc.contains("credited back to your **original payment method**"));
        assert!(!doc.contains("issued as **store credit**"));

        input.refund_method = RefundMethod::StoreCredit;
        let doc = render(&input);
        assert!(doc.contains("issued as **store credit**"));
        assert!(!doc.contains("credited back to your **original payment method**"));

        input.refund_method = RefundMethod::Both;
        let doc = render(&input);
        assert!(doc.contains("may be processed as either"));
    }

    #[test]
    fn test_category_specific_reasons() {
        let doc = render(&input());
        assert!(doc.contains("- Features advertised are not available or functional"));
        assert!(!doc.contains("- Wrong item shipped"));

        let mut input = input();
        input.company_category = CompanyCategory::Ecommerce;
        let doc = render(&input);
        assert!(doc.contains("- Wrong item shipped"));
        assert!(!doc.contains("- Features advertised are not available or functional"));
    }
}
