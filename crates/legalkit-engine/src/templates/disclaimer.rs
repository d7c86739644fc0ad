//! Disclaimer renderer
//!
//! General Disclaimer is always section 1. The six optional sections are
//! numbered 2..=1+|selected| in canonical order, and the four fixed tail
//! sections continue from there with no gaps.

use super::{contact_lines, wrap_document};
use crate::numbering::{write_sections, PlannedSection, SectionCounter};
use legalkit_types::{CompanyCategory, DisclaimerSection, DocumentKind, QuestionnaireInput};

/// Render a disclaimer body from the questionnaire input
pub fn render(input: &QuestionnaireInput) -> String {
    let mut body = String::new();
    let mut counter = SectionCounter::new();

    write_general(counter.next(), input, &mut body);

    let mut plan: Vec<PlannedSection> = DisclaimerSection::CANONICAL_ORDER
        .iter()
        .map(|&section| {
            PlannedSection::when(input.has_disclaimer_section(section), move |n, out| {
                write_optional(section, n, input, out)
            })
        })
        .collect();
    plan.extend([
        PlannedSection::always(|n, out| write_limitation_of_liability(n, input, out)),
        PlannedSection::always(|n, out| write_indemnification(n, input, out)),
        PlannedSection::always(|n, out| write_changes(n, out)),
        PlannedSection::always(|n, out| write_contact(n, input, out)),
    ]);
    write_sections(&mut body, &mut counter, plan);

    wrap_document(DocumentKind::Disclaimer, input, &body)
}

fn write_general(n: u32, input: &QuestionnaireInput, out: &mut String) {
    let website = input
        .company_website
        .as_deref()
        .map(|w| format!("our website ({})", w))
        .unwrap_or_else(|| "our website".to_string());
    out.push_str(&format!(
        "## {n}. General Disclaimer\n\n\
         The information provided by {company} (\"we,\" \"us,\" or \"our\") on \
         {website} and through our services is for **general informational \
         purposes only**. All information is provided in good faith; however, we \
         make no representation or warranty of any kind, express or implied, \
         regarding the accuracy, adequacy, validity, reliability, availability, or \
         completeness of any information.\n\n\
         **Under no circumstance shall we have any liability to you for any loss \
         or damage of any kind incurred as a result of the use of our website or \
         services or reliance on any information provided.** Your use of our \
         website and services and your reliance on any information is solely at \
         your own risk.\n\n",
        company = input.company_name,
    ));
}

fn write_optional(
    section: DisclaimerSection,
    n: u32,
    input: &QuestionnaireInput,
    out: &mut String,
) {
    match section {
        DisclaimerSection::ProfessionalAdvice => write_professional_advice(n, input, out),
        DisclaimerSection::NoGuarantees => write_no_guarantees(n, out),
        DisclaimerSection::ExternalLinks => write_external_links(n, input, out),
        DisclaimerSection::Testimonials => write_testimonials(n, out),
        DisclaimerSection::ErrorsOmissions => write_errors_omissions(n, input, out),
        DisclaimerSection::FairUse => write_fair_use(n, out),
    }
}

fn write_professional_advice(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. No Professional Advice\n\n\
         The content on our website and through our services is not intended to be \
         a substitute for professional advice. Always seek the advice of a \
         qualified professional with any questions you may have regarding:\n\n"
    ));
    if matches!(
        input.company_category,
        CompanyCategory::Saas | CompanyCategory::Website
    ) {
        out.push_str(
            "- Business decisions and strategy\n\
             - Legal compliance and regulations\n\
             - Technical architecture and security\n\
             - Financial planning and investments\n\n",
        );
    }
    out.push_str(
        "We do not provide professional consulting, legal, financial, medical, or \
         other specialized advice through our services. Any reliance you place on \
         information from our website is strictly at your own risk.\n\n",
    );
}

fn write_no_guarantees(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. No Guarantees\n\n\
         While we strive to provide accurate and up-to-date information, we make \
         **no warranties or guarantees** about:\n\n\
         - The completeness, reliability, or accuracy of this information\n\
         - The results that may be obtained from using our services\n\
         - The availability of our website or services at any given time\n\
         - The absence of errors, defects, or viruses\n\n\
         We do not guarantee that:\n\
         - Our services will meet your specific requirements\n\
         - Our services will be uninterrupted, timely, secure, or error-free\n\
         - The results obtained from using our services will be accurate or reliable\n\
         - Any errors in our services will be corrected\n\n"
    ));
}

fn write_external_links(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. External Links Disclaimer\n\n\
         Our website may contain links to external websites that are not provided \
         or maintained by or affiliated with {company}. Please note that:\n\n\
         - We do not guarantee the accuracy, relevance, timeliness, or completeness of any information on these external websites\n\
         - We have no control over the content, privacy policies, or practices of any third-party websites\n\
         - Inclusion of any links does not necessarily imply a recommendation or endorsement of the views expressed within them\n\
         - We are not responsible for any losses or damages arising from the use of linked third-party websites\n\n\
         We encourage you to review the privacy policies and terms of service of \
         any external website you visit.\n\n",
        company = input.company_name,
    ));
}

fn write_testimonials(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Testimonials Disclaimer\n\n\
         Our website may contain testimonials from users of our products and/or \
         services. These testimonials reflect the real-life experiences and \
         opinions of such users. However, the experiences are personal to those \
         particular users, and may not necessarily be representative of all users \
         of our products and/or services.\n\n\
         We do not claim, and you should not assume, that all users will have the \
         same experiences. **Individual results may vary.**\n\n\
         The testimonials are displayed verbatim except for correction of \
         grammatical or typing errors. Some testimonials may have been shortened \
         for brevity. The views and opinions contained in the testimonials belong \
         solely to the individual user and do not reflect our views and \
         opinions.\n\n"
    ));
}

fn write_errors_omissions(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Errors and Omissions Disclaimer\n\n\
         While we have made every attempt to ensure that the information contained \
         on our website is correct, {company} is not responsible for any errors or \
         omissions, or for the results obtained from the use of this \
         information.\n\n\
         All information on our website is provided \"as is,\" with no guarantee \
         of completeness, accuracy, timeliness, or of the results obtained from \
         the use of this information. In no event will {company}, its related \
         partnerships or corporations, or the partners, agents, or employees \
         thereof be liable to you or anyone else for any decision made or action \
         taken in reliance on the information on this website.\n\n",
        company = input.company_name,
    ));
}

fn write_fair_use(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Fair Use Disclaimer\n\n\
         Our website may contain copyrighted material, the use of which has not \
         always been specifically authorized by the copyright owner. We believe \
         this constitutes a \"fair use\" of any such copyrighted material as \
         provided for in section 107 of the United States Copyright Law.\n\n\
         If you wish to use copyrighted material from our website for purposes of \
         your own that go beyond fair use, you must obtain permission from the \
         copyright owner.\n\n"
    ));
}

fn write_limitation_of_liability(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Limitation of Liability\n\n\
         To the maximum extent permitted by applicable law, in no event shall \
         {company} or its suppliers be liable for any special, incidental, \
         indirect, or consequential damages whatsoever (including, but not limited \
         to, damages for loss of profits, loss of data or other information, \
         business interruption, personal injury, or loss of privacy) arising out \
         of or in any way related to the use of or inability to use our website or \
         services, even if {company} or any supplier has been advised of the \
         possibility of such damages.\n\n",
        company = input.company_name,
    ));
}

fn write_indemnification(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Indemnification\n\n\
         You agree to defend, indemnify, and hold harmless {company} and its \
         licensees and licensors, and their employees, contractors, agents, \
         officers, and directors from and against any and all claims, damages, \
         obligations, losses, liabilities, costs, or debt and expenses (including \
         but not limited to attorney's fees) arising from your use of and access \
         to our website and services.\n\n",
        company = input.company_name,
    ));
}

fn write_changes(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Changes to This Disclaimer\n\n\
         We reserve the right to modify this disclaimer at any time. Changes will \
         be effective immediately upon posting. We encourage you to review this \
         disclaimer periodically.\n\n"
    ));
}

fn write_contact(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Contact Us\n\n\
         If you have any questions or concerns about this Disclaimer, please \
         contact us:\n\n\
         {lines}\n",
        lines = contact_lines(input),
    ));
}
