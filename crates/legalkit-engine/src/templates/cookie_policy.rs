//! Cookie policy renderer
//!
//! Category coverage is exhaustive and order-fixed: every category in the
//! catalog gets a subsection, either a detailed sample table (selected) or a
//! one-line "not used" statement (not selected).

use super::{contact_lines, wrap_document};
use crate::numbering::{write_sections, PlannedSection, SectionCounter};
use legalkit_types::{CookieCategory, DocumentKind, QuestionnaireInput};

/// Render a cookie policy body from the questionnaire input
pub fn render(input: &QuestionnaireInput) -> String {
    let mut body = String::new();
    let mut counter = SectionCounter::new();

    write_what_are_cookies(counter.next(), &mut body);
    write_how_we_use(counter.next(), input, &mut body);
    write_cookie_types(counter.next(), input, &mut body);
    write_third_party(counter.next(), input, &mut body);
    write_managing(counter.next(), input, &mut body);
    write_do_not_track(counter.next(), input, &mut body);

    write_sections(
        &mut body,
        &mut counter,
        vec![
            PlannedSection::when(input.gdpr_applicable, |n, out| write_gdpr_consent(n, out)),
            PlannedSection::always(|n, out| write_contact(n, input, out)),
            PlannedSection::always(|n, out| write_changes(n, out)),
        ],
    );

    wrap_document(DocumentKind::CookiePolicy, input, &body)
}

/// Fixed sample cookie rows (name, purpose, duration) per category
fn sample_cookies(category: CookieCategory) -> &'static [(&'static str, &'static str, &'static str)]
{
    match category {
        CookieCategory::Essential => &[
            ("session_id", "Session management", "Session"),
            ("csrf_token", "Security (CSRF protection)", "Session"),
            ("cookie_consent", "Remember consent preferences", "1 year"),
        ],
        CookieCategory::Analytics => &[
            ("_ga", "Google Analytics - User identification", "2 years"),
            ("_ga_*", "Google Analytics - Session state", "2 years"),
            ("_gid", "Google Analytics - Session identification", "24 hours"),
        ],
        CookieCategory::Functional => &[
            ("locale", "Language preference", "1 year"),
            ("theme", "Display preferences", "1 year"),
        ],
        CookieCategory::Advertising => &[
            ("_fbp", "Meta - Ad delivery and measurement", "3 months"),
            ("IDE", "Google DoubleClick - Ad targeting", "13 months"),
        ],
        CookieCategory::SocialMedia => &[
            ("fr", "Facebook - Social plugins", "3 months"),
            ("bcookie", "LinkedIn - Browser identification", "1 year"),
        ],
    }
}

/// Descriptive paragraph shown when the category is selected
fn category_description(category: CookieCategory) -> &'static str {
    match category {
        CookieCategory::Essential => {
            "These cookies are necessary for the website to function and cannot be \
             switched off. They are usually set in response to actions you take, \
             such as setting privacy preferences, logging in, or filling in forms. \
             Without these cookies, certain services cannot be provided."
        }
        CookieCategory::Analytics => {
            "These cookies allow us to count visits and traffic sources so we can \
             measure and improve site performance. They help us know which pages \
             are the most and least popular and see how visitors move around the \
             site."
        }
        CookieCategory::Functional => {
            "These cookies enable enhanced functionality and personalization, such \
             as remembering your language preference or region. They may be set by \
             us or by third-party providers whose services we have added to our \
             pages."
        }
        CookieCategory::Advertising => {
            "These cookies may be set through our site by our advertising partners. \
             They may be used to build a profile of your interests and show you \
             relevant advertisements on other sites. They do not directly store \
             personal information but are based on uniquely identifying your \
             browser and internet device."
        }
        CookieCategory::SocialMedia => {
            "These cookies are set by social media services that we have added to \
             the site to enable you to share our content with your networks. They \
             are capable of tracking your browser across other sites and building a \
             profile of your interests."
        }
    }
}

/// One-line statement shown when the category is not selected
fn not_used_statement(category: CookieCategory) -> &'static str {
    match category {
        CookieCategory::Essential => {
            "We do not currently use essential cookies beyond what is necessary for \
             basic website functionality."
        }
        CookieCategory::Analytics => "We do not currently use analytics or performance cookies.",
        CookieCategory::Functional => "We do not currently use functional or preference cookies.",
        CookieCategory::Advertising => "We do not currently use advertising or targeting cookies.",
        CookieCategory::SocialMedia => "We do not currently use social media cookies.",
    }
}

fn write_what_are_cookies(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. What Are Cookies?\n\n\
         Cookies are small text files that are placed on your device (computer, \
         tablet, or mobile) when you visit a website. They are widely used to make \
         websites work more efficiently, provide a better user experience, and \
         give website operators useful information.\n\n"
    ));
}

fn write_how_we_use(n: u32, input: &QuestionnaireInput, out: &mut String) {
    let website = input
        .company_website
        .as_deref()
        .map(|w| format!(" ({})", w))
        .unwrap_or_default();
    out.push_str(&format!(
        "## {n}. How We Use Cookies\n\n\
         {company} uses cookies and similar technologies on our website{website} \
         for the following purposes:\n\n\
         - **Essential Operations:** To make our website function properly\n\
         - **Authentication:** To recognize you when you return to our website\n\
         - **Security:** To support security features and detect abuse\n\
         - **Preferences:** To remember your settings and preferences\n\
         - **Analytics:** To understand how visitors use our website\n",
        company = input.company_name,
    ));
    if input.has_cookie_category(CookieCategory::Advertising) {
        out.push_str(
            "- **Advertising:** To deliver relevant advertisements and measure their effectiveness\n",
        );
    }
    if input.has_cookie_category(CookieCategory::SocialMedia) {
        out.push_str("- **Social Media:** To enable social media features and integration\n");
    }
    out.push('\n');
}

fn write_cookie_types(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!("## {n}. Types of Cookies We Use\n\n"));
    for (i, category) in CookieCategory::ALL.iter().enumerate() {
        out.push_str(&format!(
            "### {n}.{sub} {label} Cookies\n\n",
            sub = i + 1,
            label = category.label(),
        ));
        if input.has_cookie_category(*category) {
            out.push_str(category_description(*category));
            out.push_str("\n\n| Cookie | Purpose | Duration |\n|--------|---------|----------|\n");
            for (name, purpose, duration) in sample_cookies(*category) {
                out.push_str(&format!("| {} | {} | {} |\n", name, purpose, duration));
            }
            out.push('\n');
        } else {
            out.push_str(not_used_statement(*category));
            out.push_str("\n\n");
        }
    }
}

fn write_third_party(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!("## {n}. Third-Party Cookies\n\n"));
    if input.third_party_sharing && !input.third_parties.is_empty() {
        out.push_str(
            "Some cookies are placed by third-party services that appear on our \
             pages. We use the following third-party services that may set \
             cookies:\n\n",
        );
        for party in &input.third_parties {
            out.push_str(&format!("- **{}**\n", party));
        }
        out.push_str(
            "\nWe do not control these third-party cookies. Please refer to the \
             respective third-party privacy policies for more information.\n\n",
        );
    } else {
        out.push_str(
            "We may use third-party services that set their own cookies. We do not \
             control these cookies, and their use is governed by the third party's \
             own privacy policy.\n\n",
        );
    }
}

fn write_managing(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Managing Cookies\n\n\
         ### Browser Controls\n\n\
         Most web browsers allow you to control cookies through their settings. \
         You can:\n\
         - **View cookies:** See what cookies are stored on your device\n\
         - **Delete cookies:** Remove some or all cookies\n\
         - **Block cookies:** Prevent websites from setting cookies\n\
         - **Allow cookies:** Accept cookies from specific websites\n\n\
         ### Browser-Specific Instructions\n\n\
         - **Chrome:** Settings → Privacy and Security → Cookies\n\
         - **Firefox:** Settings → Privacy & Security → Cookies and Site Data\n\
         - **Safari:** Preferences → Privacy → Cookies and Website Data\n\
         - **Edge:** Settings → Privacy, Search, and Services → Cookies\n\n\
         ### Opt-Out Links\n\n"
    ));
    if input.has_cookie_category(CookieCategory::Analytics) {
        out.push_str(
            "- **Google Analytics:** [https://tools.google.com/dlpage/gaoptout](https://tools.google.com/dlpage/gaoptout)\n",
        );
    }
    out.push_str(
        "- **General Opt-Out (NAI):** [https://optout.networkadvertising.org](https://optout.networkadvertising.org)\n\
         - **General Opt-Out (DAA):** [https://optout.aboutads.info](https://optout.aboutads.info)\n\n\
         **Note:** Blocking certain cookies may impact the functionality of our \
         website.\n\n",
    );
}

fn write_do_not_track(n: u32, input: &QuestionnaireInput, out: &mut String) {
    let behavior = if input.has_cookie_category(CookieCategory::Analytics) {
        "currently does not respond to DNT signals, but we honor your cookie \
         preferences as described above."
    } else {
        "respects DNT signals where possible."
    };
    out.push_str(&format!(
        "## {n}. Do Not Track\n\n\
         Some browsers have a \"Do Not Track\" (DNT) feature that signals to \
         websites that you do not want to be tracked. Our website {behavior}\n\n"
    ));
}

fn write_gdpr_consent(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. GDPR and Cookie Consent\n\n\
         Under the General Data Protection Regulation (GDPR) and the ePrivacy \
         Directive, we are required to obtain your consent before setting \
         non-essential cookies. When you first visit our website, you will be \
         presented with a cookie consent banner that allows you to:\n\n\
         - Accept all cookies\n\
         - Reject non-essential cookies\n\
         - Customize your cookie preferences\n\n\
         You can change your preferences at any time by accessing our cookie \
         settings.\n\n"
    ));
}

fn write_contact(n: u32, input: &QuestionnaireInput, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Contact Us\n\n\
         If you have any questions about our use of cookies, please contact us:\n\n\
         {lines}\n",
        lines = contact_lines(input),
    ));
}

fn write_changes(n: u32, out: &mut String) {
    out.push_str(&format!(
        "## {n}. Changes to This Cookie Policy\n\n\
         We may update this Cookie Policy from time to time. We will notify you of \
         any changes by posting the new Cookie Policy on this page and updating \
         the \"Last Updated\" date.\n\n"
    ));
}
