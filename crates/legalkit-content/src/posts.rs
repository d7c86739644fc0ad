//! The post catalog

use crate::BlogPost;

/// All published posts, newest first
pub const POSTS: &[BlogPost] = &[
    BlogPost {
        slug: "privacy-policy-requirements-2025",
        title: "What Your Privacy Policy Must Cover in 2025",
        description: "A practical checklist of the disclosures privacy laws now expect from every website and app.",
        date: "2025-03-04",
        category: "Privacy",
        read_time: "7 min read",
        body: r#"If your website collects so much as an email address, you need a privacy policy. Not because a lawyer said so, but because the **GDPR**, the **CCPA**, and a growing list of state laws all require one, and the fines for skipping it are real.

## The Non-Negotiable Disclosures

Every modern privacy policy has to answer four questions:

1. What personal data do you collect?
2. Why do you collect it?
3. Who do you share it with?
4. How long do you keep it?

Vague answers do not count. "We may collect certain information" is exactly the phrasing regulators flag first.

## Data Categories, Spelled Out

List the categories concretely. A typical SaaS product collects:

- Name and email address
- Payment information (usually held by a processor such as Stripe)
- IP address and device information
- Usage data and analytics

### What About Cookies?

Cookies get their own policy in most setups, but the privacy policy still has to mention that tracking happens and link to the details. See our guide to [cookie consent banners](/blog/cookie-consent-banners-guide) for the banner side of the problem.

## Rights Sections

If you serve EU or California users, the policy must enumerate their rights by name, not paraphrase them. Under the GDPR that means access, rectification, erasure, restriction, portability, objection, freedom from automated decision-making, and withdrawal of consent. The CCPA list is shorter but includes the right to opt out of sale, which deserves its own `Do Not Sell` link.

---

A privacy policy is not a one-time artifact. Review it every time you add a vendor, a tracking script, or a new data field in your signup form.
"#,
    },
    BlogPost {
        slug: "gdpr-vs-ccpa-comparison",
        title: "GDPR vs. CCPA: What Actually Differs",
        description: "The two regimes overlap less than you think. Here is where they diverge and what that means for your documents.",
        date: "2025-01-21",
        category: "Privacy",
        read_time: "6 min read",
        body: r#"Most founders treat GDPR and CCPA compliance as one checkbox. The regimes share a goal but differ in scope, triggers, and the rights they grant, and your legal documents need to reflect both when both apply.

## Side by Side

| Aspect | GDPR | CCPA |
|--------|------|------|
| Who it protects | EU residents | California residents |
| Trigger | Any processing of EU personal data | Revenue or data-volume thresholds |
| Legal basis required | Yes, one of six | No |
| Private right of action | Limited | Data breaches only |
| Opt-out of sale | Not framed as sale | Core mechanism |

## Why the Legal Basis Matters

The GDPR forces you to name **why** you are allowed to process each category of data: consent, contract, legal obligation, vital interests, public task, or legitimate interests. The CCPA never asks. If your privacy policy only lists CCPA-style disclosures, EU regulators will notice the gap immediately.

## Practical Consequences

- A GDPR section belongs in your privacy policy whenever you have EU users, regardless of company size.
- A CCPA section is threshold-based, but adding it early costs nothing and saves a rewrite.
- The two rights lists cannot be merged into one paragraph. Enumerate them separately.

Generate both sections, keep them current, and let the numbering adjust around them instead of renumbering by hand.
"#,
    },
    BlogPost {
        slug: "cookie-consent-banners-guide",
        title: "Cookie Consent Banners That Actually Comply",
        description: "Consent walls, implied consent, and why your banner needs a real reject button.",
        date: "2024-11-12",
        category: "Cookies",
        read_time: "5 min read",
        body: r#"A cookie policy describes what you set; a consent banner asks permission to set it. European regulators have spent the last few years clarifying that most banners fail at the second part.

## The Three Rules

1. **Reject must be as easy as accept.** A banner with a bright "Accept all" button and a settings maze for everything else is non-compliant in most EU jurisdictions.
2. **No cookies before consent.** Analytics and advertising cookies cannot load until the visitor acts. Strictly necessary cookies are the only exception.
3. **Consent must be revocable.** A persistent link or icon has to let visitors change their mind later.

## Categories to Offer

Group your cookies the way your cookie policy does:

- Essential / Strictly Necessary
- Functional
- Analytics / Performance
- Advertising / Targeting
- Social Media

The category names in the banner and in the policy should match exactly. A mismatch is a small thing, but it is the kind of small thing that makes an audit longer.

---

If you only take one thing from this post: put a working reject button on the first layer of the banner. Everything else is detail.
"#,
    },
];
