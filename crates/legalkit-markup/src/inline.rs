//! Inline substitution: bold, links, inline code
//!
//! Substitutions apply in a fixed order (bold, then links, then code) so
//! that a link label's brackets are never mistaken for other syntax when
//! patterns overlap.

use crate::Inline;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref STRONG_RE: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref LINK_RE: Regex = Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").unwrap();
    static ref CODE_RE: Regex = Regex::new(r"`([^`]+)`").unwrap();
}

/// Parse one line of text into inline nodes
pub fn parse_inline(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    push_strong(text, &mut out);
    out
}

fn push_strong(text: &str, out: &mut Vec<Inline>) {
    let mut last = 0;
    for caps in STRONG_RE.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        push_links(&text[last..whole.start()], out);
        out.push(Inline::Strong {
            text: caps[1].to_string(),
        });
        last = whole.end();
    }
    push_links(&text[last..], out);
}

fn push_links(text: &str, out: &mut Vec<Inline>) {
    let mut last = 0;
    for caps in LINK_RE.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        push_code(&text[last..whole.start()], out);
        out.push(Inline::Link {
            label: caps[1].to_string(),
            href: caps[2].to_string(),
        });
        last = whole.end();
    }
    push_code(&text[last..], out);
}

fn push_code(text: &str, out: &mut Vec<Inline>) {
    let mut last = 0;
    for caps in CODE_RE.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        push_text(&text[last..whole.start()], out);
        out.push(Inline::Code {
            text: caps[1].to_string(),
        });
        last = whole.end();
    }
    push_text(&text[last..], out);
}

fn push_text(text: &str, out: &mut Vec<Inline>) {
    if !text.is_empty() {
        out.push(Inline::Text {
            text: text.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Inline {
        Inline::Text {
            text: s.to_string(),
        }
    }

    #[test]
    fn test_plain_text() {
        assert_eq!(parse_inline("just words"), vec![text("just words")]);
    }

    #[test]
    fn test_bold() {
        assert_eq!(
            parse_inline("a **b** c"),
            vec![
                text("a "),
                Inline::Strong {
                    text: "b".to_string()
                },
                text(" c"),
            ]
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            parse_inline("see [docs](https://example.com) here"),
            vec![
                text("see "),
                Inline::Link {
                    label: "docs".to_string(),
                    href: "https://example.com".to_string(),
                },
                text(" here"),
            ]
        );
    }

    #[test]
    fn test_code() {
        assert_eq!(
            parse_inline("run `cargo doc` now"),
            vec![
                text("run "),
                Inline::Code {
                    text: "cargo doc".to_string()
                },
                text(" now"),
            ]
        );
    }

    #[test]
    fn test_bold_applies_before_links() {
        // A link wrapped in bold markers becomes a single strong node; the
        // grammar does not nest.
        assert_eq!(
            parse_inline("**[label](target)**"),
            vec![Inline::Strong {
                text: "[label](target)".to_string()
            }]
        );
    }

    #[test]
    fn test_unclosed_bold_passes_through() {
        assert_eq!(parse_inline("**dangling"), vec![text("**dangling")]);
    }

    #[test]
    fn test_mixed_ordering() {
        assert_eq!(
            parse_inline("**Email:** [us](mailto:a@b.c) or `help`"),
            vec![
                Inline::Strong {
                    text: "Email:".to_string()
                },
                text(" "),
                Inline::Link {
                    label: "us".to_string(),
                    href: "mailto:a@b.c".to_string(),
                },
                text(" or "),
                Inline::Code {
                    text: "help".to_string()
                },
            ]
        );
    }
}
