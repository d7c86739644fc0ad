//! HTML serialization of the presentation tree
//!
//! Produces a body fragment for embedding, plus a standalone styled page used
//! by the document export path.

use crate::{Block, Inline};

/// Render a presentation tree to an HTML fragment
pub fn render_blocks(blocks: &[Block]) -> String {
    let mut html = String::new();
    for block in blocks {
        match block {
            Block::Heading { level, content } => {
                let tag = match level {
                    1 => "h1",
                    2 => "h2",
                    _ => "h3",
                };
                html.push_str(&format!("<{}>{}</{}>", tag, render_inlines(content), tag));
            }
            Block::Paragraph { content } => {
                html.push_str(&format!("<p>{}</p>", render_inlines(content)));
            }
            Block::List { ordered, items } => {
                let tag = if *ordered { "ol" } else { "ul" };
                html.push_str(&format!("<{}>", tag));
                for item in items {
                    html.push_str(&format!("<li>{}</li>", render_inlines(item)));
                }
                html.push_str(&format!("</{}>", tag));
            }
            Block::Table { header, rows } => {
                html.push_str("<table><thead><tr>");
                for cell in header {
                    html.push_str(&format!("<th>{}</th>", render_inlines(cell)));
                }
                html.push_str("</tr></thead><tbody>");
                for row in rows {
                    html.push_str("<tr>");
                    for cell in row {
                        html.push_str(&format!("<td>{}</td>", render_inlines(cell)));
                    }
                    html.push_str("</tr>");
                }
                html.push_str("</tbody></table>");
            }
            Block::Rule => html.push_str("<hr />"),
        }
    }
    html
}

/// Wrap a rendered fragment into a standalone styled page
pub fn render_page(title: &str, fragment: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{}</title>\n\
         <style>{}</style>\n\
         </head>\n\
         <body>\n{}\n</body>\n\
         </html>",
        escape(title),
        PAGE_CSS,
        fragment
    )
}

fn render_inlines(inlines: &[Inline]) -> String {
    let mut html = String::new();
    for inline in inlines {
        match inline {
            Inline::Text { text } => html.push_str(&escape(text)),
            Inline::Strong { text } => {
                html.push_str(&format!("<strong>{}</strong>", escape(text)))
            }
            Inline::Link { label, href } => html.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                escape(href),
                escape(label)
            )),
            Inline::Code { text } => html.push_str(&format!("<code>{}</code>", escape(text))),
        }
    }
    html
}

/// Minimal HTML escaping for text and attribute values
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

const PAGE_CSS: &str = "\
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; \
max-width: 800px; margin: 0 auto; padding: 40px 20px; line-height: 1.6; color: #333; } \
h1 { font-size: 28px; border-bottom: 2px solid #333; padding-bottom: 10px; } \
h2 { font-size: 22px; margin-top: 30px; color: #222; } \
h3 { font-size: 18px; margin-top: 20px; color: #444; } \
ul, ol { padding-left: 20px; } \
li { margin-bottom: 5px; } \
table { width: 100%; border-collapse: collapse; margin: 15px 0; } \
th, td { padding: 8px; border: 1px solid #ddd; } \
th { font-weight: bold; background: #f5f5f5; } \
hr { border: none; border-top: 1px solid #ddd; margin: 30px 0; } \
a { color: #2563eb; }";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_heading_and_paragraph() {
        let html = render_blocks(&parse("## Title\n\nBody text.\n"));
        assert_eq!(html, "<h2>Title</h2><p>Body text.</p>");
    }

    #[test]
    fn test_render_lists() {
        let html = render_blocks(&parse("- a\n- b\n"));
        assert_eq!(html, "<ul><li>a</li><li>b</li></ul>");
        let html = render_blocks(&parse("1. a\n2. b\n"));
        assert_eq!(html, "<ol><li>a</li><li>b</li></ol>");
    }

    #[test]
    fn test_render_table() {
        let html = render_blocks(&parse("| C | P |\n|---|---|\n| x | y |\n"));
        assert_eq!(
            html,
            "<table><thead><tr><th>C</th><th>P</th></tr></thead>\
             <tbody><tr><td>x</td><td>y</td></tr></tbody></table>"
        );
    }

    #[test]
    fn test_render_inline_formatting() {
        let html = render_blocks(&parse("**bold** and [link](https://x.y) and `code`\n"));
        assert_eq!(
            html,
            "<p><strong>bold</strong> and <a href=\"https://x.y\">link</a> and <code>code</code></p>"
        );
    }

    #[test]
    fn test_escaping() {
        let html = render_blocks(&parse("a < b & c\n"));
        assert_eq!(html, "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn test_page_wrapper() {
        let page = render_page("Privacy Policy — Acme", "<p>hi</p>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Privacy Policy — Acme</title>"));
        assert!(page.contains("<p>hi</p>"));
        assert!(page.ends_with("</html>"));
    }
}
