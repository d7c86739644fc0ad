//! Static editorial content rendered through the shared markup dialect.
//!
//! Posts are compiled into the binary; there is no CMS behind this. The
//! bodies use the exact same dialect as the generated documents, so the
//! one converter in `legalkit-markup` serves both pipelines.

pub mod posts;

use serde::Serialize;

pub use posts::POSTS;

/// One blog post, fully known at compile time
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BlogPost {
    /// URL path segment, unique across the catalog
    pub slug: &'static str,
    pub title: &'static str,
    /// One-sentence teaser shown on index pages
    pub description: &'static str,
    /// Publication date, ISO 8601
    pub date: &'static str,
    pub category: &'static str,
    pub read_time: &'static str,
    /// Markup-dialect body
    pub body: &'static str,
}

/// Look a post up by its slug
pub fn find_post(slug: &str) -> Option<&'static BlogPost> {
    POSTS.iter().find(|p| p.slug == slug)
}

/// Posts in the same category, excluding the post itself
pub fn related_posts(post: &BlogPost) -> Vec<&'static BlogPost> {
    POSTS
        .iter()
        .filter(|p| p.category == post.category && p.slug != post.slug)
        .collect()
}

/// Render a post body to an HTML fragment
pub fn render_post_fragment(post: &BlogPost) -> String {
    let blocks = legalkit_markup::parse(post.body);
    legalkit_markup::html::render_blocks(&blocks)
}

/// Render a post as a standalone HTML page
pub fn render_post_page(post: &BlogPost) -> String {
    legalkit_markup::html::render_page(post.title, &render_post_fragment(post))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slugs_are_unique() {
        let slugs: HashSet<_> = POSTS.iter().map(|p| p.slug).collect();
        assert_eq!(slugs.len(), POSTS.len());
    }

    #[test]
    fn test_find_post() {
        assert!(find_post("privacy-policy-requirements-2025").is_some());
        assert!(find_post("no-such-post").is_none());
    }

    #[test]
    fn test_related_posts_exclude_self() {
        for post in POSTS {
            for related in related_posts(post) {
                assert_ne!(related.slug, post.slug);
                assert_eq!(related.category, post.category);
            }
        }
    }

    #[test]
    fn test_every_body_renders_headings_and_paragraphs() {
        for post in POSTS {
            let fragment = render_post_fragment(post);
            assert!(fragment.contains("<h2>"), "no sections in {}", post.slug);
            assert!(fragment.contains("<p>"), "no prose in {}", post.slug);
            assert!(!fragment.contains("**"), "unconverted bold in {}", post.slug);
        }
    }

    #[test]
    fn test_post_pages_carry_titles() {
        for post in POSTS {
            let page = render_post_page(post);
            assert!(page.starts_with("<!DOCTYPE html>"));
            assert!(page.contains(post.title));
        }
    }

    #[test]
    fn test_table_post_renders_table_markup() {
        let post = find_post("gdpr-vs-ccpa-comparison").unwrap();
        let fragment = render_post_fragment(post);
        assert!(fragment.contains("<table>"));
        assert!(fragment.contains("<th>GDPR</th>"));
    }
}
