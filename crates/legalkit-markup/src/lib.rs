//! Lightweight markup converter shared by document export and blog content
//!
//! Parses the constrained markup dialect produced by the section renderers
//! (headings, bold, links, inline code, lists, tables, horizontal rules,
//! paragraphs) into a presentation tree, and serializes that tree to HTML.
//!
//! The grammar is line-oriented and deliberately non-recursive: no nested
//! emphasis-in-links, no nested lists, no multi-line table cells. Malformed
//! input never fails: unrecognized syntax passes through as literal text and
//! unclosed blocks are force-closed at end of input.

mod inline;
mod parser;

pub mod html;

pub use parser::parse;

use serde::{Deserialize, Serialize};

/// A block-level node in the presentation tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Block {
    /// Heading, levels 1-3 (`#`, `##`, `###`)
    Heading { level: u8, content: Vec<Inline> },
    /// Plain paragraph
    Paragraph { content: Vec<Inline> },
    /// List; the marker of the first item decides ordered vs unordered
    List {
        ordered: bool,
        items: Vec<Vec<Inline>>,
    },
    /// Table with a header row and zero or more body rows
    Table {
        header: Vec<Vec<Inline>>,
        rows: Vec<Vec<Vec<Inline>>>,
    },
    /// Horizontal rule
    Rule,
}

/// An inline node inside a block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum Inline {
    Text { text: String },
    Strong { text: String },
    Link { label: String, href: String },
    Code { text: String },
}

impl Block {
    /// True for heading blocks of any level
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }
}
