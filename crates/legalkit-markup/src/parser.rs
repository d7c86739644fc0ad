//! Line-oriented block parser
//!
//! Single pass over the input, tracking at most one open list and one open
//! table. A blank line closes any open block; end of input force-closes
//! whatever is still open.

use crate::inline::parse_inline;
use crate::{Block, Inline};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// A line of three or more hyphens and nothing else
    static ref RULE_RE: Regex = Regex::new(r"^-{3,}$").unwrap();
    /// Table header/body separator: pipes, hyphens, colons and spaces only
    static ref TABLE_SEPARATOR_RE: Regex = Regex::new(r"^\|[\s\-:|]+$").unwrap();
    /// Ordered list item marker
    static ref ORDERED_ITEM_RE: Regex = Regex::new(r"^\d+\.\s+").unwrap();
}

/// Accumulator for the currently open list
struct OpenList {
    ordered: bool,
    items: Vec<Vec<Inline>>,
}

/// Accumulator for the currently open table
struct OpenTable {
    header: Vec<Vec<Inline>>,
    rows: Vec<Vec<Vec<Inline>>>,
}

/// Parse markup-dialect text into a presentation tree.
///
/// Never fails: unrecognized lines become paragraphs and malformed inline
/// syntax passes through literally.
pub fn parse(input: &str) -> Vec<Block> {
    let mut blocks = Vec::new();
    let mut list: Option<OpenList> = None;
    let mut table: Option<OpenTable> = None;

    for line in input.lines() {
        let trimmed = line.trim();

        // Blank line closes open blocks but emits nothing
        if trimmed.is_empty() {
            close_list(&mut list, &mut blocks);
            close_table(&mut table, &mut blocks);
            continue;
        }

        // Headings, most specific marker first
        if let Some(rest) = trimmed.strip_prefix("### ") {
            close_list(&mut list, &mut blocks);
            close_table(&mut table, &mut blocks);
            blocks.push(Block::Heading {
                level: 3,
                content: parse_inline(rest),
            });
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("## ") {
            close_list(&mut list, &mut blocks);
            close_table(&mut table, &mut blocks);
            blocks.push(Block::Heading {
                level: 2,
                content: parse_inline(rest),
            });
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("# ") {
            close_list(&mut list, &mut blocks);
            close_table(&mut table, &mut blocks);
            blocks.push(Block::Heading {
                level: 1,
                content: parse_inline(rest),
            });
            continue;
        }

        // Horizontal rule
        if RULE_RE.is_match(trimmed) {
            close_list(&mut list, &mut blocks);
            close_table(&mut table, &mut blocks);
            blocks.push(Block::Rule);
            continue;
        }

        // Table rows
        if trimmed.starts_with('|') {
            close_list(&mut list, &mut blocks);

            // Separator rows are consumed without output
            if TABLE_SEPARATOR_RE.is_match(trimmed) {
                continue;
            }

            let cells: Vec<Vec<Inline>> = trimmed
                .split('|')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(parse_inline)
                .collect();

            match table.as_mut() {
                // First real row becomes the header
                None => {
                    table = Some(OpenTable {
                        header: cells,
                        rows: Vec::new(),
                    });
                }
                Some(open) => open.rows.push(cells),
            }
            continue;
        }

        // List items; either marker joins the currently open list
        if let Some(rest) = unordered_item(trimmed) {
            close_table(&mut table, &mut blocks);
            push_item(&mut list, false, parse_inline(rest));
            continue;
        }
        if let Some(rest) = ordered_item(trimmed) {
            close_table(&mut table, &mut blocks);
            push_item(&mut list, true, parse_inline(rest));
            continue;
        }

        // Anything else is a paragraph
        close_list(&mut list, &mut blocks);
        close_table(&mut table, &mut blocks);
        blocks.push(Block::Paragraph {
            content: parse_inline(trimmed),
        });
    }

    // Force-close at end of input
    close_list(&mut list, &mut blocks);
    close_table(&mut table, &mut blocks);

    blocks
}

fn unordered_item(line: &str) -> Option<&str> {
    line.strip_prefix("- ").or_else(|| line.strip_prefix("* "))
}

fn ordered_item(line: &str) -> Option<&str> {
    ORDERED_ITEM_RE
        .find(line)
        .map(|m| line[m.end()..].trim_start())
}

fn push_item(list: &mut Option<OpenList>, ordered: bool, item: Vec<Inline>) {
    match list.as_mut() {
        Some(open) => open.items.push(item),
        None => {
            *list = Some(OpenList {
                ordered,
                items: vec![item],
            });
        }
    }
}

fn close_list(list: &mut Option<OpenList>, blocks: &mut Vec<Block>) {
    if let Some(open) = list.take() {
        blocks.push(Block::List {
            ordered: open.ordered,
            items: open.items,
        });
    }
}

fn close_table(table: &mut Option<OpenTable>, blocks: &mut Vec<Block>) {
    if let Some(open) = table.take() {
        blocks.push(Block::Table {
            header: open.header,
            rows: open.rows,
        });
    }
}
