//! Table-of-contents extraction from document bodies.
//!
//! Headings of level 2-4 (`##` through `####`) are collected in document
//! order. Level 1 is reserved for the page title and never captured. The
//! generated anchor id must match the slugging convention of the rendering
//! pipeline exactly, or in-page links break silently; [`heading_id`] is that
//! single source of truth.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^(#{2,4})\s+(.+)$").expect("heading pattern is valid")
});

/// One entry in a page's table of contents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Anchor id, derived deterministically from the heading text.
    pub id: String,
    /// Heading display text.
    pub text: String,
    /// Heading depth (2-4). Levels are not required to nest.
    pub level: u8,
}

/// Extract the table of contents from a document body.
///
/// Produces exactly one entry per matching heading, in document order.
/// Identical heading texts produce colliding ids; no disambiguation is
/// applied.
#[must_use]
pub fn extract_toc(body: &str) -> Vec<TocEntry> {
    HEADING
        .captures_iter(body)
        .map(|cap| {
            let text = cap[2].trim().to_owned();
            TocEntry {
                id: heading_id(&text),
                level: cap[1].len() as u8,
                text,
            }
        })
        .collect()
}

/// Derive the anchor id for a heading text.
///
/// Lowercases the text, drops everything outside `[a-z0-9]`, whitespace and
/// hyphens, collapses whitespace/hyphen runs into a single hyphen, and
/// strips leading and trailing hyphens. Deterministic and idempotent.
#[must_use]
pub fn heading_id(text: &str) -> String {
    let mut id = String::with_capacity(text.len());
    for ch in text.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            id.push(ch);
        } else if (ch.is_whitespace() || ch == '-') && !id.is_empty() && !id.ends_with('-') {
            id.push('-');
        }
    }
    while id.ends_with('-') {
        id.pop();
    }
    id
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_extract_toc_basic() {
        let body = "## Setup\n\nSome text\n\n### Install\n\nMore text";
        let toc = extract_toc(body);

        assert_eq!(
            toc,
            vec![
                TocEntry {
                    id: "setup".to_owned(),
                    text: "Setup".to_owned(),
                    level: 2,
                },
                TocEntry {
                    id: "install".to_owned(),
                    text: "Install".to_owned(),
                    level: 3,
                },
            ]
        );
    }

    #[test]
    fn test_extract_toc_ignores_h1_and_h5() {
        let body = "# Title\n\n## Usage\n\n##### Too deep";
        let toc = extract_toc(body);

        assert_eq!(toc.len(), 1);
        assert_eq!(toc[0].text, "Usage");
        assert_eq!(toc[0].level, 2);
    }

    #[test]
    fn test_extract_toc_level_four() {
        let body = "#### Deep dive";
        let toc = extract_toc(body);

        assert_eq!(toc[0].level, 4);
        assert_eq!(toc[0].id, "deep-dive");
    }

    #[test]
    fn test_extract_toc_levels_need_not_nest() {
        // A level-4 directly after a level-2 is valid
        let body = "## Overview\n\n#### Fine print";
        let toc = extract_toc(body);

        assert_eq!(toc.len(), 2);
        assert_eq!(toc[0].level, 2);
        assert_eq!(toc[1].level, 4);
    }

    #[test]
    fn test_extract_toc_document_order() {
        let body = "## Zebra\n\n## Alpha\n\n## Mango";
        let toc = extract_toc(body);

        let texts: Vec<_> = toc.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["Zebra", "Alpha", "Mango"]);
    }

    #[test]
    fn test_extract_toc_requires_space_after_hashes() {
        let body = "##NoSpace\n\n## Real";
        let toc = extract_toc(body);

        assert_eq!(toc.len(), 1);
        assert_eq!(toc[0].text, "Real");
    }

    #[test]
    fn test_duplicate_headings_collide() {
        let body = "## Usage\n\ntext\n\n## Usage";
        let toc = extract_toc(body);

        assert_eq!(toc.len(), 2);
        assert_eq!(toc[0].id, toc[1].id);
    }

    #[test]
    fn test_heading_id_punctuation_dropped() {
        assert_eq!(heading_id("What's new?"), "whats-new");
        assert_eq!(heading_id("useQuery()"), "usequery");
    }

    #[test]
    fn test_heading_id_whitespace_runs_collapse() {
        assert_eq!(heading_id("Getting   Started"), "getting-started");
        assert_eq!(heading_id("A - B"), "a-b");
    }

    #[test]
    fn test_heading_id_trims_hyphens() {
        assert_eq!(heading_id("-- edge case --"), "edge-case");
        assert_eq!(heading_id("!!!"), "");
    }

    #[test]
    fn test_heading_id_idempotent() {
        let once = heading_id("Install & Configure");
        assert_eq!(heading_id(&once), once);
    }

    #[test]
    fn test_heading_id_non_ascii_dropped() {
        assert_eq!(heading_id("Caf\u{e9} setup"), "caf-setup");
    }
}
