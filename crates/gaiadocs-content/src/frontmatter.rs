//! YAML front matter parsing.
//!
//! Documents may start with a metadata block delimited by `---` fences:
//!
//! ```text
//! ---
//! title: Raised Button
//! description: A button with depth.
//! ---
//!
//! Body text...
//! ```
//!
//! `title` and `description` are recognized fields; everything else is kept
//! in [`FrontMatter::extra`] for downstream consumers. A malformed block is
//! logged and treated as absent rather than failing the page.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Front matter metadata for a content document.
///
/// All fields are optional; `None` means the author did not set the field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrontMatter {
    /// Display title (overrides the slug-derived title).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Page description, used for navigation and SEO metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Any additional author-supplied keys.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Split a document into front matter and body.
    ///
    /// Returns the parsed metadata and the body text following the closing
    /// fence. Documents without a front matter block yield a default
    /// [`FrontMatter`] and the full content as body. A block that is present
    /// but malformed is logged via `tracing::warn!` and treated as absent;
    /// the body still excludes the fenced block.
    #[must_use]
    pub fn parse(content: &str) -> (Self, &str) {
        let Some((yaml, body)) = split_front_matter(content) else {
            return (Self::default(), content);
        };

        if yaml.trim().is_empty() {
            return (Self::default(), body);
        }

        match serde_yaml::from_str(yaml) {
            Ok(front_matter) => (front_matter, body),
            Err(e) => {
                tracing::warn!(error = %e, "Malformed front matter, ignoring block");
                (Self::default(), body)
            }
        }
    }

    /// Check whether any field was set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.extra.is_empty()
    }
}

/// Locate the fenced block at the start of `content`.
///
/// The opening fence must be the first line. Returns the raw YAML between the
/// fences and the body after the closing fence, or `None` when either fence
/// is missing.
fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("---")?;
    let rest = rest.strip_prefix('\r').unwrap_or(rest);
    let rest = rest.strip_prefix('\n')?;

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\n', '\r']) == "---" {
            let yaml = &rest[..offset];
            return Some((yaml, &rest[offset + line.len()..]));
        }
        offset += line.len();
    }
    None
}
