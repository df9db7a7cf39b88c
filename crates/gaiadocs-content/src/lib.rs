//! Content store for the GAIA UI documentation site.
//!
//! Documentation pages are authored as `.mdx` files with YAML front matter
//! under a single content root (`content/docs/` by convention). The directory
//! structure determines URL slugs: `components/raised-button.mdx` becomes
//! `/docs/components/raised-button`, and `index.mdx` files collapse to their
//! parent path (the root `index.mdx` is the docs landing page).
//!
//! This crate provides:
//! - [`ContentStore`]: slug-based document lookup and loading
//! - [`scan`]: enumeration of every addressable document slug
//! - [`FrontMatter`]: YAML front matter parsing
//! - [`extract_toc`]: heading extraction for in-page navigation
//!
//! Documents are read-only at runtime; authors create them on disk and the
//! store re-reads on each call. A missing content root is the one fatal
//! condition ([`ContentError::RootNotFound`]); everything else degrades.

mod error;
mod frontmatter;
mod scanner;
mod store;
mod toc;

pub use error::ContentError;
pub use frontmatter::FrontMatter;
pub use scanner::scan;
pub use store::{ContentStore, Document};
pub use toc::{TocEntry, extract_toc, heading_id};
