//! Slug-based document lookup and loading.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::ContentError;
use crate::frontmatter::FrontMatter;
use crate::scanner;

/// A loaded content document.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    /// Slug segments identifying the document (empty for the docs root).
    pub slug: Vec<String>,
    /// Parsed front matter metadata.
    pub front_matter: FrontMatter,
    /// Raw body text following the front matter block.
    pub body: String,
}

/// Filesystem content store rooted at a single directory.
///
/// Lookup follows the URL scheme: slug `["components", "raised-button"]`
/// maps to `components/raised-button.mdx`, falling back to
/// `components/raised-button/index.mdx`; the empty slug maps to the root
/// `index.mdx`.
#[derive(Clone, Debug)]
pub struct ContentStore {
    root: PathBuf,
}

impl ContentStore {
    /// Create a store rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Content root directory.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Enumerate every document slug under the root.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::RootNotFound`] for a missing root; see
    /// [`scan`](crate::scan).
    pub fn scan(&self) -> Result<Vec<Vec<String>>, ContentError> {
        scanner::scan(&self.root)
    }

    /// Load the document for a slug.
    ///
    /// Returns `Ok(None)` when no file matches the slug; absence is a
    /// routine outcome (the caller renders a not-found page), not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Io`] if a matching file exists but cannot
    /// be read.
    pub fn load(&self, slug: &[String]) -> Result<Option<Document>, ContentError> {
        let Some(path) = self.document_path(slug) else {
            return Ok(None);
        };

        let content = fs::read_to_string(&path).map_err(|e| ContentError::io(&path, e))?;
        let (front_matter, body) = FrontMatter::parse(&content);

        Ok(Some(Document {
            slug: slug.to_vec(),
            front_matter,
            body: body.to_owned(),
        }))
    }

    /// Modification time of the file backing a slug.
    ///
    /// Returns `None` when the file is missing or the timestamp cannot be
    /// read; callers fall back to the current time.
    #[must_use]
    pub fn modified(&self, slug: &[String]) -> Option<SystemTime> {
        let path = self.document_path(slug)?;
        match fs::metadata(&path).and_then(|m| m.modified()) {
            Ok(mtime) => Some(mtime),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to stat document");
                None
            }
        }
    }

    /// Resolve a slug to the first existing candidate file.
    ///
    /// The empty slug maps to the root `index.mdx`; otherwise `<slug>.mdx`
    /// is tried before `<slug>/index.mdx`. Slug segments that could escape
    /// the root (separators, `..`, hidden names) never match.
    #[must_use]
    pub fn document_path(&self, slug: &[String]) -> Option<PathBuf> {
        if !slug.iter().all(|s| is_safe_segment(s)) {
            return None;
        }

        if slug.is_empty() {
            let path = self.root.join("index.mdx");
            return path.is_file().then_some(path);
        }

        let (last, parents) = slug.split_last()?;
        let mut base = self.root.clone();
        for segment in parents {
            base.push(segment);
        }

        // Path::with_extension would truncate dotted segments like "v1.2"
        let direct = base.join(format!("{last}.mdx"));
        if direct.is_file() {
            return Some(direct);
        }
        let index = base.join(last).join("index.mdx");
        index.is_file().then_some(index)
    }
}

/// A slug segment must be a plain file name component.
fn is_safe_segment(segment: &str) -> bool {
    !segment.is_empty()
        && !segment.starts_with('.')
        && !segment.contains(['/', '\\'])
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn create_store() -> (tempfile::TempDir, ContentStore) {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(temp_dir.path());
        (temp_dir, store)
    }

    fn slug(segments: &[&str]) -> Vec<String> {
        segments.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn test_load_root_index() {
        let (temp_dir, store) = create_store();
        fs::write(
            temp_dir.path().join("index.mdx"),
            "---\ntitle: Introduction\n---\n# Welcome",
        )
        .unwrap();

        let doc = store.load(&[]).unwrap().unwrap();

        assert!(doc.slug.is_empty());
        assert_eq!(doc.front_matter.title, Some("Introduction".to_owned()));
        assert_eq!(doc.body, "# Welcome");
    }

    #[test]
    fn test_load_nested_document() {
        let (temp_dir, store) = create_store();
        let components = temp_dir.path().join("components");
        fs::create_dir(&components).unwrap();
        fs::write(
            components.join("raised-button.mdx"),
            "---\ntitle: Raised Button\n---\nBody",
        )
        .unwrap();

        let doc = store
            .load(&slug(&["components", "raised-button"]))
            .unwrap()
            .unwrap();

        assert_eq!(doc.front_matter.title, Some("Raised Button".to_owned()));
    }

    #[test]
    fn test_load_directory_index_fallback() {
        let (temp_dir, store) = create_store();
        let components = temp_dir.path().join("components");
        fs::create_dir(&components).unwrap();
        fs::write(components.join("index.mdx"), "---\ntitle: Components\n---\n").unwrap();

        let doc = store.load(&slug(&["components"])).unwrap().unwrap();

        assert_eq!(doc.front_matter.title, Some("Components".to_owned()));
    }

    #[test]
    fn test_load_missing_returns_none() {
        let (_temp_dir, store) = create_store();

        assert!(store.load(&slug(&["nonexistent"])).unwrap().is_none());
    }

    #[test]
    fn test_load_without_front_matter() {
        let (temp_dir, store) = create_store();
        fs::write(temp_dir.path().join("plain.mdx"), "Just text.").unwrap();

        let doc = store.load(&slug(&["plain"])).unwrap().unwrap();

        assert!(doc.front_matter.is_empty());
        assert_eq!(doc.body, "Just text.");
    }

    #[test]
    fn test_unsafe_segments_never_match() {
        let (temp_dir, store) = create_store();
        fs::write(temp_dir.path().join("index.mdx"), "x").unwrap();

        assert!(store.document_path(&slug(&[".."])).is_none());
        assert!(store.document_path(&slug(&["a/b"])).is_none());
        assert!(store.document_path(&slug(&[".hidden"])).is_none());
        assert!(store.document_path(&slug(&[""])).is_none());
    }

    #[test]
    fn test_modified_present_and_missing() {
        let (temp_dir, store) = create_store();
        fs::write(temp_dir.path().join("guide.mdx"), "# Guide").unwrap();

        assert!(store.modified(&slug(&["guide"])).is_some());
        assert!(store.modified(&slug(&["missing"])).is_none());
    }

    #[test]
    fn test_direct_file_preferred_over_index() {
        let (temp_dir, store) = create_store();
        let dir = temp_dir.path().join("guide");
        fs::create_dir(&dir).unwrap();
        fs::write(temp_dir.path().join("guide.mdx"), "direct").unwrap();
        fs::write(dir.join("index.mdx"), "index").unwrap();

        let doc = store.load(&slug(&["guide"])).unwrap().unwrap();

        assert_eq!(doc.body, "direct");
    }
}
