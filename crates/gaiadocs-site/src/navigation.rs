//! Sidebar navigation built from the content tree.
//!
//! The navigation mirrors the directory layout one level deep: an untitled
//! leading group holds the docs root and the other root-level documents
//! ("Getting Started" in the UI), then one titled section per immediate
//! subdirectory. Front-matter titles win over slug-derived titles.

use std::fs;
use std::path::Path;

use serde::Serialize;

use gaiadocs_content::{ContentError, ContentStore, FrontMatter};

/// One link in the sidebar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    /// Display title.
    pub title: String,
    /// Absolute site path (e.g., `/docs/components/raised-button`).
    pub href: String,
}

/// A titled group of navigation items.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavSection {
    /// Section heading; empty for the leading "Getting Started" group.
    pub title: String,
    /// Items in directory-enumeration order.
    pub items: Vec<NavItem>,
}

/// Build the grouped navigation tree.
///
/// Sections with zero qualifying documents are omitted entirely. Entries at
/// each level are processed in sorted file-name order, so the output is
/// deterministic across platforms.
///
/// # Errors
///
/// Returns [`ContentError::RootNotFound`] for a missing content root; this
/// is fatal, there is no empty-navigation fallback.
pub fn build_navigation(store: &ContentStore) -> Result<Vec<NavSection>, ContentError> {
    let root = store.root();
    if !root.is_dir() {
        return Err(ContentError::RootNotFound(root.to_path_buf()));
    }

    let mut sections = Vec::new();
    let entries = sorted_names(root)?;

    // Leading untitled group: root index first, then other root documents
    let mut items = Vec::new();
    if entries.iter().any(|e| e.name == "index.mdx" && !e.is_dir) {
        let title = front_matter_title(&root.join("index.mdx"))?
            .unwrap_or_else(|| "Introduction".to_owned());
        items.push(NavItem {
            title,
            href: "/docs".to_owned(),
        });
    }
    for entry in entries.iter().filter(|e| !e.is_dir) {
        let Some(slug) = entry.name.strip_suffix(".mdx") else {
            continue;
        };
        if slug == "index" {
            continue;
        }
        let title = front_matter_title(&root.join(&entry.name))?.unwrap_or_else(|| slug.to_owned());
        items.push(NavItem {
            title,
            href: format!("/docs/{slug}"),
        });
    }
    if !items.is_empty() {
        sections.push(NavSection {
            title: String::new(),
            items,
        });
    }

    // One section per immediate subdirectory
    for entry in entries.iter().filter(|e| e.is_dir) {
        let dir_path = root.join(&entry.name);
        let mut items = Vec::new();

        for file in sorted_names(&dir_path)? {
            if file.is_dir {
                continue;
            }
            let Some(slug) = file.name.strip_suffix(".mdx") else {
                continue;
            };
            let title = front_matter_title(&dir_path.join(&file.name))?;
            if slug == "index" {
                // index.mdx collapses to the directory's own path
                items.push(NavItem {
                    title: title.unwrap_or_else(|| entry.name.clone()),
                    href: format!("/docs/{}", entry.name),
                });
            } else {
                items.push(NavItem {
                    title: title.unwrap_or_else(|| slug.to_owned()),
                    href: format!("/docs/{}/{slug}", entry.name),
                });
            }
        }

        if !items.is_empty() {
            sections.push(NavSection {
                title: section_title(&entry.name),
                items,
            });
        }
    }

    Ok(sections)
}

/// Section title from a directory name: hyphen-separated words, each
/// capitalized ("getting-started" -> "Getting Started").
fn section_title(dir_name: &str) -> String {
    dir_name
        .split('-')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Read only the front-matter title of a file.
fn front_matter_title(path: &Path) -> Result<Option<String>, ContentError> {
    let content = fs::read_to_string(path).map_err(|e| ContentError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let (front_matter, _) = FrontMatter::parse(&content);
    Ok(front_matter.title)
}

struct DirEntryName {
    name: String,
    is_dir: bool,
}

/// List a directory sorted by file name, hidden entries skipped.
fn sorted_names(dir: &Path) -> Result<Vec<DirEntryName>, ContentError> {
    let entries = fs::read_dir(dir).map_err(|e| ContentError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut names: Vec<DirEntryName> = entries
        .filter_map(Result::ok)
        .map(|e| DirEntryName {
            name: e.file_name().to_string_lossy().into_owned(),
            is_dir: e.file_type().is_ok_and(|t| t.is_dir()),
        })
        .filter(|e| !e.name.starts_with('.'))
        .collect();
    names.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(names)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;

    use super::*;

    fn create_store() -> (tempfile::TempDir, ContentStore) {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(temp_dir.path());
        (temp_dir, store)
    }

    #[test]
    fn test_navigation_missing_root_is_fatal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = ContentStore::new(temp_dir.path().join("nonexistent"));

        let result = build_navigation(&store);

        assert!(matches!(result, Err(ContentError::RootNotFound(_))));
    }

    #[test]
    fn test_navigation_root_and_component_sections() {
        let (temp_dir, store) = create_store();
        fs::write(
            temp_dir.path().join("index.mdx"),
            "---\ntitle: Introduction\n---\n",
        )
        .unwrap();
        let components = temp_dir.path().join("components");
        fs::create_dir(&components).unwrap();
        fs::write(
            components.join("raised-button.mdx"),
            "---\ntitle: Raised Button\n---\n",
        )
        .unwrap();

        let sections = build_navigation(&store).unwrap();

        assert_eq!(
            sections,
            vec![
                NavSection {
                    title: String::new(),
                    items: vec![NavItem {
                        title: "Introduction".to_owned(),
                        href: "/docs".to_owned(),
                    }],
                },
                NavSection {
                    title: "Components".to_owned(),
                    items: vec![NavItem {
                        title: "Raised Button".to_owned(),
                        href: "/docs/components/raised-button".to_owned(),
                    }],
                },
            ]
        );
    }

    #[test]
    fn test_navigation_title_falls_back_to_slug() {
        let (temp_dir, store) = create_store();
        fs::write(temp_dir.path().join("installation.mdx"), "No front matter.").unwrap();

        let sections = build_navigation(&store).unwrap();

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].items[0].title, "installation");
        assert_eq!(sections[0].items[0].href, "/docs/installation");
    }

    #[test]
    fn test_navigation_root_index_first() {
        let (temp_dir, store) = create_store();
        // "aaa" sorts before "index", but the root index always leads
        fs::write(temp_dir.path().join("aaa.mdx"), "---\ntitle: AAA\n---\n").unwrap();
        fs::write(temp_dir.path().join("index.mdx"), "---\ntitle: Intro\n---\n").unwrap();

        let sections = build_navigation(&store).unwrap();

        assert_eq!(sections[0].items[0].href, "/docs");
        assert_eq!(sections[0].items[1].href, "/docs/aaa");
    }

    #[test]
    fn test_navigation_empty_directory_omitted() {
        let (temp_dir, store) = create_store();
        fs::write(temp_dir.path().join("index.mdx"), "---\ntitle: Intro\n---\n").unwrap();
        fs::create_dir(temp_dir.path().join("empty-dir")).unwrap();

        let sections = build_navigation(&store).unwrap();

        assert_eq!(sections.len(), 1);
    }

    #[test]
    fn test_navigation_section_title_capitalized() {
        let (temp_dir, store) = create_store();
        let dir = temp_dir.path().join("getting-started");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("install.mdx"), "---\ntitle: Install\n---\n").unwrap();

        let sections = build_navigation(&store).unwrap();

        assert_eq!(sections[0].title, "Getting Started");
    }

    #[test]
    fn test_navigation_directory_index_collapses() {
        let (temp_dir, store) = create_store();
        let components = temp_dir.path().join("components");
        fs::create_dir(&components).unwrap();
        fs::write(
            components.join("index.mdx"),
            "---\ntitle: All Components\n---\n",
        )
        .unwrap();

        let sections = build_navigation(&store).unwrap();

        assert_eq!(sections[0].items[0].href, "/docs/components");
        assert_eq!(sections[0].items[0].title, "All Components");
    }

    #[test]
    fn test_navigation_items_in_sorted_order() {
        let (temp_dir, store) = create_store();
        let components = temp_dir.path().join("components");
        fs::create_dir(&components).unwrap();
        fs::write(components.join("weather-card.mdx"), "").unwrap();
        fs::write(components.join("code-block.mdx"), "").unwrap();
        fs::write(components.join("holo-card.mdx"), "").unwrap();

        let sections = build_navigation(&store).unwrap();

        let hrefs: Vec<_> = sections[0].items.iter().map(|i| i.href.as_str()).collect();
        assert_eq!(
            hrefs,
            vec![
                "/docs/components/code-block",
                "/docs/components/holo-card",
                "/docs/components/weather-card",
            ]
        );
    }

    #[test]
    fn test_section_title_single_word() {
        assert_eq!(section_title("components"), "Components");
        assert_eq!(section_title("api-reference"), "Api Reference");
    }
}
