//! URL slug to page resolution.
//!
//! Looks up a document in the content store, extracts its table of
//! contents, assembles breadcrumb trails and resolves display metadata.
//! Slugs of the shape `components/<name>` are cross-referenced against the
//! component registry: a hit enriches title, description and SEO keywords;
//! a miss degrades to generic documentation metadata and is never fatal.

use serde::Serialize;

use gaiadocs_content::{ContentError, ContentStore, FrontMatter, TocEntry, extract_toc};
use gaiadocs_registry::{Registry, RegistryItem};

/// One breadcrumb link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    /// Display title.
    pub title: String,
    /// Absolute site path.
    pub href: String,
}

/// A fully resolved documentation page.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ResolvedPage {
    /// Slug segments (empty for the docs root).
    pub slug: Vec<String>,
    /// Display title: front matter, then registry, then the raw slug.
    pub title: String,
    /// Description: front matter, then registry.
    pub description: Option<String>,
    /// SEO keywords; populated for registry-backed component pages.
    pub keywords: Vec<String>,
    /// Raw front matter, including extra author-supplied keys.
    pub front_matter: FrontMatter,
    /// Table of contents in document order.
    pub toc: Vec<TocEntry>,
    /// Raw body text.
    pub body: String,
    /// Navigational breadcrumbs: ancestors only, the current page excluded.
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Full trail for structured data: Home, Documentation, every segment.
    pub trail: Vec<Breadcrumb>,
}

/// Error resolving a page.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// No document matches the slug. A routine outcome: the caller is
    /// expected to render a not-found page.
    #[error("Page not found: /docs/{0}")]
    NotFound(String),
    /// Content store access failed.
    #[error(transparent)]
    Content(#[from] ContentError),
}

/// Resolves URL slugs against a content store and component registry.
pub struct Resolver {
    store: ContentStore,
    registry: Registry,
}

impl Resolver {
    /// Create a resolver over a content store and registry.
    #[must_use]
    pub fn new(store: ContentStore, registry: Registry) -> Self {
        Self { store, registry }
    }

    /// Resolve a page by slug segments; the empty slug is the docs root.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::NotFound`] when no document matches,
    /// regardless of whether a registry entry of that name exists, and
    /// [`ResolveError::Content`] on read failures.
    pub fn resolve(&self, slug: &[String]) -> Result<ResolvedPage, ResolveError> {
        let document = self
            .store
            .load(slug)?
            .ok_or_else(|| ResolveError::NotFound(slug.join("/")))?;

        let toc = extract_toc(&document.body);
        let registry_item = component_name(slug).and_then(|name| self.registry.find(name));

        let title = document
            .front_matter
            .title
            .clone()
            .or_else(|| registry_item.map(|item| item.title.clone()))
            .unwrap_or_else(|| fallback_title(slug));

        let description = document
            .front_matter
            .description
            .clone()
            .or_else(|| registry_item.map(|item| item.description.clone()));

        let keywords = registry_item
            .map(|item| component_keywords(&title, item))
            .unwrap_or_default();

        Ok(ResolvedPage {
            breadcrumbs: breadcrumbs(slug),
            trail: trail(slug),
            title,
            description,
            keywords,
            toc,
            body: document.body,
            front_matter: document.front_matter,
            slug: slug.to_vec(),
        })
    }
}

/// Component name for slugs of the shape `components/<name>`.
fn component_name(slug: &[String]) -> Option<&str> {
    match slug {
        [section, name] if section == "components" => Some(name),
        _ => None,
    }
}

/// Slug-derived title when neither front matter nor registry supply one.
/// The docs root falls back to "Introduction".
fn fallback_title(slug: &[String]) -> String {
    slug.last()
        .cloned()
        .unwrap_or_else(|| "Introduction".to_owned())
}

/// SEO keyword list for a registry-backed component page.
fn component_keywords(title: &str, item: &RegistryItem) -> Vec<String> {
    let mut keywords = vec![
        title.to_owned(),
        format!("{title} component"),
        format!("React {title}"),
        item.name.clone(),
        "React component".to_owned(),
        "UI component".to_owned(),
        "TypeScript component".to_owned(),
    ];
    keywords.extend(
        item.dependencies
            .iter()
            .map(|dep| dep.replace(['@', '/'], " ").trim().to_owned()),
    );
    keywords
}

/// Breadcrumb title for a slug segment: first character uppercased,
/// hyphens become spaces ("raised-button" -> "Raised button").
fn segment_title(segment: &str) -> String {
    let mut chars = segment.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let rest = chars.collect::<String>().replace('-', " ");
    format!("{}{rest}", first.to_uppercase())
}

/// Ancestor breadcrumbs for navigation; the final segment is the current
/// page and is excluded.
fn breadcrumbs(slug: &[String]) -> Vec<Breadcrumb> {
    let mut crumbs = Vec::new();
    for (i, segment) in slug.iter().enumerate().take(slug.len().saturating_sub(1)) {
        crumbs.push(Breadcrumb {
            title: segment_title(segment),
            href: format!("/docs/{}", slug[..=i].join("/")),
        });
    }
    crumbs
}

/// Full trail for structured-data consumers, current page included.
fn trail(slug: &[String]) -> Vec<Breadcrumb> {
    let mut crumbs = vec![
        Breadcrumb {
            title: "Home".to_owned(),
            href: "/".to_owned(),
        },
        Breadcrumb {
            title: "Documentation".to_owned(),
            href: "/docs".to_owned(),
        },
    ];
    for (i, segment) in slug.iter().enumerate() {
        crumbs.push(Breadcrumb {
            title: segment_title(segment),
            href: format!("/docs/{}", slug[..=i].join("/")),
        });
    }
    crumbs
}
