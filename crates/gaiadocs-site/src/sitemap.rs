//! Sitemap generation for search engine crawlers.
//!
//! Emits the homepage and docs root first, then every scanned document,
//! then any registry component that has no authored documentation page yet.
//! Priorities are a static heuristic: 1.0 homepage, 0.9 docs root, 0.8
//! component pages, 0.7 everything else.

use std::collections::HashSet;
use std::fmt::Write;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use gaiadocs_content::{ContentError, ContentStore};
use gaiadocs_registry::Registry;

/// How often a page is expected to change.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    /// Component pages and the docs root.
    Weekly,
    /// Everything else.
    Monthly,
}

impl ChangeFrequency {
    /// Value used in sitemap XML.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

/// One sitemap record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SitemapEntry {
    /// Absolute URL.
    pub url: String,
    /// Best-effort last modification time.
    pub last_modified: DateTime<Utc>,
    /// Expected change frequency.
    pub change_frequency: ChangeFrequency,
    /// Crawl priority, 0.0-1.0.
    pub priority: f64,
}

/// Build the full sitemap.
///
/// `last_modified` is read from the underlying file's mtime and falls back
/// to the current time when the file cannot be stat'ed; that path never
/// fails. Duplicate URLs are suppressed via a seen-set keyed by site path.
///
/// # Errors
///
/// Returns [`ContentError`] only if the content root itself cannot be
/// scanned.
pub fn build_sitemap(
    store: &ContentStore,
    registry: &Registry,
    base_url: &str,
) -> Result<Vec<SitemapEntry>, ContentError> {
    let now = Utc::now();
    let mut entries = vec![
        SitemapEntry {
            url: base_url.to_owned(),
            last_modified: now,
            change_frequency: ChangeFrequency::Monthly,
            priority: 1.0,
        },
        SitemapEntry {
            url: format!("{base_url}/docs"),
            last_modified: now,
            change_frequency: ChangeFrequency::Weekly,
            priority: 0.9,
        },
    ];

    let mut seen: HashSet<String> = HashSet::new();

    for slug in store.scan()? {
        if slug.is_empty() {
            // Docs root is already covered above
            continue;
        }

        let path = format!("/docs/{}", slug.join("/"));
        if !seen.insert(path.clone()) {
            continue;
        }

        let is_component = slug.len() > 1 && slug[0] == "components";
        let last_modified = store
            .modified(&slug)
            .map_or(now, DateTime::<Utc>::from);

        entries.push(SitemapEntry {
            url: format!("{base_url}{path}"),
            last_modified,
            change_frequency: if is_component {
                ChangeFrequency::Weekly
            } else {
                ChangeFrequency::Monthly
            },
            priority: if is_component { 0.8 } else { 0.7 },
        });
    }

    // Registry components without an authored doc page yet
    for item in registry.items() {
        let path = format!("/docs/components/{}", item.name);
        if seen.insert(path.clone()) {
            entries.push(SitemapEntry {
                url: format!("{base_url}{path}"),
                last_modified: now,
                change_frequency: ChangeFrequency::Weekly,
                priority: 0.8,
            });
        }
    }

    Ok(entries)
}

/// Render sitemap entries as standard sitemap XML.
#[must_use]
pub fn render_sitemap_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::with_capacity(entries.len() * 160 + 128);
    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n");
    for entry in entries {
        xml.push_str("  <url>\n");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&entry.url));
        let _ = writeln!(
            xml,
            "    <lastmod>{}</lastmod>",
            entry.last_modified.to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        let _ = writeln!(
            xml,
            "    <changefreq>{}</changefreq>",
            entry.change_frequency.as_str()
        );
        let _ = writeln!(xml, "    <priority>{:.1}</priority>", entry.priority);
        xml.push_str("  </url>\n");
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Escape the five XML special characters.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
