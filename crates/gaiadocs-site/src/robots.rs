//! robots.txt rules for search engine crawlers.
//!
//! The rule set is static configuration, not derived from content: API and
//! private routes are fenced off for everyone, the major crawlers get the
//! same rules minus the build-output path, and the image crawler may fetch
//! everything.

use std::fmt::Write;

use serde::Serialize;

/// Crawl rules for one user agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RobotsRule {
    /// User agent the rule applies to (`*` for all).
    pub user_agent: String,
    /// Allowed path prefixes.
    pub allow: Vec<String>,
    /// Disallowed path prefixes.
    pub disallow: Vec<String>,
    /// Seconds between requests, if constrained.
    pub crawl_delay: Option<u32>,
}

/// Complete robots.txt description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RobotsConfig {
    /// Per-crawler rules, emitted in order.
    pub rules: Vec<RobotsRule>,
    /// Absolute sitemap URL.
    pub sitemap: String,
    /// Canonical host URL.
    pub host: String,
}

fn rule(user_agent: &str, disallow: &[&str], crawl_delay: Option<u32>) -> RobotsRule {
    RobotsRule {
        user_agent: user_agent.to_owned(),
        allow: vec!["/".to_owned()],
        disallow: disallow.iter().map(|d| (*d).to_owned()).collect(),
        crawl_delay,
    }
}

/// The site's crawler rule set.
#[must_use]
pub fn robots_config(base_url: &str) -> RobotsConfig {
    RobotsConfig {
        rules: vec![
            rule("*", &["/api/", "/private/", "/_next/"], Some(0)),
            rule("Googlebot", &["/api/", "/private/"], None),
            rule("Googlebot-Image", &[], None),
            rule("Bingbot", &["/api/", "/private/"], None),
            // Yahoo
            rule("Slurp", &["/api/", "/private/"], None),
            rule("DuckDuckBot", &["/api/", "/private/"], None),
        ],
        sitemap: format!("{base_url}/sitemap.xml"),
        host: base_url.to_owned(),
    }
}

/// Render a [`RobotsConfig`] as robots.txt text.
#[must_use]
pub fn render_robots_txt(config: &RobotsConfig) -> String {
    let mut txt = String::new();
    for rule in &config.rules {
        let _ = writeln!(txt, "User-agent: {}", rule.user_agent);
        for allow in &rule.allow {
            let _ = writeln!(txt, "Allow: {allow}");
        }
        for disallow in &rule.disallow {
            let _ = writeln!(txt, "Disallow: {disallow}");
        }
        if let Some(delay) = rule.crawl_delay {
            let _ = writeln!(txt, "Crawl-delay: {delay}");
        }
        txt.push('\n');
    }
    let _ = writeln!(txt, "Sitemap: {}", config.sitemap);
    let _ = writeln!(txt, "Host: {}", config.host);
    txt
}
