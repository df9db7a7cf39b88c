//! Site assembly for the GAIA UI documentation.
//!
//! Builds everything the docs site derives from the content tree and the
//! component registry:
//!
//! - [`build_navigation`]: grouped sidebar navigation
//! - [`Resolver`]: URL slug to page resolution with breadcrumbs and
//!   registry-enriched metadata
//! - [`build_sitemap`] / [`render_sitemap_xml`]: crawler sitemap
//! - [`robots_config`] / [`render_robots_txt`]: crawler rules
//!
//! All operations are synchronous filesystem reads against a
//! [`ContentStore`](gaiadocs_content::ContentStore); nothing here holds
//! mutable state between calls.

mod navigation;
mod resolver;
mod robots;
mod sitemap;

pub use navigation::{NavItem, NavSection, build_navigation};
pub use resolver::{Breadcrumb, ResolveError, ResolvedPage, Resolver};
pub use robots::{RobotsConfig, RobotsRule, render_robots_txt, robots_config};
pub use sitemap::{ChangeFrequency, SitemapEntry, build_sitemap, render_sitemap_xml};
