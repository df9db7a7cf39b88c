//! `gaiadocs build` command implementation.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use gaiadocs_config::{CliSettings, Config};
use gaiadocs_content::ContentStore;
use gaiadocs_registry::Registry;
use gaiadocs_site::{build_sitemap, render_robots_txt, render_sitemap_xml, robots_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Output directory for sitemap.xml and robots.txt (default: public/).
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Site base URL (overrides config).
    #[arg(long)]
    base_url: Option<String>,

    /// Registry manifest path (overrides config).
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover gaiadocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            base_url: self.base_url.clone(),
            source_dir: self.source_dir.clone(),
            registry_path: self.registry.clone(),
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let out_dir = self.out_dir.unwrap_or_else(|| PathBuf::from("public"));
        let store = ContentStore::new(config.content_resolved.source_dir.clone());
        let registry = Registry::load(&config.content_resolved.registry_path)?;

        output.info(&format!("Content: {}", store.root().display()));
        output.info(&format!("Output: {}", out_dir.display()));

        let entries = build_sitemap(&store, &registry, &config.site.base_url)?;
        let robots = robots_config(&config.site.base_url);

        fs::create_dir_all(&out_dir)?;
        fs::write(out_dir.join("sitemap.xml"), render_sitemap_xml(&entries))?;
        fs::write(out_dir.join("robots.txt"), render_robots_txt(&robots))?;

        output.success(&format!(
            "Wrote sitemap.xml ({} URLs) and robots.txt",
            entries.len()
        ));
        Ok(())
    }
}
