//! `gaiadocs page` command implementation.

use std::path::PathBuf;

use clap::Args;

use gaiadocs_config::{CliSettings, Config};
use gaiadocs_content::ContentStore;
use gaiadocs_registry::Registry;
use gaiadocs_site::Resolver;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the page command.
#[derive(Args)]
pub(crate) struct PageArgs {
    /// Page path, e.g. "/docs/components/raised-button" or
    /// "components/raised-button". Use "/docs" for the docs root.
    path: String,

    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Registry manifest path (overrides config).
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover gaiadocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl PageArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            registry_path: self.registry.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let store = ContentStore::new(config.content_resolved.source_dir);
        let registry = Registry::load(&config.content_resolved.registry_path)?;
        let resolver = Resolver::new(store, registry);

        let page = resolver.resolve(&parse_slug(&self.path))?;
        output.data(&serde_json::to_string_pretty(&page)?);
        Ok(())
    }
}

/// Parse a user-supplied page path into slug segments.
///
/// Accepts site paths (`/docs/components/x`) and bare slugs
/// (`components/x`); a leading `docs` segment is dropped either way.
fn parse_slug(path: &str) -> Vec<String> {
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.first() == Some(&"docs") {
        segments.remove(0);
    }
    segments.into_iter().map(ToOwned::to_owned).collect()
}
