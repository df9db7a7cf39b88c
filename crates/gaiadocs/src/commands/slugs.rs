//! `gaiadocs slugs` command implementation.

use std::path::PathBuf;

use clap::Args;

use gaiadocs_config::{CliSettings, Config};
use gaiadocs_content::ContentStore;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the slugs command.
#[derive(Args)]
pub(crate) struct SlugsArgs {
    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover gaiadocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl SlugsArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let store = ContentStore::new(config.content_resolved.source_dir);
        for slug in store.scan()? {
            output.data(&site_path(&slug));
        }
        Ok(())
    }
}

/// Site path for a slug; the empty slug is the docs root.
fn site_path(slug: &[String]) -> String {
    if slug.is_empty() {
        "/docs".to_owned()
    } else {
        format!("/docs/{}", slug.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_path() {
        assert_eq!(site_path(&[]), "/docs");
        assert_eq!(
            site_path(&["components".to_owned(), "raised-button".to_owned()]),
            "/docs/components/raised-button"
        );
    }
}
