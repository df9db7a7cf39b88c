//! `gaiadocs nav` command implementation.

use std::path::PathBuf;

use clap::Args;

use gaiadocs_config::{CliSettings, Config};
use gaiadocs_content::ContentStore;
use gaiadocs_site::build_navigation;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    /// Content source directory (overrides config).
    #[arg(short, long)]
    source_dir: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover gaiadocs.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl NavArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let cli_settings = CliSettings {
            source_dir: self.source_dir.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        let store = ContentStore::new(config.content_resolved.source_dir);
        let sections = build_navigation(&store)?;

        output.data(&serde_json::to_string_pretty(&sections)?);
        Ok(())
    }
}
