//! CLI error types.

use gaiadocs_config::ConfigError;
use gaiadocs_content::ContentError;
use gaiadocs_registry::RegistryError;
use gaiadocs_site::ResolveError;

/// CLI error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    #[error("{0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Content(#[from] ContentError),

    #[error("{0}")]
    Registry(#[from] RegistryError),

    #[error("{0}")]
    Resolve(#[from] ResolveError),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Json(#[from] serde_json::Error),
}
