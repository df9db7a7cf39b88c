//! Configuration management for the GAIA UI docs site.
//!
//! Parses `gaiadocs.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ```toml
//! [site]
//! name = "Gaia UI"
//! base_url = "https://ui.gaia.com"
//!
//! [content]
//! source_dir = "content/docs"
//! registry_path = "registry.json"
//! ```
//!
//! Relative paths in `[content]` are resolved against the config file's
//! directory.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "gaiadocs.toml";

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override site base URL.
    pub base_url: Option<String>,
    /// Override content source directory.
    pub source_dir: Option<PathBuf>,
    /// Override registry manifest path.
    pub registry_path: Option<PathBuf>,
}

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Site identity and links.
    pub site: SiteConfig,
    /// Content configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// Site identity configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site display name.
    pub name: String,
    /// Canonical site URL, no trailing slash.
    pub base_url: String,
    /// Site description for SEO metadata.
    pub description: String,
    /// Repository URL.
    pub github_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Gaia UI".to_owned(),
            base_url: "https://ui.gaia.com".to_owned(),
            description: "Beautiful, accessible components built with Radix UI and Tailwind CSS."
                .to_owned(),
            github_url: "https://github.com/heygaia/ui".to_owned(),
        }
    }
}

/// Raw content configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    source_dir: Option<String>,
    registry_path: Option<String>,
}

/// Resolved content configuration with absolute paths.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Source directory for content documents.
    pub source_dir: PathBuf,
    /// Path to the component registry manifest.
    pub registry_path: PathBuf,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `gaiadocs.toml` in the current directory and parents,
    /// falling back to defaults when none is found.
    ///
    /// CLI settings are applied after loading and path resolution, allowing
    /// CLI arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or if
    /// parsing or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_url) = &settings.base_url {
            self.site.base_url.clone_from(base_url);
        }
        if let Some(source_dir) = &settings.source_dir {
            self.content_resolved.source_dir.clone_from(source_dir);
        }
        if let Some(registry_path) = &settings.registry_path {
            self.content_resolved.registry_path.clone_from(registry_path);
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            site: SiteConfig::default(),
            content: ContentConfigRaw::default(),
            content_resolved: ContentConfig {
                source_dir: base.join("content/docs"),
                registry_path: base.join("registry.json"),
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Resolve `[content]` paths against the config file's directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let source_dir = self.content.source_dir.as_deref().unwrap_or("content/docs");
        let registry_path = self.content.registry_path.as_deref().unwrap_or("registry.json");

        self.content_resolved = ContentConfig {
            source_dir: resolve_against(config_dir, source_dir),
            registry_path: resolve_against(config_dir, registry_path),
        };
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.name.is_empty() {
            return Err(ConfigError::Validation("site.name cannot be empty".into()));
        }
        if !self.site.base_url.starts_with("http://") && !self.site.base_url.starts_with("https://")
        {
            return Err(ConfigError::Validation(
                "site.base_url must start with http:// or https://".into(),
            ));
        }
        if self.site.base_url.ends_with('/') {
            return Err(ConfigError::Validation(
                "site.base_url must not end with a slash".into(),
            ));
        }
        Ok(())
    }
}

/// Join a possibly-relative path onto a base directory.
fn resolve_against(base: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults_mirror_site_identity() {
        let config = Config::default();

        assert_eq!(config.site.name, "Gaia UI");
        assert_eq!(config.site.base_url, "https://ui.gaia.com");
        assert_eq!(config.site.github_url, "https://github.com/heygaia/ui");
        assert_eq!(
            config.content_resolved.source_dir,
            PathBuf::from("./content/docs")
        );
    }

    #[test]
    fn test_load_explicit_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = Config::load(Some(&temp_dir.path().join("absent.toml")), None);

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file_resolves_relative_paths() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("gaiadocs.toml");
        std::fs::write(
            &path,
            "[site]\nname = \"Gaia UI\"\nbase_url = \"https://example.com\"\n\n\
             [content]\nsource_dir = \"docs\"\nregistry_path = \"reg.json\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.content_resolved.source_dir, temp_dir.path().join("docs"));
        assert_eq!(
            config.content_resolved.registry_path,
            temp_dir.path().join("reg.json")
        );
        assert_eq!(config.config_path, Some(path));
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("gaiadocs.toml");
        std::fs::write(&path, "[site]\nname = \"Acme UI\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.site.name, "Acme UI");
        assert_eq!(config.site.base_url, "https://ui.gaia.com");
    }

    #[test]
    fn test_cli_settings_take_precedence() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("gaiadocs.toml");
        std::fs::write(&path, "[content]\nsource_dir = \"docs\"\n").unwrap();

        let settings = CliSettings {
            base_url: Some("https://staging.gaia.com".to_owned()),
            source_dir: Some(PathBuf::from("/tmp/docs")),
            registry_path: None,
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.site.base_url, "https://staging.gaia.com");
        assert_eq!(config.content_resolved.source_dir, PathBuf::from("/tmp/docs"));
    }

    #[test]
    fn test_validate_rejects_bad_base_url() {
        let mut config = Config::default();
        config.site.base_url = "ftp://example.com".to_owned();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));

        config.site.base_url = "https://example.com/".to_owned();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_name() {
        let mut config = Config::default();
        config.site.name = String::new();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_load_malformed_toml() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("gaiadocs.toml");
        std::fs::write(&path, "[site\nname = ").unwrap();

        let result = Config::load(Some(&path), None);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
