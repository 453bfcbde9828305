use anyhow::{Context, Result};
use confyg::{env, Confygery};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for cancionero.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (CANCIONERO_* prefix)
/// 3. Config file (~/.config/cancionero/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the processed catalog CSV.
    ///
    /// Can be set via:
    /// - CLI: --catalog /path/to/catalog.csv
    /// - ENV: CANCIONERO_CATALOG_PATH
    /// - Config: catalog_path = "/path/to/catalog.csv"
    /// - Default: ~/.local/share/cancionero/datos_procesados.csv
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Year the `recent` feature counts back from.
    ///
    /// Fixed rather than taken from the clock so results are reproducible.
    #[serde(default = "default_reference_year")]
    pub reference_year: i32,

    #[serde(default)]
    pub limits: Limits,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: default_catalog_path(),
            reference_year: default_reference_year(),
            limits: Limits::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Default result limits per operation, used when a request omits one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub popular: usize,
    pub suggestions: usize,
    pub mood: usize,
    pub feature: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            popular: 20,
            suggestions: 10,
            mood: 10,
            feature: 20,
        }
    }
}

/// Logger settings, applied by the binary at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of trace, debug, info, warn, error.
    pub level: String,
    pub coloured: bool,
    pub report_caller: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            coloured: true,
            report_caller: false,
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// Searches for config file at: ~/.config/cancionero/config.toml
    /// Reads environment variables with CANCIONERO_ prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("cancionero");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Load configuration, overriding the catalog path.
    ///
    /// This is used when the --catalog CLI flag is provided.
    pub fn load_with_catalog_path(catalog_path: PathBuf) -> Result<Self> {
        let mut config = Self::load()?;
        config.catalog_path = catalog_path;
        Ok(config)
    }
}

/// Returns: ~/.local/share/cancionero/datos_procesados.csv (or platform equivalent)
fn default_catalog_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cancionero")
        .join("datos_procesados.csv")
}

const fn default_reference_year() -> i32 {
    2024
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/cancionero/config.toml
/// - macOS: ~/Library/Application Support/cancionero/config.toml
/// - Windows: %APPDATA%\cancionero\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cancionero")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Cancionero Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (CANCIONERO_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Path to the processed catalog CSV
#
# Must contain name, artists, cluster, the normalized audio features, and
# the *_original display columns.
#
# Can also be set via:
# - CLI: cancionero --catalog /custom/catalog.csv popular
# - Environment: CANCIONERO_CATALOG_PATH=/custom/catalog.csv
#
# Default: Platform-specific data directory
#catalog_path = "/path/to/datos_procesados.csv"

# Year the "recent" feature filter counts back ten years from
reference_year = 2024

# Default number of results when a request does not give a limit
[limits]
popular = 20
suggestions = 10
mood = 10
feature = 20

[logging]
level = "info"
coloured = true
report_caller = false
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.catalog_path.as_os_str().is_empty());
        assert_eq!(config.reference_year, 2024);
        assert_eq!(config.limits.popular, 20);
        assert_eq!(config.limits.suggestions, 10);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_load() {
        // Should not fail even if config file doesn't exist
        let result = Config::load();
        assert!(result.is_ok());
    }

    #[test]
    fn test_config_with_custom_catalog_path() {
        let custom_path = PathBuf::from("/tmp/catalog.csv");
        let config = Config::load_with_catalog_path(custom_path.clone());
        assert!(config.is_ok());
        assert_eq!(config.unwrap().catalog_path, custom_path);
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(example_config()).unwrap();
        assert_eq!(config.reference_year, 2024);
        assert_eq!(config.limits, Limits::default());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_partial_limits_keep_defaults() {
        let config: Config = toml::from_str("[limits]\nmood = 3\n").unwrap();
        assert_eq!(config.limits.mood, 3);
        assert_eq!(config.limits.feature, 20);
    }
}
