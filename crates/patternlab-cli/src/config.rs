//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `PATTERNLAB_<SECTION>__<KEY>`, e.g.
//!    `PATTERNLAB_SORTING__ALGORITHM=merge`
//! 3. Config file (`--config FILE`, or the default path if it exists)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use patternlab_core::domain::SortAlgorithm;
use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;

const ENV_PREFIX: &str = "PATTERNLAB";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Sorting defaults.
    pub sorting: SortingConfig,
    /// Parking lot settings.
    pub parking: ParkingConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SortingConfig {
    pub algorithm: SortAlgorithm,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParkingConfig {
    /// TOML layout used when `--layout` is not given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<PathBuf>,
    /// Hours the demo's first vehicles stay.
    pub demo_hours: f64,
}

impl Default for ParkingConfig {
    fn default() -> Self {
        Self {
            layout: None,
            demo_hours: 2.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: OutputFormat,
}

impl AppConfig {
    /// Load configuration by layering defaults, file and environment.
    ///
    /// An explicit `config_file` must exist; the default location is only
    /// read if present.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to encode built-in defaults")?;

        let settings = Config::builder()
            .add_source(defaults)
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        settings
            .try_deserialize()
            .context("Configuration has invalid values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.patternlab.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "patternlab", "patternlab")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".patternlab.toml"))
    }
}
