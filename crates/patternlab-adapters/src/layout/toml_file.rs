//! TOML layout files.
//!
//! # Format
//!
//! ```toml
//! entrances = [1]
//! exits     = [1]
//! boards    = [1]
//!
//! [[spots]]
//! id   = 1
//! kind = "handicapped"   # handicapped | compact | large | motorcycle
//!
//! [[spots]]
//! id   = 2
//! kind = "compact"
//! ```
//!
//! Spots are allocated in file order.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use patternlab_core::{
    application::{ApplicationError, ports::LayoutSource},
    domain::LotLayout,
    error::LabResult,
};
use thiserror::Error;
use tracing::{debug, instrument};

/// Why a layout file could not be turned into a [`LotLayout`].
#[derive(Debug, Error)]
pub enum LayoutFileError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid layout TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("cannot serialise layout: {0}")]
    Render(#[from] toml::ser::Error),
}

/// Parse a layout from TOML text.
pub fn parse_layout(raw: &str) -> Result<LotLayout, LayoutFileError> {
    Ok(toml::from_str(raw)?)
}

/// Render a layout as TOML text in the format [`parse_layout`] reads.
pub fn render_layout(layout: &LotLayout) -> Result<String, LayoutFileError> {
    Ok(toml::to_string_pretty(layout)?)
}

/// Layout source backed by a TOML file on disk.
#[derive(Debug, Clone)]
pub struct TomlLayoutFile {
    path: PathBuf,
}

impl TomlLayoutFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<LotLayout, LayoutFileError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| LayoutFileError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_layout(&raw)
    }
}

impl LayoutSource for TomlLayoutFile {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> LabResult<LotLayout> {
        let layout = self
            .read()
            .map_err(|e| ApplicationError::LayoutUnavailable {
                source_name: self.describe(),
                reason: e.to_string(),
            })?;
        debug!(spots = layout.spots.len(), "Layout file parsed");
        Ok(layout)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
