//! Configuration loading from planner.toml.

use std::path::{Path, PathBuf};

use catalog::Catalog;
use planner::TextRenderer;
use planner::render::DEFAULT_LINES_PER_PAGE;
use serde::Deserialize;

/// Top-level configuration. Every key is optional.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Catalog TOML to load instead of the bundled one.
    pub catalog: Option<PathBuf>,

    /// Directory exports are written into.
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Log filter, used when `TRIP_PLANNER_LOG` is unset.
    pub log: Option<String>,

    #[serde(default)]
    pub export: ExportConfig,
}

/// Export document settings.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ExportConfig {
    #[serde(default = "default_lines_per_page")]
    pub lines_per_page: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            lines_per_page: default_lines_per_page(),
        }
    }
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_lines_per_page() -> usize {
    DEFAULT_LINES_PER_PAGE
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: None,
            export_dir: default_export_dir(),
            log: None,
            export: ExportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Load `path` if it exists, otherwise use the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// The configured catalog, or the bundled one.
    pub fn catalog(&self) -> catalog::Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load(path),
            None => Catalog::builtin(),
        }
    }

    pub fn renderer(&self) -> TextRenderer {
        TextRenderer::new(self.export_dir.clone()).with_lines_per_page(self.export.lines_per_page)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),
}
