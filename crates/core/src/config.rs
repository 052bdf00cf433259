use crate::error::{CodataError, Result};
use crate::search::SearchMode;
use codata_api::models::DEFAULT_PER_PAGE;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const DEFAULT_CATALOG_FILE: &str = "codata_constants.json";
pub const DEFAULT_BIND: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_PER_PAGE: usize = 500;
pub const DEFAULT_MAX_PATTERN_LEN: usize = 256;

/// Knobs for name search and pagination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    pub mode: SearchMode,
    pub default_per_page: usize,
    pub max_per_page: usize,
    /// Longest query accepted, in characters. Applies to both search modes.
    pub max_pattern_len: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            mode: SearchMode::Terms,
            default_per_page: DEFAULT_PER_PAGE,
            max_per_page: DEFAULT_MAX_PER_PAGE,
            max_pattern_len: DEFAULT_MAX_PATTERN_LEN,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodataConfig {
    pub catalog_path: PathBuf,
    pub bind: SocketAddr,
    pub search: SearchSettings,
}

impl Default for CodataConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_FILE),
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            search: SearchSettings::default(),
        }
    }
}

impl CodataConfig {
    /// Read a JSON config file. Missing keys fall back to their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        let search = &self.search;
        if search.default_per_page == 0 {
            return Err(CodataError::Config(
                "search.default_per_page must be at least 1".to_string(),
            ));
        }
        if search.max_per_page < search.default_per_page {
            return Err(CodataError::Config(format!(
                "search.max_per_page ({}) is below search.default_per_page ({})",
                search.max_per_page, search.default_per_page
            )));
        }
        if search.max_pattern_len == 0 {
            return Err(CodataError::Config(
                "search.max_pattern_len must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
