use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use roofline_core::{CrawlConfig, DetectorConfig};

/// On-disk configuration: `[detector]` and `[crawl]` TOML tables.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub detector: DetectorConfig,
    #[serde(default)]
    pub crawl: CrawlConfig,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
