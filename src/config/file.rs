use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::text::CaseMode;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, validate_range, Validate};

pub const DEFAULT_MIN_RATING: f32 = 4.0;
pub const DEFAULT_DELAY_MS: u64 = 1000;

/// Optional TOML configuration. Every section and field may be omitted;
/// accessors fall back to the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub display: Option<DisplayConfig>,
    pub catalog: Option<CatalogConfig>,
    pub compute: Option<ComputeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub default_case: Option<CaseMode>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub min_rating: Option<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeConfig {
    pub delay_ms: Option<u64>,
}

impl FileConfig {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        tracing::debug!("Loading config from {}", path.display());
        let raw = std::fs::read_to_string(path)?;
        let config: FileConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn default_case(&self) -> CaseMode {
        self.display
            .as_ref()
            .and_then(|display| display.default_case)
            .unwrap_or_default()
    }

    pub fn min_rating(&self) -> f32 {
        self.catalog
            .as_ref()
            .and_then(|catalog| catalog.min_rating)
            .unwrap_or(DEFAULT_MIN_RATING)
    }

    pub fn delay_ms(&self) -> u64 {
        self.compute
            .as_ref()
            .and_then(|compute| compute.delay_ms)
            .unwrap_or(DEFAULT_DELAY_MS)
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(min_rating) = self.catalog.as_ref().and_then(|c| c.min_rating) {
            validate_range("catalog.min_rating", min_rating, 0.0, 5.0)?;
        }

        if let Some(delay_ms) = self.compute.as_ref().and_then(|c| c.delay_ms) {
            validate_positive_number("compute.delay_ms", delay_ms, 1)?;
        }

        Ok(())
    }
}
