//! Validator thresholds: `.copyguard.toml` configuration
//!
//! Every check reads its limit from [`ValidatorConfig`] rather than a
//! constant, so a deployment (or a test) can tighten or relax the policy
//! without touching the checks themselves.

use crate::{CopyguardError, CopyguardResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File names probed by [`ValidatorConfig::from_project_root`], in order
const CONFIG_FILES: &[&str] = &[".copyguard.toml", "copyguard.toml"];

/// Thresholds shared by both validator policies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatorConfig {
    /// Word window for verbatim quotes and the consecutive-run limit
    #[serde(default = "default_max_quote_length")]
    pub max_quote_length: usize,

    /// Similarity limit (0.0-1.0)
    #[serde(default = "default_max_similarity")]
    pub max_similarity_score: f64,

    /// Minimum fraction of summary vocabulary absent from the sources
    #[serde(default = "default_min_transformation")]
    pub min_transformation_ratio: f64,
}

fn default_max_quote_length() -> usize {
    15
}
fn default_max_similarity() -> f64 {
    0.6
}
fn default_min_transformation() -> f64 {
    0.5
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            max_quote_length: default_max_quote_length(),
            max_similarity_score: default_max_similarity(),
            min_transformation_ratio: default_min_transformation(),
        }
    }
}

impl ValidatorConfig {
    /// Parse from TOML text and check ranges
    pub fn from_toml_str(content: &str) -> CopyguardResult<Self> {
        let config: ValidatorConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config file
    pub fn from_file(path: &Path) -> CopyguardResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Try `.copyguard.toml` then `copyguard.toml` under `root`, falling back
    /// to defaults when neither exists or loads.
    pub fn from_project_root(root: &Path) -> Self {
        for name in CONFIG_FILES {
            let path = root.join(name);
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    tracing::info!("Loaded validator config from {}", path.display());
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}, using defaults", path.display(), e);
                }
            }
        }

        tracing::debug!("No validator config under {}, using defaults", root.display());
        Self::default()
    }

    /// Reject thresholds no check can interpret
    pub fn validate(&self) -> CopyguardResult<()> {
        if self.max_quote_length == 0 {
            return Err(CopyguardError::Config(
                "maxQuoteLength must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.max_similarity_score) {
            return Err(CopyguardError::Config(format!(
                "maxSimilarityScore must be within [0, 1], got {}",
                self.max_similarity_score
            )));
        }
        if !(0.0..=1.0).contains(&self.min_transformation_ratio) {
            return Err(CopyguardError::Config(format!(
                "minTransformationRatio must be within [0, 1], got {}",
                self.min_transformation_ratio
            )));
        }
        Ok(())
    }
}

// ─── Threshold Operators ────────────────────────────────────────────

/// How a measured value is compared against an upper limit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    /// Violation when value > limit
    Exceeds,
    /// Violation when value >= limit
    Reaches,
}

impl Comparison {
    pub fn violated(&self, value: f64, limit: f64) -> bool {
        match self {
            Self::Exceeds => value > limit,
            Self::Reaches => value >= limit,
        }
    }
}
