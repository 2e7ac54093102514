use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::PatternEntry;
use crate::error::Result;

/// Configuration for the bias engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngineConfig {
    /// Number of general writing tips included in an analysis report
    pub suggestion_limit: usize,

    /// Upper bound on scan/rewrite rounds in `rewrite_until_clean`
    pub max_rewrite_passes: usize,

    /// Replacement catalog; the built-in one is used when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<Vec<PatternEntry>>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            suggestion_limit: 3,
            max_rewrite_passes: 4,
            catalog: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load from environment variables.
    ///
    /// `BIAS_CONFIG` points at a JSON config file used as the base;
    /// `BIAS_SUGGESTION_LIMIT` and `BIAS_MAX_REWRITE_PASSES` override it.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = match var("BIAS_CONFIG") {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(limit) = var("BIAS_SUGGESTION_LIMIT").and_then(|v| v.parse().ok()) {
            config.suggestion_limit = limit;
        }
        if let Some(passes) = var("BIAS_MAX_REWRITE_PASSES").and_then(|v| v.parse().ok()) {
            config.max_rewrite_passes = passes;
        }

        Ok(config)
    }
}
