//! Search tuning constants and the runtime [`SearchConfig`].

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Width of the sliding character window used for indexing and querying.
pub const NGRAM_SIZE: usize = 5;

/// Maximum number of results returned by a single search.
pub const MAX_SEARCH_RESULTS: usize = 10;

/// A document must match strictly more than this percentage of the query's
/// n-grams to be returned.
pub const MIN_PERCENT_MATCH: f32 = 65.0;

/// Runtime search settings. Missing JSON fields fall back to the defaults above.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub min_percent_match: f32,
    pub max_results: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { min_percent_match: MIN_PERCENT_MATCH, max_results: MAX_SEARCH_RESULTS }
    }
}

impl SearchConfig {
    /// Load and validate a JSON config such as `{"min_percent_match": 70, "max_results": 5}`.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let raw = fs::read_to_string(path).map_err(|e| ConfigError::Read { path: display.clone(), reason: e.to_string() })?;
        let config: SearchConfig = serde_json::from_str(&raw).map_err(|e| ConfigError::Parse { path: display, reason: e.to_string() })?;
        config.validate()?;
        Ok(config)
    }

    /// Replace the fields that were given explicitly, e.g. on the command line.
    pub fn with_overrides(mut self, min_percent_match: Option<f32>, max_results: Option<usize>) -> Self {
        if let Some(pct) = min_percent_match {
            self.min_percent_match = pct;
        }
        if let Some(max) = max_results {
            self.max_results = max;
        }
        self
    }

    /// Optional config file, then explicit overrides, then validation.
    pub fn resolve(path: Option<&Path>, min_percent_match: Option<f32>, max_results: Option<usize>) -> Result<Self, ConfigError> {
        let base = match path {
            Some(path) => Self::from_json_file(path)?,
            None => Self::default(),
        };
        let config = base.with_overrides(min_percent_match, max_results);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let pct = self.min_percent_match;
        if !pct.is_finite() || !(0.0..100.0).contains(&pct) {
            return Err(ConfigError::MinPercentOutOfRange(pct));
        }
        if self.max_results == 0 {
            return Err(ConfigError::ZeroMaxResults);
        }
        Ok(())
    }
}
