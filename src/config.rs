//! Analysis configuration
//!
//! Every tunable of the derivation pipeline in one validated value. Build it
//! with [`AnalysisConfig::builder`] or load it from JSON; missing JSON fields
//! take the defaults below.
//!
//! | field                    | default |
//! |--------------------------|---------|
//! | `moving_average_window`  | 20      |
//! | `percentile_capacity`    | 200     |
//! | `histogram_clip_bound`   | 75      |
//! | `recency_days`           | none    |
//! | `top_n`                  | 10      |

use crate::histogram::DEFAULT_CLIP_BOUND;
use crate::percentile::DEFAULT_PERCENTILE_CAPACITY;
use crate::smoothing::DEFAULT_MOVING_AVERAGE_WINDOW;
use crate::topk::DEFAULT_TOP_N;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Validated pipeline configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Trailing moving-average window, in games
    pub moving_average_window: usize,
    /// Percentile ring capacity, in games
    pub percentile_capacity: usize,
    /// Slowest histogram bucket, in whole seconds
    pub histogram_clip_bound: i64,
    /// Only count games from the last N days in the histogram
    pub recency_days: Option<u32>,
    /// Size of the fastest-games table
    pub top_n: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            moving_average_window: DEFAULT_MOVING_AVERAGE_WINDOW,
            percentile_capacity: DEFAULT_PERCENTILE_CAPACITY,
            histogram_clip_bound: DEFAULT_CLIP_BOUND,
            recency_days: None,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl AnalysisConfig {
    /// Create a new config builder
    #[must_use]
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns `Json` on malformed JSON or unknown fields, and
    /// `InvalidArgument` if a size is zero.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every size is positive.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("moving_average_window", self.moving_average_window),
            ("percentile_capacity", self.percentile_capacity),
            ("top_n", self.top_n),
        ];
        if let Some((name, _)) = sizes.iter().find(|(_, v)| *v == 0) {
            return Err(Error::InvalidArgument(format!(
                "{name} must be greater than 0"
            )));
        }
        if self.recency_days == Some(0) {
            return Err(Error::InvalidArgument(
                "recency_days must be greater than 0 when set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Config builder
#[derive(Debug, Default)]
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    /// Set the moving-average window
    #[must_use]
    pub const fn moving_average_window(mut self, window: usize) -> Self {
        self.config.moving_average_window = window;
        self
    }

    /// Set the percentile ring capacity
    #[must_use]
    pub const fn percentile_capacity(mut self, capacity: usize) -> Self {
        self.config.percentile_capacity = capacity;
        self
    }

    /// Set the histogram clip bound
    #[must_use]
    pub const fn histogram_clip_bound(mut self, bound: i64) -> Self {
        self.config.histogram_clip_bound = bound;
        self
    }

    /// Restrict histogram counts to the last `days` days
    #[must_use]
    pub const fn recency_days(mut self, days: u32) -> Self {
        self.config.recency_days = Some(days);
        self
    }

    /// Set the top-N table size
    #[must_use]
    pub const fn top_n(mut self, n: usize) -> Self {
        self.config.top_n = n;
        self
    }

    /// Build the config
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a size is zero
    pub fn build(self) -> Result<AnalysisConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AnalysisConfig::builder().build().unwrap();
        assert_eq!(config.moving_average_window, 20);
        assert_eq!(config.percentile_capacity, 200);
        assert_eq!(config.histogram_clip_bound, 75);
        assert_eq!(config.recency_days, None);
        assert_eq!(config.top_n, 10);
    }

    #[test]
    fn test_config_builder_chain() {
        let config = AnalysisConfig::builder()
            .moving_average_window(50)
            .percentile_capacity(100)
            .histogram_clip_bound(90)
            .recency_days(30)
            .top_n(25)
            .build()
            .unwrap();
        assert_eq!(config.moving_average_window, 50);
        assert_eq!(config.recency_days, Some(30));
        assert_eq!(config.top_n, 25);
    }

    #[test]
    fn test_config_builder_rejects_zero() {
        let result = AnalysisConfig::builder().percentile_capacity(0).build();
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("percentile_capacity must be greater than 0"));
    }

    #[test]
    fn test_config_from_json_partial() {
        let config = AnalysisConfig::from_json_str(r#"{"top_n": 5}"#).unwrap();
        assert_eq!(config.top_n, 5);
        assert_eq!(config.moving_average_window, 20);
    }

    #[test]
    fn test_config_from_json_unknown_field() {
        let result = AnalysisConfig::from_json_str(r#"{"window": 5}"#);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_config_from_json_zero_window() {
        let result = AnalysisConfig::from_json_str(r#"{"moving_average_window": 0}"#);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
