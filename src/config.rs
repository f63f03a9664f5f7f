//! Site configuration.
//!
//! Presentation timing lives here as data rather than logic. Every field
//! has a default, so an empty JSON object is a valid configuration.

use crate::core::{ScrollBehavior, DEFAULT_HISTORY_LIMIT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scroll offset in pixels past which the header switches to its condensed style.
pub const DEFAULT_HEADER_CONDENSE_THRESHOLD: f64 = 20.0;

/// Errors loading a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Header condense threshold must be a finite, non-negative number (got {0})")]
    InvalidThreshold(f64),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Behaviour of the scroll reset that follows every navigation
    pub scroll_behavior: ScrollBehavior,
    /// Vertical scroll offset past which the header condenses
    pub header_condense_threshold: f64,
    /// Page visits retained by the navigation store
    pub history_limit: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_behavior: ScrollBehavior::Smooth,
            header_condense_threshold: DEFAULT_HEADER_CONDENSE_THRESHOLD,
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl SiteConfig {
    /// Parse a configuration document, filling omitted fields with defaults.
    ///
    /// ```rust
    /// use waymark::config::SiteConfig;
    /// use waymark::core::ScrollBehavior;
    ///
    /// let config = SiteConfig::from_json(r#"{ "scroll_behavior": "instant" }"#).unwrap();
    /// assert_eq!(config.scroll_behavior, ScrollBehavior::Instant);
    /// assert_eq!(config.header_condense_threshold, 20.0);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.header_condense_threshold;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(threshold));
        }
        Ok(())
    }

    pub fn with_scroll_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.scroll_behavior = behavior;
        self
    }
}
