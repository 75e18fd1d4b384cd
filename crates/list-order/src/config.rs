//! Order Configuration

use serde::Deserialize;

use crate::error::ConfigError;

/// Settings shared by every ordered section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OrderConfig {
    /// Prefix of the persistence key, joined to the section name with `-`
    pub key_prefix: String,
    /// Drop ids of vanished items on reconcile instead of remembering them
    pub prune_stale: bool,
    /// Lifetime of the stored order cookie
    pub cookie_max_age_days: u32,
}

impl Default for OrderConfig {
    fn default() -> Self {
        Self {
            key_prefix: "order".to_string(),
            prune_stale: false,
            cookie_max_age_days: 365,
        }
    }
}

impl OrderConfig {
    /// Parse a JSON object; absent fields take their defaults
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: OrderConfig = serde_json::from_str(raw)?;
        if config.key_prefix.trim().is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }
        Ok(config)
    }
}
