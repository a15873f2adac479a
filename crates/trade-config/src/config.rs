//! Generator settings.
//!
//! Tunables that used to be process-wide live in a [`FixtureConfig`] owned by
//! each generator. Settings can be written as YAML; every field is optional
//! and falls back to its default.
//!
//! ```yaml
//! max_users: 500
//! max_quotes: 1000
//! order_fee: "9.99"
//! host: "trader-01"
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading the settings file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A value is out of range
    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Settings for a [`TradeConfig`](crate::TradeConfig).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FixtureConfig {
    /// Upper bound (exclusive) for `uid:<n>` user IDs
    pub max_users: i32,

    /// Number of quote symbols; symbols are drawn from `[0, max_quotes - 1)`
    pub max_quotes: i32,

    /// Upper bound for the extra symbols in a symbol list
    pub max_holdings: i32,

    /// Prices are drawn from `[1, max_price]`
    pub max_price: i32,

    /// Quantities are drawn from `[1, max_quantity]`
    pub max_quantity: i32,

    /// Largest relative price move, e.g. `0.2` for +/- 20%
    pub max_price_change: f64,

    /// Fee charged for buy and sell orders
    pub order_fee: Decimal,

    /// Fee charged for any other order type
    pub cash_fee: Decimal,

    /// Opening balance handed to new accounts
    pub opening_balance: Decimal,

    /// Prefix for freshly registered user IDs
    pub new_user_prefix: String,

    /// Host identifier embedded in new user IDs; the machine hostname when unset
    pub host: Option<String>,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            max_users: 200,
            max_quotes: 400,
            max_holdings: 10,
            max_price: 200,
            max_quantity: 200,
            max_price_change: 0.2,
            order_fee: Decimal::new(2495, 2),
            cash_fee: Decimal::new(0, 1),
            opening_balance: Decimal::new(1_000_000, 0),
            new_user_prefix: "ru:".to_string(),
            host: None,
        }
    }
}

impl FixtureConfig {
    /// Parse and validate settings from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate settings from a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Check that every bound is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("max_users", self.max_users),
            ("max_holdings", self.max_holdings),
            ("max_price", self.max_price),
            ("max_quantity", self.max_quantity),
        ];
        for (field, value) in positive {
            if value <= 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be positive, got {value}"),
                });
            }
        }

        if self.max_quotes < 2 {
            return Err(ConfigError::Invalid {
                field: "max_quotes",
                reason: format!("must be at least 2, got {}", self.max_quotes),
            });
        }

        if !(self.max_price_change > 0.0 && self.max_price_change <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "max_price_change",
                reason: format!("must be in (0, 1], got {}", self.max_price_change),
            });
        }

        Ok(())
    }
}
