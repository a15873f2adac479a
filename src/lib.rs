//! Daytrader fixtures
//!
//! Deterministic synthetic account, profile and market data for the daytrader
//! trading simulation.
//!
//! # Crates
//!
//! - `trade_entities` - the `AccountData` and `AccountProfileData` records
//! - `trade_config` - the `TradeConfig` fixture generator
//!
//! This crate glues the two together: [`random`] assembles records from
//! generator draws and [`output`] renders them for the CLI.
//!
//! # CLI Usage
//!
//! ```bash
//! # Ten reproducible accounts with their profiles, timestamps in London time
//! daytrader-fixtures accounts --seed 42 --with-profile --zone Europe/London
//!
//! # Profiles as JSON lines, using custom generator settings
//! daytrader-fixtures profiles --count 100 --format json --config fixtures.yaml
//!
//! # Quote rows: symbol, price, quantity, price change factor, order fee
//! daytrader-fixtures quotes --count 5
//! ```

pub mod args;
pub mod output;
pub mod random;

// Re-export the member crates for convenience
pub use trade_config as config;
pub use trade_entities as entities;

pub use random::{random_account, random_account_profile, random_account_with_profile};
