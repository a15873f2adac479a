//! Deterministic fixture generator for the daytrader fixtures.
//!
//! This crate provides [`TradeConfig`], which produces reproducible synthetic
//! trading data: user IDs, names, addresses, emails, credit-card numbers,
//! quote symbols, prices, quantities, order fees and price-change factors.
//!
//! # Architecture
//!
//! ```text
//!  FixtureConfig (YAML)   UniformSource   Clock
//!          │                    │           │
//!          └──────────┬─────────┴───────────┘
//!                     ▼
//!            ┌─────────────────┐
//!            │   TradeConfig   │
//!            │                 │
//!            │  - host         │
//!            │  - user counter │
//!            └────────┬────────┘
//!                     │
//!                     ▼
//!      "uid:17", "s:42", "first:3 last:9", 1.20, ...
//! ```
//!
//! The random source and the clock are injected at construction, so tests can
//! drive exact sequences with [`ScriptedSource`] and [`FixedClock`].
//!
//! # Example
//!
//! ```rust
//! use trade_config::{FixedClock, FixtureConfig, ScriptedSource, TradeConfig};
//!
//! let mut generator = TradeConfig::with_capabilities(
//!     FixtureConfig::default(),
//!     ScriptedSource::constant(1.23),
//!     FixedClock::from_millis(0),
//! );
//! assert_eq!(generator.rnd_address(), "1230 Oak St.");
//! assert_eq!(generator.rnd_symbol(), "s:490");
//! ```

pub mod clock;
pub mod config;
pub mod generator;
pub mod shared;
pub mod source;

// Re-exports for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, FixtureConfig};
pub use generator::{seed_for, TradeConfig};
pub use shared::SharedTradeConfig;
pub use source::{RngSource, ScriptedSource, UniformSource};
