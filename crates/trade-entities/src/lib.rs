//! Value records for the daytrader fixtures.
//!
//! This crate provides the two record shapes handed around by the trading
//! simulation:
//!
//! - [`AccountData`] - an account with login counters, timestamps and balances
//! - [`AccountProfileData`] - the user profile an account refers to by ID
//!
//! Both records compare structurally over their canonical fields, hash over
//! their identity field, and render to a fixed plain-text layout and an HTML
//! fragment. The layouts are byte-for-byte significant.
//!
//! # Example
//!
//! ```rust
//! use trade_entities::AccountProfileData;
//!
//! let profile = AccountProfileData::new("foo", "bar", "baz", "foo", "bar", "baz");
//! assert_eq!(profile.hash_code(), 101574);
//! assert!(profile.to_html().starts_with("<BR>Account Profile Data for userID: <B>foo</B>"));
//! ```

pub mod account;
pub mod account_profile;
pub mod hash;
pub mod render;

// Re-exports for convenience
pub use account::AccountData;
pub use account_profile::AccountProfileData;
pub use chrono_tz::Tz;
pub use hash::string_hash;
