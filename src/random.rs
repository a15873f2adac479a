//! Random record assembly.
//!
//! Builds [`AccountData`] and [`AccountProfileData`] records out of generator
//! draws. The draw order is fixed so that a scripted source always produces
//! the same record.

use chrono::DateTime;
use std::sync::Arc;
use trade_config::TradeConfig;
use trade_entities::{AccountData, AccountProfileData};

/// Bound for random account IDs.
pub const MAX_ACCOUNT_ID: i32 = 100_000;

/// Bound for random login and logout counters.
pub const MAX_LOGIN_COUNT: i32 = 10_000;

/// Bound for random balances.
pub const MAX_BALANCE: f64 = 1_000_000.0;

/// Local part used for random profile emails.
pub const EMAIL_LOCAL_PART: &str = "random";

/// A random account referring to a random existing user.
///
/// `last_login` is the generator clock's current time; `creation_date` lies
/// within roughly 25 days after the Unix epoch.
pub fn random_account(generator: &mut TradeConfig) -> AccountData {
    let account_id = generator.rnd_int(MAX_ACCOUNT_ID);
    let login_count = generator.rnd_int(MAX_LOGIN_COUNT);
    let logout_count = generator.rnd_int(MAX_LOGIN_COUNT);
    let last_login = generator.now();
    let creation_date =
        DateTime::from_timestamp_millis(i64::from(generator.rnd_int(i32::MAX))).unwrap_or_default();
    let balance = generator.rnd_decimal(MAX_BALANCE);
    let open_balance = generator.rnd_decimal(MAX_BALANCE);
    let profile_id = generator.rnd_user_id();

    AccountData::new(
        account_id,
        login_count,
        logout_count,
        last_login,
        creation_date,
        balance,
        open_balance,
        profile_id,
    )
}

/// A random profile. The password is itself a random user ID.
pub fn random_account_profile(generator: &mut TradeConfig) -> AccountProfileData {
    let user_id = generator.rnd_user_id();
    let password = generator.rnd_user_id();
    let full_name = generator.rnd_full_name();
    let address = generator.rnd_address();
    let email = generator.rnd_email(EMAIL_LOCAL_PART);
    let credit_card = generator.rnd_credit_card();

    AccountProfileData::new(user_id, password, full_name, address, email, credit_card)
}

/// A random account with a random profile attached under the account's `profile_id`.
pub fn random_account_with_profile(generator: &mut TradeConfig) -> AccountData {
    let mut account = random_account(generator);
    let mut profile = random_account_profile(generator);
    profile.set_user_id(account.profile_id().map(str::to_string));
    account.set_profile(Arc::new(profile));
    account
}
