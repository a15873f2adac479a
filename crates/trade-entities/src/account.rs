//! Account record.

use crate::account_profile::AccountProfileData;
use crate::hash::identity_hash;
use crate::render::{self, FieldLine};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// An account in the trading simulation.
///
/// The account refers to its profile by `profile_id` only. A materialized
/// profile can be attached afterwards with [`set_profile`](Self::set_profile);
/// the attachment is shared, not owned, and takes no part in equality or
/// hashing.
///
/// An account without a `profile_id` is never equal to anything, not even to
/// an identical account, so the type is `PartialEq` only. Balances compare
/// by value and scale: `1.0` and `1.00` differ.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountData {
    #[serde(rename = "accountID")]
    account_id: Option<i32>,
    #[serde(rename = "loginCount")]
    login_count: i32,
    #[serde(rename = "logoutCount")]
    logout_count: i32,
    #[serde(rename = "lastLogin")]
    last_login: Option<DateTime<Utc>>,
    #[serde(rename = "creationDate")]
    creation_date: Option<DateTime<Utc>>,
    balance: Option<Decimal>,
    #[serde(rename = "openBalance")]
    open_balance: Option<Decimal>,
    #[serde(rename = "profileID")]
    profile_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    profile: Option<Arc<AccountProfileData>>,
}

impl AccountData {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        account_id: i32,
        login_count: i32,
        logout_count: i32,
        last_login: DateTime<Utc>,
        creation_date: DateTime<Utc>,
        balance: Decimal,
        open_balance: Decimal,
        profile_id: impl Into<String>,
    ) -> Self {
        Self {
            account_id: Some(account_id),
            login_count,
            logout_count,
            last_login: Some(last_login),
            creation_date: Some(creation_date),
            balance: Some(balance),
            open_balance: Some(open_balance),
            profile_id: Some(profile_id.into()),
            profile: None,
        }
    }

    pub fn account_id(&self) -> Option<i32> {
        self.account_id
    }

    pub fn set_account_id(&mut self, account_id: impl Into<Option<i32>>) {
        self.account_id = account_id.into();
    }

    pub fn login_count(&self) -> i32 {
        self.login_count
    }

    pub fn set_login_count(&mut self, login_count: i32) {
        self.login_count = login_count;
    }

    pub fn logout_count(&self) -> i32 {
        self.logout_count
    }

    pub fn set_logout_count(&mut self, logout_count: i32) {
        self.logout_count = logout_count;
    }

    pub fn last_login(&self) -> Option<DateTime<Utc>> {
        self.last_login
    }

    pub fn set_last_login(&mut self, last_login: impl Into<Option<DateTime<Utc>>>) {
        self.last_login = last_login.into();
    }

    pub fn creation_date(&self) -> Option<DateTime<Utc>> {
        self.creation_date
    }

    pub fn set_creation_date(&mut self, creation_date: impl Into<Option<DateTime<Utc>>>) {
        self.creation_date = creation_date.into();
    }

    pub fn balance(&self) -> Option<Decimal> {
        self.balance
    }

    pub fn set_balance(&mut self, balance: impl Into<Option<Decimal>>) {
        self.balance = balance.into();
    }

    pub fn open_balance(&self) -> Option<Decimal> {
        self.open_balance
    }

    pub fn set_open_balance(&mut self, open_balance: impl Into<Option<Decimal>>) {
        self.open_balance = open_balance.into();
    }

    pub fn profile_id(&self) -> Option<&str> {
        self.profile_id.as_deref()
    }

    pub fn set_profile_id(&mut self, profile_id: impl Into<Option<String>>) {
        self.profile_id = profile_id.into();
    }

    /// The attached profile, if one has been set.
    pub fn profile(&self) -> Option<&AccountProfileData> {
        self.profile.as_deref()
    }

    /// Attach a materialized profile. Does not touch `profile_id`.
    pub fn set_profile(&mut self, profile: impl Into<Option<Arc<AccountProfileData>>>) {
        self.profile = profile.into();
    }

    /// Hash over the identity field. Unset accounts hash to `0`.
    pub fn hash_code(&self) -> i32 {
        identity_hash(self.profile_id())
    }

    /// Equality against a possibly absent operand.
    pub fn equals_opt(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// Plain-text layout with timestamps in UTC.
    pub fn to_text(&self) -> String {
        self.to_text_in(Tz::UTC)
    }

    /// Plain-text layout with timestamps in `zone`.
    pub fn to_text_in(&self, zone: Tz) -> String {
        render::text(
            &format!(
                "Account Data for account: {}",
                render::optional(self.account_id.as_ref())
            ),
            &self.fields(zone),
        )
    }

    /// HTML fragment with timestamps in UTC.
    pub fn to_html(&self) -> String {
        self.to_html_in(Tz::UTC)
    }

    pub fn to_html_in(&self, zone: Tz) -> String {
        render::html(
            "Account Data for account:",
            &render::optional(self.account_id.as_ref()),
            &self.fields(zone),
        )
    }

    /// Write the plain-text layout to the diagnostic log.
    pub fn print(&self) {
        tracing::info!("{}", self.to_text());
    }

    fn fields(&self, zone: Tz) -> Vec<FieldLine> {
        vec![
            FieldLine::new("   loginCount", self.login_count.to_string()),
            FieldLine::new("  logoutCount", self.logout_count.to_string()),
            FieldLine::new("    lastLogin", render::timestamp(self.last_login.as_ref(), zone)),
            FieldLine::new(
                " creationDate",
                render::timestamp(self.creation_date.as_ref(), zone),
            ),
            FieldLine::new("      balance", render::optional(self.balance.as_ref())),
            FieldLine::new("  openBalance", render::optional(self.open_balance.as_ref())),
            FieldLine::new("    profileID", render::optional(self.profile_id.as_ref())),
        ]
    }
}

impl PartialEq for AccountData {
    fn eq(&self, other: &Self) -> bool {
        match (&self.profile_id, &other.profile_id) {
            (Some(a), Some(b)) if a == b => {}
            _ => return false,
        }
        self.account_id == other.account_id
            && self.login_count == other.login_count
            && self.logout_count == other.logout_count
            && self.last_login == other.last_login
            && self.creation_date == other.creation_date
            && same_decimal(self.balance, other.balance)
            && same_decimal(self.open_balance, other.open_balance)
    }
}

fn same_decimal(a: Option<Decimal>, b: Option<Decimal>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a == b && a.scale() == b.scale(),
        (a, b) => a.is_none() && b.is_none(),
    }
}

impl fmt::Display for AccountData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
