//! Account profile record.

use crate::hash::identity_hash;
use crate::render::{self, FieldLine};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The user profile an account refers to by `user_id`.
///
/// Equality covers all six fields, but a profile without a `user_id` is never
/// equal to anything, not even to another profile without one. The type is
/// therefore `PartialEq` only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountProfileData {
    #[serde(rename = "userID")]
    user_id: Option<String>,
    password: Option<String>,
    #[serde(rename = "fullName")]
    full_name: Option<String>,
    address: Option<String>,
    email: Option<String>,
    #[serde(rename = "creditCard")]
    credit_card: Option<String>,
}

impl AccountProfileData {
    pub fn new(
        user_id: impl Into<String>,
        password: impl Into<String>,
        full_name: impl Into<String>,
        address: impl Into<String>,
        email: impl Into<String>,
        credit_card: impl Into<String>,
    ) -> Self {
        Self {
            user_id: Some(user_id.into()),
            password: Some(password.into()),
            full_name: Some(full_name.into()),
            address: Some(address.into()),
            email: Some(email.into()),
            credit_card: Some(credit_card.into()),
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn set_user_id(&mut self, user_id: impl Into<Option<String>>) {
        self.user_id = user_id.into();
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn set_password(&mut self, password: impl Into<Option<String>>) {
        self.password = password.into();
    }

    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    pub fn set_full_name(&mut self, full_name: impl Into<Option<String>>) {
        self.full_name = full_name.into();
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn set_address(&mut self, address: impl Into<Option<String>>) {
        self.address = address.into();
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn set_email(&mut self, email: impl Into<Option<String>>) {
        self.email = email.into();
    }

    pub fn credit_card(&self) -> Option<&str> {
        self.credit_card.as_deref()
    }

    pub fn set_credit_card(&mut self, credit_card: impl Into<Option<String>>) {
        self.credit_card = credit_card.into();
    }

    /// Hash over the identity field. Unset profiles hash to `0`.
    pub fn hash_code(&self) -> i32 {
        identity_hash(self.user_id())
    }

    /// Equality against a possibly absent operand.
    pub fn equals_opt(&self, other: Option<&Self>) -> bool {
        other.is_some_and(|other| self == other)
    }

    /// Plain-text layout. Profiles carry no timestamps, so this equals `Display`.
    pub fn to_text(&self) -> String {
        render::text(
            &format!(
                "Account Profile Data for userID:{}",
                render::optional(self.user_id.as_ref())
            ),
            &self.fields(),
        )
    }

    pub fn to_html(&self) -> String {
        render::html(
            "Account Profile Data for userID:",
            &render::optional(self.user_id.as_ref()),
            &self.fields(),
        )
    }

    /// Write the plain-text layout to the diagnostic log.
    pub fn print(&self) {
        tracing::info!("{}", self.to_text());
    }

    fn fields(&self) -> Vec<FieldLine> {
        vec![
            FieldLine::new("   passwd", render::optional(self.password.as_ref())),
            FieldLine::new("   fullName", render::optional(self.full_name.as_ref())),
            FieldLine::new("    address", render::optional(self.address.as_ref())),
            FieldLine::new("      email", render::optional(self.email.as_ref())),
            FieldLine::new(" creditCard", render::optional(self.credit_card.as_ref())),
        ]
    }
}

impl PartialEq for AccountProfileData {
    fn eq(&self, other: &Self) -> bool {
        match (&self.user_id, &other.user_id) {
            (Some(a), Some(b)) if a == b => {}
            _ => return false,
        }
        self.password == other.password
            && self.full_name == other.full_name
            && self.address == other.address
            && self.email == other.email
            && self.credit_card == other.credit_card
    }
}

impl fmt::Display for AccountProfileData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}
