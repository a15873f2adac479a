//! The fixture generator.

use crate::clock::{Clock, SystemClock};
use crate::config::FixtureConfig;
use crate::source::{RngSource, UniformSource};
use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt;

/// Multiplier used to spread the discriminator across the seed space.
const SEED_SPREAD: u64 = 0x9E37_79B9_7F4A_7C15;

/// Host identifier used when neither the settings nor the OS provide one.
const FALLBACK_HOST: &str = "localhost";

/// Deterministic generator of trading fixture values.
///
/// Every `rnd_*` operation consumes one or more draws from a single
/// [`UniformSource`] and scales them into a typed, formatted value. Because
/// all operations take `&mut self`, a multi-draw operation such as
/// [`rnd_credit_card`](Self::rnd_credit_card) can never interleave with
/// another caller; wrap the generator in a
/// [`SharedTradeConfig`](crate::SharedTradeConfig) to share it across threads.
pub struct TradeConfig {
    /// Generator settings
    config: FixtureConfig,
    /// Source of uniform draws
    source: Box<dyn UniformSource>,
    /// Clock used for login timestamps
    clock: Box<dyn Clock>,
    /// Host identifier embedded in new user IDs
    host: String,
    /// Clock reading taken at construction, embedded in new user IDs
    user_id_epoch: i64,
    /// Number of new user IDs handed out so far
    user_id_count: u64,
}

impl TradeConfig {
    /// Create a generator seeded from the system clock and `discriminator`.
    ///
    /// Two generators created in the same millisecond still diverge as long as
    /// their discriminators differ.
    pub fn new(config: FixtureConfig, discriminator: u64) -> Self {
        let clock = SystemClock;
        let seed = seed_for(clock.now_millis(), discriminator);
        tracing::debug!(seed, discriminator, "Seeding trade config from the clock");
        Self::with_capabilities(config, RngSource::seeded(seed), clock)
    }

    /// Create a generator whose draws are fully determined by `seed`.
    pub fn with_seed(config: FixtureConfig, seed: u64) -> Self {
        tracing::debug!(seed, "Seeding trade config");
        Self::with_capabilities(config, RngSource::seeded(seed), SystemClock)
    }

    /// Create a generator from explicit capabilities.
    pub fn with_capabilities(
        config: FixtureConfig,
        source: impl UniformSource + 'static,
        clock: impl Clock + 'static,
    ) -> Self {
        let host = resolve_host(config.host.as_deref());
        let user_id_epoch = clock.now_millis();

        Self {
            config,
            source: Box::new(source),
            clock: Box::new(clock),
            host,
            user_id_epoch,
            user_id_count: 0,
        }
    }

    /// Get a reference to the settings.
    pub fn config(&self) -> &FixtureConfig {
        &self.config
    }

    /// Host identifier embedded in new user IDs.
    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn max_users(&self) -> i32 {
        self.config.max_users
    }

    /// Change the bound for [`rnd_user_id`](Self::rnd_user_id). Takes effect on the next draw.
    pub fn set_max_users(&mut self, max_users: i32) {
        self.config.max_users = max_users;
    }

    /// Current time according to the injected clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// One raw uniform draw.
    pub fn random(&mut self) -> f64 {
        self.source.next_f64()
    }

    /// Integer in `[0, bound)`: the scaled draw narrowed to `f32`, then truncated.
    pub fn rnd_int(&mut self, bound: i32) -> i32 {
        self.rnd_float(bound) as i32
    }

    /// The scaled draw narrowed to `f32`.
    pub fn rnd_float(&mut self, bound: i32) -> f32 {
        (self.random() * f64::from(bound)) as f32
    }

    /// The scaled draw as a decimal, keeping the full binary expansion of
    /// the `f64` product.
    pub fn rnd_decimal(&mut self, bound: f64) -> Decimal {
        Decimal::from_f64_retain(self.random() * bound).unwrap_or_default()
    }

    pub fn rnd_boolean(&mut self) -> bool {
        self.random() < 0.5
    }

    /// Street address, e.g. `"412 Oak St."`.
    pub fn rnd_address(&mut self) -> String {
        format!("{} Oak St.", self.rnd_int(1000))
    }

    /// Full name, e.g. `"first:12 last:3471"`.
    pub fn rnd_full_name(&mut self) -> String {
        let first = self.rnd_int(1000);
        let last = self.rnd_int(5000);
        format!("first:{first} last:{last}")
    }

    /// Email address for `local_part`, e.g. `"uid:7@042.com"`.
    pub fn rnd_email(&mut self, local_part: &str) -> String {
        format!("{local_part}@{:03}.com", self.rnd_int(100))
    }

    /// Credit card number, e.g. `"012-0345-0678-0901"`.
    pub fn rnd_credit_card(&mut self) -> String {
        let a = self.rnd_int(100);
        let b = self.rnd_int(1000);
        let c = self.rnd_int(1000);
        let d = self.rnd_int(1000);
        format!("{a:03}-{b:04}-{c:04}-{d:04}")
    }

    /// Quote symbol, e.g. `"s:17"`.
    pub fn rnd_symbol(&mut self) -> String {
        format!("s:{}", self.rnd_int(self.config.max_quotes.saturating_sub(1)))
    }

    /// Comma-joined list of between 1 and `max_holdings` symbols.
    pub fn rnd_symbols(&mut self) -> String {
        let extra = self.rnd_int(self.config.max_holdings);
        (0..=extra)
            .map(|_| self.rnd_symbol())
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Fresh user ID, unique per generator: `"<prefix><host><epoch><counter>"`.
    pub fn rnd_new_user_id(&mut self) -> String {
        let user_id = format!(
            "{}{}{}{}",
            self.config.new_user_prefix, self.host, self.user_id_epoch, self.user_id_count
        );
        self.user_id_count += 1;
        user_id
    }

    /// Existing user ID, `"uid:<n>"` with `n` in `[0, max_users)`.
    pub fn rnd_user_id(&mut self) -> String {
        format!("uid:{}", self.rnd_int(self.config.max_users))
    }

    /// Price in `[1, max_price]`.
    pub fn rnd_price(&mut self) -> f32 {
        self.rnd_int(self.config.max_price).saturating_add(1) as f32
    }

    /// Quantity in `[1, max_quantity]`.
    pub fn rnd_quantity(&mut self) -> f32 {
        self.rnd_int(self.config.max_quantity).saturating_add(1) as f32
    }

    /// Opening balance for a new account.
    pub fn rnd_balance(&self) -> Decimal {
        self.config.opening_balance
    }

    /// Multiplier for the next quote price, at two decimal places.
    ///
    /// The first draw sets the size of the move (up to `max_price_change`),
    /// the second its direction: below one half moves the price down. A move
    /// that would take the price to zero or below yields exactly `1`.
    pub fn random_price_change_factor(&mut self) -> Decimal {
        let mut swing = f64::from(self.rnd_float(1)) * self.config.max_price_change;
        if self.random() < 0.5 {
            swing = -swing;
        }

        // Round the exact binary value once, then pad to two places
        let mut factor = Decimal::from_f64_retain(1.0 + swing)
            .unwrap_or(Decimal::ONE)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        factor.rescale(2);

        if factor <= Decimal::ZERO {
            Decimal::ONE
        } else {
            factor
        }
    }

    /// Fee for an order. `buy` and `sell` (any case) pay the order fee,
    /// everything else pays the cash fee.
    pub fn order_fee(&self, order_type: &str) -> Decimal {
        if order_type.eq_ignore_ascii_case("buy") || order_type.eq_ignore_ascii_case("sell") {
            self.config.order_fee
        } else {
            self.config.cash_fee
        }
    }
}

impl fmt::Debug for TradeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TradeConfig")
            .field("config", &self.config)
            .field("host", &self.host)
            .field("user_id_epoch", &self.user_id_epoch)
            .field("user_id_count", &self.user_id_count)
            .finish_non_exhaustive()
    }
}

/// Combine a clock reading with a caller-supplied discriminator into a seed.
pub fn seed_for(millis: i64, discriminator: u64) -> u64 {
    (millis as u64) ^ discriminator.wrapping_mul(SEED_SPREAD)
}

fn resolve_host(configured: Option<&str>) -> String {
    if let Some(host) = configured {
        return host.to_string();
    }

    match hostname::get().ok().and_then(|h| h.into_string().ok()) {
        Some(host) => {
            tracing::debug!(host = %host, "Resolved host identifier");
            host
        }
        None => {
            tracing::warn!("Could not resolve hostname, using {FALLBACK_HOST}");
            FALLBACK_HOST.to_string()
        }
    }
}
