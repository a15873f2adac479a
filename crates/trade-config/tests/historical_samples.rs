//! Pinned outputs for scripted draws.
//!
//! These values match fixture data generated by earlier deployments of the
//! trading simulation and must not drift.

use rust_decimal::Decimal;
use trade_config::{FixedClock, FixtureConfig, ScriptedSource, TradeConfig};

fn generator_with(source: ScriptedSource) -> TradeConfig {
    TradeConfig::with_capabilities(FixtureConfig::default(), source, FixedClock::from_millis(0))
}

fn constant(value: f64) -> TradeConfig {
    generator_with(ScriptedSource::constant(value))
}

#[test]
fn rnd_new_user_id_increments_counter_only() {
    let config = FixtureConfig {
        host: Some("testHost".to_string()),
        ..FixtureConfig::default()
    };
    let mut generator = TradeConfig::with_capabilities(
        config,
        ScriptedSource::default(),
        FixedClock::from_millis(100),
    );

    assert_eq!(generator.rnd_new_user_id(), "ru:testHost1000");
    assert_eq!(generator.rnd_new_user_id(), "ru:testHost1001");
}

#[test]
fn order_fee_by_order_type() {
    let generator = constant(0.0);

    let fee = generator.order_fee("buy");
    assert_eq!(fee.to_string(), "24.95");
    assert_eq!(generator.order_fee("sell"), fee);
    assert_eq!(generator.order_fee("SELL"), fee);

    let cash = generator.order_fee("foo");
    assert_eq!(cash, Decimal::ZERO);
    assert_eq!(cash.to_string(), "0.0");
}

#[test]
fn rnd_address() {
    assert_eq!(constant(1.23).rnd_address(), "1230 Oak St.");
}

#[test]
fn rnd_credit_card() {
    assert_eq!(constant(1.23).rnd_credit_card(), "123-1230-1230-1230");
}

#[test]
fn rnd_full_name() {
    assert_eq!(constant(1.23).rnd_full_name(), "first:1230 last:6150");
}

#[test]
fn rnd_email() {
    assert_eq!(constant(1.23).rnd_email("foo"), "foo@123.com");
}

#[test]
fn rnd_price() {
    assert_eq!(constant(1.23).rnd_price(), 247.0);
}

#[test]
fn rnd_quantity() {
    assert_eq!(constant(1.23).rnd_quantity(), 247.0);
}

#[test]
fn random_price_change_factor() {
    let handle = ScriptedSource::new([1.0, 0.6]);
    let mut generator = generator_with(handle.clone());
    assert_eq!(generator.random_price_change_factor().to_string(), "1.20");

    handle.rescript([2.0, 0.0]);
    assert_eq!(generator.random_price_change_factor().to_string(), "0.60");

    handle.rescript([5.0, 0.0]);
    let factor = generator.random_price_change_factor();
    assert_eq!(factor, Decimal::ONE);
    assert_eq!(factor.to_string(), "1");
}

#[test]
fn rnd_symbol() {
    assert_eq!(constant(1.23).rnd_symbol(), "s:490");
}

#[test]
fn rnd_symbols() {
    let mut generator = generator_with(ScriptedSource::new([0.10, 1.23]));
    assert_eq!(generator.rnd_symbols(), "s:490,s:490");
}

#[test]
fn rnd_user_id_respects_max_users() {
    let mut generator = generator_with(ScriptedSource::new([0.005, 0.01, 0.5]));

    assert_eq!(generator.max_users(), 200);
    assert_eq!(generator.rnd_user_id(), "uid:1");
    assert_eq!(generator.rnd_user_id(), "uid:2");

    generator.set_max_users(1);
    assert_eq!(generator.rnd_user_id(), "uid:0");
}

#[test]
fn rnd_balance_is_fixed() {
    assert_eq!(constant(0.7).rnd_balance().to_string(), "1000000");
}
