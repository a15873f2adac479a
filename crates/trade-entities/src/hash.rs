//! Identity hashing shared by the records.

/// Hash a string the way a JVM `String` does.
///
/// Folds every UTF-16 code unit into an accumulator seeded at `0` with
/// `h = h * 31 + unit`, using wrapping 32-bit arithmetic. Hash values stored
/// alongside historical fixtures were produced this way, so the exact
/// arithmetic matters.
pub fn string_hash(value: &str) -> i32 {
    value
        .encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// Hash an optional identity field. An unset identity hashes to `0`.
pub fn identity_hash(identity: Option<&str>) -> i32 {
    identity.map_or(0, string_hash)
}
