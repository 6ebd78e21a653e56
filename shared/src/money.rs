//! Money rounding utilities using rust_decimal for precision
//!
//! Prices travel as `f64` (storage and JSON); any arithmetic or rounding
//! goes through `Decimal` internally so aggregates do not drift.

use rust_decimal::prelude::*;

/// Rounding precision for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_default()
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Round an aggregate to 2 decimal places, half-up
#[inline]
pub fn round_cents(value: f64) -> f64 {
    to_f64(to_decimal(value))
}

/// Round to the nearest whole currency unit, half-up.
/// Dashboard totals are displayed without cents.
#[inline]
pub fn round_whole(value: f64) -> i64 {
    to_decimal(value)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}
