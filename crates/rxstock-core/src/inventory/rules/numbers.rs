//! Numeric column parsing for stock statement rows.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

use super::patterns::NUMBER;

/// Parse a single numeric token. `None` when it does not fit a [`Decimal`].
pub fn parse_number(token: &str) -> Option<Decimal> {
    Decimal::from_str(token).ok()
}

/// Parse every number in a run of digits, spaces, tabs and dots.
///
/// Tokens too large for [`Decimal`] stay in place as `None` so later
/// columns keep their position.
pub fn parse_numbers(s: &str) -> Vec<Option<Decimal>> {
    NUMBER.find_iter(s).map(|m| parse_number(m.as_str())).collect()
}

/// Truncate a column value to an integer quantity.
///
/// Zero maps to `None` unless `keep_zero` is set.
pub fn to_quantity(value: Option<Decimal>, keep_zero: bool) -> Option<i64> {
    let value = value.filter(|v| keep_zero || !v.is_zero())?;
    value.trunc().to_i64()
}

/// Round a column value to two decimal places.
///
/// Rounding is half to even on the exact decimal, so `1.015` becomes `1.02`.
/// Binary float rounding would give `1.01` because `1.015` is not
/// representable as an `f64`.
///
/// Zero maps to `None` unless `keep_zero` is set.
pub fn to_value(value: Option<Decimal>, keep_zero: bool) -> Option<Decimal> {
    let value = value.filter(|v| keep_zero || !v.is_zero())?;
    Some(value.round_dp(2))
}
