//! Common utility functions for report calculations.
//!
//! This module provides shared functionality used by both the rental
//! estimate and the turnover budget calculators, including rounding, money
//! formatting and the bounds applied at the input boundary.

use num_format::{Locale, ToFormattedString as _};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

/// Largest amount accepted from user input.
///
/// Anything above this is treated like an invalid number and replaced with 0
/// where it enters the system.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// This follows standard financial rounding conventions where values at exactly
/// 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use report_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// `$1,234.56`, always two decimal places, `-` before the symbol.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use report_core::calculations::common::format_money;
///
/// assert_eq!(format_money(dec!(48000)), "$48,000.00");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let rounded = round_half_up(amount.abs());
    let integer = rounded.trunc();
    let cents = ((rounded - integer) * Decimal::ONE_HUNDRED)
        .to_u32()
        .unwrap_or_default();
    let integer = match integer.to_i64() {
        Some(value) => value.to_formatted_string(&Locale::en),
        None => integer.to_string(),
    };
    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${integer}.{cents:02}")
}

/// Clamps a value to zero when it is negative.
///
/// Calculators assume their inputs already passed through this clamp; it is
/// applied where user input enters the system, never inside a calculator.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use report_core::calculations::common::non_negative;
///
/// assert_eq!(non_negative(dec!(-5.00)), dec!(0));
/// assert_eq!(non_negative(dec!(5.00)), dec!(5.00));
/// ```
pub fn non_negative(value: Decimal) -> Decimal {
    if value.is_sign_negative() {
        Decimal::ZERO
    } else {
        value
    }
}

/// Multiplies a monthly amount by a whole number of months.
///
/// Saturates at [`Decimal::MAX`] instead of overflowing.
pub fn times_months(
    monthly: Decimal,
    months: u32,
) -> Decimal {
    monthly.saturating_mul(Decimal::from(months))
}
