//! Rental estimate income projections.
//!
//! Two occupancy scenarios bracket the annual potential rent of a listing:
//!
//! | Scenario        | Rate            | Months occupied |
//! |-----------------|-----------------|-----------------|
//! | High occupancy  | low (floor) rate | 11             |
//! | Low occupancy   | starting rate   | 9               |
//!
//! The report presents the high occupancy figure as the "High Range Annual
//! Income" and the low occupancy figure as the "Low Range Annual Income".
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use report_core::calculations::IncomeProjection;
//!
//! let projection = IncomeProjection::calculate(dec!(3000), dec!(2750));
//!
//! assert_eq!(projection.high_occupancy_income, dec!(30250));
//! assert_eq!(projection.low_occupancy_income, dec!(27000));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::times_months;

/// Months occupied when the listing rents at the floor rate.
pub const HIGH_OCCUPANCY_MONTHS: u32 = 11;

/// Months occupied when the listing holds out for the starting rate.
pub const LOW_OCCUPANCY_MONTHS: u32 = 9;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Annual income projections derived from the two asking rates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeProjection {
    /// Floor rate × 11 months (one vacant month).
    pub high_occupancy_income: Decimal,

    /// Starting rate × 9 months (three vacant months).
    pub low_occupancy_income: Decimal,

    /// Starting rate × 12 months.
    pub starting_rate_annual: Decimal,

    /// Floor rate × 12 months.
    pub low_rate_annual: Decimal,
}

impl IncomeProjection {
    /// Projects annual income from a starting rate and a floor rate.
    ///
    /// Both rates are expected to be non-negative; the input boundary clamps
    /// them before they get here.
    pub fn calculate(
        starting_rate: Decimal,
        floor_rate: Decimal,
    ) -> Self {
        Self {
            high_occupancy_income: times_months(floor_rate, HIGH_OCCUPANCY_MONTHS),
            low_occupancy_income: times_months(starting_rate, LOW_OCCUPANCY_MONTHS),
            starting_rate_annual: times_months(starting_rate, MONTHS_PER_YEAR),
            low_rate_annual: times_months(floor_rate, MONTHS_PER_YEAR),
        }
    }

    /// Returns `true` when every projected figure is zero.
    pub fn is_zero(&self) -> bool {
        self.high_occupancy_income.is_zero()
            && self.low_occupancy_income.is_zero()
            && self.starting_rate_annual.is_zero()
            && self.low_rate_annual.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn high_occupancy_uses_floor_rate_times_eleven() {
        let projection = IncomeProjection::calculate(dec!(0), dec!(2750));

        assert_eq!(projection.high_occupancy_income, dec!(30250));
    }

    #[test]
    fn low_occupancy_uses_starting_rate_times_nine() {
        let projection = IncomeProjection::calculate(dec!(3000), dec!(0));

        assert_eq!(projection.low_occupancy_income, dec!(27000));
    }

    #[test]
    fn annual_figures_use_twelve_months() {
        let projection = IncomeProjection::calculate(dec!(1500.50), dec!(1400.25));

        assert_eq!(projection.starting_rate_annual, dec!(18006.00));
        assert_eq!(projection.low_rate_annual, dec!(16803.00));
    }

    #[test]
    fn fractional_rates_are_exact() {
        let projection = IncomeProjection::calculate(dec!(1999.99), dec!(1874.99));

        assert_eq!(projection.low_occupancy_income, dec!(17999.91));
        assert_eq!(projection.high_occupancy_income, dec!(20624.89));
    }

    #[test]
    fn zero_rates_project_zero() {
        let projection = IncomeProjection::calculate(dec!(0), dec!(0));

        assert!(projection.is_zero());
    }

    #[test]
    fn calculation_is_pure() {
        let first = IncomeProjection::calculate(dec!(3000), dec!(2750));
        let second = IncomeProjection::calculate(dec!(3000), dec!(2750));

        assert_eq!(first, second);
    }
}
