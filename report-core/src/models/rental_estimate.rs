use chrono::{Datelike, Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::narrative::DEFAULT_SEASONAL_DESCRIPTION;
use crate::wizard::Mergeable;

/// Days between today and the default estimated listing date.
pub const DEFAULT_LISTING_LEAD_DAYS: u64 = 7;

/// Market timing context printed in the seasonal adjustments section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalAdjustment {
    pub next_shift_date: NaiveDate,
    pub description: String,
}

/// Screenshot URLs gathered during the market research step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenshotLinks {
    pub zillow_estimate: String,
    pub zillow_map: String,
    pub comparison1: String,
    pub comparison2: String,
    pub comparison3: String,
}

impl ScreenshotLinks {
    /// Label/URL pairs in report order, including empty entries.
    pub fn labelled(&self) -> [(&'static str, &str); 5] {
        [
            ("Zillow Rent Estimate", &self.zillow_estimate),
            ("Zillow Market Map", &self.zillow_map),
            ("Comparison Home #1", &self.comparison1),
            ("Comparison Home #2", &self.comparison2),
            ("Comparison Home #3", &self.comparison3),
        ]
    }

    pub fn any_present(&self) -> bool {
        self.labelled().iter().any(|(_, url)| !url.trim().is_empty())
    }
}

/// Everything the rental estimate (CMA) builder collects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalEstimateForm {
    // Property info
    pub property_address: String,
    pub property_name: String,
    pub estimated_listing_date: NaiveDate,

    pub seasonal_adjustment: SeasonalAdjustment,
    pub screenshots: ScreenshotLinks,

    // Rent estimates
    pub starting_rate: Decimal,
    /// Floor rate the listing may be reduced to.
    pub low_rate: Decimal,

    pub summary_findings: String,
}

impl RentalEstimateForm {
    /// Builds the default-populated form relative to `today`.
    pub fn with_defaults(today: NaiveDate) -> Self {
        Self {
            property_address: String::new(),
            property_name: String::new(),
            estimated_listing_date: default_listing_date(today),
            seasonal_adjustment: SeasonalAdjustment {
                next_shift_date: next_seasonal_shift(today),
                description: DEFAULT_SEASONAL_DESCRIPTION.to_string(),
            },
            screenshots: ScreenshotLinks::default(),
            starting_rate: Decimal::ZERO,
            low_rate: Decimal::ZERO,
            summary_findings: String::new(),
        }
    }
}

impl Default for RentalEstimateForm {
    fn default() -> Self {
        Self::with_defaults(chrono::Local::now().date_naive())
    }
}

/// Partial update for [`RentalEstimateForm`].
///
/// Present fields replace the form's fields; nested records replace the
/// whole nested record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RentalEstimatePatch {
    pub property_address: Option<String>,
    pub property_name: Option<String>,
    pub estimated_listing_date: Option<NaiveDate>,
    pub seasonal_adjustment: Option<SeasonalAdjustment>,
    pub screenshots: Option<ScreenshotLinks>,
    pub starting_rate: Option<Decimal>,
    pub low_rate: Option<Decimal>,
    pub summary_findings: Option<String>,
}

impl Mergeable for RentalEstimateForm {
    type Patch = RentalEstimatePatch;

    fn merged(
        &self,
        patch: Self::Patch,
    ) -> Self {
        Self {
            property_address: patch
                .property_address
                .unwrap_or_else(|| self.property_address.clone()),
            property_name: patch
                .property_name
                .unwrap_or_else(|| self.property_name.clone()),
            estimated_listing_date: patch
                .estimated_listing_date
                .unwrap_or(self.estimated_listing_date),
            seasonal_adjustment: patch
                .seasonal_adjustment
                .unwrap_or_else(|| self.seasonal_adjustment.clone()),
            screenshots: patch
                .screenshots
                .unwrap_or_else(|| self.screenshots.clone()),
            starting_rate: patch.starting_rate.unwrap_or(self.starting_rate),
            low_rate: patch.low_rate.unwrap_or(self.low_rate),
            summary_findings: patch
                .summary_findings
                .unwrap_or_else(|| self.summary_findings.clone()),
        }
    }
}

/// Today plus [`DEFAULT_LISTING_LEAD_DAYS`].
pub fn default_listing_date(today: NaiveDate) -> NaiveDate {
    today
        .checked_add_days(Days::new(DEFAULT_LISTING_LEAD_DAYS))
        .unwrap_or(today)
}

/// October 15 of the current year, or of next year once November starts.
pub fn next_seasonal_shift(today: NaiveDate) -> NaiveDate {
    let year = if today.month() >= 11 {
        today.year() + 1
    } else {
        today.year()
    };
    NaiveDate::from_ymd_opt(year, 10, 15).unwrap_or(today)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn date(
        y: i32,
        m: u32,
        d: u32,
    ) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn defaults_are_fully_populated() {
        let form = RentalEstimateForm::with_defaults(date(2026, 3, 1));

        assert_eq!(form.property_address, "");
        assert_eq!(form.estimated_listing_date, date(2026, 3, 8));
        assert_eq!(form.seasonal_adjustment.next_shift_date, date(2026, 10, 15));
        assert_eq!(
            form.seasonal_adjustment.description,
            DEFAULT_SEASONAL_DESCRIPTION
        );
        assert_eq!(form.starting_rate, Decimal::ZERO);
        assert!(!form.screenshots.any_present());
    }

    #[test]
    fn listing_date_crosses_month_end() {
        assert_eq!(default_listing_date(date(2026, 12, 28)), date(2027, 1, 4));
    }

    #[test]
    fn seasonal_shift_rolls_over_in_november() {
        assert_eq!(next_seasonal_shift(date(2026, 10, 31)), date(2026, 10, 15));
        assert_eq!(next_seasonal_shift(date(2026, 11, 1)), date(2027, 10, 15));
        assert_eq!(next_seasonal_shift(date(2026, 12, 31)), date(2027, 10, 15));
    }

    #[test]
    fn empty_patch_is_identity() {
        let form = RentalEstimateForm::with_defaults(date(2026, 3, 1));

        assert_eq!(form.merged(RentalEstimatePatch::default()), form);
    }

    #[test]
    fn patch_replaces_only_present_fields() {
        let form = RentalEstimateForm::with_defaults(date(2026, 3, 1));

        let updated = form.merged(RentalEstimatePatch {
            property_address: Some("X".to_string()),
            ..Default::default()
        });

        assert_eq!(updated.property_address, "X");
        assert_eq!(
            RentalEstimateForm {
                property_address: form.property_address.clone(),
                ..updated
            },
            form
        );
    }

    #[test]
    fn nested_patch_replaces_whole_record() {
        let mut form = RentalEstimateForm::with_defaults(date(2026, 3, 1));
        form.screenshots.zillow_map = "https://example.com/map".to_string();

        let updated = form.merged(RentalEstimatePatch {
            screenshots: Some(ScreenshotLinks {
                comparison1: "https://example.com/c1".to_string(),
                ..Default::default()
            }),
            starting_rate: Some(dec!(3000)),
            ..Default::default()
        });

        assert_eq!(updated.screenshots.zillow_map, "");
        assert_eq!(updated.screenshots.comparison1, "https://example.com/c1");
        assert_eq!(updated.starting_rate, dec!(3000));
    }

    #[test]
    fn blank_screenshot_urls_do_not_count() {
        let links = ScreenshotLinks {
            comparison3: "   ".to_string(),
            ..Default::default()
        };

        assert!(!links.any_present());
    }
}
