//! TOML loader for report form input.
//!
//! A form file holds any subset of a form's fields; whatever it contains is
//! turned into a patch and applied over the form the caller already has
//! (normally the defaults). Tables may also be partial: a `[budget]` table
//! with only `paint` keeps every other category at its current amount.
//!
//! Amounts may be written as numbers or as text (`"$1,250.00"`). Invalid or
//! negative amounts become 0 with a warning. Dates are ISO `YYYY-MM-DD`
//! strings.
//!
//! ## Rental estimate
//!
//! | Key | Type | Notes |
//! |--------------------------|--------|--------------------------------------|
//! | `property_address` | string | |
//! | `property_name` | string | |
//! | `estimated_listing_date` | date | |
//! | `starting_rate` | amount | monthly |
//! | `low_rate` | amount | monthly |
//! | `summary_findings` | string | |
//! | `[seasonal_adjustment]` | table | `next_shift_date`, `description` |
//! | `[screenshots]` | table | `zillow_estimate`, `zillow_map`, `comparison1`..`comparison3` |
//!
//! ## Turnover report
//!
//! | Key | Type | Notes |
//! |---------------------------|---------|------------------------------------------|
//! | `property_address` | string | |
//! | `property_name` | string | |
//! | `cover_letter` | string | |
//! | `estimated_turnover_days` | integer | |
//! | `lease_length_months` | integer | |
//! | `last_turnover_date` | date | empty string clears it |
//! | `rent_to_sqft_ratio` | amount | |
//! | `[budget]` | table | category keys such as `maintenance_repair` |
//! | `[cash_flow]` | table | `historical_income`, `historical_expense`, `estimated_rental_rate` |
//! | `[photo_links]` | table | `inspection1`, `inspection2`, `move_out` |
//!
//! ### Example
//!
//! ```toml
//! property_address = "123 Main St"
//! lease_length_months = 12
//!
//! [budget]
//! paint = 300
//! keys_locks = "75.50"
//!
//! [cash_flow]
//! estimated_rental_rate = 2000
//! ```
use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;
use report_core::models::{
    BudgetCategory, CashFlowInputs, PhotoLinks, RentalEstimateForm, RentalEstimatePatch,
    ScreenshotLinks, SeasonalAdjustment, TurnoverForm, TurnoverPatch,
};
use report_core::ReportForm;
use rust_decimal::Decimal;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::utils::{coerce_amount, non_negative};

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading a form file.
#[derive(Debug, thiserror::Error)]
pub enum FormLoadError {
    #[error("cannot read form file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Structurally invalid TOML, an unknown key or a type mismatch.
    #[error("form parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid date '{value}' for {field}; expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("unknown budget category '{0}'")]
    UnknownCategory(String),
}

// ---------------------------------------------------------------------------
// Input shapes
// ---------------------------------------------------------------------------

/// A numeric field as written by a person: a TOML number or free text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum AmountInput {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl AmountInput {
    fn resolve(
        self,
        field: &str,
    ) -> Decimal {
        match self {
            Self::Integer(n) => non_negative(field, Decimal::from(n)),
            Self::Float(f) => match Decimal::try_from(f) {
                Ok(amount) => non_negative(field, amount),
                Err(e) => {
                    warn!(field, input = f, "invalid amount replaced with 0: {}", e);
                    Decimal::ZERO
                }
            },
            Self::Text(text) => coerce_amount(field, &text),
        }
    }
}

fn amount(
    field: &str,
    input: Option<AmountInput>,
    current: Decimal,
) -> Decimal {
    input.map_or(current, |value| value.resolve(field))
}

fn date(
    field: &'static str,
    value: &str,
) -> Result<NaiveDate, FormLoadError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| FormLoadError::InvalidDate {
        field,
        value: value.to_string(),
    })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SeasonalInput {
    next_shift_date: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ScreenshotInput {
    zillow_estimate: Option<String>,
    zillow_map: Option<String>,
    comparison1: Option<String>,
    comparison2: Option<String>,
    comparison3: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RentalInput {
    property_address: Option<String>,
    property_name: Option<String>,
    estimated_listing_date: Option<String>,
    seasonal_adjustment: Option<SeasonalInput>,
    screenshots: Option<ScreenshotInput>,
    starting_rate: Option<AmountInput>,
    low_rate: Option<AmountInput>,
    summary_findings: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CashFlowInput {
    historical_income: Option<AmountInput>,
    historical_expense: Option<AmountInput>,
    estimated_rental_rate: Option<AmountInput>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PhotoInput {
    inspection1: Option<String>,
    inspection2: Option<String>,
    move_out: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TurnoverInput {
    property_address: Option<String>,
    property_name: Option<String>,
    cover_letter: Option<String>,
    estimated_turnover_days: Option<u32>,
    lease_length_months: Option<u32>,
    last_turnover_date: Option<String>,
    rent_to_sqft_ratio: Option<AmountInput>,
    budget: Option<BTreeMap<String, AmountInput>>,
    cash_flow: Option<CashFlowInput>,
    photo_links: Option<PhotoInput>,
}

// ---------------------------------------------------------------------------
// Conversion into patches
// ---------------------------------------------------------------------------

/// A form that can be filled from a TOML form file.
pub trait FormFile: ReportForm {
    /// Builds the patch described by `input`, using `base` for the fields
    /// of partially specified tables.
    fn patch_from_str(
        input: &str,
        base: &Self,
    ) -> Result<Self::Patch, FormLoadError>;
}

fn parse<T: DeserializeOwned>(input: &str) -> Result<T, FormLoadError> {
    Ok(toml::from_str(input)?)
}

impl FormFile for RentalEstimateForm {
    fn patch_from_str(
        input: &str,
        base: &Self,
    ) -> Result<RentalEstimatePatch, FormLoadError> {
        let row: RentalInput = parse(input)?;

        let seasonal_adjustment = match row.seasonal_adjustment {
            Some(seasonal) => Some(SeasonalAdjustment {
                next_shift_date: match seasonal.next_shift_date {
                    Some(value) => date("next_shift_date", &value)?,
                    None => base.seasonal_adjustment.next_shift_date,
                },
                description: seasonal
                    .description
                    .unwrap_or_else(|| base.seasonal_adjustment.description.clone()),
            }),
            None => None,
        };

        let screenshots = row.screenshots.map(|shots| {
            let current = &base.screenshots;
            ScreenshotLinks {
                zillow_estimate: shots
                    .zillow_estimate
                    .unwrap_or_else(|| current.zillow_estimate.clone()),
                zillow_map: shots
                    .zillow_map
                    .unwrap_or_else(|| current.zillow_map.clone()),
                comparison1: shots
                    .comparison1
                    .unwrap_or_else(|| current.comparison1.clone()),
                comparison2: shots
                    .comparison2
                    .unwrap_or_else(|| current.comparison2.clone()),
                comparison3: shots
                    .comparison3
                    .unwrap_or_else(|| current.comparison3.clone()),
            }
        });

        Ok(RentalEstimatePatch {
            property_address: row.property_address,
            property_name: row.property_name,
            estimated_listing_date: row
                .estimated_listing_date
                .map(|value| date("estimated_listing_date", &value))
                .transpose()?,
            seasonal_adjustment,
            screenshots,
            starting_rate: row
                .starting_rate
                .map(|value| value.resolve("starting_rate")),
            low_rate: row.low_rate.map(|value| value.resolve("low_rate")),
            summary_findings: row.summary_findings,
        })
    }
}

impl FormFile for TurnoverForm {
    fn patch_from_str(
        input: &str,
        base: &Self,
    ) -> Result<TurnoverPatch, FormLoadError> {
        let row: TurnoverInput = parse(input)?;

        let budget = match row.budget {
            Some(entries) => {
                let mut budget = base.budget.clone();
                for (name, value) in entries {
                    let category = BudgetCategory::parse(&name)
                        .ok_or_else(|| FormLoadError::UnknownCategory(name.clone()))?;
                    budget.set(category, value.resolve(category.as_str()));
                }
                Some(budget)
            }
            None => None,
        };

        let cash_flow = row.cash_flow.map(|flow| {
            let current = &base.cash_flow;
            CashFlowInputs {
                historical_income: amount(
                    "historical_income",
                    flow.historical_income,
                    current.historical_income,
                ),
                historical_expense: amount(
                    "historical_expense",
                    flow.historical_expense,
                    current.historical_expense,
                ),
                estimated_rental_rate: amount(
                    "estimated_rental_rate",
                    flow.estimated_rental_rate,
                    current.estimated_rental_rate,
                ),
            }
        });

        let photo_links = row.photo_links.map(|photos| {
            let current = &base.photo_links;
            PhotoLinks {
                inspection1: photos
                    .inspection1
                    .unwrap_or_else(|| current.inspection1.clone()),
                inspection2: photos
                    .inspection2
                    .unwrap_or_else(|| current.inspection2.clone()),
                move_out: photos
                    .move_out
                    .unwrap_or_else(|| current.move_out.clone()),
            }
        });

        let last_turnover_date = match row.last_turnover_date {
            Some(value) if value.trim().is_empty() => Some(None),
            Some(value) => Some(Some(date("last_turnover_date", &value)?)),
            None => None,
        };

        Ok(TurnoverPatch {
            property_address: row.property_address,
            property_name: row.property_name,
            budget,
            cash_flow,
            photo_links,
            cover_letter: row.cover_letter,
            estimated_turnover_days: row.estimated_turnover_days,
            lease_length_months: row.lease_length_months,
            last_turnover_date,
            rent_to_sqft_ratio: row
                .rent_to_sqft_ratio
                .map(|value| value.resolve("rent_to_sqft_ratio")),
        })
    }
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

/// Parses form text and returns `base` with the described fields replaced.
///
/// # Errors
///
/// * [FormLoadError::Parse] – invalid TOML, unknown keys or wrong types.
/// * [FormLoadError::InvalidDate] – a date that is not `YYYY-MM-DD`.
/// * [FormLoadError::UnknownCategory] – a `[budget]` key that names no
///   category.
pub fn load_from_str<F: FormFile>(
    input: &str,
    base: &F,
) -> Result<F, FormLoadError> {
    let patch = F::patch_from_str(input, base)?;
    Ok(base.merged(patch))
}

/// Convenience wrapper: read a file from disk and delegate to [load_from_str].
pub fn load_from_file<F: FormFile>(
    path: &Path,
    base: &F,
) -> Result<F, FormLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| FormLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    load_from_str(&contents, base)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn rental_base() -> RentalEstimateForm {
        RentalEstimateForm::with_defaults(NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
    }

    // -----------------------------------------------------------------------
    // Rental estimate
    // -----------------------------------------------------------------------

    #[test]
    fn empty_file_leaves_form_unchanged() {
        let base = rental_base();

        assert_eq!(load_from_str("", &base).unwrap(), base);
    }

    #[test]
    fn rental_scalars_are_applied() {
        let input = r#"
property_address = "123 Main St"
starting_rate = 3000
low_rate = "$2,750"
estimated_listing_date = "2026-10-26"
"#;

        let form = load_from_str(input, &rental_base()).unwrap();

        assert_eq!(form.property_address, "123 Main St");
        assert_eq!(form.starting_rate, dec!(3000));
        assert_eq!(form.low_rate, dec!(2750));
        assert_eq!(
            form.estimated_listing_date,
            NaiveDate::from_ymd_opt(2026, 10, 26).unwrap()
        );
    }

    #[test]
    fn partial_screenshot_table_keeps_other_links() {
        let mut base = rental_base();
        base.screenshots.zillow_map = "https://example.com/map".to_string();
        let input = r#"
[screenshots]
comparison1 = "https://example.com/c1"
"#;

        let form = load_from_str(input, &base).unwrap();

        assert_eq!(form.screenshots.zillow_map, "https://example.com/map");
        assert_eq!(form.screenshots.comparison1, "https://example.com/c1");
    }

    #[test]
    fn seasonal_description_only_keeps_shift_date() {
        let base = rental_base();
        let input = "[seasonal_adjustment]\ndescription = \"Spring demand\"\n";

        let form = load_from_str(input, &base).unwrap();

        assert_eq!(form.seasonal_adjustment.description, "Spring demand");
        assert_eq!(
            form.seasonal_adjustment.next_shift_date,
            base.seasonal_adjustment.next_shift_date
        );
    }

    #[test]
    fn negative_and_garbage_rates_become_zero() {
        let input = "starting_rate = -100\nlow_rate = \"lots\"\n";

        let form = load_from_str(input, &rental_base()).unwrap();

        assert_eq!(form.starting_rate, Decimal::ZERO);
        assert_eq!(form.low_rate, Decimal::ZERO);
    }

    #[test]
    fn oversized_rates_become_zero_and_document_builds() {
        let input = "starting_rate = 1e28\nlow_rate = \"99999999999999999999999999999\"\n";

        let form = load_from_str(input, &RentalEstimateForm::default()).unwrap();
        let document = form.document();

        assert_eq!(form.starting_rate, Decimal::ZERO);
        assert_eq!(form.low_rate, Decimal::ZERO);
        assert!(!document.pages.is_empty());
    }

    #[test]
    fn bad_date_is_reported() {
        let err = load_from_str("estimated_listing_date = \"10/26/2026\"", &rental_base())
            .unwrap_err();

        assert!(matches!(
            err,
            FormLoadError::InvalidDate {
                field: "estimated_listing_date",
                ..
            }
        ));
    }

    #[test]
    fn unknown_key_is_a_parse_error() {
        let err = load_from_str("monthly_rate = 10", &rental_base()).unwrap_err();

        assert!(matches!(err, FormLoadError::Parse(_)));
    }

    // -----------------------------------------------------------------------
    // Turnover
    // -----------------------------------------------------------------------

    #[test]
    fn budget_table_sets_named_categories() {
        let input = r#"
[budget]
paint = 300
keys_locks = "75.50"
"#;

        let form = load_from_str(input, &TurnoverForm::default()).unwrap();

        assert_eq!(form.budget.paint, dec!(300));
        assert_eq!(form.budget.keys_locks, dec!(75.50));
        assert_eq!(form.budget.appliances, Decimal::ZERO);
    }

    #[test]
    fn unknown_budget_category_is_rejected() {
        let err = load_from_str("[budget]\npool = 10\n", &TurnoverForm::default()).unwrap_err();

        assert!(matches!(err, FormLoadError::UnknownCategory(name) if name == "pool"));
    }

    #[test]
    fn partial_cash_flow_keeps_other_inputs() {
        let mut base = TurnoverForm::default();
        base.cash_flow.historical_income = dec!(20000);
        let input = "[cash_flow]\nestimated_rental_rate = 2000\n";

        let form = load_from_str(input, &base).unwrap();

        assert_eq!(form.cash_flow.historical_income, dec!(20000));
        assert_eq!(form.cash_flow.estimated_rental_rate, dec!(2000));
    }

    #[test]
    fn empty_last_turnover_date_clears_it() {
        let base = TurnoverForm {
            last_turnover_date: NaiveDate::from_ymd_opt(2025, 6, 1),
            ..Default::default()
        };

        let form = load_from_str("last_turnover_date = \"\"", &base).unwrap();

        assert_eq!(form.last_turnover_date, None);
    }

    #[test]
    fn oversized_budget_and_cash_flow_become_zero() {
        let input = r#"
[budget]
paint = 9223372036854775807

[cash_flow]
historical_income = 0.0001
historical_expense = 1e27
estimated_rental_rate = 2000
"#;

        let form = load_from_str(input, &TurnoverForm::default()).unwrap();
        let document = form.document();

        assert_eq!(form.budget.paint, Decimal::ZERO);
        assert_eq!(form.cash_flow.historical_expense, Decimal::ZERO);
        assert_eq!(form.cash_flow.estimated_rental_rate, dec!(2000));
        assert!(!document.pages.is_empty());
    }

    #[test]
    fn counts_are_applied() {
        let input = "estimated_turnover_days = 10\nlease_length_months = 12\n";

        let form = load_from_str(input, &TurnoverForm::default()).unwrap();

        assert_eq!(form.estimated_turnover_days, 10);
        assert_eq!(form.lease_length_months, 12);
    }
}
