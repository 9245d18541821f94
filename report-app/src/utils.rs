use report_core::calculations::common;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a [`Decimal`].
#[derive(Debug, Error)]
#[error("invalid decimal '{input}': {source}")]
pub struct ParseDecimalError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Trims whitespace and strips a leading `$` and any thousands separators.
fn normalize_decimal_input(s: &str) -> String {
    let trimmed = s.trim();
    trimmed
        .strip_prefix('$')
        .unwrap_or(trimmed)
        .replace(',', "")
}

/// Parses a string into a [`Decimal`].
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and a leading
/// dollar sign. Empty or whitespace-only input is treated as 0.
pub fn parse_decimal(s: &str) -> Result<Decimal, ParseDecimalError> {
    let normalized = normalize_decimal_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| ParseDecimalError {
        input: s.to_string(),
        source: e,
    })
}

/// Clamps a negative amount to zero, logging the correction.
///
/// Amounts above [`common::MAX_AMOUNT`] are replaced with 0 as well, so the
/// calculators only ever see figures they can multiply out.
pub fn non_negative(
    field: &str,
    amount: Decimal,
) -> Decimal {
    if amount > common::MAX_AMOUNT {
        tracing::warn!(
            field,
            %amount,
            max = %common::MAX_AMOUNT,
            "oversized amount replaced with 0"
        );
        return Decimal::ZERO;
    }
    let clamped = common::non_negative(amount);
    if clamped != amount {
        tracing::warn!(field, %amount, "negative amount replaced with 0");
    }
    clamped
}

/// Turns free-form numeric text into a non-negative amount.
///
/// Empty, unparseable, negative or oversized input becomes 0; all but the
/// first are logged at `warn` so a typo never aborts the form.
pub fn coerce_amount(
    field: &str,
    s: &str,
) -> Decimal {
    match parse_decimal(s) {
        Ok(amount) => non_negative(field, amount),
        Err(e) => {
            tracing::warn!(field, input = %s, "invalid amount replaced with 0: {}", e);
            Decimal::ZERO
        }
    }
}
