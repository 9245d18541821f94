//! Text rendering of document values.

use chrono::NaiveDate;
pub use report_core::calculations::common::format_money;
use report_core::calculations::common::round_half_up;
use report_core::document::Value;
use rust_decimal::Decimal;

/// `October 15, 2026`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// `0.15` → `15%`
pub fn format_percent(fraction: Decimal) -> String {
    let percent = round_half_up(fraction.saturating_mul(Decimal::ONE_HUNDRED)).normalize();
    format!("{percent}%")
}

pub fn format_ratio(ratio: Decimal) -> String {
    format!("{:.2}", round_half_up(ratio))
}

fn plural(
    count: u32,
    unit: &str,
) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

/// The printed form of a value.
///
/// A rate projection prints its total; the monthly rate belongs to the row
/// label (see [`row_label`]).
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Money(amount) => format_money(*amount),
        Value::Text(text) => text.clone(),
        Value::Date(date) => format_date(*date),
        Value::Days(days) => plural(*days, "day"),
        Value::Months(months) => plural(*months, "month"),
        Value::Ratio(ratio) => format_ratio(*ratio),
        Value::Percent(fraction) => format_percent(*fraction),
        Value::RateProjection { months, total, .. } => {
            format!("{} NOI ({months} mo)", format_money(*total))
        }
    }
}

/// Row label, extended with the monthly rate for rate projections.
pub fn row_label(
    label: &str,
    value: &Value,
) -> String {
    match value {
        Value::RateProjection { rate, .. } => format!("{label} ({}/mo)", format_money(*rate)),
        _ => label.to_string(),
    }
}

/// Characters cp1252 places in 0x80..=0x9F, on top of Latin-1.
const WIN_ANSI_EXTRAS: &str = "€‚ƒ„…†‡ˆ‰Š‹ŒŽ‘’“”•–—˜™š›œžŸ";

/// Returns `true` when the built-in fonts' WinAnsi encoding has a glyph for `c`.
fn win_ansi(c: char) -> bool {
    c.is_ascii() || ('\u{a0}'..='\u{ff}').contains(&c) || WIN_ANSI_EXTRAS.contains(c)
}

/// Replaces characters the built-in PDF fonts cannot show with `?`.
///
/// Latin-1 letters, `×`, curly quotes and dashes are kept as written.
pub fn pdf_safe(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\t' => ' ',
            c if win_ansi(c) => c,
            _ => '?',
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn money_has_separators_and_two_places() {
        assert_eq!(format_money(dec!(30250)), "$30,250.00");
        assert_eq!(format_money(dec!(1234567.891)), "$1,234,567.89");
        assert_eq!(format_money(dec!(0)), "$0.00");
        assert_eq!(format_money(dec!(0.5)), "$0.50");
    }

    #[test]
    fn money_rounds_half_up() {
        assert_eq!(format_money(dec!(2.005)), "$2.01");
        assert_eq!(format_money(dec!(999.995)), "$1,000.00");
    }

    #[test]
    fn negative_money_keeps_sign() {
        assert_eq!(format_money(dec!(-1500)), "-$1,500.00");
        assert_eq!(format_money(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn dates_are_spelled_out() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 5).unwrap();

        assert_eq!(format_date(date), "October 5, 2026");
    }

    #[test]
    fn percent_and_ratio() {
        assert_eq!(format_percent(dec!(0.15)), "15%");
        assert_eq!(format_percent(dec!(0.1234)), "12.34%");
        assert_eq!(format_ratio(dec!(1.5)), "1.50");
    }

    #[test]
    fn rate_projection_splits_between_label_and_value() {
        let value = Value::RateProjection {
            rate: dec!(3000),
            months: 9,
            total: dec!(27000),
        };

        assert_eq!(row_label("Starting Rate", &value), "Starting Rate ($3,000.00/mo)");
        assert_eq!(format_value(&value), "$27,000.00 NOI (9 mo)");
    }

    #[test]
    fn day_and_month_counts() {
        assert_eq!(format_value(&Value::Days(14)), "14 days");
        assert_eq!(format_value(&Value::Months(1)), "1 month");
    }

    #[test]
    fn pdf_safe_keeps_typography_the_fonts_can_show() {
        assert_eq!(pdf_safe("Low rate × 11 — “ok”"), "Low rate × 11 — “ok”");
        assert_eq!(pdf_safe("€1,200\tdeposit"), "€1,200 deposit");
    }

    #[test]
    fn pdf_safe_keeps_accented_latin_letters() {
        assert_eq!(pdf_safe("12 Rue Élysée, Peñasco"), "12 Rue Élysée, Peñasco");
        assert_eq!(pdf_safe("Façade, Ærø, Über"), "Façade, Ærø, Über");
    }

    #[test]
    fn pdf_safe_replaces_characters_outside_win_ansi() {
        assert_eq!(pdf_safe("Kitchen → Den"), "Kitchen ? Den");
        assert_eq!(pdf_safe("漢字 Ω"), "?? ?");
    }
}
