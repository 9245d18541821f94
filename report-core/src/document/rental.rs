use crate::calculations::{HIGH_OCCUPANCY_MONTHS, IncomeProjection, LOW_OCCUPANCY_MONTHS};
use crate::models::RentalEstimateForm;
use crate::models::narrative::{RATE_GUARANTEE, REPORT_CLOSING_LINE, REPORT_FOOTER_LINKS};

use super::{
    Block, Highlight, ReportDocument, ReportKind, ReportPage, Section, SectionRole, Tone, Value,
    present_links,
};

const SUBTITLE: &str = "Details and Net Income Projections";
const ADDRESS_PLACEHOLDER: &str = "Property Address";

/// Lays out the two-page rental estimate.
///
/// Page 1 carries the header, seasonal timing and the income picture; page 2
/// the findings, screenshot links, calculator links and the rate guarantee.
pub fn build_rental_document(
    form: &RentalEstimateForm,
    projection: &IncomeProjection,
) -> ReportDocument {
    let kind = ReportKind::RentalEstimate;

    let first = ReportPage::assemble([
        header(form),
        seasonal_adjustments(form),
        net_income(form, projection),
    ]);

    let second = ReportPage::assemble([
        Section::new(SectionRole::Narrative, "Summary of Findings")
            .block(Block::paragraph(form.summary_findings.trim())),
        Section::new(SectionRole::Links, "Market Analysis Screenshots")
            .blocks(present_links(form.screenshots.labelled())),
        Section::new(SectionRole::Footer, "Helpful Financial Calculators")
            .blocks(
                REPORT_FOOTER_LINKS
                    .iter()
                    .map(|link| Block::link(link.label, link.url)),
            )
            .block(Block::paragraph(REPORT_CLOSING_LINE)),
        Section::new(SectionRole::Disclaimer, "Rate Guarantee")
            .block(Block::paragraph(RATE_GUARANTEE)),
    ]);

    ReportDocument {
        kind,
        title: kind.title().to_string(),
        pages: vec![first, second],
    }
}

fn header(form: &RentalEstimateForm) -> Section {
    let address = form.property_address.trim();
    let mut section = Section::new(SectionRole::Header, ReportKind::RentalEstimate.title())
        .block(Block::paragraph(SUBTITLE))
        .block(Block::paragraph(if address.is_empty() {
            ADDRESS_PLACEHOLDER
        } else {
            address
        }));
    if !form.property_name.trim().is_empty() {
        section = section.block(Block::paragraph(form.property_name.trim()));
    }
    section
}

fn seasonal_adjustments(form: &RentalEstimateForm) -> Section {
    Section::new(SectionRole::Overview, "Seasonal Adjustments")
        .block(Block::Highlights(vec![
            Highlight::new(
                Tone::Primary,
                "Estimated Listing Date",
                Value::Date(form.estimated_listing_date),
            ),
            Highlight::new(
                Tone::Caution,
                "Next Seasonal Shift",
                Value::Date(form.seasonal_adjustment.next_shift_date),
            ),
        ]))
        .block(Block::paragraph(form.seasonal_adjustment.description.trim()))
}

fn net_income(
    form: &RentalEstimateForm,
    projection: &IncomeProjection,
) -> Section {
    Section::new(SectionRole::Financial, "Net Income Big Picture")
        .block(Block::Highlights(vec![
            Highlight::new(
                Tone::Positive,
                "High Range Annual Income",
                Value::Money(projection.high_occupancy_income),
            )
            .with_caption(format!("Low rate × {HIGH_OCCUPANCY_MONTHS} months")),
            Highlight::new(
                Tone::Primary,
                "Low Range Annual Income",
                Value::Money(projection.low_occupancy_income),
            )
            .with_caption(format!("Starting rate × {LOW_OCCUPANCY_MONTHS} months")),
        ]))
        .block(Block::row(
            "Starting Rate",
            Value::RateProjection {
                rate: form.starting_rate,
                months: LOW_OCCUPANCY_MONTHS,
                total: projection.low_occupancy_income,
            },
        ))
        .block(Block::row(
            "Low Rate",
            Value::RateProjection {
                rate: form.low_rate,
                months: HIGH_OCCUPANCY_MONTHS,
                total: projection.high_occupancy_income,
            },
        ))
}
