use rust_decimal::Decimal;

use crate::calculations::TurnoverProjection;
use crate::models::TurnoverForm;
use crate::models::narrative::TURNOVER_DISCLAIMER;

use super::{
    Block, Highlight, ReportDocument, ReportKind, ReportPage, Section, SectionRole, Tone, Value,
    present_links,
};

const ADDRESS_PLACEHOLDER: &str = "Property Address";

/// Lays out the two-page move-out turnover report.
pub fn build_turnover_document(
    form: &TurnoverForm,
    projection: &TurnoverProjection,
) -> ReportDocument {
    let kind = ReportKind::TurnoverReport;

    let first = ReportPage::assemble([
        header(form),
        property_overview(form),
        cash_flow(form, projection),
        budget(form, projection),
    ]);

    let second = ReportPage::assemble([
        Section::new(SectionRole::Narrative, "Cover Letter")
            .block(Block::paragraph(form.cover_letter.trim())),
        Section::new(SectionRole::Links, "Inspection Photos")
            .blocks(present_links(form.photo_links.labelled())),
        Section::new(SectionRole::Disclaimer, "Important Disclaimers")
            .block(Block::paragraph(TURNOVER_DISCLAIMER)),
    ]);

    ReportDocument {
        kind,
        title: kind.title().to_string(),
        pages: vec![first, second],
    }
}

fn header(form: &TurnoverForm) -> Section {
    let address = form.property_address.trim();
    let mut section = Section::new(SectionRole::Header, ReportKind::TurnoverReport.title()).block(
        Block::paragraph(if address.is_empty() {
            ADDRESS_PLACEHOLDER
        } else {
            address
        }),
    );
    if !form.property_name.trim().is_empty() {
        section = section.block(Block::paragraph(form.property_name.trim()));
    }
    section
}

fn property_overview(form: &TurnoverForm) -> Section {
    let mut section = Section::new(SectionRole::Overview, "Property Overview")
        .block(Block::row(
            "Est. Turnover",
            Value::Days(form.estimated_turnover_days),
        ))
        .block(Block::row(
            "Lease Length",
            Value::Months(form.lease_length_months),
        ))
        .block(Block::row(
            "Rent / SqFt",
            Value::Ratio(form.rent_to_sqft_ratio),
        ))
        .block(Block::row(
            "Rental Rate",
            Value::Money(form.cash_flow.estimated_rental_rate),
        ));
    if let Some(date) = form.last_turnover_date {
        section = section.block(Block::row("Last Turnover", Value::Date(date)));
    }
    section
}

fn cash_flow(
    form: &TurnoverForm,
    projection: &TurnoverProjection,
) -> Section {
    let mut section = Section::new(SectionRole::Financial, "Cash Flow Performance")
        .block(Block::Highlights(vec![
            Highlight::new(
                Tone::Neutral,
                "Historical NOI",
                Value::Money(projection.historical_noi),
            ),
            Highlight::new(
                Tone::Positive,
                "Projected NOI",
                Value::Money(projection.projected_noi),
            )
            .with_caption(format!(
                "Over a {} month lease",
                projection.lease_length_months
            )),
        ]))
        .block(Block::row(
            "Historical Income",
            Value::Money(form.cash_flow.historical_income),
        ))
        .block(Block::row(
            "Historical Expense",
            Value::Money(form.cash_flow.historical_expense),
        ))
        .block(Block::row(
            "Projected Income",
            Value::Money(projection.projected_income),
        ))
        .block(Block::row(
            "Projected Expense",
            Value::Money(projection.projected_expense),
        ));
    if form.cash_flow.historical_income > Decimal::ZERO {
        section = section.block(Block::row(
            "Expense Ratio",
            Value::Percent(projection.expense_ratio),
        ));
    }
    section
}

/// Non-zero categories in declaration order, then the totals. Without any
/// budgeted category the section is left empty and gets dropped.
fn budget(
    form: &TurnoverForm,
    projection: &TurnoverProjection,
) -> Section {
    let rows: Vec<Block> = form
        .budget
        .entries()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(category, amount)| Block::row(category.label(), Value::Money(amount)))
        .collect();

    let section = Section::new(SectionRole::Budget, "Turnover Budget Estimate");
    if rows.is_empty() {
        return section;
    }
    section
        .blocks(rows)
        .block(Block::Highlight(Highlight::new(
            Tone::Caution,
            "Total Budget",
            Value::Money(projection.total_budget),
        )))
        .block(Block::row(
            "Net Gain After Turnover",
            Value::Money(projection.net_gain_after_turnover),
        ))
}
