//! End-to-end checks of the builder pipeline: wizard edits flow into the
//! derived projection, the document tree and the export filename.

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

use report_core::document::{Block, Value};
use report_core::{
    BudgetCategories, CashFlowInputs, Mergeable, RentalEstimateForm, RentalEstimatePatch,
    ReportForm, TurnoverForm, TurnoverPatch,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
}

// =============================================================================
// Rental estimate
// =============================================================================

#[test]
fn rental_rates_drive_income_projection() {
    let mut wizard = RentalEstimateForm::with_defaults(today()).into_wizard().unwrap();

    wizard.update(RentalEstimatePatch {
        starting_rate: Some(dec!(3000)),
        low_rate: Some(dec!(2750)),
        ..Default::default()
    });
    let projection = wizard.form().projection();

    assert_eq!(projection.high_occupancy_income, dec!(30250));
    assert_eq!(projection.low_occupancy_income, dec!(27000));
}

#[test]
fn address_update_changes_only_address() {
    let form = RentalEstimateForm::with_defaults(today());

    let updated = form.merged(RentalEstimatePatch {
        property_address: Some("X".to_string()),
        ..Default::default()
    });

    assert_eq!(updated.property_address, "X");
    assert_eq!(updated.property_name, form.property_name);
    assert_eq!(updated.estimated_listing_date, form.estimated_listing_date);
    assert_eq!(updated.seasonal_adjustment, form.seasonal_adjustment);
    assert_eq!(updated.screenshots, form.screenshots);
    assert_eq!(updated.starting_rate, form.starting_rate);
    assert_eq!(updated.low_rate, form.low_rate);
    assert_eq!(updated.summary_findings, form.summary_findings);
}

#[test]
fn rental_filename_uses_address_slug() {
    let form = RentalEstimateForm {
        property_address: "123 Main St".to_string(),
        ..RentalEstimateForm::with_defaults(today())
    };

    assert_eq!(form.filename("pdf"), "rental-estimate-123-Main-St.pdf");
    assert_eq!(
        RentalEstimateForm::with_defaults(today()).filename("pdf"),
        "rental-estimate-property.pdf"
    );
}

#[test]
fn rental_document_splits_into_two_pages() {
    let form = RentalEstimateForm {
        property_address: "123 Main St".to_string(),
        starting_rate: dec!(3000),
        low_rate: dec!(2750),
        summary_findings: "Strong demand.".to_string(),
        ..RentalEstimateForm::with_defaults(today())
    };

    let document = form.document();
    let titles: Vec<Vec<&str>> = document
        .pages
        .iter()
        .map(|page| page.sections.iter().map(|s| s.title.as_str()).collect())
        .collect();

    assert_eq!(
        titles,
        vec![
            vec![
                "MoveZen Rental Estimate",
                "Seasonal Adjustments",
                "Net Income Big Picture"
            ],
            vec![
                "Summary of Findings",
                "Helpful Financial Calculators",
                "Rate Guarantee"
            ],
        ]
    );
}

#[test]
fn building_is_idempotent() {
    let form = RentalEstimateForm {
        starting_rate: dec!(3000),
        low_rate: dec!(2750),
        ..RentalEstimateForm::with_defaults(today())
    };
    let projection = form.projection();

    assert_eq!(
        form.build_document(&projection),
        form.build_document(&projection)
    );
}

// =============================================================================
// Turnover
// =============================================================================

#[test]
fn turnover_budget_and_cash_flow_scenario() {
    let mut wizard = TurnoverForm::default().into_wizard().unwrap();

    wizard.update(TurnoverPatch {
        budget: Some(BudgetCategories {
            maintenance_repair: dec!(500),
            paint: dec!(300),
            other: dec!(0),
            ..Default::default()
        }),
        cash_flow: Some(CashFlowInputs {
            estimated_rental_rate: dec!(2000),
            ..Default::default()
        }),
        lease_length_months: Some(24),
        ..Default::default()
    });
    let projection = ReportForm::projection(wizard.form());

    assert_eq!(projection.total_budget, dec!(800));
    assert_eq!(projection.projected_income, dec!(48000));
    assert_eq!(projection.projected_expense, dec!(48000) * dec!(0.15));
}

#[test]
fn turnover_history_sets_expense_ratio() {
    let form = TurnoverForm {
        cash_flow: CashFlowInputs {
            historical_income: dec!(1000),
            historical_expense: dec!(200),
            estimated_rental_rate: dec!(2000),
        },
        ..Default::default()
    };

    let document = form.document();
    let section = document.section("Cash Flow Performance").unwrap();

    assert!(
        section
            .blocks
            .contains(&Block::row("Expense Ratio", Value::Percent(dec!(0.2))))
    );
}

#[test]
fn wizard_navigation_does_not_touch_form() {
    let mut wizard = TurnoverForm::default().into_wizard().unwrap();
    let before = wizard.snapshot();

    assert_eq!(wizard.previous(), 1);
    wizard.jump_to(6).unwrap();
    assert_eq!(wizard.next(), 6);
    assert_eq!(wizard.jump_to(3).unwrap(), 3);

    assert_eq!(wizard.form(), &before);
}
