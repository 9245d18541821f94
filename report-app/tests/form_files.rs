//! Integration tests that load the fixture form files from disk and run
//! them through the builders.

use std::path::PathBuf;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use report_app::app::{self, BuildRequest};
use report_app::form_loader;
use report_core::ReportForm;
use report_core::models::{RentalEstimateForm, TurnoverForm};
use rust_decimal_macros::dec;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn rental_base() -> RentalEstimateForm {
    RentalEstimateForm::with_defaults(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap())
}

#[test]
fn rental_fixture_loads() {
    let form = form_loader::load_from_file(&fixture("rental.toml"), &rental_base()).unwrap();

    assert_eq!(form.property_address, "123 Main St");
    assert_eq!(form.starting_rate, dec!(3000));
    assert_eq!(form.low_rate, dec!(2750.00));
    assert_eq!(
        form.seasonal_adjustment.next_shift_date,
        NaiveDate::from_ymd_opt(2026, 11, 15).unwrap()
    );
    assert_eq!(form.screenshots.comparison1, "");
}

#[test]
fn rental_fixture_projects_income() {
    let form = form_loader::load_from_file(&fixture("rental.toml"), &rental_base()).unwrap();

    let projection = form.projection();

    assert_eq!(projection.high_occupancy_income, dec!(30250));
    assert_eq!(projection.low_occupancy_income, dec!(27000));
    assert_eq!(form.filename("pdf"), "rental-estimate-123-Main-St.pdf");
}

#[test]
fn turnover_fixture_loads() {
    let form =
        form_loader::load_from_file(&fixture("turnover.toml"), &TurnoverForm::default()).unwrap();

    assert_eq!(form.budget.paint, dec!(300));
    assert_eq!(form.budget.appliances, dec!(0));
    assert_eq!(form.lease_length_months, 12);
    assert_eq!(form.last_turnover_date, NaiveDate::from_ymd_opt(2024, 6, 1));

    let projection = form.projection();
    assert_eq!(projection.total_budget, dec!(875));
    assert_eq!(projection.projected_income, dec!(24000));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = form_loader::load_from_file(&fixture("nope.toml"), &TurnoverForm::default())
        .unwrap_err();

    assert!(matches!(err, form_loader::FormLoadError::Io { .. }));
}

#[tokio::test]
async fn turnover_fixture_exports_pdf() {
    let dir = TempDir::new().unwrap();
    let request = BuildRequest {
        input: Some(fixture("turnover.toml")),
        out_dir: Some(dir.path().to_path_buf()),
        ..Default::default()
    };

    app::run_builder(TurnoverForm::default(), &request, &app::build_registry())
        .await
        .unwrap();

    let written = dir.path().join("turnover-report-45-Oak-Ave,-Unit-2.pdf");
    assert!(std::fs::read(written).unwrap().starts_with(b"%PDF"));
}

#[tokio::test]
async fn step_preview_reflects_loaded_form() {
    let request = BuildRequest {
        input: Some(fixture("rental.toml")),
        step: Some(1),
        ..Default::default()
    };

    let text = app::run_builder(rental_base(), &request, &app::build_registry())
        .await
        .unwrap();

    assert!(text.starts_with("Step 1 of 7: Property Info"));
    assert!(text.contains("123 Main St"));
}
