//! The two report builders: form, steps, projection and layout bound
//! together behind [`ReportForm`].

mod rental;
mod turnover;

use rust_decimal::Decimal;

use crate::calculations::common::format_money;
use crate::document::{ReportDocument, ReportKind};
use crate::export::report_filename;
use crate::wizard::{Mergeable, StepDescriptor, StepView, Wizard, WizardError};

/// A form that a wizard can collect and a report can be built from.
pub trait ReportForm: Mergeable + std::fmt::Debug + Send + Sync + 'static {
    type Projection: std::fmt::Debug + Send;

    const KIND: ReportKind;

    fn property_address(&self) -> &str;

    /// Steps in display order; the last one is the review/export step.
    fn steps() -> Vec<StepDescriptor<Self>>;

    /// Recomputes the derived figures. Never stored on the form.
    fn projection(&self) -> Self::Projection;

    fn build_document(
        &self,
        projection: &Self::Projection,
    ) -> ReportDocument;

    fn document(&self) -> ReportDocument {
        self.build_document(&self.projection())
    }

    fn filename(
        &self,
        extension: &str,
    ) -> String {
        report_filename(Self::KIND, self.property_address(), extension)
    }

    fn into_wizard(self) -> Result<Wizard<Self>, WizardError> {
        Wizard::new(self, Self::steps())
    }
}

fn money(amount: Decimal) -> String {
    format_money(amount)
}

fn or_missing(text: &str) -> &str {
    if text.trim().is_empty() {
        "(not provided)"
    } else {
        text
    }
}

/// Review step content shared by both builders.
fn review<F: ReportForm>(form: &F) -> StepView {
    let document = form.document();
    let mut view = StepView::default().field("Export File", form.filename("pdf"));
    for (number, page) in document.pages.iter().enumerate() {
        let titles: Vec<&str> = page.sections.iter().map(|s| s.title.as_str()).collect();
        view = view.note(format!("Page {}: {}", number + 1, titles.join(", ")));
    }
    view
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{RentalEstimateForm, TurnoverForm};

    #[test]
    fn rental_steps_in_order() {
        let titles: Vec<&str> = RentalEstimateForm::steps().iter().map(|s| s.title).collect();

        assert_eq!(
            titles,
            vec![
                "Property Info",
                "Seasonal Adjustments",
                "Market Screenshots",
                "Rent Estimate",
                "Net Income",
                "Summary",
                "Review & Export",
            ]
        );
    }

    #[test]
    fn turnover_steps_in_order() {
        let titles: Vec<&str> = TurnoverForm::steps().iter().map(|s| s.title).collect();

        assert_eq!(
            titles,
            vec![
                "Cover Letter",
                "Property Info",
                "Budget Categories",
                "Cash Flow Data",
                "Photo Links",
                "Review & Export",
            ]
        );
    }

    #[test]
    fn both_builders_make_valid_wizards() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();

        assert_eq!(
            RentalEstimateForm::with_defaults(today)
                .into_wizard()
                .unwrap()
                .steps()
                .len(),
            7
        );
        assert_eq!(TurnoverForm::default().into_wizard().unwrap().steps().len(), 6);
    }

    #[test]
    fn review_step_names_export_file() {
        let form = TurnoverForm {
            property_address: "9 Elm Ct".to_string(),
            ..Default::default()
        };

        let view = review(&form);

        assert_eq!(view.fields[0].value, "turnover-report-9-Elm-Ct.pdf");
        assert_eq!(view.notes.len(), 2);
    }

    #[test]
    fn money_groups_thousands_like_the_export() {
        assert_eq!(money(Decimal::new(30250, 0)), "$30,250.00");
        assert_eq!(money(Decimal::new(1_234_567_89, 2)), "$1,234,567.89");
    }
}
