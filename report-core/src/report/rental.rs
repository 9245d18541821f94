use crate::calculations::IncomeProjection;
use crate::document::{ReportDocument, ReportKind, build_rental_document};
use crate::models::RentalEstimateForm;
use crate::models::narrative::{
    CASH_FLOW_CALCULATOR, DEFAULT_SUMMARY, NET_INCOME_EXPLANATION, RATE_ESTIMATE_EXPLANATION,
    SEASONAL_ARTICLE, VACANCY_CALCULATOR,
};
use crate::wizard::{StepDescriptor, StepView};

use super::{ReportForm, money, or_missing, review};

impl ReportForm for RentalEstimateForm {
    type Projection = IncomeProjection;

    const KIND: ReportKind = ReportKind::RentalEstimate;

    fn property_address(&self) -> &str {
        &self.property_address
    }

    fn steps() -> Vec<StepDescriptor<Self>> {
        vec![
            StepDescriptor::new(1, "Property Info", property_info),
            StepDescriptor::new(2, "Seasonal Adjustments", seasonal),
            StepDescriptor::new(3, "Market Screenshots", screenshots),
            StepDescriptor::new(4, "Rent Estimate", rent_estimate),
            StepDescriptor::new(5, "Net Income", net_income),
            StepDescriptor::new(6, "Summary", summary),
            StepDescriptor::new(7, "Review & Export", review::<Self>),
        ]
    }

    fn projection(&self) -> IncomeProjection {
        IncomeProjection::calculate(self.starting_rate, self.low_rate)
    }

    fn build_document(
        &self,
        projection: &IncomeProjection,
    ) -> ReportDocument {
        build_rental_document(self, projection)
    }
}

fn property_info(form: &RentalEstimateForm) -> StepView {
    StepView::default()
        .field("Property Address", or_missing(&form.property_address))
        .field("Property Name", or_missing(&form.property_name))
        .field("Estimated Listing Date", form.estimated_listing_date)
}

fn seasonal(form: &RentalEstimateForm) -> StepView {
    StepView::default()
        .field(
            "Next Seasonal Shift",
            form.seasonal_adjustment.next_shift_date,
        )
        .note(form.seasonal_adjustment.description.clone())
        .link(SEASONAL_ARTICLE)
}

fn screenshots(form: &RentalEstimateForm) -> StepView {
    form.screenshots
        .labelled()
        .into_iter()
        .fold(StepView::default(), |view, (label, url)| {
            view.field(label, or_missing(url))
        })
}

fn rent_estimate(form: &RentalEstimateForm) -> StepView {
    StepView::default()
        .field("Starting Rate", money(form.starting_rate))
        .field("Low Rate", money(form.low_rate))
        .note(RATE_ESTIMATE_EXPLANATION)
}

fn net_income(form: &RentalEstimateForm) -> StepView {
    let projection = form.projection();
    StepView::default()
        .field(
            "High Range Annual Income",
            money(projection.high_occupancy_income),
        )
        .field(
            "Low Range Annual Income",
            money(projection.low_occupancy_income),
        )
        .note(NET_INCOME_EXPLANATION)
        .link(VACANCY_CALCULATOR)
        .link(CASH_FLOW_CALCULATOR)
}

fn summary(form: &RentalEstimateForm) -> StepView {
    let view = StepView::default().field("Summary of Findings", or_missing(&form.summary_findings));
    if form.summary_findings.trim().is_empty() {
        view.note(format!("Suggested summary:\n\n{DEFAULT_SUMMARY}"))
    } else {
        view
    }
}
