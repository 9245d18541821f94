use crate::calculations::TurnoverProjection;
use crate::document::{ReportDocument, ReportKind, build_turnover_document};
use crate::models::{BudgetCategory, TurnoverForm};
use crate::wizard::{StepDescriptor, StepView};

use super::{ReportForm, money, or_missing, review};

impl ReportForm for TurnoverForm {
    type Projection = TurnoverProjection;

    const KIND: ReportKind = ReportKind::TurnoverReport;

    fn property_address(&self) -> &str {
        &self.property_address
    }

    fn steps() -> Vec<StepDescriptor<Self>> {
        vec![
            StepDescriptor::new(1, "Cover Letter", cover_letter),
            StepDescriptor::new(2, "Property Info", property_info),
            StepDescriptor::new(3, "Budget Categories", budget),
            StepDescriptor::new(4, "Cash Flow Data", cash_flow),
            StepDescriptor::new(5, "Photo Links", photo_links),
            StepDescriptor::new(6, "Review & Export", review::<Self>),
        ]
    }

    fn projection(&self) -> TurnoverProjection {
        TurnoverForm::projection(self)
    }

    fn build_document(
        &self,
        projection: &TurnoverProjection,
    ) -> ReportDocument {
        build_turnover_document(self, projection)
    }
}

fn cover_letter(form: &TurnoverForm) -> StepView {
    StepView::default().note(form.cover_letter.clone())
}

fn property_info(form: &TurnoverForm) -> StepView {
    StepView::default()
        .field("Property Address", or_missing(&form.property_address))
        .field("Property Name", or_missing(&form.property_name))
        .field("Estimated Turnover Days", form.estimated_turnover_days)
        .field("Lease Length (months)", form.lease_length_months)
        .field(
            "Last Turnover Date",
            form.last_turnover_date
                .map_or_else(|| "(not provided)".to_string(), |date| date.to_string()),
        )
        .field("Rent / SqFt Ratio", format!("{:.2}", form.rent_to_sqft_ratio))
}

fn budget(form: &TurnoverForm) -> StepView {
    let view = BudgetCategory::ALL
        .into_iter()
        .fold(StepView::default(), |view, category| {
            view.field(category.label(), money(form.budget.get(category)))
        });
    view.field("Total Budget", money(form.projection().total_budget))
}

fn cash_flow(form: &TurnoverForm) -> StepView {
    let projection = form.projection();
    StepView::default()
        .field("Historical Income", money(form.cash_flow.historical_income))
        .field("Historical Expense", money(form.cash_flow.historical_expense))
        .field("Estimated Rental Rate", money(form.cash_flow.estimated_rental_rate))
        .field("Projected Income", money(projection.projected_income))
        .field("Projected Expense", money(projection.projected_expense))
        .field("Projected NOI", money(projection.projected_noi))
}

fn photo_links(form: &TurnoverForm) -> StepView {
    form.photo_links
        .labelled()
        .into_iter()
        .fold(StepView::default(), |view, (label, url)| {
            view.field(label, or_missing(url))
        })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{BudgetCategories, CashFlowInputs, TurnoverPatch};
    use crate::wizard::FieldView;

    #[test]
    fn first_step_shows_default_cover_letter() {
        let wizard = TurnoverForm::default().into_wizard().unwrap();

        assert_eq!(wizard.current_title(), "Cover Letter");
        assert_eq!(
            wizard.render_current().notes,
            vec![crate::models::narrative::DEFAULT_COVER_LETTER.to_string()]
        );
    }

    #[test]
    fn budget_step_lists_every_category_and_total() {
        let form = TurnoverForm {
            budget: BudgetCategories {
                maintenance_repair: dec!(500),
                paint: dec!(300),
                ..Default::default()
            },
            ..Default::default()
        };

        let view = budget(&form);

        assert_eq!(view.fields.len(), 10);
        assert_eq!(view.fields[9], FieldView::new("Total Budget", "$800.00"));
    }

    #[test]
    fn cash_flow_step_recomputes_after_update() {
        let mut wizard = TurnoverForm::default().into_wizard().unwrap();
        wizard.jump_to(4).unwrap();
        wizard.update(TurnoverPatch {
            cash_flow: Some(CashFlowInputs {
                estimated_rental_rate: dec!(2000),
                ..Default::default()
            }),
            ..Default::default()
        });

        let view = wizard.render_current();

        assert_eq!(view.fields[3], FieldView::new("Projected Income", "$48,000.00"));
        assert_eq!(view.fields[4], FieldView::new("Projected Expense", "$7,200.00"));
    }
}
