//! Turnover budget and cash-flow projections.
//!
//! | Figure                    | Formula |
//! |---------------------------|---------|
//! | Total budget              | sum of every budget category |
//! | Historical NOI            | historical income − historical expense |
//! | Expense ratio             | historical expense ÷ historical income, or 0.15 without income history |
//! | Projected income          | monthly rental rate × lease length (months) |
//! | Projected expense         | projected income × expense ratio |
//! | Projected NOI             | projected income − projected expense |
//! | Net gain after turnover   | projected NOI − total budget |
//!
//! NOI excludes owner-level costs (taxes, insurance, debt service).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::times_months;

/// Expense ratio assumed when there is no historical income to derive one from.
pub const DEFAULT_EXPENSE_RATIO: Decimal = Decimal::from_parts(15, 0, 0, false, 2);

/// Inputs to the turnover projection, taken from a turnover form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnoverInputs<'a> {
    pub budget_amounts: &'a [Decimal],
    pub historical_income: Decimal,
    pub historical_expense: Decimal,
    pub monthly_rate: Decimal,
    pub lease_length_months: u32,
}

/// Derived figures for the turnover report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnoverProjection {
    pub total_budget: Decimal,
    pub historical_noi: Decimal,
    pub expense_ratio: Decimal,
    pub projected_income: Decimal,
    pub projected_expense: Decimal,
    pub projected_noi: Decimal,
    pub net_gain_after_turnover: Decimal,
    pub lease_length_months: u32,
}

impl TurnoverProjection {
    pub fn calculate(inputs: &TurnoverInputs<'_>) -> Self {
        let total_budget = total_budget(inputs.budget_amounts);
        let historical_noi = inputs
            .historical_income
            .saturating_sub(inputs.historical_expense);
        let expense_ratio = expense_ratio(inputs.historical_income, inputs.historical_expense);
        let projected_income = times_months(inputs.monthly_rate, inputs.lease_length_months);
        let projected_expense = projected_income.saturating_mul(expense_ratio);
        let projected_noi = projected_income.saturating_sub(projected_expense);

        Self {
            total_budget,
            historical_noi,
            expense_ratio,
            projected_income,
            projected_expense,
            projected_noi,
            net_gain_after_turnover: projected_noi.saturating_sub(total_budget),
            lease_length_months: inputs.lease_length_months,
        }
    }
}

/// Sums every budget category amount.
pub fn total_budget(amounts: &[Decimal]) -> Decimal {
    amounts
        .iter()
        .fold(Decimal::ZERO, |total, amount| total.saturating_add(*amount))
}

/// Share of income historically spent on operating expense.
pub fn expense_ratio(
    historical_income: Decimal,
    historical_expense: Decimal,
) -> Decimal {
    if historical_income > Decimal::ZERO {
        historical_expense
            .checked_div(historical_income)
            .unwrap_or(Decimal::MAX)
    } else {
        DEFAULT_EXPENSE_RATIO
    }
}
