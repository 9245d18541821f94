pub mod narrative;
mod rental_estimate;
mod turnover;

pub use rental_estimate::{
    DEFAULT_LISTING_LEAD_DAYS, RentalEstimateForm, RentalEstimatePatch, ScreenshotLinks,
    SeasonalAdjustment, default_listing_date, next_seasonal_shift,
};
pub use turnover::{
    BudgetCategories, BudgetCategory, CashFlowInputs, DEFAULT_LEASE_LENGTH_MONTHS,
    DEFAULT_TURNOVER_DAYS, PhotoLinks, TurnoverForm, TurnoverPatch,
};
