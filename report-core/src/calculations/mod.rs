//! Derived financial calculators.
//!
//! This module provides the pure projection logic behind the two report
//! builders. Every function here is side-effect free and recomputed from
//! the current form on each read.

pub mod common;
pub mod rental;
pub mod turnover;

pub use rental::{
    HIGH_OCCUPANCY_MONTHS, IncomeProjection, LOW_OCCUPANCY_MONTHS, MONTHS_PER_YEAR,
};
pub use turnover::{DEFAULT_EXPENSE_RATIO, TurnoverInputs, TurnoverProjection};
