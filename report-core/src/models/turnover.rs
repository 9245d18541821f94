use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::{TurnoverInputs, TurnoverProjection};
use crate::models::narrative::DEFAULT_COVER_LETTER;
use crate::wizard::Mergeable;

pub const DEFAULT_TURNOVER_DAYS: u32 = 14;
pub const DEFAULT_LEASE_LENGTH_MONTHS: u32 = 24;

/// Turnover budget line items, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetCategory {
    MaintenanceRepair,
    Paint,
    Appliances,
    FloorsCarpets,
    Housekeeping,
    LandscapingExterior,
    KeysLocks,
    Other,
    SmokeFireVerification,
}

impl BudgetCategory {
    pub const ALL: [BudgetCategory; 9] = [
        Self::MaintenanceRepair,
        Self::Paint,
        Self::Appliances,
        Self::FloorsCarpets,
        Self::Housekeeping,
        Self::LandscapingExterior,
        Self::KeysLocks,
        Self::Other,
        Self::SmokeFireVerification,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::MaintenanceRepair => "Maintenance / Repair",
            Self::Paint => "Paint",
            Self::Appliances => "Appliances",
            Self::FloorsCarpets => "Floors / Carpets",
            Self::Housekeeping => "Housekeeping",
            Self::LandscapingExterior => "Landscaping / Exterior",
            Self::KeysLocks => "Keys / Locks",
            Self::Other => "Other",
            Self::SmokeFireVerification => "Smoke / Fire Verification",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MaintenanceRepair => "maintenance_repair",
            Self::Paint => "paint",
            Self::Appliances => "appliances",
            Self::FloorsCarpets => "floors_carpets",
            Self::Housekeeping => "housekeeping",
            Self::LandscapingExterior => "landscaping_exterior",
            Self::KeysLocks => "keys_locks",
            Self::Other => "other",
            Self::SmokeFireVerification => "smoke_fire_verification",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_str() == s)
    }
}

/// Estimated cost per budget category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategories {
    pub maintenance_repair: Decimal,
    pub paint: Decimal,
    pub appliances: Decimal,
    pub floors_carpets: Decimal,
    pub housekeeping: Decimal,
    pub landscaping_exterior: Decimal,
    pub keys_locks: Decimal,
    pub other: Decimal,
    pub smoke_fire_verification: Decimal,
}

impl BudgetCategories {
    pub fn get(
        &self,
        category: BudgetCategory,
    ) -> Decimal {
        match category {
            BudgetCategory::MaintenanceRepair => self.maintenance_repair,
            BudgetCategory::Paint => self.paint,
            BudgetCategory::Appliances => self.appliances,
            BudgetCategory::FloorsCarpets => self.floors_carpets,
            BudgetCategory::Housekeeping => self.housekeeping,
            BudgetCategory::LandscapingExterior => self.landscaping_exterior,
            BudgetCategory::KeysLocks => self.keys_locks,
            BudgetCategory::Other => self.other,
            BudgetCategory::SmokeFireVerification => self.smoke_fire_verification,
        }
    }

    pub fn set(
        &mut self,
        category: BudgetCategory,
        amount: Decimal,
    ) {
        let slot = match category {
            BudgetCategory::MaintenanceRepair => &mut self.maintenance_repair,
            BudgetCategory::Paint => &mut self.paint,
            BudgetCategory::Appliances => &mut self.appliances,
            BudgetCategory::FloorsCarpets => &mut self.floors_carpets,
            BudgetCategory::Housekeeping => &mut self.housekeeping,
            BudgetCategory::LandscapingExterior => &mut self.landscaping_exterior,
            BudgetCategory::KeysLocks => &mut self.keys_locks,
            BudgetCategory::Other => &mut self.other,
            BudgetCategory::SmokeFireVerification => &mut self.smoke_fire_verification,
        };
        *slot = amount;
    }

    /// Amounts in declaration order.
    pub fn amounts(&self) -> [Decimal; 9] {
        BudgetCategory::ALL.map(|category| self.get(category))
    }

    /// Category/amount pairs in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = (BudgetCategory, Decimal)> + '_ {
        BudgetCategory::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashFlowInputs {
    pub historical_income: Decimal,
    pub historical_expense: Decimal,
    /// Expected monthly rent after the turnover.
    pub estimated_rental_rate: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoLinks {
    pub inspection1: String,
    pub inspection2: String,
    pub move_out: String,
}

impl PhotoLinks {
    pub fn labelled(&self) -> [(&'static str, &str); 3] {
        [
            ("Inspection #1 (While Occupied)", &self.inspection1),
            ("Inspection #2 (While Occupied)", &self.inspection2),
            ("Move-Out Inspection Photos", &self.move_out),
        ]
    }
}

/// Everything the move-out turnover builder collects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnoverForm {
    pub property_address: String,
    pub property_name: String,
    pub budget: BudgetCategories,
    pub cash_flow: CashFlowInputs,
    pub photo_links: PhotoLinks,
    pub cover_letter: String,
    pub estimated_turnover_days: u32,
    pub lease_length_months: u32,
    pub last_turnover_date: Option<NaiveDate>,
    pub rent_to_sqft_ratio: Decimal,
}

impl Default for TurnoverForm {
    fn default() -> Self {
        Self {
            property_address: String::new(),
            property_name: String::new(),
            budget: BudgetCategories::default(),
            cash_flow: CashFlowInputs::default(),
            photo_links: PhotoLinks::default(),
            cover_letter: DEFAULT_COVER_LETTER.to_string(),
            estimated_turnover_days: DEFAULT_TURNOVER_DAYS,
            lease_length_months: DEFAULT_LEASE_LENGTH_MONTHS,
            last_turnover_date: None,
            rent_to_sqft_ratio: Decimal::ZERO,
        }
    }
}

impl TurnoverForm {
    /// Recomputes the derived budget and cash-flow figures.
    pub fn projection(&self) -> TurnoverProjection {
        let amounts = self.budget.amounts();
        TurnoverProjection::calculate(&TurnoverInputs {
            budget_amounts: &amounts,
            historical_income: self.cash_flow.historical_income,
            historical_expense: self.cash_flow.historical_expense,
            monthly_rate: self.cash_flow.estimated_rental_rate,
            lease_length_months: self.lease_length_months,
        })
    }
}

/// Partial update for [`TurnoverForm`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TurnoverPatch {
    pub property_address: Option<String>,
    pub property_name: Option<String>,
    pub budget: Option<BudgetCategories>,
    pub cash_flow: Option<CashFlowInputs>,
    pub photo_links: Option<PhotoLinks>,
    pub cover_letter: Option<String>,
    pub estimated_turnover_days: Option<u32>,
    pub lease_length_months: Option<u32>,
    /// `Some(None)` clears the date.
    pub last_turnover_date: Option<Option<NaiveDate>>,
    pub rent_to_sqft_ratio: Option<Decimal>,
}

impl Mergeable for TurnoverForm {
    type Patch = TurnoverPatch;

    fn merged(
        &self,
        patch: Self::Patch,
    ) -> Self {
        Self {
            property_address: patch
                .property_address
                .unwrap_or_else(|| self.property_address.clone()),
            property_name: patch
                .property_name
                .unwrap_or_else(|| self.property_name.clone()),
            budget: patch.budget.unwrap_or_else(|| self.budget.clone()),
            cash_flow: patch.cash_flow.unwrap_or_else(|| self.cash_flow.clone()),
            photo_links: patch
                .photo_links
                .unwrap_or_else(|| self.photo_links.clone()),
            cover_letter: patch
                .cover_letter
                .unwrap_or_else(|| self.cover_letter.clone()),
            estimated_turnover_days: patch
                .estimated_turnover_days
                .unwrap_or(self.estimated_turnover_days),
            lease_length_months: patch
                .lease_length_months
                .unwrap_or(self.lease_length_months),
            last_turnover_date: patch
                .last_turnover_date
                .unwrap_or(self.last_turnover_date),
            rent_to_sqft_ratio: patch
                .rent_to_sqft_ratio
                .unwrap_or(self.rent_to_sqft_ratio),
        }
    }
}
