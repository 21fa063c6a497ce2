//! sz-economics: tariff savings and payback for a PV installation.
//!
//! The monthly bill is unwound through a tiered tariff to find the marginal
//! block; energy produced by the array offsets consumption at that block's
//! rate.

pub mod payback;
pub mod tariff;

// Re-exports
pub use payback::{
    CostInput, EconomicAssessment, assess, monthly_saving, payback_years, total_system_cost,
};
pub use tariff::{BillBreakdown, BillLine, TariffBlock, TariffSchedule, bill_breakdown};
