//! Savings, installed cost and simple payback.

use crate::tariff::{BillBreakdown, TariffSchedule, bill_breakdown};
use sz_core::numeric::{ensure_finite, ensure_nonzero};
use sz_core::{Real, SzError, SzResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Up-front and first-year costs of an installation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CostInput {
    pub panel_cost: Real,
    pub module_count: u32,
    pub inverter_cost: Real,
    pub labor_cost: Real,
    pub annual_cleaning: Real,
}

/// Everything [`assess`] works out for an installation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EconomicAssessment {
    pub bill: BillBreakdown,
    pub monthly_saving: Real,
    pub new_monthly_bill: Real,
    pub total_cost: Real,
    pub payback_years: Real,
}

/// Value of the energy produced each month, priced at the marginal block rate.
pub fn monthly_saving(bill: &BillBreakdown, monthly_energy_kwh: Real) -> SzResult<Real> {
    let mep = ensure_finite(monthly_energy_kwh, "monthly energy")?;
    let marginal = bill.marginal().ok_or(SzError::InvalidArg {
        what: "bill breakdown has no blocks",
    })?;
    Ok(mep * marginal.rate_per_kwh)
}

pub fn total_system_cost(cost: &CostInput) -> SzResult<Real> {
    let panel = ensure_finite(cost.panel_cost, "panel cost")?;
    let inverter = ensure_finite(cost.inverter_cost, "inverter cost")?;
    let labor = ensure_finite(cost.labor_cost, "labor cost")?;
    let cleaning = ensure_finite(cost.annual_cleaning, "annual cleaning cost")?;
    Ok(panel * Real::from(cost.module_count) + inverter + labor + cleaning)
}

/// Years until the monthly savings repay the installed cost.
pub fn payback_years(total_cost: Real, monthly_saving: Real) -> SzResult<Real> {
    let total_cost = ensure_finite(total_cost, "total cost")?;
    let monthly_saving = ensure_nonzero(monthly_saving, "monthly saving")?;
    ensure_finite(total_cost / (monthly_saving * 12.0), "payback period")
}

/// Bill split, savings, cost and payback in one pass.
pub fn assess(
    schedule: &TariffSchedule,
    monthly_bill: Real,
    monthly_energy_kwh: Real,
    cost: &CostInput,
) -> SzResult<EconomicAssessment> {
    let bill = bill_breakdown(schedule, monthly_bill)?;
    let monthly_saving = monthly_saving(&bill, monthly_energy_kwh)?;
    let total_cost = total_system_cost(cost)?;
    let payback_years = payback_years(total_cost, monthly_saving)?;

    tracing::debug!(
        monthly_saving,
        total_cost,
        payback_years,
        "economics assessed"
    );

    Ok(EconomicAssessment {
        new_monthly_bill: monthly_bill - monthly_saving,
        bill,
        monthly_saving,
        total_cost,
        payback_years,
    })
}
