//! Turns a site definition into sized figures.

use crate::schema::{ArrayDef, BatteryDef, Project, SiteDef};
use crate::{ProjectError, ProjectResult};
use serde::{Deserialize, Serialize};
use sz_battery::{BatteryBankSizing, calculate_average_dod_avg, size_battery_bank};
use sz_core::{SzError, SzResult};
use sz_economics::{EconomicAssessment, assess};
use sz_pv::{
    YieldEstimate, array_rated_output, calculate_pv_sizing, estimate_yield,
    rated_array_max_power_voltage,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteReport {
    pub site_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery: Option<BatteryReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array: Option<ArrayReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield_estimate: Option<YieldEstimate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economics: Option<EconomicAssessment>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatteryReport {
    pub sizing: BatteryBankSizing,
    /// Average daily depth of discharge of the installed bank
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_dod: Option<f64>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ArrayReport {
    pub array_current_a: f64,
    pub rated_current_a: f64,
    pub rated_voltage_v: f64,
}

pub fn evaluate_battery(def: &BatteryDef) -> SzResult<BatteryReport> {
    let sizing = size_battery_bank(&def.bank)?;
    let average_dod = def
        .installed
        .as_ref()
        .map(|installed| {
            calculate_average_dod_avg(
                installed.load_fraction,
                installed.daily_energy_wh,
                installed.capacity_ah,
                def.bank.system_voltage_v,
            )
        })
        .transpose()?;

    if let Some(dod) = average_dod {
        if dod > def.bank.allowable_dod {
            tracing::warn!(
                average_dod = dod,
                allowable_dod = def.bank.allowable_dod,
                "installed bank cycles deeper than allowed"
            );
        }
    }

    Ok(BatteryReport {
        sizing,
        average_dod,
    })
}

pub fn evaluate_array(def: &ArrayDef) -> SzResult<ArrayReport> {
    let array_current_a = calculate_pv_sizing(
        def.critical_energy_wh,
        def.charging_efficiency,
        def.system_voltage_v,
        def.peak_sun_hours,
    )?;
    let rated_current_a = array_rated_output(array_current_a, def.soiling_derating)?;
    let rated_voltage_v = rated_array_max_power_voltage(
        def.system_voltage_v,
        def.temp_coeff_voltage,
        def.max_module_temp_c,
        def.reference_temp_c,
    )?;

    Ok(ArrayReport {
        array_current_a,
        rated_current_a,
        rated_voltage_v,
    })
}

/// Evaluate every section present on a site.
pub fn evaluate_site(site: &SiteDef) -> ProjectResult<SiteReport> {
    crate::validate::validate_site(site)?;
    let sizing_err = |source: SzError| ProjectError::Sizing {
        site: site.id.clone(),
        source,
    };

    let battery = site
        .battery
        .as_ref()
        .map(evaluate_battery)
        .transpose()
        .map_err(sizing_err)?;
    let array = site
        .array
        .as_ref()
        .map(evaluate_array)
        .transpose()
        .map_err(sizing_err)?;
    let yield_estimate = site
        .yield_estimate
        .as_ref()
        .map(estimate_yield)
        .transpose()
        .map_err(sizing_err)?;

    let economics = match (&site.economics, &yield_estimate) {
        (Some(def), Some(est)) => {
            let a = assess(
                &def.tariff.schedule(),
                def.monthly_bill,
                est.monthly_energy_kwh,
                &def.costs,
            )
            .map_err(sizing_err)?;
            if let Some(life) = def.system_life_years {
                if a.payback_years > life {
                    tracing::warn!(
                        site = %site.id,
                        payback_years = a.payback_years,
                        system_life_years = life,
                        "installation does not pay back within its service life"
                    );
                }
            }
            Some(a)
        }
        _ => None,
    };

    tracing::debug!(site = %site.id, "site evaluated");

    Ok(SiteReport {
        site_id: site.id.clone(),
        battery,
        array,
        yield_estimate,
        economics,
    })
}

/// Evaluate all sites in declaration order, stopping at the first failure.
pub fn evaluate_project(project: &Project) -> ProjectResult<Vec<SiteReport>> {
    crate::validate::validate_project(project)?;
    project.sites.iter().map(evaluate_site).collect()
}
