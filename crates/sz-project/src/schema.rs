//! Design file schema definitions.

use serde::{Deserialize, Serialize};
use sz_battery::BatteryBankInput;
use sz_economics::{CostInput, TariffBlock, TariffSchedule};
use sz_pv::YieldInput;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub sites: Vec<SiteDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SiteDef {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery: Option<BatteryDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array: Option<ArrayDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yield_estimate: Option<YieldInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub economics: Option<EconomicsDef>,
}

impl SiteDef {
    pub fn has_sections(&self) -> bool {
        self.battery.is_some()
            || self.array.is_some()
            || self.yield_estimate.is_some()
            || self.economics.is_some()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BatteryDef {
    pub bank: BatteryBankInput,
    /// Bank actually installed, for the daily depth-of-discharge check
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installed: Option<InstalledBankDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstalledBankDef {
    pub capacity_ah: f64,
    pub load_fraction: f64,
    pub daily_energy_wh: f64,
}

/// Standalone array sizing for the critical design month.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArrayDef {
    pub critical_energy_wh: f64,
    pub charging_efficiency: f64,
    pub system_voltage_v: f64,
    pub peak_sun_hours: f64,
    pub soiling_derating: f64,
    pub temp_coeff_voltage: f64,
    pub max_module_temp_c: f64,
    #[serde(default = "default_reference_temp")]
    pub reference_temp_c: f64,
}

fn default_reference_temp() -> f64 {
    25.0
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EconomicsDef {
    pub tariff: TariffDef,
    pub monthly_bill: f64,
    pub costs: CostInput,
    /// Expected service life; payback beyond it is flagged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_life_years: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum TariffDef {
    Peninsular,
    Borneo,
    Custom { blocks: Vec<TariffBlock> },
}

impl TariffDef {
    pub fn schedule(&self) -> TariffSchedule {
        match self {
            TariffDef::Peninsular => TariffSchedule::peninsular(),
            TariffDef::Borneo => TariffSchedule::borneo(),
            TariffDef::Custom { blocks } => TariffSchedule {
                blocks: blocks.clone(),
            },
        }
    }
}
