//! Battery-bank sizing chain: energy over the autonomy period through to the
//! rated capacity a bank must be bought with.

use crate::sizing::{
    calculate_average_discharge_rate, calculate_battery_output, calculate_battery_rated_capacity,
};
use sz_core::{Real, SzResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inputs for sizing a complete battery bank.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatteryBankInput {
    /// Daily energy consumption in the critical design month (Wh/day)
    pub daily_energy_wh: Real,
    /// Days the bank must carry the load without solar input
    pub autonomy_days: Real,
    /// Nominal DC-system voltage (V)
    pub system_voltage_v: Real,
    /// Allowable depth of discharge (0, 1]
    pub allowable_dod: Real,
    /// Temperature and discharge-rate derating factor (0, 1]
    pub derating_factor: Real,
    /// Weighted average operating time (hr/day), enables the discharge-rate figure
    #[cfg_attr(feature = "serde", serde(default))]
    pub operating_hours_per_day: Option<Real>,
}

/// Result of [`size_battery_bank`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BatteryBankSizing {
    /// Required bank output over the autonomy period (Ah)
    pub required_output_ah: Real,
    /// Rated capacity after DOD and derating (Ah)
    pub rated_capacity_ah: Real,
    /// Average discharge rate (hr), when operating hours were given
    pub discharge_rate_h: Option<Real>,
}

/// Size a battery bank from the load, autonomy and derating inputs.
pub fn size_battery_bank(input: &BatteryBankInput) -> SzResult<BatteryBankSizing> {
    let required_output_ah = calculate_battery_output(
        input.daily_energy_wh,
        input.autonomy_days,
        input.system_voltage_v,
    )?;
    let rated_capacity_ah = calculate_battery_rated_capacity(
        required_output_ah,
        input.allowable_dod,
        input.derating_factor,
    )?;
    let discharge_rate_h = input
        .operating_hours_per_day
        .map(|t_op| {
            calculate_average_discharge_rate(t_op, input.autonomy_days, input.allowable_dod)
        })
        .transpose()?;

    tracing::debug!(
        required_output_ah,
        rated_capacity_ah,
        ?discharge_rate_h,
        "battery bank sized"
    );

    Ok(BatteryBankSizing {
        required_output_ah,
        rated_capacity_ah,
        discharge_rate_h,
    })
}
