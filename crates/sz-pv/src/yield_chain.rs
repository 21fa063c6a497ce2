//! Energy-yield estimate for a grid-tied or hybrid array.
//!
//! The chain runs nameplate power -> guaranteed power -> temperature-corrected
//! power -> net DC power after wiring/mismatch -> inverter AC output ->
//! daily and monthly energy.

use sz_core::numeric::{ensure_finite, ensure_fraction, ensure_unit_interval};
use sz_core::{Real, SzError, SzResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Days per month used for the monthly energy figure.
pub const DAYS_PER_MONTH: Real = 30.0;

/// Array and inverter description for [`estimate_yield`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YieldInput {
    /// Module rated DC power at STC (W)
    pub module_power_w: Real,
    /// Manufacturer power guarantee (0, 1]
    pub power_guarantee: Real,
    /// Number of modules in the array
    pub module_count: u32,
    /// Peak sun hours (hr/day)
    pub peak_sun_hours: Real,
    /// Average array operating temperature (°C)
    pub avg_cell_temp_c: Real,
    /// Standard test condition temperature (°C)
    #[cfg_attr(feature = "serde", serde(default = "default_stc_temp"))]
    pub stc_temp_c: Real,
    /// Power loss per °C above STC, as a fraction (0.004 = 0.4 %/°C)
    pub power_temp_coeff: Real,
    /// Wiring and mismatch loss [0, 1]
    pub wiring_loss: Real,
    /// Inverter conversion efficiency (0, 1]
    pub inverter_efficiency: Real,
    /// Inverter MPPT efficiency (0, 1]
    pub mppt_efficiency: Real,
}

#[cfg(feature = "serde")]
fn default_stc_temp() -> Real {
    25.0
}

/// Every intermediate value of the yield chain.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct YieldEstimate {
    pub guaranteed_power_w: Real,
    pub temperature_corrected_power_w: Real,
    pub net_dc_power_w: Real,
    pub ac_output_w: Real,
    pub daily_energy_wh: Real,
    pub monthly_energy_kwh: Real,
}

/// Array power the manufacturer guarantees (W).
pub fn array_guaranteed_power(
    module_power_w: Real,
    power_guarantee: Real,
    module_count: u32,
) -> SzResult<Real> {
    let module_power_w = ensure_finite(module_power_w, "module power")?;
    let power_guarantee = ensure_fraction(power_guarantee, "power guarantee")?;
    if module_count == 0 {
        return Err(SzError::InvalidArg {
            what: "array needs at least one module",
        });
    }
    Ok(module_power_w * power_guarantee * Real::from(module_count))
}

/// Array power after the loss from running above the STC temperature (W).
///
/// Below STC the correction turns into a gain.
pub fn temperature_corrected_power(
    guaranteed_power_w: Real,
    avg_cell_temp_c: Real,
    stc_temp_c: Real,
    power_temp_coeff: Real,
) -> SzResult<Real> {
    let p_g = ensure_finite(guaranteed_power_w, "guaranteed power")?;
    let avg = ensure_finite(avg_cell_temp_c, "average cell temperature")?;
    let stc = ensure_finite(stc_temp_c, "STC temperature")?;
    let coeff = ensure_finite(power_temp_coeff, "power temperature coefficient")?;

    let loss = p_g * ((avg - stc) * coeff);
    ensure_finite(p_g - loss, "temperature corrected power")
}

/// DC power left after wiring and mismatch losses (W).
pub fn net_array_power(corrected_power_w: Real, wiring_loss: Real) -> SzResult<Real> {
    let p_t = ensure_finite(corrected_power_w, "temperature corrected power")?;
    let wiring_loss = ensure_unit_interval(wiring_loss, "wiring loss")?;
    Ok(p_t * (1.0 - wiring_loss))
}

/// Inverter AC output (W).
pub fn inverter_ac_output(
    net_power_w: Real,
    inverter_efficiency: Real,
    mppt_efficiency: Real,
) -> SzResult<Real> {
    let p_net = ensure_finite(net_power_w, "net array power")?;
    let inv = ensure_fraction(inverter_efficiency, "inverter efficiency")?;
    let mppt = ensure_fraction(mppt_efficiency, "MPPT efficiency")?;
    Ok(p_net * inv * mppt)
}

/// Average daily energy production (Wh/day).
pub fn daily_energy_wh(ac_output_w: Real, peak_sun_hours: Real) -> SzResult<Real> {
    let p_ac = ensure_finite(ac_output_w, "AC output")?;
    let psh = ensure_finite(peak_sun_hours, "peak sun hours")?;
    if psh < 0.0 {
        return Err(SzError::OutOfRange {
            what: "peak sun hours",
            value: psh,
            min: 0.0,
            max: 24.0,
        });
    }
    Ok(p_ac * psh)
}

/// Monthly energy production (kWh) over a [`DAYS_PER_MONTH`]-day month.
pub fn monthly_energy_kwh(daily_energy_wh: Real) -> SzResult<Real> {
    let daily = ensure_finite(daily_energy_wh, "daily energy")?;
    Ok(daily * DAYS_PER_MONTH / 1000.0)
}

/// Run the full yield chain for one array.
pub fn estimate_yield(input: &YieldInput) -> SzResult<YieldEstimate> {
    let guaranteed_power_w =
        array_guaranteed_power(input.module_power_w, input.power_guarantee, input.module_count)?;
    let temperature_corrected_power_w = temperature_corrected_power(
        guaranteed_power_w,
        input.avg_cell_temp_c,
        input.stc_temp_c,
        input.power_temp_coeff,
    )?;
    let net_dc_power_w = net_array_power(temperature_corrected_power_w, input.wiring_loss)?;
    let ac_output_w = inverter_ac_output(
        net_dc_power_w,
        input.inverter_efficiency,
        input.mppt_efficiency,
    )?;
    let daily_energy_wh = daily_energy_wh(ac_output_w, input.peak_sun_hours)?;
    let monthly_energy_kwh = monthly_energy_kwh(daily_energy_wh)?;

    tracing::debug!(
        guaranteed_power_w,
        ac_output_w,
        daily_energy_wh,
        monthly_energy_kwh,
        "array yield estimated"
    );

    Ok(YieldEstimate {
        guaranteed_power_w,
        temperature_corrected_power_w,
        net_dc_power_w,
        ac_output_w,
        daily_energy_wh,
        monthly_energy_kwh,
    })
}
