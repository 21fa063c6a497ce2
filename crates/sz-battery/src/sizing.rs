//! Battery-bank sizing formulas.

use sz_core::numeric::{ensure_finite, ensure_fraction, ensure_nonzero, ensure_unit_interval};
use sz_core::{Real, SzResult};

/// Required battery-bank output (Ah) to carry the critical-month load
/// through the autonomy period.
///
/// - `e_crit`: daily energy consumption in the critical design month (Wh/day)
/// - `t_a`: autonomy (days)
/// - `v_sdc`: nominal DC-system voltage (V)
pub fn calculate_battery_output(e_crit: Real, t_a: Real, v_sdc: Real) -> SzResult<Real> {
    let e_crit = ensure_finite(e_crit, "critical daily energy")?;
    let t_a = ensure_finite(t_a, "autonomy")?;
    let v_sdc = ensure_nonzero(v_sdc, "system voltage")?;

    ensure_finite(e_crit * t_a / v_sdc, "battery output")
}

/// Average discharge rate (hr) over the autonomy period.
///
/// - `t_op`: weighted average operating time (hr/day)
/// - `t_a`: autonomy (days)
/// - `dod_a`: allowable depth of discharge
pub fn calculate_average_discharge_rate(t_op: Real, t_a: Real, dod_a: Real) -> SzResult<Real> {
    let t_op = ensure_finite(t_op, "operating time")?;
    let t_a = ensure_finite(t_a, "autonomy")?;
    let dod_a = ensure_nonzero(dod_a, "allowable depth of discharge")?;
    ensure_fraction(dod_a, "allowable depth of discharge")?;

    ensure_finite(t_op * t_a / dod_a, "average discharge rate")
}

/// Rated capacity (Ah) the bank needs once the allowable depth of discharge
/// and the temperature/discharge-rate derating are applied.
pub fn calculate_battery_rated_capacity(b_out: Real, dod_a: Real, c_tr_d: Real) -> SzResult<Real> {
    let b_out = ensure_finite(b_out, "battery output")?;
    let dod_a = ensure_nonzero(dod_a, "allowable depth of discharge")?;
    let c_tr_d = ensure_nonzero(c_tr_d, "temperature/discharge-rate derating")?;
    ensure_fraction(dod_a, "allowable depth of discharge")?;
    ensure_fraction(c_tr_d, "temperature/discharge-rate derating")?;

    ensure_finite(b_out / (dod_a * c_tr_d), "battery rated capacity")
}

/// Average daily depth of discharge of an installed bank.
///
/// - `lf`: estimated load fraction
/// - `e_day`: average daily energy consumption (Wh)
/// - `b_actual`: actual rated bank capacity (Ah)
/// - `v_sdc`: DC-system voltage (V)
pub fn calculate_average_dod_avg(
    lf: Real,
    e_day: Real,
    b_actual: Real,
    v_sdc: Real,
) -> SzResult<Real> {
    let lf = ensure_unit_interval(lf, "load fraction")?;
    let e_day = ensure_finite(e_day, "daily energy")?;
    let b_actual = ensure_finite(b_actual, "installed battery capacity")?;
    let v_sdc = ensure_finite(v_sdc, "system voltage")?;
    let stored_wh = ensure_nonzero(b_actual * v_sdc, "installed battery energy")?;

    ensure_finite(lf * e_day / stored_wh, "average depth of discharge")
}
