//! Array sizing formulas.

use sz_core::numeric::{ensure_finite, ensure_fraction, ensure_nonzero};
use sz_core::{Real, SzResult};

/// Fixed margin applied to the temperature-adjusted array voltage.
pub const VOLTAGE_SAFETY_MARGIN: Real = 1.2;

/// Required array maximum-power current (A).
///
/// - `e_crit`: daily energy consumption in the critical design month (Wh/day)
/// - `mu_batt`: battery charging efficiency (0, 1]
/// - `v_sdc`: nominal DC-system voltage (V)
/// - `t_psh`: peak sun hours for the critical design month (hr/day)
pub fn calculate_pv_sizing(
    e_crit: Real,
    mu_batt: Real,
    v_sdc: Real,
    t_psh: Real,
) -> SzResult<Real> {
    let e_crit = ensure_finite(e_crit, "critical daily energy")?;
    let mu_batt = ensure_nonzero(mu_batt, "battery charging efficiency")?;
    let v_sdc = ensure_nonzero(v_sdc, "system voltage")?;
    let t_psh = ensure_nonzero(t_psh, "peak sun hours")?;
    ensure_fraction(mu_batt, "battery charging efficiency")?;

    ensure_finite(e_crit / (mu_batt * v_sdc * t_psh), "array current")
}

/// Rated array maximum-power current (A) once soiling derating is applied.
pub fn array_rated_output(i_arr: Real, c_s: Real) -> SzResult<Real> {
    let i_arr = ensure_finite(i_arr, "array current")?;
    let c_s = ensure_nonzero(c_s, "soiling derating")?;
    ensure_fraction(c_s, "soiling derating")?;

    ensure_finite(i_arr / c_s, "rated array current")
}

/// Rated array maximum-power voltage (V) adjusted for module temperature.
///
/// A module running hotter than the reference temperature loses voltage
/// (negative coefficient); a cooler module gains it. The result carries
/// [`VOLTAGE_SAFETY_MARGIN`].
pub fn rated_array_max_power_voltage(
    nominal_dc_voltage: Real,
    temp_coeff_voltage: Real,
    max_module_temp: Real,
    reference_temp: Real,
) -> SzResult<Real> {
    let nominal_dc_voltage = ensure_finite(nominal_dc_voltage, "nominal DC voltage")?;
    let temp_coeff_voltage = ensure_finite(temp_coeff_voltage, "voltage temperature coefficient")?;
    let max_module_temp = ensure_finite(max_module_temp, "maximum module temperature")?;
    let reference_temp = ensure_finite(reference_temp, "reference temperature")?;

    let temp_diff = max_module_temp - reference_temp;
    let adjustment = nominal_dc_voltage * temp_coeff_voltage * temp_diff;

    ensure_finite(
        VOLTAGE_SAFETY_MARGIN * (nominal_dc_voltage + adjustment),
        "rated array voltage",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use sz_core::{SzError, approx_eq_places};

    #[test]
    fn array_current_for_24v_system() {
        let i_arr = calculate_pv_sizing(1580.0, 0.90, 24.0, 4.9).unwrap();
        assert!(approx_eq_places(i_arr, 14.9, 1), "i_arr={i_arr}");
    }

    #[test]
    fn soiling_raises_rated_current() {
        let i_rated = array_rated_output(18.0, 0.95).unwrap();
        assert!(approx_eq_places(i_rated, 18.95, 2), "i_rated={i_rated}");
        assert!(i_rated > 18.0);
    }

    #[test]
    fn hot_modules_lose_voltage() {
        let v_24 = rated_array_max_power_voltage(24.0, -0.004, 50.0, 25.0).unwrap();
        assert!(approx_eq_places(v_24, 25.9, 1), "v_24={v_24}");

        let v_48 = rated_array_max_power_voltage(48.0, -0.004, 50.0, 25.0).unwrap();
        assert!(approx_eq_places(v_48, 51.8, 1), "v_48={v_48}");
    }

    #[test]
    fn cold_modules_gain_voltage() {
        let v = rated_array_max_power_voltage(24.0, -0.004, 0.0, 25.0).unwrap();
        assert!(v > VOLTAGE_SAFETY_MARGIN * 24.0);
    }

    #[test]
    fn reference_temperature_leaves_only_margin() {
        let v = rated_array_max_power_voltage(24.0, -0.004, 25.0, 25.0).unwrap();
        assert!((v - 28.8).abs() < 1e-12);
    }

    #[test]
    fn zero_denominators_rejected() {
        assert!(matches!(
            calculate_pv_sizing(1580.0, 0.0, 24.0, 4.9),
            Err(SzError::ZeroDenominator { .. })
        ));
        assert!(matches!(
            calculate_pv_sizing(1580.0, 0.9, 0.0, 4.9),
            Err(SzError::ZeroDenominator { .. })
        ));
        assert!(matches!(
            calculate_pv_sizing(1580.0, 0.9, 24.0, 0.0),
            Err(SzError::ZeroDenominator { .. })
        ));
        assert_eq!(
            array_rated_output(18.0, 0.0),
            Err(SzError::ZeroDenominator {
                what: "soiling derating"
            })
        );
    }

    #[test]
    fn efficiency_above_one_rejected() {
        assert!(matches!(
            calculate_pv_sizing(1580.0, 1.2, 24.0, 4.9),
            Err(SzError::OutOfRange { .. })
        ));
        assert!(matches!(
            array_rated_output(18.0, 1.05),
            Err(SzError::OutOfRange { .. })
        ));
    }
}
