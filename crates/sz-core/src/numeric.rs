use crate::SzError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Round half away from zero to `places` decimal places.
pub fn round_to(value: Real, places: u32) -> Real {
    let scale = 10_f64.powi(places as i32);
    (value * scale).round() / scale
}

/// True when `a` and `b` agree once their difference is rounded to `places` decimals.
pub fn approx_eq_places(a: Real, b: Real, places: u32) -> bool {
    round_to(a - b, places) == 0.0
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, SzError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SzError::NonFinite { what, value: v })
    }
}

/// Guard for a value that is about to be used as a divisor.
pub fn ensure_nonzero(v: Real, what: &'static str) -> Result<Real, SzError> {
    let v = ensure_finite(v, what)?;
    if v == 0.0 {
        Err(SzError::ZeroDenominator { what })
    } else {
        Ok(v)
    }
}

/// Derating factors and efficiencies: 0 < v <= 1.
pub fn ensure_fraction(v: Real, what: &'static str) -> Result<Real, SzError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 && v <= 1.0 {
        Ok(v)
    } else {
        Err(SzError::OutOfRange {
            what,
            value: v,
            min: 0.0,
            max: 1.0,
        })
    }
}

/// Loss and load fractions: 0 <= v <= 1.
pub fn ensure_unit_interval(v: Real, what: &'static str) -> Result<Real, SzError> {
    let v = ensure_finite(v, what)?;
    if (0.0..=1.0).contains(&v) {
        Ok(v)
    } else {
        Err(SzError::OutOfRange {
            what,
            value: v,
            min: 0.0,
            max: 1.0,
        })
    }
}
