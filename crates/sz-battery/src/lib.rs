//! sz-battery: battery-bank sizing for standalone PV systems.
//!
//! Provides the sizing formulas for a battery bank:
//! - required output over the autonomy period
//! - average discharge rate
//! - rated capacity after depth-of-discharge and temperature derating
//! - average daily depth of discharge of an installed bank
//!
//! Every formula is a pure function returning `SzResult<f64>`; zero
//! denominators are reported as `SzError::ZeroDenominator` and never
//! surface as infinity or NaN.
//!
//! # Example
//!
//! ```
//! use sz_battery::{calculate_battery_output, calculate_battery_rated_capacity};
//!
//! let b_out = calculate_battery_output(450.0, 4.0, 24.0).unwrap();
//! assert_eq!(b_out, 75.0);
//!
//! let b_rated = calculate_battery_rated_capacity(b_out, 0.75, 0.80).unwrap();
//! assert!(b_rated > b_out);
//! ```

pub mod bank;
pub mod sizing;

// Re-exports
pub use bank::{BatteryBankInput, BatteryBankSizing, size_battery_bank};
pub use sizing::{
    calculate_average_discharge_rate, calculate_average_dod_avg, calculate_battery_output,
    calculate_battery_rated_capacity,
};
