//! sz-pv: photovoltaic array sizing and energy-yield estimation.
//!
//! Two groups of formulas:
//! - [`sizing`]: required array current, soiling-derated rated current and
//!   the temperature-adjusted rated array voltage for a standalone system
//! - [`yield_chain`]: expected AC output and energy of a given array, from
//!   module nameplate through temperature, wiring and inverter losses

pub mod sizing;
pub mod yield_chain;

// Re-exports
pub use sizing::{
    VOLTAGE_SAFETY_MARGIN, array_rated_output, calculate_pv_sizing, rated_array_max_power_voltage,
};
pub use yield_chain::{YieldEstimate, YieldInput, estimate_yield};
