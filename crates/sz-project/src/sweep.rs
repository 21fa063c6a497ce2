//! Parametric sweeps over a single site input.
//!
//! Points are evaluated in parallel; results keep the order of the sweep.

use crate::evaluate::{SiteReport, evaluate_site};
use crate::schema::SiteDef;
use crate::validate::ValidationError;
use crate::{ProjectError, ProjectResult};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Site input a sweep varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SweepParameter {
    /// `battery.bank.autonomy_days`
    AutonomyDays,
    /// `battery.bank.allowable_dod`
    AllowableDod,
    /// Battery bank and standalone array voltage
    SystemVoltage,
    /// Peak sun hours of the standalone array and the yield estimate
    PeakSunHours,
    /// `economics.monthly_bill`
    MonthlyBill,
}

impl fmt::Display for SweepParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AutonomyDays => write!(f, "autonomy days"),
            Self::AllowableDod => write!(f, "allowable DOD"),
            Self::SystemVoltage => write!(f, "system voltage"),
            Self::PeakSunHours => write!(f, "peak sun hours"),
            Self::MonthlyBill => write!(f, "monthly bill"),
        }
    }
}

/// Linearly spaced sweep definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepDefinition {
    pub parameter: SweepParameter,
    pub start: f64,
    pub end: f64,
    pub num_points: usize,
}

impl SweepDefinition {
    pub fn new(
        parameter: SweepParameter,
        start: f64,
        end: f64,
        num_points: usize,
    ) -> Result<Self, ValidationError> {
        let sweep = Self {
            parameter,
            start,
            end,
            num_points,
        };
        sweep.validate()?;
        Ok(sweep)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(ValidationError::InvalidSweep {
                reason: "bounds must be finite".to_string(),
            });
        }
        if self.num_points < 2 {
            return Err(ValidationError::InvalidSweep {
                reason: "sweep must have at least 2 points".to_string(),
            });
        }
        if (self.start - self.end).abs() < 1e-12 {
            return Err(ValidationError::InvalidSweep {
                reason: "start and end values must be different".to_string(),
            });
        }
        Ok(())
    }

    /// Generate all points in the sweep.
    pub fn generate_points(&self) -> Vec<f64> {
        if self.num_points <= 1 {
            return vec![self.start];
        }

        let delta = (self.end - self.start) / (self.num_points - 1) as f64;
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start + i as f64 * delta)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end;
        points
    }

    /// Copy of `site` with the swept input set to `value`.
    pub fn apply(&self, site: &SiteDef, value: f64) -> Result<SiteDef, ValidationError> {
        let mut site = site.clone();
        let mut touched = false;
        match self.parameter {
            SweepParameter::AutonomyDays => {
                if let Some(battery) = site.battery.as_mut() {
                    battery.bank.autonomy_days = value;
                    touched = true;
                }
            }
            SweepParameter::AllowableDod => {
                if let Some(battery) = site.battery.as_mut() {
                    battery.bank.allowable_dod = value;
                    touched = true;
                }
            }
            SweepParameter::SystemVoltage => {
                if let Some(battery) = site.battery.as_mut() {
                    battery.bank.system_voltage_v = value;
                    touched = true;
                }
                if let Some(array) = site.array.as_mut() {
                    array.system_voltage_v = value;
                    touched = true;
                }
            }
            SweepParameter::PeakSunHours => {
                if let Some(array) = site.array.as_mut() {
                    array.peak_sun_hours = value;
                    touched = true;
                }
                if let Some(yield_input) = site.yield_estimate.as_mut() {
                    yield_input.peak_sun_hours = value;
                    touched = true;
                }
            }
            SweepParameter::MonthlyBill => {
                if let Some(economics) = site.economics.as_mut() {
                    economics.monthly_bill = value;
                    touched = true;
                }
            }
        }

        if touched {
            Ok(site)
        } else {
            Err(ValidationError::InvalidSweep {
                reason: format!("site {} has no input for {}", site.id, self.parameter),
            })
        }
    }
}

impl fmt::Display for SweepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep {} from {} to {} ({} points)",
            self.parameter, self.start, self.end, self.num_points
        )
    }
}

/// One evaluated sweep point. Failed points keep their error message.
#[derive(Debug, Clone)]
pub struct SweepPoint {
    pub value: f64,
    pub outcome: Result<SiteReport, String>,
}

impl SweepPoint {
    pub fn report(&self) -> Option<&SiteReport> {
        self.outcome.as_ref().ok()
    }
}

/// Evaluate `site` at every point of `sweep`.
///
/// A point that fails to size does not abort the sweep; an unusable sweep
/// definition does.
pub fn run_sweep(site: &SiteDef, sweep: &SweepDefinition) -> ProjectResult<Vec<SweepPoint>> {
    sweep.validate()?;
    // Reject sweeps the site cannot take before spinning up workers
    sweep.apply(site, sweep.start)?;

    let points = sweep.generate_points();
    let results: Vec<SweepPoint> = points
        .par_iter()
        .map(|&value| {
            let outcome = sweep
                .apply(site, value)
                .map_err(ProjectError::from)
                .and_then(|s| evaluate_site(&s))
                .map_err(|e| e.to_string());
            SweepPoint { value, outcome }
        })
        .collect();

    let failed = results.iter().filter(|p| p.outcome.is_err()).count();
    tracing::debug!(
        sweep = %sweep,
        points = results.len(),
        failed,
        "sweep complete"
    );

    Ok(results)
}
