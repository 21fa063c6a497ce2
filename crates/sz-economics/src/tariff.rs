//! Tiered residential tariffs.

use sz_core::numeric::{ensure_finite, ensure_nonzero};
use sz_core::{Real, SzError, SzResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One consumption block of a tiered tariff.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TariffBlock {
    pub name: String,
    /// kWh covered by this block; `None` for the open-ended top block
    pub limit_kwh: Option<Real>,
    /// Currency per kWh
    pub rate_per_kwh: Real,
}

impl TariffBlock {
    pub fn new(name: impl Into<String>, limit_kwh: Option<Real>, rate_per_kwh: Real) -> Self {
        Self {
            name: name.into(),
            limit_kwh,
            rate_per_kwh,
        }
    }

    /// Cost of consuming the whole block, `None` when the block is open-ended.
    pub fn full_cost(&self) -> Option<Real> {
        self.limit_kwh.map(|limit| limit * self.rate_per_kwh)
    }
}

/// Ordered tariff blocks, cheapest consumption first.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TariffSchedule {
    pub blocks: Vec<TariffBlock>,
}

impl TariffSchedule {
    pub fn new(blocks: Vec<TariffBlock>) -> SzResult<Self> {
        let schedule = Self { blocks };
        schedule.validate()?;
        Ok(schedule)
    }

    /// Domestic tariff for Peninsular Malaysia (RM/kWh).
    pub fn peninsular() -> Self {
        Self {
            blocks: vec![
                TariffBlock::new("1 - 200", Some(200.0), 0.218),
                TariffBlock::new("201 - 300", Some(100.0), 0.334),
                TariffBlock::new("301 - 600", Some(300.0), 0.516),
                TariffBlock::new("601 - 900", Some(300.0), 0.546),
                TariffBlock::new("901 onwards", None, 0.571),
            ],
        }
    }

    /// Domestic tariff for Sabah and Labuan (RM/kWh).
    pub fn borneo() -> Self {
        Self {
            blocks: vec![
                TariffBlock::new("1 - 100", Some(100.0), 0.175),
                TariffBlock::new("101 - 200", Some(100.0), 0.185),
                TariffBlock::new("201 - 300", Some(100.0), 0.33),
                TariffBlock::new("301 - 500", Some(200.0), 0.445),
                TariffBlock::new("501 - 1000", Some(500.0), 0.45),
                TariffBlock::new("1001 onwards", None, 0.47),
            ],
        }
    }

    /// Rates must be positive and finite, limits positive, and exactly the
    /// last block open-ended.
    pub fn validate(&self) -> SzResult<()> {
        let Some(last) = self.blocks.len().checked_sub(1) else {
            return Err(SzError::InvalidArg {
                what: "tariff has no blocks",
            });
        };
        for (i, block) in self.blocks.iter().enumerate() {
            let rate = ensure_nonzero(block.rate_per_kwh, "tariff rate")?;
            if rate < 0.0 {
                return Err(SzError::InvalidArg {
                    what: "tariff rate must be positive",
                });
            }
            match (block.limit_kwh, i == last) {
                (Some(limit), false) => {
                    if ensure_finite(limit, "tariff block limit")? <= 0.0 {
                        return Err(SzError::InvalidArg {
                            what: "tariff block limit must be positive",
                        });
                    }
                }
                (None, true) => {}
                (Some(_), true) => {
                    return Err(SzError::InvalidArg {
                        what: "last tariff block must be open-ended",
                    });
                }
                (None, false) => {
                    return Err(SzError::InvalidArg {
                        what: "only the last tariff block may be open-ended",
                    });
                }
            }
        }
        Ok(())
    }
}

/// Consumption attributed to one block.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BillLine {
    pub name: String,
    pub usage_kwh: Real,
    pub rate_per_kwh: Real,
    pub cost: Real,
}

/// A monthly bill split across tariff blocks.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BillBreakdown {
    pub lines: Vec<BillLine>,
    pub total_bill: Real,
}

impl BillBreakdown {
    /// Block the last unit of consumption falls in.
    pub fn marginal(&self) -> Option<&BillLine> {
        self.lines.last()
    }

    pub fn total_usage_kwh(&self) -> Real {
        self.lines.iter().map(|l| l.usage_kwh).sum()
    }
}

/// Work out the consumption behind `monthly_bill` by filling tariff blocks
/// in order.
///
/// A block is consumed in full while the remaining bill exceeds its cost;
/// the block where the bill runs out receives the remainder.
pub fn bill_breakdown(schedule: &TariffSchedule, monthly_bill: Real) -> SzResult<BillBreakdown> {
    schedule.validate()?;
    let monthly_bill = ensure_finite(monthly_bill, "monthly bill")?;
    if monthly_bill < 0.0 {
        return Err(SzError::OutOfRange {
            what: "monthly bill",
            value: monthly_bill,
            min: 0.0,
            max: Real::INFINITY,
        });
    }

    let mut remaining = monthly_bill;
    let mut lines = Vec::new();
    for block in &schedule.blocks {
        match (block.limit_kwh, block.full_cost()) {
            (Some(limit), Some(cost)) if remaining > cost => {
                remaining -= cost;
                lines.push(BillLine {
                    name: block.name.clone(),
                    usage_kwh: limit,
                    rate_per_kwh: block.rate_per_kwh,
                    cost,
                });
            }
            _ => {
                lines.push(BillLine {
                    name: block.name.clone(),
                    usage_kwh: remaining / block.rate_per_kwh,
                    rate_per_kwh: block.rate_per_kwh,
                    cost: remaining,
                });
                break;
            }
        }
    }

    tracing::debug!(
        monthly_bill,
        blocks = lines.len(),
        "bill split across tariff blocks"
    );

    Ok(BillBreakdown {
        lines,
        total_bill: monthly_bill,
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn breakdown_conserves_bill(bill in 0.0_f64..5_000.0) {
            let b = bill_breakdown(&TariffSchedule::peninsular(), bill).unwrap();
            let cost: Real = b.lines.iter().map(|l| l.cost).sum();
            prop_assert!((cost - bill).abs() < 1e-6);
            prop_assert!(b.lines.iter().all(|l| l.usage_kwh >= 0.0));
        }

        #[test]
        fn bigger_bill_never_lowers_marginal_rate(a in 0.0_f64..2_000.0, extra in 0.0_f64..2_000.0) {
            let schedule = TariffSchedule::borneo();
            let low = bill_breakdown(&schedule, a).unwrap();
            let high = bill_breakdown(&schedule, a + extra).unwrap();
            prop_assert!(
                high.marginal().unwrap().rate_per_kwh >= low.marginal().unwrap().rate_per_kwh
            );
        }
    }
}
