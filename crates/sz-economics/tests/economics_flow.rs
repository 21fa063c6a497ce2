//! Economics driven by an estimated array yield.

use sz_economics::{CostInput, TariffSchedule, assess, bill_breakdown};
use sz_pv::{YieldInput, estimate_yield};

fn array() -> YieldInput {
    YieldInput {
        module_power_w: 450.0,
        power_guarantee: 0.9,
        module_count: 14,
        peak_sun_hours: 4.2,
        avg_cell_temp_c: 50.0,
        stc_temp_c: 25.0,
        power_temp_coeff: 0.0037,
        wiring_loss: 0.04,
        inverter_efficiency: 0.97,
        mppt_efficiency: 0.99,
    }
}

#[test]
fn yield_offsets_bill() {
    let est = estimate_yield(&array()).unwrap();
    let cost = CostInput {
        panel_cost: 650.0,
        module_count: 14,
        inverter_cost: 5200.0,
        labor_cost: 3000.0,
        annual_cleaning: 300.0,
    };
    let a = assess(
        &TariffSchedule::peninsular(),
        450.0,
        est.monthly_energy_kwh,
        &cost,
    )
    .unwrap();

    assert!(a.monthly_saving > 0.0);
    assert!(a.new_monthly_bill < 450.0);
    assert!(a.payback_years > 1.0 && a.payback_years < 30.0);
}

#[test]
fn bill_usage_is_consistent_with_costs() {
    for bill in [10.0, 120.0, 480.0, 1500.0] {
        for schedule in [TariffSchedule::peninsular(), TariffSchedule::borneo()] {
            let b = bill_breakdown(&schedule, bill).unwrap();
            let cost: f64 = b.lines.iter().map(|l| l.cost).sum();
            assert!((cost - bill).abs() < 1e-6, "bill={bill} cost={cost}");
            for line in &b.lines {
                assert!((line.usage_kwh * line.rate_per_kwh - line.cost).abs() < 1e-6);
            }
        }
    }
}
