mod common;

use sz_core::{SzError, approx_eq_places};
use sz_project::{ProjectError, evaluate_project, evaluate_site, reports_to_json};

#[test]
fn cabin_battery_and_array() {
    common::init_tracing();
    let project = common::cabin_project();
    let reports = evaluate_project(&project).unwrap();
    assert_eq!(reports.len(), 2);

    let cabin = &reports[0];
    assert_eq!(cabin.site_id, "cabin");

    let battery = cabin.battery.as_ref().unwrap();
    assert_eq!(battery.sizing.required_output_ah.round(), 411.0);
    assert_eq!(battery.sizing.rated_capacity_ah.round(), 571.0);
    assert_eq!(battery.sizing.discharge_rate_h.map(f64::round), Some(42.0));
    // 0.75 * 3900 / (800 * 48)
    let dod = battery.average_dod.unwrap();
    assert!((dod - 0.076171875).abs() < 1e-12);

    let array = cabin.array.unwrap();
    assert!(approx_eq_places(array.rated_voltage_v, 51.8, 1));
    assert!(array.rated_current_a > array.array_current_a);
    assert!(cabin.economics.is_none());
}

#[test]
fn rooftop_economics() {
    common::init_tracing();
    let project = common::cabin_project();
    let report = evaluate_site(&project.sites[1]).unwrap();

    let est = report.yield_estimate.unwrap();
    let econ = report.economics.as_ref().unwrap();
    assert!(est.monthly_energy_kwh > 0.0);
    assert!((econ.monthly_saving - est.monthly_energy_kwh * 0.571).abs() < 1e-9);
    assert!(econ.payback_years < 25.0);
}

#[test]
fn zero_voltage_reports_site_and_cause() {
    let mut project = common::cabin_project();
    if let Some(battery) = project.sites[0].battery.as_mut() {
        battery.bank.system_voltage_v = 0.0;
    }
    let err = evaluate_project(&project).unwrap_err();
    match err {
        ProjectError::Sizing { site, source } => {
            assert_eq!(site, "cabin");
            assert!(matches!(source, SzError::ZeroDenominator { .. }));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn soiling_factor_out_of_range() {
    let mut project = common::cabin_project();
    if let Some(array) = project.sites[0].array.as_mut() {
        array.soiling_derating = 1.3;
    }
    let err = evaluate_site(&project.sites[0]).unwrap_err();
    assert!(err.to_string().contains("soiling derating"), "{err}");
}

#[test]
fn reports_serialize() {
    let project = common::cabin_project();
    let reports = evaluate_project(&project).unwrap();
    let json = reports_to_json(&reports).unwrap();
    assert!(json.contains("\"site_id\": \"cabin\""));
    assert!(json.contains("rated_capacity_ah"));
}
