mod common;

use sz_project::{ProjectError, SweepDefinition, SweepParameter, run_sweep};

#[test]
fn autonomy_sweep_grows_bank() {
    common::init_tracing();
    let project = common::cabin_project();
    let sweep = SweepDefinition::new(SweepParameter::AutonomyDays, 1.0, 5.0, 9).unwrap();

    let points = run_sweep(&project.sites[0], &sweep).unwrap();
    assert_eq!(points.len(), 9);

    let capacities: Vec<f64> = points
        .iter()
        .map(|p| p.report().unwrap().battery.as_ref().unwrap().sizing.rated_capacity_ah)
        .collect();
    assert!(capacities.windows(2).all(|w| w[1] > w[0]));

    // three days of autonomy is the fixture design point
    assert_eq!(points[4].value, 3.0);
    assert_eq!(capacities[4].round(), 571.0);
}

#[test]
fn failing_points_do_not_abort_sweep() {
    let project = common::cabin_project();
    // DOD of zero at the start, valid afterwards
    let sweep = SweepDefinition::new(SweepParameter::AllowableDod, 0.0, 0.8, 5).unwrap();

    let points = run_sweep(&project.sites[0], &sweep).unwrap();
    assert!(points[0].outcome.is_err());
    assert!(points[0].outcome.as_ref().unwrap_err().contains("Zero denominator"));
    assert!(points[1..].iter().all(|p| p.outcome.is_ok()));
}

#[test]
fn peak_sun_hours_reduce_array_current() {
    let project = common::cabin_project();
    let sweep = SweepDefinition::new(SweepParameter::PeakSunHours, 3.0, 6.0, 4).unwrap();

    let points = run_sweep(&project.sites[0], &sweep).unwrap();
    let currents: Vec<f64> = points
        .iter()
        .map(|p| p.report().unwrap().array.unwrap().array_current_a)
        .collect();
    assert!(currents.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn sweep_needs_matching_section() {
    let project = common::cabin_project();
    let sweep = SweepDefinition::new(SweepParameter::MonthlyBill, 100.0, 500.0, 3).unwrap();

    let err = run_sweep(&project.sites[0], &sweep).unwrap_err();
    assert!(matches!(err, ProjectError::Validation(_)));
}
