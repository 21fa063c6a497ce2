#![allow(dead_code)]

use sz_project::Project;

pub const CABIN_YAML: &str = r#"
version: 1
name: Off-grid cabin
sites:
  - id: cabin
    name: Mountain cabin
    battery:
      bank:
        daily_energy_wh: 6578.0
        autonomy_days: 3.0
        system_voltage_v: 48.0
        allowable_dod: 0.8
        derating_factor: 0.9
        operating_hours_per_day: 11.2
      installed:
        capacity_ah: 800.0
        load_fraction: 0.75
        daily_energy_wh: 3900.0
    array:
      critical_energy_wh: 6578.0
      charging_efficiency: 0.85
      system_voltage_v: 48.0
      peak_sun_hours: 5.0
      soiling_derating: 0.95
      temp_coeff_voltage: -0.004
      max_module_temp_c: 50.0
  - id: rooftop
    name: Suburban rooftop
    yield_estimate:
      module_power_w: 450.0
      power_guarantee: 0.9
      module_count: 14
      peak_sun_hours: 4.2
      avg_cell_temp_c: 50.0
      power_temp_coeff: 0.0037
      wiring_loss: 0.04
      inverter_efficiency: 0.97
      mppt_efficiency: 0.99
    economics:
      tariff:
        type: Peninsular
      monthly_bill: 450.0
      costs:
        panel_cost: 650.0
        module_count: 14
        inverter_cost: 5200.0
        labor_cost: 3000.0
        annual_cleaning: 300.0
      system_life_years: 25.0
"#;

pub fn cabin_project() -> Project {
    serde_yaml::from_str(CABIN_YAML).expect("fixture parses")
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}
