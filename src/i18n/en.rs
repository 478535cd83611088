//! English translations

use std::collections::HashMap;

pub fn get_translations() -> HashMap<String, String> {
    let mut t = HashMap::new();

    // App general
    t.insert("app.title".into(), "Power Needs Calculator".into());

    // Results
    t.insert("result.success".into(), "Power needs calculated successfully!".into());
    t.insert("result.title".into(), "Recommended System Specifications:".into());
    t.insert("result.solar".into(), "Solar Panels: {value} kW".into());
    t.insert("result.battery".into(), "Battery Bank: {value} kWh".into());
    t.insert("result.inverter".into(), "Inverter: {value} kW".into());

    // Errors
    t.insert("error.failure".into(), "Failed to calculate power needs".into());
    t.insert("error.no_appliances".into(), "Please add at least one appliance".into());

    // Validation
    t.insert("validation.name_required".into(), "Please enter an appliance name".into());
    t.insert("validation.watts_positive".into(), "Power (watts) must be greater than zero".into());
    t.insert("validation.hours_positive".into(), "Hours per day must be greater than zero".into());
    t.insert("validation.sun_hours_positive".into(), "Sun hours per day must be greater than zero".into());
    t.insert("validation.backup_days_positive".into(), "Backup days must be greater than zero".into());
    t.insert("validation.efficiency_range".into(), "System efficiency must be between 0 and 1".into());

    t
}
