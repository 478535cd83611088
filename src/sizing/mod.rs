//! Sizing calculator for off-grid power systems
//!
//! Turns an appliance list plus system parameters into:
//! - Solar array size (kW)
//! - Battery bank size (kWh)
//! - Inverter size (kW)
//!
//! Every function here is pure; callers decide what to do with the result.

use crate::core::{Appliance, Error, Result, SizingResult, SystemParameters};

/// Safety overhead applied to the largest single load when sizing the inverter
pub const INVERTER_OVERHEAD: f64 = 1.2;

const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Compute the three sizing outputs for `appliances`.
///
/// Fails with `Error::EmptyInput` when there is nothing to size. Parameters
/// are used as given; zero `sun_hours` or `efficiency` yields infinite sizes.
pub fn calculate(appliances: &[Appliance], params: &SystemParameters) -> Result<SizingResult> {
    let peak_watts = peak_watts(appliances).ok_or(Error::EmptyInput)?;
    let daily_usage_wh = daily_usage_wh(appliances);

    Ok(SizingResult {
        daily_usage_wh,
        solar_size_kw: solar_size_kw(daily_usage_wh, params),
        battery_size_kwh: battery_size_kwh(daily_usage_wh, params),
        inverter_size_kw: inverter_size_kw(peak_watts),
    })
}

/// Total Wh consumed per day across all appliances
pub fn daily_usage_wh(appliances: &[Appliance]) -> f64 {
    appliances.iter().fold(0.0, |total, a| total + a.watts * a.hours)
}

/// Largest single-appliance draw, or `None` for an empty list
pub fn peak_watts(appliances: &[Appliance]) -> Option<f64> {
    appliances.iter().map(|a| a.watts).reduce(f64::max)
}

pub fn solar_size_kw(daily_usage_wh: f64, params: &SystemParameters) -> f64 {
    (daily_usage_wh / (params.sun_hours * params.efficiency)) / WATTS_PER_KILOWATT
}

pub fn battery_size_kwh(daily_usage_wh: f64, params: &SystemParameters) -> f64 {
    (daily_usage_wh * params.backup_days) / (params.efficiency * WATTS_PER_KILOWATT)
}

pub fn inverter_size_kw(peak_watts: f64) -> f64 {
    (peak_watts * INVERTER_OVERHEAD) / WATTS_PER_KILOWATT
}
