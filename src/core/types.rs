//! Common types used across the application

use crate::core::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An electrical load declared by the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appliance {
    pub name: String,
    /// Power draw while running, in watts
    pub watts: f64,
    /// Hours operated per day
    pub hours: f64,
}

impl Appliance {
    pub fn new(name: impl Into<String>, watts: f64, hours: f64) -> Self {
        Self {
            name: name.into(),
            watts,
            hours,
        }
    }

    /// Energy consumed per day in Wh
    pub fn daily_wh(&self) -> f64 {
        self.watts * self.hours
    }

    /// Check the fields a custom appliance must satisfy before entering the ledger
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !(self.watts > 0.0) {
            return Err(ValidationError::NonPositiveWatts(self.watts));
        }
        if !(self.hours > 0.0) {
            return Err(ValidationError::NonPositiveHours(self.hours));
        }
        Ok(())
    }
}

impl fmt::Display for Appliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}W \u{00D7} {}h = {}Wh/day)",
            self.name,
            self.watts,
            self.hours,
            self.daily_wh()
        )
    }
}

/// System-wide sizing inputs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SystemParameters {
    /// Average peak-sun hours per day
    pub sun_hours: f64,
    /// Days the battery must carry the load without sun
    pub backup_days: f64,
    /// Round-trip system efficiency, (0, 1]
    pub efficiency: f64,
}

pub const DEFAULT_SUN_HOURS: f64 = 5.0;
pub const DEFAULT_BACKUP_DAYS: f64 = 1.0;
pub const DEFAULT_EFFICIENCY: f64 = 0.85;

impl SystemParameters {
    pub fn new(sun_hours: f64, backup_days: f64, efficiency: f64) -> Self {
        Self {
            sun_hours,
            backup_days,
            efficiency,
        }
    }

    /// Reject parameters that would make the sizing infinite or meaningless.
    ///
    /// `sizing::calculate` itself does not call this; the session does before
    /// anything is persisted.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.sun_hours > 0.0) || !self.sun_hours.is_finite() {
            return Err(ValidationError::NonPositiveSunHours(self.sun_hours));
        }
        if !(self.backup_days > 0.0) || !self.backup_days.is_finite() {
            return Err(ValidationError::NonPositiveBackupDays(self.backup_days));
        }
        if !(self.efficiency > 0.0 && self.efficiency <= 1.0) {
            return Err(ValidationError::EfficiencyOutOfRange(self.efficiency));
        }
        Ok(())
    }
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self::new(DEFAULT_SUN_HOURS, DEFAULT_BACKUP_DAYS, DEFAULT_EFFICIENCY)
    }
}

/// Output of a sizing calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingResult {
    /// Total Wh consumed per day
    pub daily_usage_wh: f64,
    /// Required solar array capacity in kW
    pub solar_size_kw: f64,
    /// Required battery capacity in kWh
    pub battery_size_kwh: f64,
    /// Required inverter capacity in kW
    pub inverter_size_kw: f64,
}

/// One row of the `stats` table as sent to a sink
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatsRow {
    pub daily_usage: f64,
    pub sun_hours: f64,
    pub backup_days: f64,
    pub efficiency: f64,
    pub solar_size: f64,
    pub battery_size: f64,
    pub inverter_size: f64,
}

impl StatsRow {
    pub fn new(result: &SizingResult, params: &SystemParameters) -> Self {
        Self {
            daily_usage: result.daily_usage_wh,
            sun_hours: params.sun_hours,
            backup_days: params.backup_days,
            efficiency: params.efficiency,
            solar_size: result.solar_size_kw,
            battery_size: result.battery_size_kwh,
            inverter_size: result.inverter_size_kw,
        }
    }
}

/// A stored calculation, with the identifier and timestamp assigned by the sink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub row: StatsRow,
}
