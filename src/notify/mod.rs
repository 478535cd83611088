//! User-facing notifications
//!
//! The calculator reports every outcome through a `Notifier`. How a
//! notification is displayed is up to the implementation; `LogNotifier`
//! renders it through the translation table and writes it to the log.

use crate::core::{SizingResult, ValidationError};
use crate::i18n::I18n;

/// Sizing outputs formatted for display (2 decimals)
#[derive(Debug, Clone, PartialEq)]
pub struct SizingSummary {
    pub solar_kw: String,
    pub battery_kwh: String,
    pub inverter_kw: String,
}

impl SizingSummary {
    pub fn from_result(result: &SizingResult) -> Self {
        Self {
            solar_kw: format!("{:.2}", result.solar_size_kw),
            battery_kwh: format!("{:.2}", result.battery_size_kwh),
            inverter_kw: format!("{:.2}", result.inverter_size_kw),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Notification {
    /// Calculation stored; carries the breakdown to show
    Success(SizingSummary),
    /// Calculation could not be stored
    Failure,
    /// Calculation attempted with no appliances
    EmptyInput,
    /// A field of the form was rejected
    Validation(ValidationError),
}

impl Notification {
    /// Human-readable text in the current language
    pub fn render(&self, i18n: &I18n) -> String {
        match self {
            Notification::Success(summary) => [
                i18n.get("result.success"),
                i18n.get("result.title"),
                format!("\u{2022} {}", i18n.get_with_value("result.solar", &summary.solar_kw)),
                format!("\u{2022} {}", i18n.get_with_value("result.battery", &summary.battery_kwh)),
                format!("\u{2022} {}", i18n.get_with_value("result.inverter", &summary.inverter_kw)),
            ]
            .join("\n"),
            Notification::Failure => i18n.get("error.failure"),
            Notification::EmptyInput => i18n.get("error.no_appliances"),
            Notification::Validation(err) => i18n.get(err.i18n_key()),
        }
    }
}

/// Sink for user-facing notifications
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

/// Writes rendered notifications to the log
pub struct LogNotifier {
    i18n: I18n,
}

impl LogNotifier {
    pub fn new(i18n: I18n) -> Self {
        Self { i18n }
    }
}

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) {
        let text = notification.render(&self.i18n);
        match notification {
            Notification::Success(_) => log::info!("{}", text),
            Notification::Failure => log::error!("{}", text),
            Notification::EmptyInput | Notification::Validation(_) => log::warn!("{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_result() -> SizingResult {
        SizingResult {
            daily_usage_wh: 4100.0,
            solar_size_kw: 4100.0 / (5.0 * 0.85) / 1000.0,
            battery_size_kwh: 4100.0 / (0.85 * 1000.0),
            inverter_size_kw: 0.18,
        }
    }

    #[test]
    fn test_summary_two_decimals() {
        let summary = SizingSummary::from_result(&scenario_result());
        assert_eq!(summary.solar_kw, "0.96");
        assert_eq!(summary.battery_kwh, "4.82");
        assert_eq!(summary.inverter_kw, "0.18");
    }

    #[test]
    fn test_render_success_english() {
        let i18n = I18n::new("en");
        let text = Notification::Success(SizingSummary::from_result(&scenario_result())).render(&i18n);

        assert_eq!(
            text,
            "Power needs calculated successfully!\n\
             Recommended System Specifications:\n\
             \u{2022} Solar Panels: 0.96 kW\n\
             \u{2022} Battery Bank: 4.82 kWh\n\
             \u{2022} Inverter: 0.18 kW"
        );
    }

    #[test]
    fn test_render_errors() {
        let i18n = I18n::new("en");
        assert_eq!(Notification::Failure.render(&i18n), "Failed to calculate power needs");
        assert_eq!(Notification::EmptyInput.render(&i18n), "Please add at least one appliance");
        assert_eq!(
            Notification::Validation(ValidationError::NonPositiveWatts(0.0)).render(&i18n),
            "Power (watts) must be greater than zero"
        );
    }

    #[test]
    fn test_render_french() {
        let i18n = I18n::new("fr");
        let text = Notification::Success(SizingSummary::from_result(&scenario_result())).render(&i18n);
        assert!(text.contains("Onduleur : 0.18 kW"));
    }
}
