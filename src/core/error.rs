//! Error types for the application

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("No appliances to size")]
    EmptyInput,

    #[error("Persistence error: {0}")]
    Persistence(String),
}

impl Error {
    /// Whether the error came from storing a result (local or remote)
    pub fn is_persistence(&self) -> bool {
        matches!(self, Error::Database(_) | Error::Http(_) | Error::Persistence(_))
    }
}

/// Rejected user input, one variant per offending field
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("appliance name is empty")]
    EmptyName,

    #[error("appliance watts must be positive, got {0}")]
    NonPositiveWatts(f64),

    #[error("appliance hours must be positive, got {0}")]
    NonPositiveHours(f64),

    #[error("sun hours must be positive, got {0}")]
    NonPositiveSunHours(f64),

    #[error("backup days must be positive, got {0}")]
    NonPositiveBackupDays(f64),

    #[error("efficiency must be in (0, 1], got {0}")]
    EfficiencyOutOfRange(f64),
}

impl ValidationError {
    /// Translation key for the field-specific message
    pub fn i18n_key(&self) -> &'static str {
        match self {
            ValidationError::EmptyName => "validation.name_required",
            ValidationError::NonPositiveWatts(_) => "validation.watts_positive",
            ValidationError::NonPositiveHours(_) => "validation.hours_positive",
            ValidationError::NonPositiveSunHours(_) => "validation.sun_hours_positive",
            ValidationError::NonPositiveBackupDays(_) => "validation.backup_days_positive",
            ValidationError::EfficiencyOutOfRange(_) => "validation.efficiency_range",
        }
    }
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persistence_classification() {
        assert!(Error::Persistence("boom".into()).is_persistence());
        assert!(Error::Database(rusqlite::Error::QueryReturnedNoRows).is_persistence());
        assert!(!Error::EmptyInput.is_persistence());
        assert!(!Error::Validation(ValidationError::EmptyName).is_persistence());
    }
}
