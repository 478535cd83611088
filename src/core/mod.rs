//! Core module - Shared types, configuration, and errors

mod config;
mod error;
mod types;

pub use config::{Config, GeneralConfig, RestConfig, SizingConfig, StorageConfig, REST_KEY_ENV, REST_URL_ENV};
pub use error::{Error, Result, ValidationError};
pub use types::{Appliance, SizingResult, StatsRecord, StatsRow, SystemParameters};
pub use types::{DEFAULT_BACKUP_DAYS, DEFAULT_EFFICIENCY, DEFAULT_SUN_HOURS};
