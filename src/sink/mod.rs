//! Persistence sinks for calculation records
//!
//! A sink accepts one `StatsRow` per calculation and returns the stored
//! record with its assigned id and timestamp:
//! - SQLite: local database file
//! - REST: remote `stats` table behind a PostgREST-style endpoint

mod rest;
mod sqlite;

pub use rest::RestSink;
pub use sqlite::SqliteSink;

use crate::core::{Error, Result, StatsRecord, StatsRow, StorageConfig};
use crate::db::Database;
use async_trait::async_trait;
use std::sync::Arc;

/// Destination for calculation records
#[async_trait]
pub trait StatsSink: Send + Sync {
    /// Store one row; no retries are attempted on failure
    async fn insert(&self, row: &StatsRow) -> Result<StatsRecord>;

    /// Sink name for logging
    fn name(&self) -> &str;
}

/// Build the sink selected by the storage configuration
pub fn build_sink(config: &StorageConfig) -> Result<Arc<dyn StatsSink>> {
    match config.backend.as_str() {
        "sqlite" => {
            let db = match &config.database_path {
                Some(path) => Database::open(path)?,
                None => Database::new()?,
            };
            log::info!("Using SQLite for calculation records");
            Ok(Arc::new(SqliteSink::new(db)))
        }
        "rest" => {
            let sink = RestSink::from_config(&config.rest)?;
            log::info!("Using REST endpoint for calculation records");
            Ok(Arc::new(sink))
        }
        other => Err(Error::Config(format!("Unknown storage backend: {}", other))),
    }
}
