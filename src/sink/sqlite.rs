//! SQLite-backed sink

use crate::core::{Result, StatsRecord, StatsRow};
use crate::db::Database;
use crate::sink::StatsSink;
use async_trait::async_trait;
use tokio::sync::Mutex;

/// Stores records in the local stats database
pub struct SqliteSink {
    db: Mutex<Database>,
}

impl SqliteSink {
    pub fn new(db: Database) -> Self {
        Self { db: Mutex::new(db) }
    }
}

#[async_trait]
impl StatsSink for SqliteSink {
    async fn insert(&self, row: &StatsRow) -> Result<StatsRecord> {
        let db = self.db.lock().await;
        let record = db.insert_stats(row)?;
        log::debug!("Stored calculation #{} in SQLite", record.id);
        Ok(record)
    }

    fn name(&self) -> &str {
        "sqlite"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_ids() {
        let sink = SqliteSink::new(Database::open_in_memory().unwrap());
        let row = StatsRow {
            daily_usage: 3000.0,
            sun_hours: 5.0,
            backup_days: 2.0,
            efficiency: 0.85,
            solar_size: 0.7059,
            battery_size: 7.0588,
            inverter_size: 3.6,
        };

        let first = sink.insert(&row).await.unwrap();
        let second = sink.insert(&row).await.unwrap();

        assert_eq!(first.row, row);
        assert!(second.id > first.id);
        assert_eq!(sink.db.lock().await.get_stats_count().unwrap(), 2);
    }
}
