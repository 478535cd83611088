//! Database module for persisting sizing calculations
//!
//! Uses SQLite for local storage of the `stats` table: one immutable row
//! per calculation, with an assigned id and creation timestamp.

use crate::core::{Error, Result, StatsRecord, StatsRow};
use chrono::Utc;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

/// Database manager
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database at its default location
    pub fn new() -> Result<Self> {
        Self::open(&Self::db_path()?)
    }

    /// Open (or create) the database file at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;

        let db = Self { conn };
        db.init_schema()?;

        log::info!("Stats database opened at {}", path.display());
        Ok(db)
    }

    /// In-memory database, discarded on drop
    pub fn open_in_memory() -> Result<Self> {
        let db = Self {
            conn: Connection::open_in_memory()?,
        };
        db.init_schema()?;
        Ok(db)
    }

    /// Get the database file path
    pub fn db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| Error::Config("Could not determine data directory".to_string()))?;

        Ok(data_dir.join("solar-sizer").join("stats.db"))
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS stats (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                created_at TEXT NOT NULL,
                daily_usage REAL NOT NULL,
                sun_hours REAL NOT NULL,
                backup_days REAL NOT NULL,
                efficiency REAL NOT NULL,
                solar_size REAL NOT NULL,
                battery_size REAL NOT NULL,
                inverter_size REAL NOT NULL
            );
            "#,
        )?;

        Ok(())
    }

    /// Insert one calculation and return it as stored
    pub fn insert_stats(&self, row: &StatsRow) -> Result<StatsRecord> {
        let created_at = Utc::now();

        self.conn.execute(
            "INSERT INTO stats (created_at, daily_usage, sun_hours, backup_days, efficiency, solar_size, battery_size, inverter_size)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                created_at.to_rfc3339(),
                row.daily_usage,
                row.sun_hours,
                row.backup_days,
                row.efficiency,
                row.solar_size,
                row.battery_size,
                row.inverter_size
            ],
        )?;

        Ok(StatsRecord {
            id: self.conn.last_insert_rowid(),
            created_at,
            row: *row,
        })
    }

    /// Get total stored calculations
    pub fn get_stats_count(&self) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM stats", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> StatsRow {
        StatsRow {
            daily_usage: 4100.0,
            sun_hours: 5.0,
            backup_days: 1.0,
            efficiency: 0.85,
            solar_size: 0.9647,
            battery_size: 4.8235,
            inverter_size: 0.18,
        }
    }

    #[test]
    fn test_insert_stats() {
        let db = Database::open_in_memory().unwrap();

        let record = db.insert_stats(&sample_row()).unwrap();
        assert_eq!(record.id, 1);
        assert_eq!(record.row, sample_row());

        let (daily_usage, inverter_size, created_at): (f64, f64, String) = db
            .conn
            .query_row(
                "SELECT daily_usage, inverter_size, created_at FROM stats WHERE id = ?1",
                params![record.id],
                |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
            )
            .unwrap();
        assert_eq!(daily_usage, 4100.0);
        assert_eq!(inverter_size, 0.18);
        assert_eq!(created_at, record.created_at.to_rfc3339());
    }

    #[test]
    fn test_ids_increase() {
        let db = Database::open_in_memory().unwrap();

        let first = db.insert_stats(&sample_row()).unwrap();
        let second = db.insert_stats(&sample_row()).unwrap();
        assert!(second.id > first.id);
        assert_eq!(db.get_stats_count().unwrap(), 2);
    }

    #[test]
    fn test_open_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("stats.db");

        {
            let db = Database::open(&path).unwrap();
            db.insert_stats(&sample_row()).unwrap();
        }

        let reopened = Database::open(&path).unwrap();
        assert_eq!(reopened.get_stats_count().unwrap(), 1);
    }
}
