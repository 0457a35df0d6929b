//! SQLite-backed price history cache.

use crate::cache::codec;
use crate::cache::PriceStore;
use crate::models::price::{Period, PriceSeries};
use chrono::{DateTime, Duration, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::Mutex;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache database error: {0}")]
    Storage(#[from] rusqlite::Error),
}

/// Single-file table keyed by (ticker, period), holding a columnar price
/// blob and its write timestamp. Entries past the TTL read as misses and
/// are overwritten by the next save; rows are never deleted.
pub struct SqliteCache {
    conn: Mutex<Connection>,
    ttl_hours: i64,
}

impl SqliteCache {
    /// Open (or create) the cache file and its table.
    pub fn open(path: impl AsRef<Path>, ttl_hours: i64) -> Result<Self, CacheError> {
        let conn = Connection::open(path)?;
        conn.execute(
            "CREATE TABLE IF NOT EXISTS price_history (
                ticker TEXT,
                period TEXT,
                updated_at TIMESTAMP,
                data BLOB,
                PRIMARY KEY (ticker, period)
            )",
            [],
        )?;
        Ok(Self {
            conn: Mutex::new(conn),
            ttl_hours,
        })
    }

    fn is_fresh(&self, updated_at: DateTime<Utc>) -> bool {
        Utc::now() - updated_at < Duration::hours(self.ttl_hours)
    }
}

impl PriceStore for SqliteCache {
    fn get(&self, ticker: &str, period: Period) -> Option<PriceSeries> {
        let row = {
            let conn = self.conn.lock().ok()?;
            conn.query_row(
                "SELECT updated_at, data FROM price_history
                 WHERE ticker = ?1 AND period = ?2",
                params![ticker, period.as_str()],
                |row| Ok((row.get::<_, String>(0)?, row.get::<_, Vec<u8>>(1)?)),
            )
            .optional()
        };

        let (updated_at, blob) = match row {
            Ok(Some(row)) => row,
            Ok(None) => return None,
            Err(e) => {
                warn!(ticker, %period, error = %e, "cache read failed");
                return None;
            }
        };

        let updated_at = match DateTime::parse_from_rfc3339(&updated_at) {
            Ok(ts) => ts.with_timezone(&Utc),
            Err(e) => {
                warn!(ticker, %period, error = %e, "cache timestamp unreadable");
                return None;
            }
        };
        if !self.is_fresh(updated_at) {
            debug!(ticker, %period, "cache entry expired");
            return None;
        }

        match codec::decode(&blob) {
            Ok(series) => Some(series),
            Err(e) => {
                warn!(ticker, %period, error = %e, "cache blob unreadable, treating as miss");
                None
            }
        }
    }

    fn save(&self, ticker: &str, period: Period, series: &PriceSeries) {
        let blob = match codec::encode(series) {
            Ok(blob) => blob,
            Err(e) => {
                warn!(ticker, %period, error = %e, "cache encode failed");
                return;
            }
        };

        let conn = match self.conn.lock() {
            Ok(conn) => conn,
            Err(_) => return,
        };
        let result = conn.execute(
            "INSERT OR REPLACE INTO price_history (ticker, period, updated_at, data)
             VALUES (?1, ?2, ?3, ?4)",
            params![ticker, period.as_str(), Utc::now().to_rfc3339(), blob],
        );
        if let Err(e) = result {
            warn!(ticker, %period, error = %e, "cache write failed");
        }
    }
}
