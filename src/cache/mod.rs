//! Time-bounded memoization of fetched price history.

pub mod codec;
pub mod sqlite;

pub use codec::CodecError;
pub use sqlite::{CacheError, SqliteCache};

use crate::models::price::{Period, PriceSeries};

/// Narrow storage seam for the fetch path, so the backing store can be
/// swapped without touching TTL or serialization behavior.
pub trait PriceStore {
    /// Cached series for (ticker, period); expiry, corruption, and absent
    /// rows all read as `None`.
    fn get(&self, ticker: &str, period: Period) -> Option<PriceSeries>;

    /// Best-effort upsert with the current time; failures are logged and
    /// never surfaced to the caller.
    fn save(&self, ticker: &str, period: Period, series: &PriceSeries);
}
