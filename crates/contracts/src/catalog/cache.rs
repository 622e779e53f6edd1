//! Single-slot catalog cache entry with an advisory freshness window.

use serde::{Deserialize, Serialize};

use super::Catalog;

/// How long a cached catalog counts as fresh. Stale entries are not evicted;
/// they remain usable as a fallback when a refresh fails.
pub const FRESHNESS_WINDOW_MS: i64 = 10 * 60 * 1000;

/// The last successfully fetched catalog plus the moment it was stored.
///
/// Serializes to the published storage layout: `{products, categories,
/// timestamp}` with the timestamp as a decimal string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    #[serde(flatten)]
    pub catalog: Catalog,
    /// Epoch milliseconds at write time.
    #[serde(rename = "timestamp", with = "timestamp_string")]
    pub timestamp_ms: i64,
}

mod timestamp_string {
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ms: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&ms.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<i64>().map_err(de::Error::custom)
    }
}

impl CacheEntry {
    pub fn new(catalog: Catalog, timestamp_ms: i64) -> Self {
        Self {
            catalog,
            timestamp_ms,
        }
    }

    /// Fresh iff less than [`FRESHNESS_WINDOW_MS`] has elapsed.
    pub fn is_fresh(&self, now_ms: i64) -> bool {
        now_ms - self.timestamp_ms < FRESHNESS_WINDOW_MS
    }
}
