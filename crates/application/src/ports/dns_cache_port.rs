use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;

/// One cached hostname as seen at snapshot time.
#[derive(Debug, Clone)]
pub struct CacheEntrySnapshot {
    pub hostname: Arc<str>,
    pub addresses: Arc<Vec<Ipv4Addr>>,
    /// Time left before expiry; `None` once the entry has expired but has not
    /// been looked up (and therefore purged) yet.
    pub remaining_ttl: Option<Duration>,
}

impl CacheEntrySnapshot {
    pub fn is_expired(&self) -> bool {
        self.remaining_ttl.is_none()
    }
}

/// Snapshot of cache counters for diagnostics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheMetricsSnapshot {
    pub total_entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub expirations: u64,
    pub evictions: u64,
}

impl CacheMetricsSnapshot {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Port for cache introspection.
pub trait DnsCachePort: Send + Sync {
    fn cache_size(&self) -> usize;
    fn cache_entries(&self) -> Vec<CacheEntrySnapshot>;
    fn cache_metrics_snapshot(&self) -> CacheMetricsSnapshot;
    fn remove_record(&self, hostname: &str) -> bool;
}
