use ferrous_stub_application::ports::CacheMetricsSnapshot;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

#[derive(Default)]
pub struct CacheMetrics {
    pub hits: AtomicU64,
    pub misses: AtomicU64,
    pub insertions: AtomicU64,
    /// Entries dropped because a lookup or sweep found them expired.
    pub expirations: AtomicU64,
    /// Live entries dropped to stay under the capacity bound.
    pub evictions: AtomicU64,
}

impl CacheMetrics {
    pub fn snapshot(&self, total_entries: usize) -> CacheMetricsSnapshot {
        CacheMetricsSnapshot {
            total_entries,
            hits: self.hits.load(AtomicOrdering::Relaxed),
            misses: self.misses.load(AtomicOrdering::Relaxed),
            insertions: self.insertions.load(AtomicOrdering::Relaxed),
            expirations: self.expirations.load(AtomicOrdering::Relaxed),
            evictions: self.evictions.load(AtomicOrdering::Relaxed),
        }
    }
}
