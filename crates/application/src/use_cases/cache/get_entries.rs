use crate::ports::{CacheEntrySnapshot, CacheMetricsSnapshot, DnsCachePort};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct CacheReport {
    pub entries: Vec<CacheEntrySnapshot>,
    pub metrics: CacheMetricsSnapshot,
}

pub struct GetCacheEntriesUseCase {
    cache: Arc<dyn DnsCachePort>,
}

impl GetCacheEntriesUseCase {
    pub fn new(cache: Arc<dyn DnsCachePort>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> CacheReport {
        CacheReport {
            entries: self.cache.cache_entries(),
            metrics: self.cache.cache_metrics_snapshot(),
        }
    }
}
