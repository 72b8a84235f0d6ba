mod entry;
mod metrics;
mod storage;

pub use entry::CacheEntry;
pub use metrics::CacheMetrics;
pub use storage::ResolutionCache;
