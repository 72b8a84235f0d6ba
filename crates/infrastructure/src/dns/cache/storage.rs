use super::{CacheEntry, CacheMetrics};
use dashmap::DashMap;
use ferrous_stub_application::ports::{CacheEntrySnapshot, CacheMetricsSnapshot, DnsCachePort};
use ferrous_stub_domain::CacheConfig;
use std::net::Ipv4Addr;
use std::sync::atomic::Ordering as AtomicOrdering;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Hostname → addresses, expiring on the upstream's minimum TTL.
///
/// Expired entries are removed lazily when looked up (or by an explicit
/// [`purge_expired`](Self::purge_expired) sweep). Keys are used verbatim.
pub struct ResolutionCache {
    entries: DashMap<Arc<str>, CacheEntry>,
    max_entries: Option<usize>,
    metrics: Arc<CacheMetrics>,
}

impl Default for ResolutionCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResolutionCache {
    /// Unbounded cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            max_entries: None,
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(max_entries),
            max_entries: Some(max_entries.max(1)),
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        info!(
            max_entries = config.max_entries,
            enabled = config.enabled,
            "Initializing resolution cache"
        );

        match config.capacity() {
            Some(max) => Self::with_max_entries(max),
            None => Self::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn metrics(&self) -> CacheMetricsSnapshot {
        self.metrics.snapshot(self.len())
    }

    /// Returns the cached addresses if the entry is still valid at `now`.
    /// An expired entry is removed before returning `None`.
    pub fn lookup(&self, hostname: &str, now: Instant) -> Option<Arc<Vec<Ipv4Addr>>> {
        let expired = match self.entries.get(hostname) {
            None => {
                self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
                debug!(hostname = %hostname, "Cache MISS");
                return None;
            }
            Some(entry) if entry.is_valid_at(now) => {
                self.metrics.hits.fetch_add(1, AtomicOrdering::Relaxed);
                debug!(hostname = %hostname, "Cache HIT");
                return Some(Arc::clone(&entry.addresses));
            }
            Some(_) => true,
        };

        // Re-checked under the shard lock so a concurrent fresh store survives.
        if expired
            && self
                .entries
                .remove_if(hostname, |_, entry| !entry.is_valid_at(now))
                .is_some()
        {
            self.metrics.expirations.fetch_add(1, AtomicOrdering::Relaxed);
        }
        self.metrics.misses.fetch_add(1, AtomicOrdering::Relaxed);
        debug!(hostname = %hostname, "Cache EXPIRED");
        None
    }

    /// Stores `addresses` until `now + ttl`, replacing any previous entry.
    ///
    /// Does nothing (and returns `false`) when the TTL is absent or zero or
    /// there are no addresses.
    pub fn store(
        &self,
        hostname: &str,
        addresses: Vec<Ipv4Addr>,
        ttl: Option<u32>,
        now: Instant,
    ) -> bool {
        let Some(ttl) = ttl.filter(|&ttl| ttl > 0) else {
            return false;
        };
        if addresses.is_empty() {
            return false;
        }
        let Some(entry) = CacheEntry::new(addresses, ttl, now) else {
            return false;
        };

        if let Some(max) = self.max_entries {
            if self.entries.len() >= max && !self.entries.contains_key(hostname) {
                self.make_room(max, now);
            }
        }

        debug!(
            hostname = %hostname,
            addresses = entry.addresses.len(),
            ttl = ttl,
            "Cached resolution"
        );

        self.entries.insert(Arc::from(hostname), entry);
        self.metrics.insertions.fetch_add(1, AtomicOrdering::Relaxed);
        true
    }

    pub fn remove(&self, hostname: &str) -> bool {
        self.entries.remove(hostname).is_some()
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Drops every entry already expired at `now`. Returns how many were removed.
    pub fn purge_expired(&self, now: Instant) -> usize {
        let mut removed = 0usize;
        self.entries.retain(|_, entry| {
            let keep = entry.is_valid_at(now);
            if !keep {
                removed += 1;
            }
            keep
        });

        if removed > 0 {
            self.metrics
                .expirations
                .fetch_add(removed as u64, AtomicOrdering::Relaxed);
            debug!(removed = removed, "Purged expired cache entries");
        }
        removed
    }

    /// Diagnostic view of the current contents, sorted by hostname.
    pub fn entries(&self, now: Instant) -> Vec<CacheEntrySnapshot> {
        let mut snapshot: Vec<CacheEntrySnapshot> = self
            .entries
            .iter()
            .map(|item| CacheEntrySnapshot {
                hostname: Arc::clone(item.key()),
                addresses: Arc::clone(&item.value().addresses),
                remaining_ttl: item.value().remaining_ttl(now),
            })
            .collect();

        snapshot.sort_by(|a, b| a.hostname.cmp(&b.hostname));
        snapshot
    }

    fn make_room(&self, max: usize, now: Instant) {
        self.purge_expired(now);
        if self.entries.len() < max {
            return;
        }

        let victim = self
            .entries
            .iter()
            .min_by_key(|item| item.value().expires_at)
            .map(|item| Arc::clone(item.key()));

        if let Some(key) = victim {
            if self.entries.remove(&key).is_some() {
                self.metrics.evictions.fetch_add(1, AtomicOrdering::Relaxed);
                debug!(hostname = %key, "Evicted entry closest to expiry");
            }
        }
    }
}

impl DnsCachePort for ResolutionCache {
    fn cache_size(&self) -> usize {
        self.len()
    }

    fn cache_entries(&self) -> Vec<CacheEntrySnapshot> {
        self.entries(Instant::now())
    }

    fn cache_metrics_snapshot(&self) -> CacheMetricsSnapshot {
        self.metrics()
    }

    fn remove_record(&self, hostname: &str) -> bool {
        self.remove(hostname)
    }
}
