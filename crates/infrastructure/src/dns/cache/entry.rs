use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// One resolved hostname. Valid while `now < expires_at`.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub addresses: Arc<Vec<Ipv4Addr>>,
    pub expires_at: Instant,
}

impl CacheEntry {
    pub fn new(addresses: Vec<Ipv4Addr>, ttl: u32, now: Instant) -> Option<Self> {
        let expires_at = now.checked_add(Duration::from_secs(u64::from(ttl)))?;
        Some(Self {
            addresses: Arc::new(addresses),
            expires_at,
        })
    }

    #[inline]
    pub fn is_valid_at(&self, now: Instant) -> bool {
        now < self.expires_at
    }

    pub fn remaining_ttl(&self, now: Instant) -> Option<Duration> {
        if self.is_valid_at(now) {
            Some(self.expires_at - now)
        } else {
            None
        }
    }
}
