use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Upper bound on cached hostnames. `0` leaves the cache unbounded.
    #[serde(default)]
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: 0,
        }
    }
}

impl CacheConfig {
    pub fn capacity(&self) -> Option<usize> {
        (self.max_entries > 0).then_some(self.max_entries)
    }
}

fn default_true() -> bool {
    true
}
