mod dns_cache_port;
mod dns_resolver;

pub use dns_cache_port::{CacheEntrySnapshot, CacheMetricsSnapshot, DnsCachePort};
pub use dns_resolver::{DnsResolution, DnsResolver};

// Re-export for convenience
pub use ferrous_stub_domain::DnsQuery;
