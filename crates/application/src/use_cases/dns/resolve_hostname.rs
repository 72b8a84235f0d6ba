use crate::ports::DnsResolver;
use ferrous_stub_domain::{DnsQuery, DomainError, RecordType};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Resolves a hostname to its IPv4 addresses.
///
/// Every failure is logged here and collapsed to `None`; callers only ever see
/// an address list or nothing.
pub struct ResolveHostnameUseCase {
    resolver: Arc<dyn DnsResolver>,
}

impl ResolveHostnameUseCase {
    pub fn new(resolver: Arc<dyn DnsResolver>) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, hostname: &str, use_cache: bool) -> Option<Vec<String>> {
        let start = Instant::now();

        let mut query = DnsQuery::new(hostname, RecordType::A);
        if !use_cache {
            query = query.bypass_cache();
        }

        match self.resolver.resolve(&query).await {
            Ok(resolution) => {
                let addresses = resolution.address_strings();
                if resolution.cache_hit {
                    debug!(hostname = %hostname, addresses = ?addresses, "Resolved from cache");
                } else if !resolution.cached {
                    info!(
                        hostname = %hostname,
                        addresses = ?addresses,
                        "Resolved but could not cache (no usable TTL)"
                    );
                } else {
                    debug!(
                        hostname = %hostname,
                        addresses = ?addresses,
                        min_ttl = ?resolution.min_ttl,
                        elapsed_ms = start.elapsed().as_millis() as u64,
                        "Resolved from upstream"
                    );
                }
                Some(addresses)
            }
            Err(e) => {
                log_failure(hostname, &e);
                None
            }
        }
    }
}

fn log_failure(hostname: &str, error: &DomainError) {
    if error.is_no_data() {
        info!(hostname = %hostname, "No A records found");
    } else if error.is_transport_error() {
        warn!(hostname = %hostname, error = %error, "Upstream query failed");
    } else {
        warn!(hostname = %hostname, error = %error, "Failed to resolve");
    }
}
