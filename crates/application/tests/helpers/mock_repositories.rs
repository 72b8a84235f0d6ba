#![allow(dead_code)]

use async_trait::async_trait;
use ferrous_stub_application::ports::{
    CacheEntrySnapshot, CacheMetricsSnapshot, DnsCachePort, DnsResolution, DnsResolver,
};
use ferrous_stub_domain::{DnsQuery, DomainError};
use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

#[derive(Clone, Default)]
pub struct MockDnsResolver {
    responses: Arc<RwLock<HashMap<String, DnsResolution>>>,
    error_responses: Arc<RwLock<HashMap<String, DomainError>>>,
    seen_queries: Arc<Mutex<Vec<DnsQuery>>>,
}

impl MockDnsResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_response(&self, domain: &str, resolution: DnsResolution) {
        self.responses
            .write()
            .unwrap()
            .insert(domain.to_string(), resolution);
    }

    pub fn set_error(&self, domain: &str, error: DomainError) {
        self.error_responses
            .write()
            .unwrap()
            .insert(domain.to_string(), error);
    }

    pub fn seen_queries(&self) -> Vec<DnsQuery> {
        self.seen_queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsResolver for MockDnsResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        self.seen_queries.lock().unwrap().push(query.clone());

        if let Some(err) = self.error_responses.read().unwrap().get(query.domain.as_ref()) {
            return Err(err.clone());
        }

        self.responses
            .read()
            .unwrap()
            .get(query.domain.as_ref())
            .cloned()
            .ok_or(DomainError::NoRecords)
    }
}

#[derive(Default)]
pub struct MockDnsCache {
    entries: RwLock<HashMap<String, (Vec<Ipv4Addr>, Option<Duration>)>>,
    metrics: RwLock<CacheMetricsSnapshot>,
}

impl MockDnsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, hostname: &str, addresses: Vec<Ipv4Addr>, remaining: Option<Duration>) {
        self.entries
            .write()
            .unwrap()
            .insert(hostname.to_string(), (addresses, remaining));
    }

    pub fn set_metrics(&self, metrics: CacheMetricsSnapshot) {
        *self.metrics.write().unwrap() = metrics;
    }
}

impl DnsCachePort for MockDnsCache {
    fn cache_size(&self) -> usize {
        self.entries.read().unwrap().len()
    }

    fn cache_entries(&self) -> Vec<CacheEntrySnapshot> {
        let mut entries: Vec<CacheEntrySnapshot> = self
            .entries
            .read()
            .unwrap()
            .iter()
            .map(|(hostname, (addresses, remaining))| CacheEntrySnapshot {
                hostname: Arc::from(hostname.as_str()),
                addresses: Arc::new(addresses.clone()),
                remaining_ttl: *remaining,
            })
            .collect();
        entries.sort_by(|a, b| a.hostname.cmp(&b.hostname));
        entries
    }

    fn cache_metrics_snapshot(&self) -> CacheMetricsSnapshot {
        let mut metrics = self.metrics.read().unwrap().clone();
        metrics.total_entries = self.cache_size();
        metrics
    }

    fn remove_record(&self, hostname: &str) -> bool {
        self.entries.write().unwrap().remove(hostname).is_some()
    }
}
