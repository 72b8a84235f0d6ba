//! Ferrous Stub Domain Layer
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;

pub use config::{CacheConfig, CliOverrides, Config, ConfigError, LoggingConfig, UpstreamConfig};
pub use dns_query::DnsQuery;
pub use dns_record::{DnsClass, RecordType};
pub use errors::DomainError;
