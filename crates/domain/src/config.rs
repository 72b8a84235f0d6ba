mod cache;
mod errors;
mod logging;
mod root;
mod upstream;

pub use cache::CacheConfig;
pub use errors::ConfigError;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
pub use upstream::UpstreamConfig;
