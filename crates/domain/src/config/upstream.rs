use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

/// The single upstream server every query is sent to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_server")]
    pub server: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    #[serde(default = "default_recv_buffer_size")]
    pub recv_buffer_size: usize,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            port: default_port(),
            query_timeout_ms: default_query_timeout_ms(),
            recv_buffer_size: default_recv_buffer_size(),
        }
    }
}

impl UpstreamConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.server.parse().map_err(|e| {
            ConfigError::Validation(format!("Invalid upstream server '{}': {}", self.server, e))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }
}

fn default_server() -> String {
    "8.8.8.8".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout_ms() -> u64 {
    2000
}

fn default_recv_buffer_size() -> usize {
    1024
}
