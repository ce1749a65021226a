use std::env;
use std::net::SocketAddr;
use anyhow::{Context, Result};

/// Name reported by the health endpoint and used in startup logs
pub const SERVICE_NAME: &str = "mock-api-key-backend";

/// Log filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "mock_api_key_backend=info,tower_http=info";

const DEFAULT_PORT: u16 = 8080;
const BIND_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone)]
pub struct Config {
    pub service_name: String,
    pub service_port: u16,
    pub service_host: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_port_var(env::var("PORT").ok())
    }

    fn from_port_var(port: Option<String>) -> Result<Self> {
        let service_port = match port {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number (0-65535), got '{}'", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            service_name: SERVICE_NAME.to_string(),
            service_port,
            service_host: BIND_HOST.to_string(),
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.service_host, self.service_port)
            .parse()
            .with_context(|| format!("invalid listen address {}:{}", self.service_host, self.service_port))
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service name: {}", self.service_name);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
