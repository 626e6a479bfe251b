use std::env;
use std::time::Duration;

use anyhow::Context;
use poem::middleware::Cors;

use super::{cors_config, server_config::ServerConfig};

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    /// Deadline attached to every request context.
    pub request_timeout: Duration,
}

impl AppConfig {
    /// Environment variables:
    /// - REQUEST_TIMEOUT_SECS: per-request deadline in seconds (default: 10)
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            cors: cors_config::init_cors(),
            request_timeout: request_timeout(env::var("REQUEST_TIMEOUT_SECS").ok())?,
        })
    }
}

fn request_timeout(value: Option<String>) -> anyhow::Result<Duration> {
    let Some(value) = value else {
        return Ok(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    };

    let secs: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("REQUEST_TIMEOUT_SECS must be a whole number, got {value:?}"))?;
    anyhow::ensure!(secs > 0, "REQUEST_TIMEOUT_SECS must be positive");

    Ok(Duration::from_secs(secs))
}
