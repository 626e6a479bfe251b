use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};
use serde::{Deserialize, Serialize};

use persistence::client::SearchClient;

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Search backend reachability: "up" or "down"
    pub search: String,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Health API for liveness probes and monitoring
pub struct Api {
    search: SearchClient,
}

impl Api {
    pub fn new(search: SearchClient) -> Self {
        Self { search }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Public. The service reports itself healthy while it can answer; the
    /// `search` field tells whether the backend answered its ping.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        let search = if self.search.ping().await { "up" } else { "down" };

        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            search: search.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
