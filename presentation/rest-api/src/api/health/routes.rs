use chrono::Utc;
use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Object)]
pub struct HealthCheckResponse {
    /// Service status
    pub status: String,
    /// Whether an OpenAI key is configured
    pub ai_configured: bool,
    /// Whether processed texts are stored in a database
    pub persistence_enabled: bool,
    /// Current server timestamp
    pub timestamp: String,
    /// Service version
    pub version: String,
}

/// Health API for monitoring and infrastructure checks
pub struct Api {
    ai_configured: bool,
    persistence_enabled: bool,
}

impl Api {
    pub fn new(ai_configured: bool, persistence_enabled: bool) -> Self {
        Self {
            ai_configured,
            persistence_enabled,
        }
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns the current status of the service and which optional
    /// collaborators were enabled at startup.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: "healthy".to_string(),
            ai_configured: self.ai_configured,
            persistence_enabled: self.persistence_enabled,
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        })
    }
}
