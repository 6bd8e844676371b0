use poem_openapi::{Object, OpenApi, payload::Json};

use crate::api::tags::ApiTags;

/// Health check response
#[derive(Debug, Clone, Object)]
pub struct HealthCheckResponse {
    /// HTTP status code of the check
    pub status: u16,
    /// "OK" while the service is running
    pub message: String,
}

/// Health API for liveness probes
pub struct Api;

impl Api {
    pub fn new() -> Self {
        Self
    }
}

#[OpenApi]
impl Api {
    /// Health check endpoint
    ///
    /// Returns `{"status": 200, "message": "OK"}` while the process is serving
    /// requests. It does not touch the product store.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health_check(&self) -> Json<HealthCheckResponse> {
        Json(HealthCheckResponse {
            status: 200,
            message: "OK".to_string(),
        })
    }
}
