use chrono::Utc;
use poem_openapi::{payload::Json, Object, OpenApi, Tags};
use serde::{Deserialize, Serialize};

/// Health check API
pub struct HealthApi;

#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

/// Response model for the health check
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

#[OpenApi]
impl HealthApi {
    /// Current status of the API service
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
