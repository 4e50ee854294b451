use rocket::serde::json::Json;
use serde::Serialize;

/// # Service Information
#[derive(Serialize, JsonSchema, Debug)]
pub struct RootResponse {
    /// Service description
    pub wardlens: &'static str,
    /// Service version
    pub version: &'static str,
}

/// # Health Status
#[derive(Serialize, JsonSchema, Debug)]
pub struct HealthResponse {
    /// Always "ok" while the service is able to answer
    pub status: &'static str,
    /// Name of the answering service
    pub service: &'static str,
}

/// # Query Node
///
/// Fetch information about this Wardlens instance.
#[openapi(tag = "Core")]
#[get("/")]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        wardlens: "Report, track and resolve municipal issues from photo evidence.",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// # Health Check
///
/// Liveness probe for deployment tooling.
#[openapi(tag = "Core")]
#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "wardlens-api",
    })
}
