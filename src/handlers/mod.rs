use axum::{http::StatusCode, Json};
use serde_json::json;

use crate::models::{ServiceInfo, VersionInfo, SERVICE_NAME};

pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::OK, Json(json!({ "status": "ok", "service": SERVICE_NAME })))
}

/// Service information endpoint. Reads NAME / VERSION / APP_ENV per request;
/// missing variables fall back to the shipped defaults.
pub async fn info() -> (StatusCode, Json<ServiceInfo>) {
    (StatusCode::OK, Json(ServiceInfo::from_env()))
}

/// Service version endpoint.
pub async fn version() -> (StatusCode, Json<VersionInfo>) {
    (StatusCode::OK, Json(VersionInfo::from_env()))
}
