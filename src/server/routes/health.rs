//! Health check and status endpoints

use crate::server::routes::ApiResponse;
use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Serialize;
use std::borrow::Cow;
use tracing::debug;

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/version", web::get().to(version_info));
}

/// Health status payload
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Service status
    pub status: Cow<'static, str>,
    /// Response timestamp
    pub timestamp: chrono::DateTime<chrono::Utc>,
    /// Crate version
    pub version: Cow<'static, str>,
}

/// Version information payload
#[derive(Debug, Serialize)]
pub struct VersionInfo {
    /// Crate version
    pub version: Cow<'static, str>,
    /// Build timestamp (epoch seconds)
    pub build_time: Cow<'static, str>,
    /// Git commit hash
    pub git_hash: Cow<'static, str>,
    /// Rust version used for compilation
    pub rust_version: Cow<'static, str>,
}

/// Basic health check endpoint
///
/// Used by load balancers and monitoring; always returns healthy while the
/// process is serving requests.
pub async fn health_check() -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let health_status = HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(health_status)))
}

/// Build and version information endpoint
pub async fn version_info() -> ActixResult<HttpResponse> {
    let info = VersionInfo {
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        build_time: Cow::Borrowed(env!("BUILD_TIME")),
        git_hash: Cow::Borrowed(env!("GIT_HASH")),
        rust_version: Cow::Borrowed(env!("RUST_VERSION")),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(info)))
}
