//! Service banner and health check endpoints

use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use utoipa::ToSchema;

use crate::service::LlmClient;

/// Fixed disclaimer shown on the service banner
const DISCLAIMER: &str =
    "This system provides probabilistic risk assessment and does not determine truth.";

#[derive(Serialize, ToSchema)]
pub struct ServiceBanner {
    pub status: String,
    pub service: String,
    pub version: String,
    pub disclaimer: String,
}

#[derive(Serialize, ToSchema)]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
}

#[derive(Serialize, ToSchema)]
pub struct ReadinessStatus {
    pub status: String,
    pub version: String,
    pub dependencies: DependencyHealth,
}

#[derive(Serialize, ToSchema)]
pub struct DependencyHealth {
    pub llm: String,
}

/// Service banner
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = ServiceBanner)
    ),
    tag = "health"
)]
#[get("/")]
pub async fn banner() -> impl Responder {
    HttpResponse::Ok().json(ServiceBanner {
        status: "operational".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        disclaimer: DISCLAIMER.to_string(),
    })
}

/// Liveness probe endpoint
///
/// Always returns 200 OK if the service is running.
#[utoipa::path(
    get,
    path = "/health/live",
    responses(
        (status = 200, description = "Service is alive", body = HealthStatus)
    ),
    tag = "health"
)]
#[get("/health/live")]
pub async fn liveness() -> impl Responder {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Readiness probe endpoint
///
/// The heuristic core has no hard dependencies, so the service is always
/// ready; the LLM backend's reachability is reported for the fact-check
/// pipeline's benefit.
#[utoipa::path(
    get,
    path = "/health/ready",
    responses(
        (status = 200, description = "Service is ready", body = ReadinessStatus)
    ),
    tag = "health"
)]
#[get("/health/ready")]
pub async fn readiness(llm: web::Data<LlmClient>) -> impl Responder {
    let llm_status = if llm.ping().await {
        tracing::debug!("LLM health check passed");
        "reachable"
    } else {
        tracing::debug!("LLM backend unreachable, fact-check will degrade");
        "unreachable"
    };

    HttpResponse::Ok().json(ReadinessStatus {
        status: "ready".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dependencies: DependencyHealth {
            llm: llm_status.to_string(),
        },
    })
}

/// Configure health check routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(banner).service(liveness).service(readiness);
}
