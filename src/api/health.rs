use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;
use tracing::error;

use crate::api::job::JobService;

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    storage: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

async fn probe(
    service: &JobService,
    check: &str,
    up: &'static str,
    down: &'static str,
) -> HttpResponse {
    match service.ping().await {
        Ok(()) => HttpResponse::Ok().json(HealthResponse {
            status: up,
            storage: "connected",
            error: None,
        }),
        Err(e) => {
            error!("{} check failed: storage unavailable: {:?}", check, e);
            HttpResponse::ServiceUnavailable().json(HealthResponse {
                status: down,
                storage: "disconnected",
                error: Some(format!("Storage error: {}", e)),
            })
        }
    }
}

/// General health check including storage connectivity.
#[get("/health")]
async fn health_check(service: web::Data<JobService>) -> impl Responder {
    probe(&service, "Health", "healthy", "unhealthy").await
}

/// Readiness check endpoint
///
/// Returns 503 while the store is unreachable so load balancers stop routing
/// here; the process keeps running and recovers when the store returns.
#[get("/ready")]
async fn readiness_check(service: web::Data<JobService>) -> impl Responder {
    probe(&service, "Readiness", "ready", "not_ready").await
}

/// Liveness check endpoint. Does not check dependencies.
#[get("/live")]
async fn liveness_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "alive",
        storage: "not_checked",
        error: None,
    })
}

pub fn health_config(config: &mut web::ServiceConfig) {
    config
        .service(health_check)
        .service(readiness_check)
        .service(liveness_check);
}
