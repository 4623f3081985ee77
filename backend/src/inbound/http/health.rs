//! Liveness and readiness probes for orchestrators and load balancers.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use actix_web::{HttpResponse, get, http::header, web};
use serde::Serialize;
use utoipa::ToSchema;

/// Shared health state for the probes.
///
/// The service starts live but not ready; it becomes ready once the
/// university catalogue is loaded and the listener is bound.
pub struct HealthState {
    ready: AtomicBool,
    records: AtomicUsize,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            ready: AtomicBool::new(false),
            records: AtomicUsize::new(0),
        }
    }
}

impl HealthState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the service ready, recording how many universities are served.
    pub fn mark_ready(&self, records: usize) {
        self.records.store(records, Ordering::Release);
        self.ready.store(true, Ordering::Release);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    pub fn records(&self) -> usize {
        self.records.load(Ordering::Acquire)
    }
}

/// Body of a successful readiness probe.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadinessReport {
    /// Number of universities loaded into the catalogue.
    #[schema(example = 30)]
    pub records: usize,
}

fn unavailable() -> HttpResponse {
    HttpResponse::ServiceUnavailable()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness probe. 200 with the record count once the catalogue is loaded,
/// 503 before that.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic", body = ReadinessReport),
        (status = 503, description = "Server is not ready")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    if !state.is_ready() {
        return unavailable();
    }
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .json(ReadinessReport {
            records: state.records(),
        })
}

/// Liveness probe. Answers 200 whenever the worker can serve requests.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive")
    )
)]
#[get("/health/live")]
pub async fn live() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}
