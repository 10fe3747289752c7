//! DTO for the liveness endpoint.

use serde::Serialize;

/// Liveness response. Reports process health only; the store is not consulted.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
