//! REST API types for frontend integration.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::dashboard::{FilterState, Selection};
use crate::error::ServerError;

/// Query string of `GET /api/dashboard`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardQuery {
    pub carrier: Option<String>,
    pub route: Option<String>,
}

impl DashboardQuery {
    pub fn selection(&self) -> FilterState {
        FilterState::new(
            Selection::from_param(self.carrier.as_deref()),
            Selection::from_param(self.route.as_deref()),
        )
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub records: usize,
}

/// Create an error response body
pub fn error_response(error: &str) -> Value {
    json!({
        "status": "error",
        "error": error,
    })
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match self {
            ServerError::UnknownSelection { .. } => StatusCode::BAD_REQUEST,
            ServerError::Load(_) | ServerError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(error_response(&self.to_string()))).into_response()
    }
}
