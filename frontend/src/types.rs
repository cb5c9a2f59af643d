//! Common types used across the frontend application.
//!
//! These mirror the JSON bodies of the dashboard API.
//!
//! # Categories
//!
//! - **Filter Types** - selector choices and the active selection
//! - **View Types** - KPIs, rankings, histogram, table rows
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::ALL;

// =============================================================================
// Filter Types
// =============================================================================

/// Selector choices from `/api/filters`. Both lists start with `"All"`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub carriers: Vec<String>,
    pub routes: Vec<String>,
}

/// Active carrier and route selection, `"All"` when unconstrained.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub carrier: String,
    pub route: String,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            carrier: ALL.to_string(),
            route: ALL.to_string(),
        }
    }
}

// =============================================================================
// View Types
// =============================================================================

/// KPI card text, `"N/A"` when nothing matches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiDisplay {
    pub on_time_rate: String,
    pub avg_delivery_days: String,
    pub avg_shipping_cost: String,
}

/// Headline KPIs with their card text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiCards {
    pub on_time_rate: Option<f64>,
    pub avg_delivery_days: Option<f64>,
    pub avg_shipping_cost: Option<f64>,
    pub display: KpiDisplay,
}

/// One bar of a ranking chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankingRow {
    pub label: String,
    pub value: f64,
}

/// A ranking chart, or the notice shown instead of it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RankingView {
    Ranking { rows: Vec<RankingRow> },
    Pinned { notice: String },
}

/// Half-open bin `[start, end)` of delivery days.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub start: i64,
    pub end: i64,
    pub count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Histogram {
    pub bin_width: i64,
    pub bins: Vec<HistogramBin>,
    pub marker: i64,
}

/// One row of the data explorer. Dates stay in their ISO text form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShipmentRow {
    pub estimated_delivery_date: String,
    pub actual_delivery_date: String,
    pub carrier_name: String,
    pub shipping_cost: f64,
    pub destination_country: String,
    pub delivery_time_days: i64,
    pub on_time: bool,
    pub route: String,
}

/// Response of `/api/dashboard`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub selection: Selection,
    pub record_count: usize,
    pub kpis: KpiCards,
    pub carrier_ranking: RankingView,
    pub route_cost_ranking: RankingView,
    pub histogram: Histogram,
    pub records: Vec<ShipmentRow>,
}

/// Error body returned by the API.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub status: String,
    pub error: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
#[derive(Clone, Debug)]
pub enum AppError {
    /// Network/HTTP error.
    Network(String),
    /// The server answered with an error status.
    Server { status: u16, message: String },
    /// Response body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server { status, message } => {
                write!(f, "Server error ({}): {}", status, message)
            }
            AppError::Decode(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
