//! # Shiptrack - shipment export cleaning and KPI dashboard
//!
//! Shiptrack turns a raw supply chain shipment export into a clean,
//! KPI-enriched CSV, then serves an interactive dashboard over it.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  Raw export │────▶│  Transform  │────▶│ analytics CSV│────▶│  Dashboard  │
//! │ (ISO/UTF8)  │     │ (clean+KPI) │     │ (interchange)│     │ (API + UI)  │
//! └─────────────┘     └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! The two stages share nothing but the interchange file.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shiptrack::{build_dashboard, run_etl, DatasetCache, EtlConfig, FilterState};
//!
//! let report = run_etl(&EtlConfig::default())?;
//! let cache = DatasetCache::new(&report.output_path);
//! let view = build_dashboard(cache.get()?, &FilterState::default());
//! println!("{}", view.kpis.display.on_time_rate);
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`config`] - File names and presentation constants
//! - [`models`] - Raw and cleaned shipment records
//! - [`parser`] - CSV parsing with auto-detection
//! - [`transform`] - Projection, coercion, KPI derivation, pipeline
//! - [`store`] - Interchange CSV codec
//! - [`cache`] - Load-once dataset cache
//! - [`dashboard`] - Filtering, KPIs, rankings, histogram
//! - [`report`] - Terminal rendering of the dashboard
//! - [`api`] - HTTP API server and progress log

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Transform stage
pub mod parser;
pub mod store;
pub mod transform;

// Presentation stage
pub mod cache;
pub mod dashboard;
pub mod report;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Errors and config
// =============================================================================

pub use config::{EtlConfig, ServerConfig};
pub use error::{CsvError, LoadError, ServerError, TransformError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{CleanedShipmentRecord, RawShipmentRecord, INTERCHANGE_HEADER};

// =============================================================================
// Re-exports - Transform stage
// =============================================================================

pub use parser::{parse_bytes_auto, parse_csv_file_auto, ParseResult};
pub use store::{load_records, write_records};
pub use transform::{clean_records, run_etl, run_etl_with_log, CleaningOutcome, EtlReport};

// =============================================================================
// Re-exports - Presentation stage
// =============================================================================

pub use cache::{Dataset, DatasetCache};
pub use dashboard::{build_dashboard, DashboardView, FilterOptions, FilterState, Selection};

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::logs::{LogEntry, LogLevel, ProgressLog};

// Server
pub mod server {
    pub use crate::api::server::{build_router, start_server};
}
