//! Fixed configuration for both stages.
//!
//! There are no environment variables and no config files: paths are
//! relative to the working directory and everything else is a constant.

use std::path::PathBuf;

/// Raw shipment export consumed by the transform stage.
pub const RAW_INPUT_PATH: &str = "supply_data.csv";

/// Interchange artifact written by the transform stage.
pub const OUTPUT_PATH: &str = "analytics_data.csv";

/// Rows of the cleaned output echoed after a successful run.
pub const PREVIEW_ROWS: usize = 5;

/// Entries kept in the route cost ranking.
pub const TOP_ROUTES: usize = 10;

/// Upper bound on delivery-time histogram bins.
pub const MAX_HISTOGRAM_BINS: usize = 40;

/// Default dashboard API port.
pub const DEFAULT_PORT: u16 = 3000;

/// Filter sentinel meaning "unconstrained".
pub const ALL: &str = "All";

/// Shown instead of a KPI value when the filtered subset is empty.
pub const KPI_PLACEHOLDER: &str = "N/A";

/// Transform stage settings.
#[derive(Debug, Clone)]
pub struct EtlConfig {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub preview_rows: usize,
}

impl Default for EtlConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(RAW_INPUT_PATH),
            output_path: PathBuf::from(OUTPUT_PATH),
            preview_rows: PREVIEW_ROWS,
        }
    }
}

/// Presentation stage settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub data_path: PathBuf,
    pub port: u16,
    /// Directory holding the built frontend, served at `/` when set.
    pub static_dir: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(OUTPUT_PATH),
            port: DEFAULT_PORT,
            static_dir: None,
        }
    }
}
