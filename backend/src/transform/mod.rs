//! Transform (ETL) stage.
//!
//! - Projection: pick and rename the five raw columns
//! - Coerce: parse-or-missing typing per field, completeness gate
//! - KPI: delivery time, on-time flag, route
//! - Pipeline: read, clean, derive, write

pub mod coerce;
pub mod kpi;
pub mod pipeline;
pub mod projection;

pub use coerce::{coerce, parse_cost, parse_date, CoercedShipment, CompleteShipment};
pub use kpi::derive_record;
pub use pipeline::*;
pub use projection::{project, Projection};
