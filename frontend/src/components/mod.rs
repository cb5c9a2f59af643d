//! UI Components for the shipment dashboard.
//!
//! # Layout Components
//! - [`Header`] - Top bar with the active selection
//! - [`Hero`] - Title and match count
//! - [`Footer`] - Page footer
//!
//! # Dashboard Components
//! - [`FilterBar`] - Carrier and route selectors
//! - [`KpiSection`] - Headline KPI cards
//! - [`RankingChart`] / [`HistogramChart`] - Performance charts
//! - [`DataTable`] - Filtered data explorer

mod charts;
mod filters;
mod footer;
mod header;
mod hero;
mod kpis;
mod table;

pub use charts::*;
pub use filters::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use kpis::*;
pub use table::*;
