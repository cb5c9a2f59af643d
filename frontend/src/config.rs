//! Application configuration.
//!
//! Hardcoded for development; the backend serves the built app itself in
//! production, so relative URLs would also work there.

/// Backend API base URL.
pub const BACKEND_URL: &str = "http://localhost:3000";

/// Page and header title.
pub const APP_TITLE: &str = "Supply Chain & Logistics KPI Dashboard";

/// Selector value meaning "no constraint".
pub const ALL: &str = "All";
