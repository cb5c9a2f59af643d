//! Backend services.
//!
//! - [`api`] - dashboard API client

pub mod api;

pub use api::*;
