//! HTTP API module.
//!
//! Dashboard server, API types and the operator progress log.

pub mod logs;
pub mod server;
pub mod types;

pub use logs::*;
pub use server::{build_router, start_server, AppState};
pub use types::*;
