//! Interchange artifact codec.
//!
//! The artifact is a UTF-8 CSV with a header row in the order of
//! [`crate::models::INTERCHANGE_HEADER`]. The transform stage writes it
//! once per run and the presentation stage only ever reads it.

pub mod reader;
pub mod writer;

pub use reader::{load_records, read_records};
pub use writer::{encode_records, write_records};
