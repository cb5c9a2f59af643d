//! Error types for the shiptrack pipeline and dashboard.
//!
//! - [`CsvError`] - raw export reading errors
//! - [`TransformError`] - fatal transform stage errors
//! - [`LoadError`] - interchange artifact loading errors
//! - [`ServerError`] - dashboard API errors
//!
//! Conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;

use thiserror::Error;

// =============================================================================
// CSV Reading Errors
// =============================================================================

/// Errors while reading the raw shipment export.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed CSV content.
    #[error("Invalid CSV format at line {line}: {message}")]
    ParseError { line: u64, message: String },

    /// Empty file.
    #[error("CSV file is empty")]
    EmptyFile,

    /// Header row present but empty.
    #[error("No headers found in CSV")]
    NoHeaders,
}

// =============================================================================
// Transform Errors
// =============================================================================

/// Fatal errors of the transform stage.
///
/// Lossy coercions never show up here: an unparseable cost or date is a
/// missing value, not an error.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Raw input file does not exist. The message carries the download hint.
    #[error("'{}' not found.\nPlease download the dataset from Kaggle and rename it.", .0.display())]
    InputNotFound(PathBuf),

    /// One of the expected raw columns is absent.
    #[error("Missing source column: '{0}'")]
    MissingColumn(String),

    /// Raw export could not be read.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Output could not be written.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// Load Errors
// =============================================================================

/// Errors while loading the interchange artifact.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Interchange file does not exist.
    #[error("Interchange file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Interchange file could not be read.
    #[error("Failed to read interchange file: {0}")]
    Io(#[from] std::io::Error),

    /// Header or row does not match the interchange schema.
    #[error("Malformed interchange file at line {line}: {message}")]
    Malformed { line: u64, message: String },
}

// =============================================================================
// Server Errors
// =============================================================================

/// Dashboard API errors.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Dataset could not be loaded.
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    /// A filter was pinned to a value that is not in the dataset.
    #[error("Unknown {filter}: '{value}'")]
    UnknownSelection { filter: &'static str, value: String },

    /// Socket or static file error.
    #[error("Server IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for raw CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for the transform stage.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for interchange loading.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
