//! Error types for the catalog crate.
//!
//! Only loading a product document can fail. Reading fields of an already
//! loaded record never does: missing optional fields are plain `None`s.

use thiserror::Error;

/// Errors that can occur while loading a product document
#[derive(Error, Debug)]
pub enum CatalogError {
    /// File could not be found or opened
    #[error("Failed to open product document: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the document
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document is not a valid product record
    #[error("Invalid product document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
