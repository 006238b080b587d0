//! Error types for the quote engine

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid dimension: {0}")]
    InvalidDimension(String),

    #[error("No catalog match: {0}")]
    NoCatalogMatch(String),

    #[error("No processor supports {pixels} pixels with {inputs} input source(s)")]
    NoProcessorFits { pixels: u64, inputs: u32 },

    #[error("Value out of range: {0}")]
    OutOfRange(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
