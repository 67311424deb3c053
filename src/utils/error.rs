// src/utils/error.rs
use thiserror::Error;

// Define specific error types for each stage of the pipeline
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network request failed: {0}")]
    Network(#[from] reqwest::Error), // Automatically convert reqwest errors

    #[error("HTTP error: {0}")]
    Http(reqwest::StatusCode),

    #[error("Access to the game log page was refused (403)")]
    Forbidden,

    #[error("Game log page not found: {0}")]
    NotFound(String),

    #[error("Could not read saved page {path}: {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("No table found in page markup")]
    NoTableFound,
}

#[derive(Error, Debug)]
pub enum NormalizeError {
    /// A row that looked complete could not be coerced; the page layout probably changed.
    #[error("Data integrity error in row {row}, column {column} (value {value:?}): {reason}")]
    DataIntegrity {
        row: usize,
        column: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Fetching the game log failed: {0}")]
    Fetch(#[from] FetchError),

    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Normalization failed: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
