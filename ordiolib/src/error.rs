//! Single error type of the public API.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OrdioError {
    #[error("file {} not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("file format {0:?} is not supported")]
    UnsupportedFormat(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("order {0} not found")]
    NotFound(i32),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XML error: {0}")]
    Xml(String),
}

pub type Result<T> = std::result::Result<T, OrdioError>;
