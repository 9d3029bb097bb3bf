//! Error types for the particle field
//!
//! Only the fallible edges have errors: config loading and acquiring a
//! drawing surface. The running effect itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FieldError>;
