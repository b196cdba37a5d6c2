//! Error types for derby-color

use thiserror::Error;

/// Errors that can occur during color conversion
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] derby_core::Error),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
