//! Error type for the pipeline driver

use thiserror::Error;

/// Any failure of a pipeline stage.
#[derive(Debug, Error)]
pub enum DerbyError {
    #[error(transparent)]
    Core(#[from] derby_core::Error),

    #[error(transparent)]
    Color(#[from] derby_color::ColorError),

    #[error(transparent)]
    Filter(#[from] derby_filter::FilterError),

    #[error(transparent)]
    Io(#[from] derby_io::IoError),
}

/// Result type for pipeline operations
pub type DerbyResult<T> = Result<T, DerbyError>;
