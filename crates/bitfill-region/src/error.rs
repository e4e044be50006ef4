//! Error types for bitfill-region

use thiserror::Error;

/// Errors that can occur during region operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bitfill_core::Error),

    /// Seed position outside the surface
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: i64, y: i64 },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;
