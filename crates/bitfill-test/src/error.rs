//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while building test fixtures
#[derive(Debug, Error)]
pub enum TestError {
    /// A fixture row has the wrong width
    #[error("fixture row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// A fixture cell has no palette entry
    #[error("no palette entry for '{cell}' at ({x}, {y})")]
    UnknownCell { cell: char, x: u32, y: u32 },

    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] bitfill_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
