//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur while preparing regression inputs
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a synthetic input
    #[error("failed to build synthetic input: {0}")]
    Core(#[from] glrl_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
