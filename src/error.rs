// ============================================================
// Error Types
// ============================================================
// Burn modules panic when tensor shapes disagree. The `try_*`
// entry points and configuration validation check shapes first
// and report problems through ModelError instead.
//
// The application and CLI layers wrap this in anyhow::Result.

use thiserror::Error;

/// Errors raised while validating a configuration or an input tensor.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A hyperparameter is out of range or the dimensions don't compose
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A tensor reached a stage with the wrong shape
    #[error("Shape mismatch at {stage}: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        stage:    &'static str,
        expected: Vec<usize>,
        actual:   Vec<usize>,
    },
}

impl ModelError {
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result alias used across the library layers.
pub type Result<T> = std::result::Result<T, ModelError>;
