//! Error types for noise field generation

use std::fmt;

/// Errors that can occur when validating noise generation parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    /// Requested lattice dimension is not 1, 2, or 3
    InvalidDimension(usize),
    /// A parameter failed validation (non-positive size, scale, or octaves)
    InvalidParameter(String),
}

impl fmt::Display for NoiseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoiseError::InvalidDimension(d) => {
                write!(f, "invalid dimension: {} (must be 1, 2, or 3)", d)
            }
            NoiseError::InvalidParameter(msg) => write!(f, "invalid parameter: {}", msg),
        }
    }
}

impl std::error::Error for NoiseError {}

/// Result type alias for noise operations
pub type Result<T> = std::result::Result<T, NoiseError>;
