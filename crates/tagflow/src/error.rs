//! Layout error types.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    /// A dimension, spacing or available width was negative or NaN.
    #[error("invalid argument: {what} must be non-negative, got {value}")]
    InvalidArgument { what: String, value: f32 },
}
