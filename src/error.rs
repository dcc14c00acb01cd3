//! Particle field error types.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("Invalid field configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Drawing surface is no longer available")]
    SurfaceUnavailable,
}

impl FieldError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}
