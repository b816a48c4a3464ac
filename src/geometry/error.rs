//! Geometry error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// An input dimension or factor violated a precondition.
    /// The message is the boundary-facing description of the violation.
    #[error("{message}")]
    InvalidParameter { message: String },
}

impl GeometryError {
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        GeometryError::InvalidParameter {
            message: message.into(),
        }
    }
}
