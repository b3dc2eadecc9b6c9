//! Graphics error types.

use std::fmt;

/// Errors that can occur in the graphics system.
///
/// Programmer errors (duplicate application instances and the like) are not
/// represented here; those assert. This enum covers the fallible resource
/// path: backend selection and buffer/shader creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphicsError {
    /// The requested backend is not available in this build or environment.
    BackendUnavailable(String),
    /// Failed to create a resource.
    ResourceCreationFailed(String),
    /// An invalid parameter was provided.
    InvalidParameter(String),
    /// An internal error occurred.
    Internal(String),
}

impl fmt::Display for GraphicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BackendUnavailable(msg) => write!(f, "backend unavailable: {msg}"),
            Self::ResourceCreationFailed(msg) => write!(f, "resource creation failed: {msg}"),
            Self::InvalidParameter(msg) => write!(f, "invalid parameter: {msg}"),
            Self::Internal(msg) => write!(f, "internal error: {msg}"),
        }
    }
}

impl std::error::Error for GraphicsError {}
