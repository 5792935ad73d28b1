//! Error taxonomy shared by the lifecycle, session and desk layers

use super::{RequestId, Role};
use crate::store::StoreError;

/// Result type for desk operations
pub type DeskResult<T> = Result<T, DeskError>;

/// Errors surfaced to the view layer. None of them is fatal to the process.
#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    #[error("Please fill in all fields ({0} is required)")]
    Validation(String),

    #[error("Request not found: {0}")]
    NotFound(RequestId),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("No one is signed in")]
    NotLoggedIn,

    #[error("This action needs the {required} role, signed in as {actual}")]
    WrongRole { required: Role, actual: Role },
}

impl DeskError {
    /// Short title shown above the error message
    pub fn title(&self) -> &'static str {
        match self {
            DeskError::Validation(_) => "Missing Information",
            DeskError::NotFound(_) => "Request Not Found",
            DeskError::Storage(_) => "Storage Unavailable",
            DeskError::NotLoggedIn | DeskError::WrongRole { .. } => "Not Allowed",
        }
    }
}
