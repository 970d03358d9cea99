use thiserror::Error;

use crate::traits::{OrderManagementError, SessionManagementError};

#[derive(Debug, Clone, Error)]
pub enum ActiveOrderApiError {
    /// The caller asked for the active order of a request that has no session. This is an integration bug, not a
    /// condition that a user can recover from.
    #[error("No active session. The active order can only be resolved for requests that carry a session.")]
    NoActiveSession,
    #[error("{0}")]
    SessionError(#[from] SessionManagementError),
    #[error("{0}")]
    OrderError(#[from] OrderManagementError),
}

impl ActiveOrderApiError {
    /// True for errors that indicate the engine was called incorrectly, rather than a failure in a backend.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ActiveOrderApiError::NoActiveSession)
    }
}
