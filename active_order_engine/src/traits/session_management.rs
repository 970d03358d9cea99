use thiserror::Error;

use crate::db_types::{Session, SessionToken};

#[derive(Debug, Clone, Error)]
pub enum SessionManagementError {
    #[error("We have an internal database engine (configuration/uptime etc.) : {0}")]
    DatabaseError(String),
    #[error("The session {0} does not exist")]
    SessionNotFound(SessionToken),
}

impl From<sqlx::Error> for SessionManagementError {
    fn from(e: sqlx::Error) -> Self {
        SessionManagementError::DatabaseError(e.to_string())
    }
}

/// Creation and lookup of sessions.
///
/// Note that there is no way to change a session's active order through this trait. See
/// [`ActiveOrderBinding`](crate::traits::ActiveOrderBinding).
#[allow(async_fn_in_trait)]
pub trait SessionManagement {
    /// Creates a session for the given token. If a session already exists for the token, it is returned unchanged.
    async fn create_session(&self, token: &SessionToken) -> Result<Session, SessionManagementError>;

    async fn fetch_session(&self, token: &SessionToken) -> Result<Option<Session>, SessionManagementError>;
}
