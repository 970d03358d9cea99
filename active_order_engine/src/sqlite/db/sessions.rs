use log::{debug, trace};
use sqlx::SqliteConnection;

use crate::{
    db_types::{OrderId, Session, SessionToken},
    traits::SessionManagementError,
};

/// Inserts a session for `token`, unless one already exists, and returns the stored session.
pub async fn idempotent_insert(
    token: &SessionToken,
    conn: &mut SqliteConnection,
) -> Result<Session, SessionManagementError> {
    let result = sqlx::query("INSERT INTO sessions (token) VALUES ($1) ON CONFLICT (token) DO NOTHING")
        .bind(token)
        .execute(&mut *conn)
        .await?;
    if result.rows_affected() > 0 {
        debug!("🗃️ New session {token} has been saved in the DB");
    }
    fetch_session(token, conn).await?.ok_or_else(|| SessionManagementError::SessionNotFound(token.clone()))
}

pub async fn fetch_session(
    token: &SessionToken,
    conn: &mut SqliteConnection,
) -> Result<Option<Session>, SessionManagementError> {
    let session = sqlx::query_as::<_, Session>(
        r#"
            SELECT id, token, active_order_id, created_at, updated_at
            FROM sessions
            WHERE token = $1;
        "#,
    )
    .bind(token)
    .fetch_optional(conn)
    .await?;
    Ok(session)
}

/// Writes the session's order pointer. Passing `None` clears it. This is the only function that writes
/// `sessions.active_order_id`.
pub async fn update_active_order(
    token: &SessionToken,
    order_id: Option<OrderId>,
    conn: &mut SqliteConnection,
) -> Result<(), SessionManagementError> {
    let result =
        sqlx::query("UPDATE sessions SET active_order_id = $1, updated_at = CURRENT_TIMESTAMP WHERE token = $2")
            .bind(order_id)
            .bind(token)
            .execute(conn)
            .await?;
    if result.rows_affected() == 0 {
        return Err(SessionManagementError::SessionNotFound(token.clone()));
    }
    match order_id {
        Some(id) => trace!("🗃️ Session {token} now points at order {id}"),
        None => trace!("🗃️ Session {token} no longer points at an order"),
    }
    Ok(())
}
