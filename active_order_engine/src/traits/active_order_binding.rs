use crate::{
    db_types::{Order, Session},
    traits::SessionManagementError,
    RequestContext,
};

/// Write access to a session's active order pointer.
///
/// Both operations are single-field writes and must be idempotent: binding the order that is already bound, or
/// clearing a pointer that is already clear, succeeds and changes nothing.
#[allow(async_fn_in_trait)]
pub trait ActiveOrderBinding {
    /// Points the session at `order`.
    async fn set_active_order(
        &self,
        ctx: &RequestContext,
        session: &Session,
        order: &Order,
    ) -> Result<(), SessionManagementError>;

    /// Clears the session's active order pointer.
    async fn unset_active_order(&self, ctx: &RequestContext, session: &Session) -> Result<(), SessionManagementError>;
}
