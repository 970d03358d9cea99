use thiserror::Error;

use crate::{
    db_types::{ChannelId, Order, OrderId, UserId},
    RequestContext,
};

#[derive(Debug, Clone, Error)]
pub enum OrderManagementError {
    #[error("We have an internal database engine (configuration/uptime etc.) : {0}")]
    DatabaseError(String),
    #[error("Could not create a new order: {0}")]
    OrderCreationError(String),
}

impl From<sqlx::Error> for OrderManagementError {
    fn from(e: sqlx::Error) -> Self {
        OrderManagementError::DatabaseError(e.to_string())
    }
}

/// The `OrderManagement` trait defines the order queries the active order engine relies on.
///
/// None of these methods change an existing order. Order lifecycle (checkout, completion, cancellation) belongs to
/// other parts of the system.
#[allow(async_fn_in_trait)]
pub trait OrderManagement {
    /// Fetches the order with the given id, but only if it is a member of `channel_id`.
    ///
    /// An order that exists but is not visible in the channel is indistinguishable from one that does not exist, and
    /// `None` is returned in both cases. Inactive orders are returned as-is; it is up to the caller to decide what to
    /// do with them.
    async fn fetch_order_in_channel(
        &self,
        ctx: &RequestContext,
        order_id: OrderId,
        channel_id: &ChannelId,
    ) -> Result<Option<Order>, OrderManagementError>;

    /// Fetches the current active order for the user in the context's channel, if there is one.
    ///
    /// When a user has more than one active order, the most recently updated one is the current order.
    async fn fetch_active_order_for_user(
        &self,
        ctx: &RequestContext,
        user_id: &UserId,
    ) -> Result<Option<Order>, OrderManagementError>;

    /// Creates and persists a new, active order in the context's channel. If `user_id` is `None`, a guest order is
    /// created.
    async fn create_order(&self, ctx: &RequestContext, user_id: Option<UserId>) -> Result<Order, OrderManagementError>;
}
