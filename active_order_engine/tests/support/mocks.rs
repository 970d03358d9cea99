use active_order_engine::{
    db_types::{ChannelId, Order, OrderId, Session, UserId},
    ActiveOrderBinding,
    OrderManagement,
    OrderManagementError,
    RequestContext,
    SessionManagementError,
};
use mockall::mock;

mock! {
    pub OrderManager {}
    impl OrderManagement for OrderManager {
        async fn fetch_order_in_channel(&self, ctx: &RequestContext, order_id: OrderId, channel_id: &ChannelId) -> Result<Option<Order>, OrderManagementError>;
        async fn fetch_active_order_for_user(&self, ctx: &RequestContext, user_id: &UserId) -> Result<Option<Order>, OrderManagementError>;
        async fn create_order(&self, ctx: &RequestContext, user_id: Option<UserId>) -> Result<Order, OrderManagementError>;
    }
}

mock! {
    pub SessionBinder {}
    impl ActiveOrderBinding for SessionBinder {
        async fn set_active_order(&self, ctx: &RequestContext, session: &Session, order: &Order) -> Result<(), SessionManagementError>;
        async fn unset_active_order(&self, ctx: &RequestContext, session: &Session) -> Result<(), SessionManagementError>;
    }
}
