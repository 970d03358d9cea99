use active_order_engine::db_types::{ChannelId, Order, OrderId, Session, SessionToken};
use chrono::{TimeZone, Utc};

pub const DEFAULT_CHANNEL: &str = "default";

pub fn order(id: i64, active: bool, channels: &[&str]) -> Order {
    let ts = Utc.with_ymd_and_hms(2024, 3, 15, 18, 30, 0).unwrap();
    Order {
        id: OrderId(id),
        code: format!("ORDER{id:011}"),
        customer_id: None,
        active,
        channels: channels.iter().map(|c| ChannelId::from(*c)).collect(),
        created_at: ts,
        updated_at: ts,
    }
}

pub fn user_order(id: i64, user_id: &str) -> Order {
    let mut order = order(id, true, &[DEFAULT_CHANNEL]);
    order.customer_id = Some(user_id.into());
    order
}

pub fn session(token: &str, active_order_id: Option<i64>) -> Session {
    let ts = Utc.with_ymd_and_hms(2024, 3, 15, 18, 0, 0).unwrap();
    Session {
        id: 1,
        token: SessionToken::from(token),
        active_order_id: active_order_id.map(OrderId),
        created_at: ts,
        updated_at: ts,
    }
}
