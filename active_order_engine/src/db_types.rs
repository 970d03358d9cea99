use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

//--------------------------------------        OrderId        ---------------------------------------------------------
/// The internal (database) identifier of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Type, Serialize, Deserialize)]
#[sqlx(transparent)]
pub struct OrderId(pub i64);

impl From<i64> for OrderId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//--------------------------------------        UserId         ---------------------------------------------------------
/// Identifies an authenticated customer. Guest orders have no owning user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Type, Serialize, Deserialize)]
#[sqlx(transparent)]
pub struct UserId(pub String);

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S: Into<String>> From<S> for UserId {
    fn from(value: S) -> Self {
        Self(value.into())
    }
}

impl UserId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//--------------------------------------       ChannelId       ---------------------------------------------------------
/// Identifies the sales channel a request is scoped to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Type, Serialize, Deserialize)]
#[sqlx(transparent)]
pub struct ChannelId(pub String);

impl Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S: Into<String>> From<S> for ChannelId {
    fn from(value: S) -> Self {
        Self(value.into())
    }
}

impl ChannelId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//--------------------------------------     SessionToken      ---------------------------------------------------------
/// The opaque token a session is keyed by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Type, Serialize, Deserialize)]
#[sqlx(transparent)]
pub struct SessionToken(pub String);

impl Display for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl<S: Into<String>> From<S> for SessionToken {
    fn from(value: S) -> Self {
        Self(value.into())
    }
}

impl SessionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

//--------------------------------------        Order          ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// The public-facing order reference, e.g. `"7GQ2XK4PZ0B9WJ1M"`
    pub code: String,
    /// The owning user. `None` for guest orders.
    pub customer_id: Option<UserId>,
    /// `false` once the order has completed checkout or has otherwise been finalized.
    pub active: bool,
    /// The sales channels this order is visible in.
    pub channels: Vec<ChannelId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn is_member_of(&self, channel_id: &ChannelId) -> bool {
        self.channels.iter().any(|c| c == channel_id)
    }

    pub fn is_guest_order(&self) -> bool {
        self.customer_id.is_none()
    }
}

//--------------------------------------        Session        ---------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub token: SessionToken,
    /// The order this session is currently operating on, if any. This pointer can go stale if an order is finalized
    /// without the session being updated.
    pub active_order_id: Option<OrderId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
