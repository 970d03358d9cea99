use serde::{Deserialize, Serialize};

use crate::db_types::{Order, SessionToken};

/// Emitted when the engine had to create a new order for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCreatedEvent {
    pub order: Order,
    pub session: SessionToken,
}

impl OrderCreatedEvent {
    pub fn new(order: Order, session: SessionToken) -> Self {
        Self { order, session }
    }
}

/// Emitted when a session was found pointing at a finalized order and the pointer was cleared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRepairedEvent {
    pub session: SessionToken,
    pub stale_order: Order,
}

impl SessionRepairedEvent {
    pub fn new(session: SessionToken, stale_order: Order) -> Self {
        Self { session, stale_order }
    }
}
