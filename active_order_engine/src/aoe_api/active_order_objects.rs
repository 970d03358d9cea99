use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::db_types::Order;

/// How the engine arrived at the active order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedFrom {
    /// The session already pointed at a valid order. Nothing was written.
    SessionPointer,
    /// The session had no valid order, and the user's current active order was bound to it.
    UserFallback,
    /// No order could be found, so a new one was created and bound to the session.
    Created,
}

impl Display for ResolvedFrom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolvedFrom::SessionPointer => write!(f, "SessionPointer"),
            ResolvedFrom::UserFallback => write!(f, "UserFallback"),
            ResolvedFrom::Created => write!(f, "Created"),
        }
    }
}

/// An order that is active, visible in the request's channel, and bound to the request's session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveOrder {
    pub order: Order,
    pub resolved_from: ResolvedFrom,
}

impl ActiveOrder {
    pub fn new(order: Order, resolved_from: ResolvedFrom) -> Self {
        Self { order, resolved_from }
    }

    /// True if the session's order pointer was written while resolving this order.
    pub fn was_rebound(&self) -> bool {
        self.resolved_from != ResolvedFrom::SessionPointer
    }

    pub fn into_order(self) -> Order {
        self.order
    }
}
