//! #  Backend contracts.
//!
//! This module defines the interface contracts that storage backends must satisfy in order to be driven by the
//! [`ActiveOrderApi`](crate::ActiveOrderApi).
//!
//! ## Traits
//!
//! * [`OrderManagement`] covers the order queries the engine needs: a channel-filtered point lookup, the "current"
//!   active order for a user, and the creation of new orders.
//! * [`SessionManagement`] creates and fetches sessions. Callers use it to build a
//!   [`RequestContext`](crate::RequestContext).
//! * [`ActiveOrderBinding`] is the only place a session's active order pointer may be written. It is kept apart from
//!   [`SessionManagement`] so that the capability can be handed to the `ActiveOrderApi` alone.
mod active_order_binding;
mod order_management;
mod session_management;

pub use active_order_binding::ActiveOrderBinding;
pub use order_management::{OrderManagement, OrderManagementError};
pub use session_management::{SessionManagement, SessionManagementError};
