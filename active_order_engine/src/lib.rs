//! Active Order Engine
//!
//! The Active Order Engine works out which order ("cart") a storefront session is currently operating on. It reconciles
//! three sources of truth on every request: the order the session points at, the state of that order (is it still
//! active, and is it visible in the request's sales channel), and the orders already owned by the authenticated user,
//! if there is one.
//!
//! Sessions can end up pointing at orders that have since been finalized, e.g. when a checkout completes but the
//! process is interrupted before the session is updated. The engine detects and repairs this on the next request
//! rather than returning a completed order or creating a duplicate.
//!
//! The library is divided into these main sections:
//! 1. The backend contracts ([`mod@traits`]). Storage backends implement these in order to be driven by the engine.
//!    A SQLite backend ([`SqliteDatabase`]) is provided behind the `sqlite` feature, which is enabled by default.
//! 2. The public API ([`ActiveOrderApi`]), which implements the resolution protocol on top of any backend.
//! 3. A set of events ([`mod@events`]) that can be subscribed to, e.g. when an order is created for a session, or a
//!    stale session is repaired.
mod aoe_api;
mod request_context;

pub mod config;
pub mod db_types;
pub mod events;
pub mod helpers;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod traits;

pub use aoe_api::{
    active_order_api::ActiveOrderApi,
    active_order_objects::{ActiveOrder, ResolvedFrom},
    errors::ActiveOrderApiError,
};
pub use config::EngineConfig;
pub use request_context::RequestContext;
#[cfg(feature = "sqlite")]
pub use sqlite::{SqliteDatabase, SqliteDatabaseError};
pub use traits::{
    ActiveOrderBinding,
    OrderManagement,
    OrderManagementError,
    SessionManagement,
    SessionManagementError,
};
