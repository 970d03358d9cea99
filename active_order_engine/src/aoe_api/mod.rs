//! # Active order engine public API
//!
//! * [`active_order_api`] resolves the order a session is currently operating on, creating one on demand, and repairs
//!   sessions whose order pointer has gone stale.
//! * [`active_order_objects`] holds the result types of a resolution.
//!
//! # API usage
//!
//! An API instance is created by supplying the backends that implement the traits it requires. The session binding
//! capability is moved into the API, so nothing else in the process can rewrite a session's order pointer.
//!
//! ```rust,ignore
//! use active_order_engine::{ActiveOrderApi, RequestContext, SqliteDatabase};
//! let db = SqliteDatabase::new_with_url("sqlite://data/active_orders.db", 5).await?;
//! let api = ActiveOrderApi::new(db.clone(), db.clone());
//! let session = db.create_session(&"3f9c1e".into()).await?;
//! let ctx = RequestContext::new("default").with_session(session);
//! let cart = api.active_order_or_create(&ctx).await?;
//! ```

pub mod active_order_api;
pub mod active_order_objects;
pub mod errors;
