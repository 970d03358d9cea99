//! `SqliteDatabase` is a concrete implementation of an active order engine backend.
//!
//! It uses SQLite for storage and implements all the traits defined in the [`traits`](crate::traits) module.
use std::fmt::Debug;

use log::*;
use sqlx::{migrate::Migrator, SqlitePool};

use super::{
    db::{new_pool, orders, sessions},
    SqliteDatabaseError,
};
use crate::{
    config::EngineConfig,
    db_types::{ChannelId, Order, OrderId, Session, SessionToken, UserId},
    helpers::{clamp_order_code_length, new_order_code},
    traits::{
        ActiveOrderBinding,
        OrderManagement,
        OrderManagementError,
        SessionManagement,
        SessionManagementError,
    },
    RequestContext,
};

static MIGRATOR: Migrator = sqlx::migrate!("./src/sqlite/migrations");

const DEFAULT_ORDER_CODE_LENGTH: usize = 16;

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
    order_code_length: usize,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    pub async fn new(config: &EngineConfig) -> Result<Self, SqliteDatabaseError> {
        let db = Self::new_with_url(&config.database_url, config.max_connections).await?;
        Ok(db.with_order_code_length(config.order_code_length))
    }

    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, SqliteDatabaseError> {
        trace!("🗃️ Creating new database connection pool with url {url}");
        let pool = new_pool(url, max_connections).await?;
        let url = url.to_string();
        Ok(Self { url, pool, order_code_length: DEFAULT_ORDER_CODE_LENGTH })
    }

    /// Sets the length of generated order codes. Lengths outside 8..=32 are clamped.
    pub fn with_order_code_length(mut self, length: usize) -> Self {
        self.order_code_length = clamp_order_code_length(length);
        self
    }

    /// The URL of the database
    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Returns a reference to the database connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Brings the database schema up to date. Safe to call on every start-up.
    pub async fn run_migrations(&self) -> Result<(), SqliteDatabaseError> {
        MIGRATOR.run(&self.pool).await?;
        info!("🗃️ Migrations complete");
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Adds an existing order to another sales channel.
    pub async fn add_order_to_channel(
        &self,
        order_id: OrderId,
        channel_id: &ChannelId,
    ) -> Result<(), OrderManagementError> {
        let mut conn = self.pool.acquire().await?;
        orders::add_order_to_channel(order_id, channel_id, &mut conn).await
    }
}

impl OrderManagement for SqliteDatabase {
    async fn fetch_order_in_channel(
        &self,
        _ctx: &RequestContext,
        order_id: OrderId,
        channel_id: &ChannelId,
    ) -> Result<Option<Order>, OrderManagementError> {
        let mut conn = self.pool.acquire().await?;
        orders::fetch_order_in_channel(order_id, channel_id, &mut conn).await
    }

    async fn fetch_active_order_for_user(
        &self,
        ctx: &RequestContext,
        user_id: &UserId,
    ) -> Result<Option<Order>, OrderManagementError> {
        let mut conn = self.pool.acquire().await?;
        orders::fetch_active_order_for_user(user_id, ctx.channel_id(), &mut conn).await
    }

    /// Inserts the order and its channel membership in a single transaction. The order code is random.
    async fn create_order(&self, ctx: &RequestContext, user_id: Option<UserId>) -> Result<Order, OrderManagementError> {
        let mut tx = self.pool.begin().await?;
        let code = new_order_code(self.order_code_length);
        let order = orders::insert_order(&code, user_id.as_ref(), ctx.channel_id(), &mut tx).await?;
        tx.commit().await?;
        Ok(order)
    }
}

impl SessionManagement for SqliteDatabase {
    async fn create_session(&self, token: &SessionToken) -> Result<Session, SessionManagementError> {
        let mut conn = self.pool.acquire().await?;
        sessions::idempotent_insert(token, &mut conn).await
    }

    async fn fetch_session(&self, token: &SessionToken) -> Result<Option<Session>, SessionManagementError> {
        let mut conn = self.pool.acquire().await?;
        sessions::fetch_session(token, &mut conn).await
    }
}

impl ActiveOrderBinding for SqliteDatabase {
    async fn set_active_order(
        &self,
        _ctx: &RequestContext,
        session: &Session,
        order: &Order,
    ) -> Result<(), SessionManagementError> {
        let mut conn = self.pool.acquire().await?;
        sessions::update_active_order(&session.token, Some(order.id), &mut conn).await
    }

    async fn unset_active_order(&self, _ctx: &RequestContext, session: &Session) -> Result<(), SessionManagementError> {
        let mut conn = self.pool.acquire().await?;
        sessions::update_active_order(&session.token, None, &mut conn).await
    }
}
