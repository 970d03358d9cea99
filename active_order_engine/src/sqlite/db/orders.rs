use chrono::{DateTime, Utc};
use log::{debug, trace};
use sqlx::{FromRow, SqliteConnection};

use crate::{
    db_types::{ChannelId, Order, OrderId, UserId},
    traits::OrderManagementError,
};

/// A row of the `orders` table. Channel memberships live in `order_channels`.
#[derive(Debug, Clone, FromRow)]
struct OrderRecord {
    id: OrderId,
    code: String,
    customer_id: Option<UserId>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRecord {
    fn with_channels(self, channels: Vec<ChannelId>) -> Order {
        Order {
            id: self.id,
            code: self.code,
            customer_id: self.customer_id,
            active: self.active,
            channels,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Fetches the order with the given id, provided it is a member of `channel_id`. The order's full channel list is
/// loaded as well.
pub async fn fetch_order_in_channel(
    order_id: OrderId,
    channel_id: &ChannelId,
    conn: &mut SqliteConnection,
) -> Result<Option<Order>, OrderManagementError> {
    let record = sqlx::query_as::<_, OrderRecord>(
        r#"
            SELECT
                orders.id,
                orders.code,
                orders.customer_id,
                orders.active,
                orders.created_at,
                orders.updated_at
            FROM orders INNER JOIN order_channels ON order_channels.order_id = orders.id
            WHERE orders.id = $1 AND order_channels.channel_id = $2
            LIMIT 1;
        "#,
    )
    .bind(order_id)
    .bind(channel_id)
    .fetch_optional(&mut *conn)
    .await?;
    match record {
        Some(record) => {
            let channels = fetch_channels_for_order(record.id, conn).await?;
            Ok(Some(record.with_channels(channels)))
        },
        None => {
            trace!("🗃️ Order {order_id} does not exist in channel {channel_id}");
            Ok(None)
        },
    }
}

/// Returns the most recently updated active order belonging to `user_id` in the given channel.
pub async fn fetch_active_order_for_user(
    user_id: &UserId,
    channel_id: &ChannelId,
    conn: &mut SqliteConnection,
) -> Result<Option<Order>, OrderManagementError> {
    let record = sqlx::query_as::<_, OrderRecord>(
        r#"
            SELECT
                orders.id,
                orders.code,
                orders.customer_id,
                orders.active,
                orders.created_at,
                orders.updated_at
            FROM orders INNER JOIN order_channels ON order_channels.order_id = orders.id
            WHERE orders.customer_id = $1 AND orders.active = 1 AND order_channels.channel_id = $2
            ORDER BY orders.updated_at DESC, orders.id DESC
            LIMIT 1;
        "#,
    )
    .bind(user_id)
    .bind(channel_id)
    .fetch_optional(&mut *conn)
    .await?;
    match record {
        Some(record) => {
            let channels = fetch_channels_for_order(record.id, conn).await?;
            Ok(Some(record.with_channels(channels)))
        },
        None => Ok(None),
    }
}

/// Inserts a new active order in the given channel. This is not atomic. Embed the call inside a transaction and pass
/// `&mut *tx` as the connection argument if the order and its channel membership must be written together.
pub async fn insert_order(
    code: &str,
    customer_id: Option<&UserId>,
    channel_id: &ChannelId,
    conn: &mut SqliteConnection,
) -> Result<Order, OrderManagementError> {
    let record = sqlx::query_as::<_, OrderRecord>(
        r#"
            INSERT INTO orders (code, customer_id) VALUES ($1, $2)
            RETURNING id, code, customer_id, active, created_at, updated_at;
        "#,
    )
    .bind(code)
    .bind(customer_id)
    .fetch_one(&mut *conn)
    .await?;
    add_order_to_channel(record.id, channel_id, conn).await?;
    debug!("🗃️ Order {} [{code}] has been saved in the DB in channel {channel_id}", record.id);
    Ok(record.with_channels(vec![channel_id.clone()]))
}

/// Makes the order visible in `channel_id`. Adding a channel the order is already a member of has no effect.
pub async fn add_order_to_channel(
    order_id: OrderId,
    channel_id: &ChannelId,
    conn: &mut SqliteConnection,
) -> Result<(), OrderManagementError> {
    sqlx::query("INSERT OR IGNORE INTO order_channels (order_id, channel_id) VALUES ($1, $2)")
        .bind(order_id)
        .bind(channel_id)
        .execute(conn)
        .await?;
    Ok(())
}

pub async fn fetch_channels_for_order(
    order_id: OrderId,
    conn: &mut SqliteConnection,
) -> Result<Vec<ChannelId>, OrderManagementError> {
    let channels = sqlx::query_scalar::<_, ChannelId>(
        "SELECT channel_id FROM order_channels WHERE order_id = $1 ORDER BY channel_id ASC",
    )
    .bind(order_id)
    .fetch_all(conn)
    .await?;
    Ok(channels)
}
