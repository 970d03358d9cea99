use std::env;

use active_order_engine::{db_types::OrderId, SqliteDatabase};
use log::*;
use sqlx::{migrate::MigrateDatabase, Sqlite};

pub async fn prepare_test_env() -> SqliteDatabase {
    dotenvy::from_filename(".env.test").ok();
    let _ = env_logger::try_init();
    debug!("🚀️ Logging initialised");
    let url = random_db_path();
    let db = SqliteDatabase::new_with_url(&url, 5).await.expect("Error creating connection to database");
    db.run_migrations().await.expect("Error running DB migrations");
    info!("🚀️ Created Sqlite database {url}");
    db
}

pub fn random_db_path() -> String {
    let path = env::temp_dir().join(format!("aoe_test_store_{}.db", rand::random::<u64>()));
    format!("sqlite://{}", path.display())
}

pub async fn tear_down(db: SqliteDatabase) {
    db.close().await;
    if let Err(e) = Sqlite::drop_database(db.url()).await {
        warn!("🚀️ Error dropping database {}: {e:?}", db.url());
    }
}

/// Finalizes an order behind the engine's back, the way a checkout would.
pub async fn complete_checkout(db: &SqliteDatabase, order_id: OrderId) {
    sqlx::query("UPDATE orders SET active = 0, updated_at = CURRENT_TIMESTAMP WHERE id = $1")
        .bind(order_id)
        .execute(db.pool())
        .await
        .expect("Error completing checkout");
}

pub async fn set_updated_at(db: &SqliteDatabase, order_id: OrderId, timestamp: &str) {
    sqlx::query("UPDATE orders SET updated_at = $1 WHERE id = $2")
        .bind(timestamp)
        .bind(order_id)
        .execute(db.pool())
        .await
        .expect("Error updating order timestamp");
}
