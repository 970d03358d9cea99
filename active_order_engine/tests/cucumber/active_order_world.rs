use std::collections::HashMap;

use active_order_engine::{
    db_types::{Order, SessionToken},
    ActiveOrder,
    ActiveOrderApi,
    ActiveOrderApiError,
    RequestContext,
    SessionManagement,
    SqliteDatabase,
};
use cucumber::World;

use crate::support::prepare_env::prepare_test_env;

#[derive(Default, Debug, World)]
pub struct ActiveOrderWorld {
    pub system: Option<ActiveOrderSystem>,
    /// Orders created by the scenario, keyed by the name the scenario gave them
    pub orders: HashMap<String, Order>,
    pub last_result: Option<Result<Option<ActiveOrder>, ActiveOrderApiError>>,
}

#[derive(Debug)]
pub struct ActiveOrderSystem {
    pub db: SqliteDatabase,
    pub api: ActiveOrderApi<SqliteDatabase, SqliteDatabase>,
}

impl ActiveOrderSystem {
    pub async fn new() -> Self {
        let db = prepare_test_env().await;
        let api = ActiveOrderApi::new(db.clone(), db.clone());
        Self { db, api }
    }
}

impl ActiveOrderWorld {
    pub fn system(&self) -> &ActiveOrderSystem {
        self.system.as_ref().expect("ActiveOrderSystem not initialised")
    }

    pub fn db(&self) -> &SqliteDatabase {
        &self.system().db
    }

    pub fn api(&self) -> &ActiveOrderApi<SqliteDatabase, SqliteDatabase> {
        &self.system().api
    }

    pub fn order(&self, name: &str) -> &Order {
        self.orders.get(name).unwrap_or_else(|| panic!("Order {name} has not been set up"))
    }

    /// Builds a request context from the session as it is currently stored.
    pub async fn context_for(&self, token: &str, channel: &str) -> RequestContext {
        let session = self
            .db()
            .fetch_session(&SessionToken::from(token))
            .await
            .expect("Error fetching session")
            .unwrap_or_else(|| panic!("Session {token} does not exist"));
        RequestContext::new(channel).with_session(session)
    }

    pub fn last_active_order(&self) -> Option<&ActiveOrder> {
        match &self.last_result {
            Some(Ok(result)) => result.as_ref(),
            Some(Err(e)) => panic!("The last resolution failed: {e}"),
            None => panic!("Nothing has been resolved yet"),
        }
    }
}
