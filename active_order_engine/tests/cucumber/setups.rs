use active_order_engine::{ActiveOrderBinding, OrderManagement, RequestContext, SessionManagement};
use cucumber::given;

use crate::{
    cucumber::{ActiveOrderSystem, ActiveOrderWorld},
    support::prepare_env::complete_checkout,
};

#[given("a fresh install")]
async fn fresh_database(world: &mut ActiveOrderWorld) {
    let system = ActiveOrderSystem::new().await;
    world.system = Some(system);
}

#[given(expr = "a session {string}")]
async fn new_session(world: &mut ActiveOrderWorld, token: String) {
    world.db().create_session(&token.into()).await.expect("Error creating session");
}

#[given(expr = "a guest order {string} in channel {string}")]
async fn guest_order(world: &mut ActiveOrderWorld, name: String, channel: String) {
    let ctx = RequestContext::new(channel);
    let order = world.db().create_order(&ctx, None).await.expect("Error creating order");
    world.orders.insert(name, order);
}

#[given(expr = "user {string} has an active order {string} in channel {string}")]
async fn user_order(world: &mut ActiveOrderWorld, user: String, name: String, channel: String) {
    let ctx = RequestContext::new(channel).with_active_user(user.as_str());
    let order = world.db().create_order(&ctx, Some(user.into())).await.expect("Error creating order");
    world.orders.insert(name, order);
}

#[given(expr = "order {string} has completed checkout")]
async fn order_completed(world: &mut ActiveOrderWorld, name: String) {
    let id = world.order(&name).id;
    complete_checkout(world.db(), id).await;
}

#[given(expr = "session {string} points at order {string}")]
async fn session_points_at(world: &mut ActiveOrderWorld, token: String, name: String) {
    let ctx = world.context_for(&token, "default").await;
    let session = ctx.session().expect("Context has a session").clone();
    let order = world.order(&name).clone();
    world.db().set_active_order(&ctx, &session, &order).await.expect("Error binding order");
}
