use active_order_engine::{db_types::SessionToken, ActiveOrderApiError, RequestContext, ResolvedFrom, SessionManagement};
use cucumber::{then, when};

use crate::cucumber::ActiveOrderWorld;

#[when(expr = "session {string} resolves its active order in channel {string}")]
async fn resolve(world: &mut ActiveOrderWorld, token: String, channel: String) {
    let ctx = world.context_for(&token, &channel).await;
    world.last_result = Some(world.api().resolve(&ctx, false).await);
}

#[when(expr = "session {string} resolves its active order in channel {string}, creating one if necessary")]
async fn resolve_or_create(world: &mut ActiveOrderWorld, token: String, channel: String) {
    let ctx = world.context_for(&token, &channel).await;
    world.last_result = Some(world.api().resolve(&ctx, true).await);
}

#[when(expr = "user {string} on session {string} resolves their active order in channel {string}")]
async fn user_resolves(world: &mut ActiveOrderWorld, user: String, token: String, channel: String) {
    let ctx = world.context_for(&token, &channel).await.with_active_user(user);
    world.last_result = Some(world.api().resolve(&ctx, false).await);
}

#[when(expr = "a request without a session resolves its active order in channel {string}")]
async fn sessionless_resolve(world: &mut ActiveOrderWorld, channel: String) {
    let ctx = RequestContext::new(channel);
    world.last_result = Some(world.api().resolve(&ctx, true).await);
}

#[then("no active order is returned")]
async fn no_active_order(world: &mut ActiveOrderWorld) {
    assert!(world.last_active_order().is_none());
}

#[then(expr = "the active order is {string}")]
async fn active_order_is(world: &mut ActiveOrderWorld, name: String) {
    let expected = world.order(&name).id;
    let active = world.last_active_order().expect("An active order should have been returned");
    assert_eq!(active.order.id, expected);
    assert!(active.order.active);
}

#[then("a new guest order is returned")]
async fn new_guest_order(world: &mut ActiveOrderWorld) {
    let active = world.last_active_order().expect("An active order should have been returned");
    assert_eq!(active.resolved_from, ResolvedFrom::Created);
    assert!(active.order.is_guest_order());
    assert!(active.order.active);
}

#[then(expr = "the order was resolved from {word}")]
async fn resolved_from(world: &mut ActiveOrderWorld, source: String) {
    let active = world.last_active_order().expect("An active order should have been returned");
    assert_eq!(active.resolved_from.to_string(), source);
}

#[then(expr = "session {string} points at order {string}")]
async fn session_points_at(world: &mut ActiveOrderWorld, token: String, name: String) {
    let expected = world.order(&name).id;
    let session = fetch_session(world, &token).await;
    assert_eq!(session.active_order_id, Some(expected));
}

#[then(expr = "session {string} points at the returned order")]
async fn session_points_at_result(world: &mut ActiveOrderWorld, token: String) {
    let expected = world.last_active_order().map(|a| a.order.id).expect("An active order should have been returned");
    let session = fetch_session(world, &token).await;
    assert_eq!(session.active_order_id, Some(expected));
}

#[then(expr = "session {string} does not point at an order")]
async fn session_is_clear(world: &mut ActiveOrderWorld, token: String) {
    let session = fetch_session(world, &token).await;
    assert_eq!(session.active_order_id, None);
}

#[then("the request fails with a fatal integration error")]
async fn fatal_error(world: &mut ActiveOrderWorld) {
    match &world.last_result {
        Some(Err(e)) => {
            assert!(matches!(e, ActiveOrderApiError::NoActiveSession));
            assert!(e.is_fatal());
        },
        other => panic!("Expected a fatal error, got {other:?}"),
    }
}

async fn fetch_session(world: &ActiveOrderWorld, token: &str) -> active_order_engine::db_types::Session {
    world
        .db()
        .fetch_session(&SessionToken::from(token))
        .await
        .expect("Error fetching session")
        .unwrap_or_else(|| panic!("Session {token} does not exist"))
}
