use std::fmt::Debug;

use log::*;

use crate::{
    aoe_api::{
        active_order_objects::{ActiveOrder, ResolvedFrom},
        errors::ActiveOrderApiError,
    },
    db_types::{Order, Session},
    events::{EventProducers, OrderCreatedEvent, SessionRepairedEvent},
    traits::{ActiveOrderBinding, OrderManagement},
    RequestContext,
};

/// `ActiveOrderApi` identifies the order a session is currently operating on, and keeps the session's order pointer
/// in step with the orders themselves.
///
/// A resolution runs these steps in order, stopping at the first one that produces an order:
///
/// 1. The request must carry a session. If it does not, [`ActiveOrderApiError::NoActiveSession`] is returned before
///    any backend is called.
/// 2. If the session points at an order, that order is fetched, filtered to the request's channel. An order in
///    another channel is treated as if it did not exist.
/// 3. If the order found in (2) is no longer active, the session's pointer is stale. It is cleared, and the order is
///    discarded.
/// 4. If the request belongs to an authenticated user, the user's current active order is used.
/// 5. If creation was requested, a new order is created for the user (or a guest order, for anonymous requests).
/// 6. An order obtained in (4) or (5) is bound to the session. An order that was already valid in (2) is not rewritten.
///
/// Backend errors abort the resolution immediately and are returned unchanged. There are no retries.
///
/// ## Concurrency
///
/// Resolutions are not serialised. Two concurrent requests on the same session that both find no order will both
/// create one. The last one to bind wins the session, and the other order is left active but unreferenced. Writes that
/// were made before a resolution is cancelled are not rolled back. The next resolution sees the state they left and
/// repairs it as described above.
pub struct ActiveOrderApi<S, O> {
    sessions: S,
    orders: O,
    producers: EventProducers,
}

impl<S, O> Debug for ActiveOrderApi<S, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ActiveOrderApi")
    }
}

impl<S, O> ActiveOrderApi<S, O> {
    pub fn new(sessions: S, orders: O) -> Self {
        Self { sessions, orders, producers: EventProducers::default() }
    }

    pub fn with_producers(mut self, producers: EventProducers) -> Self {
        self.producers = producers;
        self
    }
}

impl<S, O> ActiveOrderApi<S, O>
where
    S: ActiveOrderBinding,
    O: OrderManagement,
{
    /// Resolves the active order for the request, creating one if `create_if_not_exists` is true.
    ///
    /// When `create_if_not_exists` is true, the result is always `Some`. Prefer [`Self::active_order`] and
    /// [`Self::active_order_or_create`] where the flag is known up front, since their return types say so.
    pub async fn resolve(
        &self,
        ctx: &RequestContext,
        create_if_not_exists: bool,
    ) -> Result<Option<ActiveOrder>, ActiveOrderApiError> {
        if create_if_not_exists {
            self.fetch_or_create(ctx).await.map(Some)
        } else {
            self.fetch(ctx).await
        }
    }

    /// Returns the session's active order, if there is one. A new order is never created.
    pub async fn active_order(&self, ctx: &RequestContext) -> Result<Option<Order>, ActiveOrderApiError> {
        let active = self.fetch(ctx).await?;
        Ok(active.map(ActiveOrder::into_order))
    }

    /// Returns the session's active order, creating and binding a new one if necessary.
    pub async fn active_order_or_create(&self, ctx: &RequestContext) -> Result<Order, ActiveOrderApiError> {
        let active = self.fetch_or_create(ctx).await?;
        Ok(active.into_order())
    }

    async fn fetch(&self, ctx: &RequestContext) -> Result<Option<ActiveOrder>, ActiveOrderApiError> {
        let session = session_for(ctx)?;
        self.find_existing(ctx, session).await
    }

    async fn fetch_or_create(&self, ctx: &RequestContext) -> Result<ActiveOrder, ActiveOrderApiError> {
        let session = session_for(ctx)?;
        if let Some(active) = self.find_existing(ctx, session).await? {
            return Ok(active);
        }
        let user_id = ctx.active_user_id().cloned();
        let order = self.orders.create_order(ctx, user_id).await?;
        info!(
            "🛒️ Created order {} [{}] for session {} in channel {}",
            order.id,
            order.code,
            session.token,
            ctx.channel_id()
        );
        self.sessions.set_active_order(ctx, session, &order).await?;
        self.call_order_created_hook(&order, session).await;
        Ok(ActiveOrder::new(order, ResolvedFrom::Created))
    }

    /// Steps 2 to 4: the session pointer, staleness repair, and the user fallback.
    async fn find_existing(
        &self,
        ctx: &RequestContext,
        session: &Session,
    ) -> Result<Option<ActiveOrder>, ActiveOrderApiError> {
        if let Some(order) = self.order_from_session_pointer(ctx, session).await? {
            trace!("🛒️ Session {} is bound to active order {}", session.token, order.id);
            return Ok(Some(ActiveOrder::new(order, ResolvedFrom::SessionPointer)));
        }
        let Some(user_id) = ctx.active_user_id() else {
            return Ok(None);
        };
        let order = match self.orders.fetch_active_order_for_user(ctx, user_id).await? {
            Some(order) if order.active && order.is_member_of(ctx.channel_id()) => order,
            Some(order) => {
                warn!(
                    "🛒️ The order backend returned order {} as the active order for {user_id}, but it is not active \
                     in channel {}. Ignoring it.",
                    order.id,
                    ctx.channel_id()
                );
                return Ok(None);
            },
            None => return Ok(None),
        };
        debug!("🛒️ Binding {user_id}'s active order {} to session {}", order.id, session.token);
        self.sessions.set_active_order(ctx, session, &order).await?;
        Ok(Some(ActiveOrder::new(order, ResolvedFrom::UserFallback)))
    }

    async fn order_from_session_pointer(
        &self,
        ctx: &RequestContext,
        session: &Session,
    ) -> Result<Option<Order>, ActiveOrderApiError> {
        let Some(order_id) = session.active_order_id else {
            return Ok(None);
        };
        let channel_id = ctx.channel_id();
        let order = match self.orders.fetch_order_in_channel(ctx, order_id, channel_id).await? {
            Some(order) if order.is_member_of(channel_id) => order,
            _ => {
                debug!("🛒️ Order {order_id} from session {} is not visible in channel {channel_id}", session.token);
                return Ok(None);
            },
        };
        if order.active {
            return Ok(Some(order));
        }
        // The order was finalized without the session being updated, e.g. an interrupted checkout.
        info!(
            "🛒️ Session {} points at order {}, which is no longer active. Clearing the session's order pointer.",
            session.token, order.id
        );
        self.sessions.unset_active_order(ctx, session).await?;
        self.call_session_repaired_hook(session, order).await;
        Ok(None)
    }

    async fn call_order_created_hook(&self, order: &Order, session: &Session) {
        for emitter in &self.producers.order_created_producer {
            debug!("🛒️ Notifying order created hook subscribers");
            let event = OrderCreatedEvent::new(order.clone(), session.token.clone());
            emitter.publish_event(event).await;
        }
    }

    async fn call_session_repaired_hook(&self, session: &Session, stale_order: Order) {
        for emitter in &self.producers.session_repaired_producer {
            debug!("🛒️ Notifying session repaired hook subscribers");
            let event = SessionRepairedEvent::new(session.token.clone(), stale_order.clone());
            emitter.publish_event(event).await;
        }
    }
}

fn session_for(ctx: &RequestContext) -> Result<&Session, ActiveOrderApiError> {
    ctx.session().ok_or_else(|| {
        error!(
            "🛒️ The active order was requested for a request without a session (channel {}). This is a bug in the \
             caller.",
            ctx.channel_id()
        );
        ActiveOrderApiError::NoActiveSession
    })
}
