use std::sync::Arc;

use futures_util::future::BoxFuture;

use crate::{
    config::EngineConfig,
    events::{EventHandler, EventProducer, Handler, OrderCreatedEvent, SessionRepairedEvent},
};

#[derive(Default, Clone)]
pub struct EventProducers {
    pub order_created_producer: Vec<EventProducer<OrderCreatedEvent>>,
    pub session_repaired_producer: Vec<EventProducer<SessionRepairedEvent>>,
}

pub struct EventHandlers {
    pub on_order_created: Option<EventHandler<OrderCreatedEvent>>,
    pub on_session_repaired: Option<EventHandler<SessionRepairedEvent>>,
}

impl EventHandlers {
    pub fn new(buffer_size: usize, hooks: EventHooks) -> Self {
        let on_order_created = hooks.on_order_created.map(|f| EventHandler::new(buffer_size, f));
        let on_session_repaired = hooks.on_session_repaired.map(|f| EventHandler::new(buffer_size, f));
        Self { on_order_created, on_session_repaired }
    }

    /// Creates the handlers with hook channels of `config.event_buffer_size` slots.
    pub fn from_config(config: &EngineConfig, hooks: EventHooks) -> Self {
        Self::new(config.event_buffer_size, hooks)
    }

    pub fn producers(&self) -> EventProducers {
        let mut result = EventProducers::default();
        if let Some(handler) = &self.on_order_created {
            result.order_created_producer.push(handler.subscribe());
        }
        if let Some(handler) = &self.on_session_repaired {
            result.session_repaired_producer.push(handler.subscribe());
        }
        result
    }

    /// Spawns a task for every registered handler. The tasks exit once all producers have been dropped.
    pub async fn start_handlers(self) {
        if let Some(handler) = self.on_order_created {
            tokio::spawn(async move {
                handler.start_handler().await;
            });
        }
        if let Some(handler) = self.on_session_repaired {
            tokio::spawn(async move {
                handler.start_handler().await;
            });
        }
    }
}

#[derive(Default, Clone)]
pub struct EventHooks {
    pub on_order_created: Option<Handler<OrderCreatedEvent>>,
    pub on_session_repaired: Option<Handler<SessionRepairedEvent>>,
}

impl EventHooks {
    pub fn on_order_created<F>(&mut self, f: F) -> &mut Self
    where F: (Fn(OrderCreatedEvent) -> BoxFuture<'static, ()>) + Send + Sync + 'static {
        self.on_order_created = Some(Arc::new(f));
        self
    }

    pub fn on_session_repaired<F>(&mut self, f: F) -> &mut Self
    where F: (Fn(SessionRepairedEvent) -> BoxFuture<'static, ()>) + Send + Sync + 'static {
        self.on_session_repaired = Some(Arc::new(f));
        self
    }
}
