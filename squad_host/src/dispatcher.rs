use crate::prelude::*;

use std::{collections::HashMap, sync::Arc};
use tokio::task::JoinHandle;

/// An event dispatcher. Collects registered chat command handlers and allows
/// lookup by event name.
#[derive(Default)]
pub struct EventDispatcher
{
    handlers: HashMap<String, Vec<Arc<dyn ChatCommandHandler>>>,
}

impl EventDispatcher
{
    /// Construct an empty `EventDispatcher`.
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Register a handler for the given event name. Several handlers may be bound
    /// to the same name; they are invoked in registration order.
    pub fn on(&mut self, event_name: impl Into<String>, handler: Arc<dyn ChatCommandHandler>)
    {
        self.handlers.entry(event_name.into()).or_default().push(handler);
    }

    /// Every event name which has at least one handler
    pub fn event_names(&self) -> impl Iterator<Item = &str>
    {
        self.handlers.keys().map(String::as_str)
    }

    /// Number of handlers bound to the given event name
    pub fn handler_count(&self, event_name: &str) -> usize
    {
        self.handlers.get(event_name).map_or(0, Vec::len)
    }

    /// Dispatch a chat command to every handler registered for it.
    ///
    /// Each handler runs in its own task on the current tokio runtime; the returned
    /// handles may be awaited or dropped. Handler errors are logged from within the
    /// task and never reach the caller.
    pub fn dispatch(&self, event: ChatCommandEvent) -> Vec<JoinHandle<()>>
    {
        let event_name = event.event_name();

        let Some(handlers) = self.handlers.get(&event_name) else {
            tracing::trace!(%event_name, "No handler registered");
            return Vec::new();
        };

        handlers
            .iter()
            .map(|handler| {
                let handler = Arc::clone(handler);
                let event = event.clone();
                let event_name = event_name.clone();

                tokio::spawn(async move {
                    if let Err(error) = handler.handle(event).await
                    {
                        tracing::error!(%event_name, %error, "Error handling chat command");
                    }
                })
            })
            .collect()
    }
}
