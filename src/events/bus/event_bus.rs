// events/bus/event_bus.rs
//
// Synchronous typed event bus.
//
// DESIGN PRINCIPLES:
// 1. Synchronous - handlers execute immediately in subscription order
// 2. Observable - every emission is recorded in the session log
// 3. Type-safe - events are strongly typed
// 4. Isolated - a panicking handler never takes the bus down

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::events::types::DomainEvent;

/// Type-erased event handler function
type EventHandler = Box<dyn Fn(&dyn Any) + Send + Sync>;

/// A logged event for debugging and tracing
#[derive(Debug, Clone)]
pub struct EventLogEntry {
    pub event_type: String,
    pub event_id: String,
    pub occurred_at: String,
}

/// The central coordination point for workflow events.
///
/// Services emit facts; observers (audit logging, the rendering layer)
/// subscribe without the services knowing about them.
pub struct EventBus {
    /// Map from event TypeId to list of handlers
    handlers: Arc<RwLock<HashMap<TypeId, Vec<EventHandler>>>>,

    /// Session event log (for tracing and tests)
    event_log: Arc<RwLock<Vec<EventLogEntry>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            handlers: Arc::new(RwLock::new(HashMap::new())),
            event_log: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Subscribe to a specific event type.
    ///
    /// Handlers for the same type execute in the order they were added.
    pub fn subscribe<E, F>(&self, handler: F)
    where
        E: DomainEvent + 'static,
        F: Fn(&E) + Send + Sync + 'static,
    {
        let wrapped: EventHandler = Box::new(move |event_any: &dyn Any| {
            if let Some(event) = event_any.downcast_ref::<E>() {
                handler(event);
            }
        });

        self.handlers
            .write()
            .unwrap()
            .entry(TypeId::of::<E>())
            .or_default()
            .push(wrapped);
    }

    /// Emit an event to every subscribed handler, inline.
    ///
    /// The emission is logged first, so the log reflects what happened even
    /// when no handler is subscribed. A panicking handler is caught and
    /// reported; the remaining handlers still run.
    pub fn emit<E>(&self, event: E)
    where
        E: DomainEvent + 'static,
    {
        {
            let mut log = self.event_log.write().unwrap();
            log.push(EventLogEntry {
                event_type: event.event_type().to_string(),
                event_id: event.event_id().to_string(),
                occurred_at: event.occurred_at().to_rfc3339(),
            });
        }

        println!("[EVENT] {} (id: {})", event.event_type(), event.event_id());

        let handlers = self.handlers.read().unwrap();
        if let Some(list) = handlers.get(&TypeId::of::<E>()) {
            for (idx, handler) in list.iter().enumerate() {
                let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                    handler(&event as &dyn Any);
                }));

                if outcome.is_err() {
                    eprintln!(
                        "ERROR: Handler {} for {} panicked",
                        idx,
                        event.event_type()
                    );
                }
            }
        }
    }

    /// Get the session event log
    pub fn event_log(&self) -> Vec<EventLogEntry> {
        self.event_log.read().unwrap().clone()
    }

    /// Get the number of subscribers for a specific event type
    pub fn subscriber_count<E>(&self) -> usize
    where
        E: 'static,
    {
        self.handlers
            .read()
            .unwrap()
            .get(&TypeId::of::<E>())
            .map(|h| h.len())
            .unwrap_or(0)
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// Shared-reference clone
impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            handlers: Arc::clone(&self.handlers),
            event_log: Arc::clone(&self.event_log),
        }
    }
}
