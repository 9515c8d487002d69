//! Event and state contracts, plus the tag-to-handler registry.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use super::Emitter;

/// Marker trait for store states.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything observable about the feature)
/// - Comparable (PartialEq, so the engine can suppress no-op transitions)
pub trait StoreState: Clone + PartialEq + fmt::Debug + Send + Sync + 'static {}

/// Trait for store events.
///
/// Events represent:
/// - User actions (button taps, form submissions)
/// - System events (startup probes, refresh requests)
///
/// Equality is structural; two events with the same tag and payload are
/// interchangeable.
pub trait StoreEvent: fmt::Debug + Send + 'static {
    /// Stable identifier used for handler lookup and logging.
    fn tag(&self) -> &'static str;
}

/// Handler bound to a set of event tags.
///
/// The store runs at most one handler at a time; `handle` receives the
/// state current at dequeue time and commits successor states through the
/// [`Emitter`]. Handlers never return errors: a failure is classified and
/// emitted as the feature's `Error` state.
#[async_trait]
pub trait EventHandler<S, E>: Send + Sync
where
    S: StoreState,
    E: StoreEvent,
{
    /// Tags this handler serves.
    fn tags(&self) -> &'static [&'static str];

    /// Process one event.
    async fn handle(&self, state: S, event: E, emit: &Emitter<S>);
}

/// Maps event tags to handlers. Fixed at store construction.
pub struct HandlerRegistry<S, E> {
    handlers: HashMap<&'static str, Arc<dyn EventHandler<S, E>>>,
}

impl<S: StoreState, E: StoreEvent> HandlerRegistry<S, E> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under every tag it declares.
    ///
    /// A tag registered twice keeps the later handler; that is a wiring
    /// mistake, so it is logged.
    pub fn register(mut self, handler: impl EventHandler<S, E> + 'static) -> Self {
        let handler: Arc<dyn EventHandler<S, E>> = Arc::new(handler);
        for &tag in handler.tags() {
            if self.handlers.insert(tag, Arc::clone(&handler)).is_some() {
                tracing::warn!(tag, "handler tag registered twice, later registration wins");
            }
        }
        self
    }

    pub(crate) fn resolve(&self, tag: &str) -> Option<&Arc<dyn EventHandler<S, E>>> {
        self.handlers.get(tag)
    }
}

impl<S: StoreState, E: StoreEvent> Default for HandlerRegistry<S, E> {
    fn default() -> Self {
        Self::new()
    }
}
