//! Generic reactive store engine.
//!
//! Each feature owns one store. The store holds the feature's current
//! state, accepts events, and runs the handler registered for each event
//! tag, strictly one at a time in arrival order.
//!
//! # Architecture
//!
//! ```text
//! dispatch(event) ──→ queue ──→ handler ──→ emit(state) ──→ subscribers
//!                     (FIFO)    (async)      (committed)
//! ```
//!
//! - **State**: immutable snapshot of the feature's observable condition
//! - **Event**: immutable description of intent, resolved by tag
//! - **Handler**: computes next states, possibly via a collaborator call
//!
//! A handler that is still awaiting a collaborator does not block
//! `dispatch`; the next event simply waits its turn in the queue. This
//! removes races on the store's own state: no handler ever observes an
//! intermediate state another handler is still producing.

mod emitter;
mod handler;
mod subscription;

pub use emitter::Emitter;
pub use handler::{EventHandler, HandlerRegistry, StoreEvent, StoreState};
pub use subscription::Subscription;

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tokio::sync::Notify;

type SubscriberFn<S> = dyn Fn(&S) + Send + Sync;

/// Shared core of a store: current state, subscriber list, close flag.
pub(crate) struct StoreInner<S> {
    name: &'static str,
    state: Mutex<S>,
    subscribers: Mutex<Vec<(u64, Arc<SubscriberFn<S>>)>>,
    next_subscriber_id: AtomicU64,
    closed: AtomicBool,
    close_signal: Notify,
}

impl<S: StoreState> StoreInner<S> {
    fn new(name: &'static str, initial: S) -> Self {
        Self {
            name,
            state: Mutex::new(initial),
            subscribers: Mutex::new(Vec::new()),
            next_subscriber_id: AtomicU64::new(0),
            closed: AtomicBool::new(false),
            close_signal: Notify::new(),
        }
    }

    pub(crate) fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            tracing::debug!(store = self.name, "store closed");
            self.close_signal.notify_waiters();
            self.subscribers.lock().clear();
        }
    }

    /// Resolves once the store is closed.
    ///
    /// Subscribes to the Notify before checking the flag, so a `close()`
    /// landing between the check and the await cannot be lost.
    pub(crate) async fn closed(&self) {
        let notified = self.close_signal.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_closed() {
            return;
        }
        notified.await;
    }

    fn current(&self) -> S {
        self.state.lock().clone()
    }

    /// Commit a state and notify subscribers.
    ///
    /// Drops the commit when the store is closed, or when `next` equals the
    /// current state (no-op transitions are not delivered).
    pub(crate) fn commit(&self, next: S) {
        if self.is_closed() {
            tracing::debug!(store = self.name, "state emitted after close, dropped");
            return;
        }
        {
            let mut current = self.state.lock();
            if *current == next {
                tracing::trace!(store = self.name, "no-op transition suppressed");
                return;
            }
            *current = next.clone();
        }
        // Snapshot outside the subscriber lock so a callback may subscribe
        // or unsubscribe without deadlocking.
        let subscribers: Vec<Arc<SubscriberFn<S>>> = self
            .subscribers
            .lock()
            .iter()
            .map(|(_, callback)| Arc::clone(callback))
            .collect();
        for callback in subscribers {
            callback(&next);
        }
    }

    fn add_subscriber(&self, callback: Arc<SubscriberFn<S>>) -> u64 {
        let id = self.next_subscriber_id.fetch_add(1, Ordering::Relaxed);
        self.subscribers.lock().push((id, callback));
        id
    }

    fn remove_subscriber(&self, id: u64) {
        self.subscribers.lock().retain(|(sid, _)| *sid != id);
    }
}

/// Per-feature state container.
///
/// Created with an explicit initial state and a [`HandlerRegistry`]; lives
/// for the owning feature's lifetime and is torn down with [`Store::close`]
/// (also invoked on drop).
pub struct Store<S: StoreState, E: StoreEvent> {
    inner: Arc<StoreInner<S>>,
    queue: mpsc::UnboundedSender<E>,
}

impl<S: StoreState, E: StoreEvent> Store<S, E> {
    /// Create a store and start its event loop on a spawned task.
    ///
    /// Requires a tokio runtime. The registry is fixed for the store's
    /// lifetime; events with no registered handler are logged and dropped.
    pub fn create(name: &'static str, initial: S, registry: HandlerRegistry<S, E>) -> Self {
        let inner = Arc::new(StoreInner::new(name, initial));
        let (queue, receiver) = mpsc::unbounded_channel();
        tokio::spawn(run_event_loop(Arc::clone(&inner), registry, receiver));
        Self { inner, queue }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> S {
        self.inner.current()
    }

    /// Queue an event for processing. Never blocks.
    ///
    /// After `close()` this logs and drops the event instead of failing.
    pub fn dispatch(&self, event: E) {
        if self.inner.is_closed() {
            tracing::warn!(
                store = self.inner.name,
                tag = event.tag(),
                "event dispatched after close, dropped"
            );
            return;
        }
        if self.queue.send(event).is_err() {
            tracing::warn!(store = self.inner.name, "event loop gone, event dropped");
        }
    }

    /// Register a callback invoked once per committed state change, in
    /// commit order, on the store's own task.
    ///
    /// The returned [`Subscription`] is the subscriber's side of the
    /// registration: releasing it removes the callback.
    pub fn subscribe(&self, callback: impl Fn(&S) + Send + Sync + 'static) -> Subscription {
        let id = self.inner.add_subscriber(Arc::new(callback));
        let weak: Weak<StoreInner<S>> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.remove_subscriber(id);
            }
        })
    }

    /// Tear the store down. Idempotent.
    ///
    /// Cancels any handler awaiting a collaborator, drains no further
    /// events, and releases the subscriber list. A collaborator result
    /// resolving later is discarded.
    pub fn close(&self) {
        self.inner.close();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }
}

impl<S: StoreState, E: StoreEvent> Drop for Store<S, E> {
    fn drop(&mut self) {
        self.inner.close();
    }
}

async fn run_event_loop<S: StoreState, E: StoreEvent>(
    inner: Arc<StoreInner<S>>,
    registry: HandlerRegistry<S, E>,
    mut receiver: mpsc::UnboundedReceiver<E>,
) {
    loop {
        let event = tokio::select! {
            _ = inner.closed() => break,
            event = receiver.recv() => match event {
                Some(event) => event,
                None => break,
            },
        };
        let Some(handler) = registry.resolve(event.tag()) else {
            tracing::error!(
                store = inner.name,
                tag = event.tag(),
                "no handler registered for event, dropped"
            );
            continue;
        };
        tracing::trace!(store = inner.name, event = ?event, "processing event");
        let state = inner.current();
        let emitter = Emitter::new(Arc::clone(&inner));
        // The close arm aborts the in-flight handler; whatever its
        // collaborator call resolves to afterwards is dropped with the
        // future and never reaches the store.
        tokio::select! {
            _ = inner.closed() => break,
            _ = handler.handle(state, event, &emitter) => {}
        }
    }
    inner.close();
}
