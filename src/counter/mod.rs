//! Bounded counter feature.
//!
//! A pure, total policy: every event maps to a new value inside
//! [`COUNTER_MIN`]..=[`COUNTER_MAX`], saturating at the bounds.

mod event;
mod handler;
mod state;

pub use event::CounterEvent;
pub use handler::CounterHandler;
pub use state::CounterState;

pub const COUNTER_MIN: i32 = -50;
pub const COUNTER_MAX: i32 = 100;

use crate::store::{HandlerRegistry, Store};

/// Build a counter store starting at `initial` (clamped into bounds).
pub fn counter_store(name: &'static str, initial: i32) -> Store<CounterState, CounterEvent> {
    let registry = HandlerRegistry::new().register(CounterHandler);
    Store::create(name, CounterState::new(initial), registry)
}
