use crate::store::StoreState;

use super::{COUNTER_MAX, COUNTER_MIN};

/// Counter state: a single bounded value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterState {
    pub value: i32,
}

impl CounterState {
    /// Construct a state with `value` clamped into bounds.
    pub fn new(value: i32) -> Self {
        Self {
            value: value.clamp(COUNTER_MIN, COUNTER_MAX),
        }
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self { value: 0 }
    }
}

impl StoreState for CounterState {}
