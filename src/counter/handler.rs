use async_trait::async_trait;

use crate::store::{Emitter, EventHandler};

use super::{CounterEvent, CounterState, COUNTER_MAX, COUNTER_MIN};

/// Pure reducer for the bounded counter. No I/O; every transition is
/// synchronous and total.
pub struct CounterHandler;

#[async_trait]
impl EventHandler<CounterState, CounterEvent> for CounterHandler {
    fn tags(&self) -> &'static [&'static str] {
        CounterEvent::TAGS
    }

    async fn handle(&self, state: CounterState, event: CounterEvent, emit: &Emitter<CounterState>) {
        emit.emit(CounterState {
            value: next_value(state.value, &event),
        });
    }
}

/// Next counter value for an event. Clamping is exact at both bounds;
/// division is integer division, truncating toward zero (-1 / 2 == 0).
fn next_value(value: i32, event: &CounterEvent) -> i32 {
    match event {
        CounterEvent::Increase => value.saturating_add(1).min(COUNTER_MAX),
        CounterEvent::Decrease => value.saturating_sub(1).max(COUNTER_MIN),
        CounterEvent::Reset => 0,
        CounterEvent::Multiply => value.saturating_mul(2).clamp(COUNTER_MIN, COUNTER_MAX),
        CounterEvent::Divide => (value / 2).clamp(COUNTER_MIN, COUNTER_MAX),
        CounterEvent::Set { value: requested } => (*requested).clamp(COUNTER_MIN, COUNTER_MAX),
    }
}
