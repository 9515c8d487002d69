use crate::store::StoreEvent;

/// Counter intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterEvent {
    Increase,
    Decrease,
    Reset,
    Multiply,
    Divide,
    Set { value: i32 },
}

impl CounterEvent {
    pub const TAGS: &'static [&'static str] = &[
        "counter.increase",
        "counter.decrease",
        "counter.reset",
        "counter.multiply",
        "counter.divide",
        "counter.set",
    ];
}

impl StoreEvent for CounterEvent {
    fn tag(&self) -> &'static str {
        match self {
            CounterEvent::Increase => "counter.increase",
            CounterEvent::Decrease => "counter.decrease",
            CounterEvent::Reset => "counter.reset",
            CounterEvent::Multiply => "counter.multiply",
            CounterEvent::Divide => "counter.divide",
            CounterEvent::Set { .. } => "counter.set",
        }
    }
}
