use crate::store::StoreEvent;

/// Dashboard intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardEvent {
    TabChanged { index: usize },
    DataRequested,
}

impl DashboardEvent {
    pub const TAGS: &'static [&'static str] = &["dashboard.tab_changed", "dashboard.data_requested"];
}

impl StoreEvent for DashboardEvent {
    fn tag(&self) -> &'static str {
        match self {
            DashboardEvent::TabChanged { .. } => "dashboard.tab_changed",
            DashboardEvent::DataRequested => "dashboard.data_requested",
        }
    }
}
