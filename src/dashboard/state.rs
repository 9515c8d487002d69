use crate::store::StoreState;

use super::repository::DashboardData;

/// Data phase of the dashboard, independent of the selected tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardPhase {
    Initial,
    Loading,
    Loaded { data: DashboardData },
    Error { message: String },
}

/// Dashboard state: the data phase plus the selected tab.
///
/// The tab index survives every phase transition; it only changes through
/// an explicit `TabChanged` event or fresh store construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardState {
    pub phase: DashboardPhase,
    pub tab_index: usize,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self {
            phase: DashboardPhase::Initial,
            tab_index: 0,
        }
    }
}

impl StoreState for DashboardState {}
