//! Dashboard feature.
//!
//! Demonstrates state-shape preservation: the selected tab index is
//! orthogonal to the data phase. Changing tabs never touches the payload;
//! refreshing the payload never touches the tab.

mod event;
mod handler;
mod repository;
mod state;

pub use event::DashboardEvent;
pub use handler::DashboardHandler;
pub use repository::{DashboardData, DashboardItem, DashboardRepository};
pub use state::{DashboardPhase, DashboardState};

use std::sync::Arc;

use crate::store::{HandlerRegistry, Store};

/// Build a dashboard store starting at the initial phase, tab 0.
pub fn dashboard_store(
    name: &'static str,
    repository: Arc<dyn DashboardRepository>,
) -> Store<DashboardState, DashboardEvent> {
    let registry = HandlerRegistry::new().register(DashboardHandler::new(repository));
    Store::create(name, DashboardState::default(), registry)
}
