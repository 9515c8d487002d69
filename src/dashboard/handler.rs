use std::sync::Arc;

use async_trait::async_trait;

use crate::store::{Emitter, EventHandler};

use super::repository::DashboardRepository;
use super::state::{DashboardPhase, DashboardState};
use super::DashboardEvent;

pub struct DashboardHandler {
    repository: Arc<dyn DashboardRepository>,
}

impl DashboardHandler {
    pub fn new(repository: Arc<dyn DashboardRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl EventHandler<DashboardState, DashboardEvent> for DashboardHandler {
    fn tags(&self) -> &'static [&'static str] {
        DashboardEvent::TAGS
    }

    async fn handle(
        &self,
        state: DashboardState,
        event: DashboardEvent,
        emit: &Emitter<DashboardState>,
    ) {
        match event {
            DashboardEvent::TabChanged { index } => {
                // Only the index moves; whatever phase is current stays.
                emit.emit(DashboardState {
                    phase: state.phase,
                    tab_index: index,
                });
            }
            DashboardEvent::DataRequested => {
                let tab_index = state.tab_index;
                emit.emit(DashboardState {
                    phase: DashboardPhase::Loading,
                    tab_index,
                });
                let phase = match self.repository.fetch().await {
                    Ok(data) => DashboardPhase::Loaded { data },
                    Err(failure) => {
                        tracing::warn!(%failure, "dashboard fetch failed");
                        DashboardPhase::Error {
                            message: failure.to_string(),
                        }
                    }
                };
                emit.emit(DashboardState { phase, tab_index });
            }
        }
    }
}
