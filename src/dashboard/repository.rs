//! Collaborator contract and payload types for the dashboard feature.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::failure::Failure;

/// One card on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardItem {
    pub title: String,
    pub count: u64,
}

/// Full dashboard payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub items: Vec<DashboardItem>,
}

/// Remote dashboard backend. Implementations classify their own errors
/// into the [`Failure`] taxonomy.
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    async fn fetch(&self) -> Result<DashboardData, Failure>;
}
