//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use dashshare_core::sharing::{Dashboard, DashboardRepository, RepositoryError, RepositoryResult};

/// In-memory dashboard storage keyed by UID.
///
/// Every mutation happens under a single write lock, so a change to one
/// dashboard is never observed half-applied.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDashboardRepository {
    dashboards: Arc<RwLock<HashMap<String, Dashboard>>>,
}

impl InMemoryDashboardRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `dashboards`.
    ///
    /// Later entries replace earlier ones with the same UID.
    pub fn with_dashboards(dashboards: impl IntoIterator<Item = Dashboard>) -> Self {
        let map = dashboards
            .into_iter()
            .map(|d| (d.uid.clone(), d))
            .collect();
        Self {
            dashboards: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl DashboardRepository for InMemoryDashboardRepository {
    async fn get_dashboard(&self, uid: &str) -> RepositoryResult<Option<Dashboard>> {
        let dashboards = self.dashboards.read().await;
        Ok(dashboards.get(uid).cloned())
    }

    async fn set_public(&self, uid: &str, is_public: bool) -> RepositoryResult<Dashboard> {
        let mut dashboards = self.dashboards.write().await;
        let dashboard = dashboards
            .get_mut(uid)
            .ok_or_else(|| RepositoryError::NotFound {
                uid: uid.to_string(),
            })?;

        dashboard.is_public = is_public;
        dashboard.updated_at = Utc::now();
        Ok(dashboard.clone())
    }
}
