//! Default [`DashboardSharingService`] backed by a [`DashboardRepository`].

use std::sync::Arc;

use async_trait::async_trait;

use dashshare_core::identity::SignedInUser;
use dashshare_core::sharing::{
    policy, Dashboard, DashboardRepository, DashboardSharingService, Result, SharingConfig,
    SharingError,
};

/// Applies the sharing policy and persists changes through a repository.
#[derive(Clone)]
pub struct RepositorySharingService {
    dashboards: Arc<dyn DashboardRepository>,
}

impl RepositorySharingService {
    pub fn new(dashboards: Arc<dyn DashboardRepository>) -> Self {
        Self { dashboards }
    }

    /// Loads a dashboard. A malformed UID names no dashboard, so it is
    /// reported as `NotFound` like any other missing UID.
    async fn load(&self, dashboard_uid: &str) -> Result<Dashboard> {
        if let Err(e) = policy::validate_dashboard_uid(dashboard_uid) {
            tracing::debug!(dashboard_uid = %dashboard_uid, error = %e, "Malformed dashboard uid");
            return Err(SharingError::NotFound {
                uid: dashboard_uid.to_string(),
            });
        }

        self.dashboards
            .get_dashboard(dashboard_uid)
            .await?
            .ok_or_else(|| SharingError::NotFound {
                uid: dashboard_uid.to_string(),
            })
    }
}

#[async_trait]
impl DashboardSharingService for RepositorySharingService {
    async fn get_sharing_config(
        &self,
        caller: &SignedInUser,
        dashboard_uid: &str,
    ) -> Result<SharingConfig> {
        let dashboard = self.load(dashboard_uid).await?;
        policy::require_read_access(caller, &dashboard)?;
        Ok(dashboard.sharing_config())
    }

    async fn set_sharing_config(
        &self,
        caller: &SignedInUser,
        dashboard_uid: &str,
        is_public: bool,
    ) -> Result<SharingConfig> {
        let dashboard = self.load(dashboard_uid).await?;
        policy::require_write_access(caller, &dashboard)?;

        let updated = self.dashboards.set_public(dashboard_uid, is_public).await?;

        tracing::info!(
            dashboard_uid = %updated.uid,
            is_public = updated.is_public,
            user = %caller.login,
            "Updated dashboard sharing config"
        );

        Ok(updated.sharing_config())
    }
}
