use async_trait::async_trait;

use crate::identity::SignedInUser;

use super::{Dashboard, RepositoryError, SharingConfig, SharingError};

/// Result type for sharing service operations.
pub type Result<T> = std::result::Result<T, SharingError>;

/// Result type for repository operations.
pub type RepositoryResult<T> = std::result::Result<T, RepositoryError>;

/// Reads and changes the sharing configuration of dashboards.
///
/// Implementations enforce their own authorization for `caller` and must
/// apply each change to a single dashboard atomically.
#[async_trait]
pub trait DashboardSharingService: Send + Sync {
    /// Gets the current sharing configuration of a dashboard.
    async fn get_sharing_config(
        &self,
        caller: &SignedInUser,
        dashboard_uid: &str,
    ) -> Result<SharingConfig>;

    /// Sets whether a dashboard is public and returns the persisted state.
    async fn set_sharing_config(
        &self,
        caller: &SignedInUser,
        dashboard_uid: &str,
        is_public: bool,
    ) -> Result<SharingConfig>;
}

/// Dashboard persistence used by the default sharing service.
#[async_trait]
pub trait DashboardRepository: Send + Sync {
    /// Gets a dashboard by UID.
    async fn get_dashboard(&self, uid: &str) -> RepositoryResult<Option<Dashboard>>;

    /// Sets the public flag in one atomic step and returns the stored dashboard.
    async fn set_public(&self, uid: &str, is_public: bool) -> RepositoryResult<Dashboard>;
}
