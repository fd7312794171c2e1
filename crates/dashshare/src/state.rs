//! Shared application state.
//!
//! Cloned into every handler. Collaborators are trait objects so tests can
//! swap in fakes without touching the router.

use std::{sync::Arc, time::Duration};

use dashshare_core::features::FeatureToggles;
use dashshare_core::sharing::DashboardSharingService;

use crate::{
    auth::{Authenticator, StaticTokenAuthenticator},
    config::Config,
    mock_data,
    services::RepositorySharingService,
    storage::InMemoryDashboardRepository,
};

#[derive(Clone)]
pub struct AppState {
    /// Feature toggles, fixed for the life of the process.
    pub features: Arc<FeatureToggles>,
    pub sharing: Arc<dyn DashboardSharingService>,
    pub authenticator: Arc<dyn Authenticator>,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(
        features: FeatureToggles,
        sharing: Arc<dyn DashboardSharingService>,
        authenticator: Arc<dyn Authenticator>,
    ) -> Self {
        Self {
            features: Arc::new(features),
            sharing,
            authenticator,
            request_timeout: Config::default().request_timeout(),
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Builds the in-memory wiring used by the binary.
    pub fn from_config(config: &Config) -> Self {
        let (repository, authenticator) = if config.seed_demo_data {
            (
                InMemoryDashboardRepository::with_dashboards(mock_data::demo_dashboards()),
                mock_data::dev_authenticator(),
            )
        } else {
            (
                InMemoryDashboardRepository::new(),
                StaticTokenAuthenticator::new(),
            )
        };

        tracing::debug!(
            seed_demo_data = config.seed_demo_data,
            tokens = authenticator.token_count(),
            "Initialized in-memory sharing backend"
        );

        let sharing = RepositorySharingService::new(Arc::new(repository));

        Self::new(
            config.feature_toggles.clone(),
            Arc::new(sharing),
            Arc::new(authenticator),
        )
        .with_request_timeout(config.request_timeout())
    }
}
