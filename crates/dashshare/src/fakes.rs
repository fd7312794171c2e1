//! Test doubles for router-level tests.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use dashshare_core::identity::SignedInUser;
use dashshare_core::sharing::{DashboardSharingService, Result, SharingConfig, SharingError};

/// Sharing service that returns a scripted result and counts calls.
#[derive(Clone)]
pub struct FakeSharingService {
    result: std::result::Result<bool, SharingError>,
    calls: Arc<AtomicUsize>,
}

impl FakeSharingService {
    /// Answers every call with `isPublic = is_public`.
    pub fn returning(is_public: bool) -> Self {
        Self {
            result: Ok(is_public),
            calls: Arc::default(),
        }
    }

    /// Fails every call with `error`.
    pub fn failing(error: SharingError) -> Self {
        Self {
            result: Err(error),
            calls: Arc::default(),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond(&self, dashboard_uid: &str) -> Result<SharingConfig> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result
            .clone()
            .map(|is_public| SharingConfig::new(dashboard_uid, is_public))
    }
}

#[async_trait]
impl DashboardSharingService for FakeSharingService {
    async fn get_sharing_config(
        &self,
        _caller: &SignedInUser,
        dashboard_uid: &str,
    ) -> Result<SharingConfig> {
        self.respond(dashboard_uid)
    }

    async fn set_sharing_config(
        &self,
        _caller: &SignedInUser,
        dashboard_uid: &str,
        _is_public: bool,
    ) -> Result<SharingConfig> {
        self.respond(dashboard_uid)
    }
}
