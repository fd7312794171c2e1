use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether a dashboard can be rendered without authentication.
///
/// Serialized as `{"dashboardUid": "...", "isPublic": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharingConfig {
    pub dashboard_uid: String,
    pub is_public: bool,
}

impl SharingConfig {
    pub fn new(dashboard_uid: impl Into<String>, is_public: bool) -> Self {
        Self {
            dashboard_uid: dashboard_uid.into(),
            is_public,
        }
    }
}

/// The slice of a stored dashboard this crate cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub uid: String,
    pub org_id: i64,
    pub title: String,
    pub is_public: bool,
    pub updated_at: DateTime<Utc>,
}

impl Dashboard {
    /// Creates a private dashboard in org 1.
    pub fn new(uid: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            org_id: 1,
            title: title.into(),
            is_public: false,
            updated_at: Utc::now(),
        }
    }

    /// Sets the owning organization (useful for testing).
    pub fn with_org(mut self, org_id: i64) -> Self {
        self.org_id = org_id;
        self
    }

    pub fn with_public(mut self, is_public: bool) -> Self {
        self.is_public = is_public;
        self
    }

    pub fn sharing_config(&self) -> SharingConfig {
        SharingConfig::new(self.uid.clone(), self.is_public)
    }
}
