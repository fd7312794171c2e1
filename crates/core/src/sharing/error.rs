use thiserror::Error;

use crate::identity::OrgRole;

/// Failures reported by a [`super::DashboardSharingService`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharingError {
    #[error("Dashboard not found: {uid}")]
    NotFound { uid: String },
    #[error("Requires {required} role")]
    Forbidden { required: OrgRole },
    #[error("Invalid request: {0}")]
    Validation(String),
    #[error("Sharing service failure: {0}")]
    Internal(String),
}

/// Failures reported by a [`super::DashboardRepository`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Dashboard not found: {uid}")]
    NotFound { uid: String },
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<RepositoryError> for SharingError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound { uid } => SharingError::NotFound { uid },
            other => SharingError::Internal(other.to_string()),
        }
    }
}
