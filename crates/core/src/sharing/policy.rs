//! Authorization and validation rules for sharing changes.
//!
//! A caller from another organization gets `NotFound` rather than
//! `Forbidden`, so the response does not reveal that the UID exists.

use crate::identity::{OrgRole, SignedInUser};

use super::{Dashboard, SharingError};

/// Longest dashboard UID accepted.
pub const MAX_UID_LENGTH: usize = 40;

/// Checks that a dashboard UID is non-empty and made of `[A-Za-z0-9_-]`.
pub fn validate_dashboard_uid(uid: &str) -> Result<(), SharingError> {
    if uid.is_empty() {
        return Err(SharingError::Validation(
            "dashboard uid cannot be empty".to_string(),
        ));
    }
    if uid.len() > MAX_UID_LENGTH {
        return Err(SharingError::Validation(format!(
            "dashboard uid too long (max {MAX_UID_LENGTH} characters)"
        )));
    }
    if !uid
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(SharingError::Validation(
            "dashboard uid contains invalid characters".to_string(),
        ));
    }
    Ok(())
}

/// Requires Viewer (or above) in the dashboard's organization.
pub fn require_read_access(
    caller: &SignedInUser,
    dashboard: &Dashboard,
) -> Result<(), SharingError> {
    require_role(caller, dashboard, OrgRole::Viewer)
}

/// Requires Editor (or above) in the dashboard's organization.
pub fn require_write_access(
    caller: &SignedInUser,
    dashboard: &Dashboard,
) -> Result<(), SharingError> {
    require_role(caller, dashboard, OrgRole::Editor)
}

fn require_role(
    caller: &SignedInUser,
    dashboard: &Dashboard,
    required: OrgRole,
) -> Result<(), SharingError> {
    if caller.org_id != dashboard.org_id {
        return Err(SharingError::NotFound {
            uid: dashboard.uid.clone(),
        });
    }
    if !caller.role.at_least(required) {
        return Err(SharingError::Forbidden { required });
    }
    Ok(())
}
