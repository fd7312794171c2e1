use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Organization role of a signed-in user.
///
/// Variants are declared in ascending order of privilege, so the derived
/// ordering can be used for "at least" checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum OrgRole {
    None,
    Viewer,
    Editor,
    Admin,
}

impl OrgRole {
    /// Returns true if this role is `required` or more privileged.
    pub fn at_least(self, required: OrgRole) -> bool {
        self >= required
    }

    /// Viewer and above may read dashboards.
    pub fn can_view(self) -> bool {
        self.at_least(OrgRole::Viewer)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrgRole::None => "None",
            OrgRole::Viewer => "Viewer",
            OrgRole::Editor => "Editor",
            OrgRole::Admin => "Admin",
        }
    }
}

impl fmt::Display for OrgRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An authenticated caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignedInUser {
    pub user_id: Uuid,
    pub login: String,
    pub org_id: i64,
    pub role: OrgRole,
}

impl SignedInUser {
    /// Creates a user in org 1 with a fresh ID.
    pub fn new(login: impl Into<String>, role: OrgRole) -> Self {
        Self {
            user_id: Uuid::new_v4(),
            login: login.into(),
            org_id: 1,
            role,
        }
    }

    /// Sets the organization (useful for testing).
    pub fn with_org(mut self, org_id: i64) -> Self {
        self.org_id = org_id;
        self
    }
}
