//! Pure types for request-scoped context.

use dashshare_core::identity::{OrgRole, SignedInUser};
use uuid::Uuid;

/// Unique identifier for a request, used for tracing and logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Request-scoped context available to all handlers.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Authenticated user (None if anonymous).
    pub user: Option<SignedInUser>,
    pub request_id: RequestId,
}

impl RequestContext {
    /// Organization role of the caller; anonymous callers have none.
    pub fn role(&self) -> OrgRole {
        self.user
            .as_ref()
            .map(|u| u.role)
            .unwrap_or(OrgRole::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anonymous_role_is_none() {
        let ctx = RequestContext {
            user: None,
            request_id: RequestId::new(),
        };
        assert_eq!(ctx.role(), OrgRole::None);
    }

    #[test]
    fn test_role_comes_from_user() {
        let ctx = RequestContext {
            user: Some(SignedInUser::new("editor", OrgRole::Editor)),
            request_id: RequestId::new(),
        };
        assert_eq!(ctx.role(), OrgRole::Editor);
    }

    #[test]
    fn test_request_id_display_is_uuid() {
        let uuid = Uuid::new_v4();
        assert_eq!(RequestId::from_uuid(uuid).to_string(), uuid.to_string());
    }
}
