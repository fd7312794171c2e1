use dashshare_core::identity::{OrgRole, SignedInUser};
use dashshare_core::sharing::Dashboard;

use crate::auth::StaticTokenAuthenticator;

/// Dashboards available out of the box in development.
pub fn demo_dashboards() -> Vec<Dashboard> {
    vec![
        Dashboard::new("system-overview", "System Overview"),
        Dashboard::new("http-latency", "HTTP Latency").with_public(true),
        Dashboard::new("billing-daily", "Daily Billing"),
        // Belongs to a second org; invisible to the dev tokens below.
        Dashboard::new("partner-usage", "Partner Usage").with_org(2),
    ]
}

/// Bearer tokens for local testing, one per org role.
///
/// `curl -H 'Authorization: Bearer dev-editor' ...`
pub fn dev_authenticator() -> StaticTokenAuthenticator {
    StaticTokenAuthenticator::new()
        .with_token("dev-none", SignedInUser::new("nobody", OrgRole::None))
        .with_token("dev-viewer", SignedInUser::new("viewer", OrgRole::Viewer))
        .with_token("dev-editor", SignedInUser::new("editor", OrgRole::Editor))
        .with_token("dev-admin", SignedInUser::new("admin", OrgRole::Admin))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashshare_core::sharing::policy::validate_dashboard_uid;

    #[test]
    fn test_demo_dashboard_uids_are_valid() {
        for dashboard in demo_dashboards() {
            assert!(validate_dashboard_uid(&dashboard.uid).is_ok(), "{}", dashboard.uid);
        }
    }

    #[test]
    fn test_dev_authenticator_has_every_role() {
        assert_eq!(dev_authenticator().token_count(), 4);
    }
}
