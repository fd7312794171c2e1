//! Dashboard sharing endpoints, gated on the `publicDashboards` toggle.

use axum::{
    body::Bytes,
    extract::{Path, State},
    Json,
};
use dashshare_core::features::FLAG_PUBLIC_DASHBOARDS;
use dashshare_core::identity::{OrgRole, SignedInUser};
use dashshare_core::sharing::{SaveSharingConfigRequest, SharingConfig};

use crate::{context::RequestContext, handlers::ApiError, state::AppState};

/// Runs the checks shared by every sharing route: toggle, then identity,
/// then the minimum Viewer role.
fn authorize_sharing_request(
    state: &AppState,
    ctx: RequestContext,
    dashboard_uid: &str,
) -> Result<SignedInUser, ApiError> {
    if !state.features.is_enabled(FLAG_PUBLIC_DASHBOARDS) {
        tracing::debug!(
            request_id = %ctx.request_id,
            dashboard_uid = %dashboard_uid,
            "Sharing request rejected: feature disabled"
        );
        return Err(ApiError::NotFound);
    }

    let role = ctx.role();
    let Some(user) = ctx.user else {
        return Err(ApiError::Unauthorized);
    };

    if !role.can_view() {
        tracing::warn!(
            request_id = %ctx.request_id,
            dashboard_uid = %dashboard_uid,
            user = %user.login,
            role = %role,
            "Authorization denied: viewer role required"
        );
        return Err(ApiError::Forbidden(format!(
            "Requires {} role",
            OrgRole::Viewer
        )));
    }

    Ok(user)
}

/// POST /api/dashboards/uid/{uid}/sharing - Make a dashboard public or private.
#[axum::debug_handler]
pub async fn save_sharing_config(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(dashboard_uid): Path<String>,
    body: Bytes,
) -> Result<Json<SharingConfig>, ApiError> {
    let request_id = ctx.request_id;
    let user = authorize_sharing_request(&state, ctx, &dashboard_uid)?;

    let request: SaveSharingConfigRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(request_id = %request_id, error = %e, "Malformed sharing request body");
        ApiError::BadRequest(format!("Invalid request body: {e}"))
    })?;

    let config = state
        .sharing
        .set_sharing_config(&user, &dashboard_uid, request.is_public)
        .await?;

    Ok(Json(config))
}

/// GET /api/dashboards/uid/{uid}/sharing - Current sharing config.
#[axum::debug_handler]
pub async fn get_sharing_config(
    State(state): State<AppState>,
    ctx: RequestContext,
    Path(dashboard_uid): Path<String>,
) -> Result<Json<SharingConfig>, ApiError> {
    let user = authorize_sharing_request(&state, ctx, &dashboard_uid)?;

    let config = state
        .sharing
        .get_sharing_config(&user, &dashboard_uid)
        .await?;

    Ok(Json(config))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{auth::StaticTokenAuthenticator, fakes::FakeSharingService};
    use dashshare_core::features::FeatureToggles;

    fn state(public_dashboards: bool, fake: &FakeSharingService) -> AppState {
        AppState::new(
            FeatureToggles::with_features([(FLAG_PUBLIC_DASHBOARDS, public_dashboards)]),
            Arc::new(fake.clone()),
            Arc::new(StaticTokenAuthenticator::new()),
        )
    }

    fn context(role: OrgRole) -> RequestContext {
        RequestContext {
            user: Some(SignedInUser::new("caller", role)),
            request_id: Default::default(),
        }
    }

    #[tokio::test]
    async fn test_handler_rejects_when_toggle_disabled() {
        let fake = FakeSharingService::returning(true);

        let result = save_sharing_config(
            State(state(false, &fake)),
            context(OrgRole::Admin),
            Path("dash-1".to_string()),
            Bytes::from_static(br#"{"isPublic": true}"#),
        )
        .await;

        assert_eq!(result.err(), Some(ApiError::NotFound));
        assert_eq!(fake.calls(), 0);
    }

    #[tokio::test]
    async fn test_handler_passes_decoded_flag_to_service() {
        let fake = FakeSharingService::returning(true);

        let Json(config) = save_sharing_config(
            State(state(true, &fake)),
            context(OrgRole::Viewer),
            Path("dash-1".to_string()),
            Bytes::from_static(br#"{"isPublic": true}"#),
        )
        .await
        .unwrap();

        assert_eq!(config, SharingConfig::new("dash-1", true));
        assert_eq!(fake.calls(), 1);
    }

    #[tokio::test]
    async fn test_get_handler_requires_identity() {
        let fake = FakeSharingService::returning(false);
        let ctx = RequestContext {
            user: None,
            request_id: Default::default(),
        };

        let result =
            get_sharing_config(State(state(true, &fake)), ctx, Path("dash-1".to_string())).await;

        assert_eq!(result.err(), Some(ApiError::Unauthorized));
        assert_eq!(fake.calls(), 0);
    }
}
