use axum::{http::StatusCode, middleware, routing::get, Router};
use dashshare_core::features::FLAG_PUBLIC_DASHBOARDS;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::{
    auth::authenticate,
    handlers::{
        health::livez,
        sharing::{get_sharing_config, save_sharing_config},
    },
    state::AppState,
};

/// Routes that exist only while `publicDashboards` is enabled.
fn sharing_routes() -> Router<AppState> {
    Router::new().route(
        "/dashboards/uid/{uid}/sharing",
        get(get_sharing_config).post(save_sharing_config),
    )
}

/// Create the application router with all routes and middleware.
///
/// Toggles are fixed for the life of the process, so a disabled
/// `publicDashboards` leaves the sharing routes unmounted and every request to
/// them falls through to the default empty 404.
pub fn create_app(state: AppState) -> Router {
    let mut router: Router<AppState> = Router::new().route("/livez", get(livez));

    if state.features.is_enabled(FLAG_PUBLIC_DASHBOARDS) {
        router = router.nest("/api", sharing_routes());
    } else {
        tracing::debug!("Sharing routes not mounted: {FLAG_PUBLIC_DASHBOARDS} disabled");
    }

    router
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            state.request_timeout,
        ))
        .with_state(state)
}
