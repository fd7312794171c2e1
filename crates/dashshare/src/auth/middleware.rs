use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::state::AppState;

/// Attaches the authenticated user to the request, if any.
///
/// Missing or unknown tokens are not rejected here; handlers decide what an
/// anonymous caller may do.
pub async fn authenticate(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned);

    if let Some(token) = token {
        match state.authenticator.authenticate(&token).await {
            Some(user) => {
                request.extensions_mut().insert(user);
            }
            None => tracing::debug!("Ignoring unknown bearer token"),
        }
    }

    next.run(request).await
}
