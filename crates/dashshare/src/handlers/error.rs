use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dashshare_core::sharing::{sharing_error_to_status_code, SharingError};
use serde::Serialize;

/// JSON error body returned for every non-404 failure.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

/// Errors returned by API handlers.
///
/// `NotFound` renders with an empty body so that a disabled feature cannot be
/// told apart from a missing dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    Unauthorized,
    Forbidden(String),
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound => return StatusCode::NOT_FOUND.into_response(),
            Self::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            Self::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized".to_string()),
            Self::Forbidden(message) => (StatusCode::FORBIDDEN, message),
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "Internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<SharingError> for ApiError {
    fn from(error: SharingError) -> Self {
        match sharing_error_to_status_code(&error) {
            404 => Self::NotFound,
            403 => Self::Forbidden(error.to_string()),
            400 => Self::BadRequest(error.to_string()),
            _ => Self::Internal(error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashshare_core::identity::OrgRole;
    use http_body_util::BodyExt;

    async fn body_of(error: ApiError) -> (StatusCode, Vec<u8>) {
        let response = error.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_not_found_has_empty_body() {
        let (status, body) = body_of(ApiError::NotFound).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_bad_request_has_message() {
        let (status, body) = body_of(ApiError::BadRequest("bad json".to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["message"], "bad json");
    }

    #[tokio::test]
    async fn test_internal_does_not_leak_detail() {
        let (status, body) = body_of(ApiError::Internal("db password=hunter2".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let text = String::from_utf8(body).unwrap();
        assert!(!text.contains("hunter2"));
        assert!(text.contains("Internal server error"));
    }

    #[test]
    fn test_from_sharing_error() {
        assert_eq!(
            ApiError::from(SharingError::NotFound {
                uid: "x".to_string()
            }),
            ApiError::NotFound
        );
        assert_eq!(
            ApiError::from(SharingError::Forbidden {
                required: OrgRole::Editor
            }),
            ApiError::Forbidden("Requires Editor role".to_string())
        );
        assert!(matches!(
            ApiError::from(SharingError::Validation("empty".to_string())),
            ApiError::BadRequest(_)
        ));
        assert!(matches!(
            ApiError::from(SharingError::Internal("boom".to_string())),
            ApiError::Internal(_)
        ));
    }
}
