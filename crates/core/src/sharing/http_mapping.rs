//! Pure mapping from sharing failures to HTTP status codes.

use super::SharingError;

/// Maps a [`SharingError`] to an HTTP status code.
///
/// - `NotFound` -> 404
/// - `Forbidden` -> 403
/// - `Validation` -> 400
/// - `Internal` -> 500
pub fn sharing_error_to_status_code(error: &SharingError) -> u16 {
    match error {
        SharingError::NotFound { .. } => 404,
        SharingError::Forbidden { .. } => 403,
        SharingError::Validation(_) => 400,
        SharingError::Internal(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::OrgRole;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = SharingError::NotFound {
            uid: "dash-1".to_string(),
        };
        assert_eq!(sharing_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_forbidden_maps_to_403() {
        let error = SharingError::Forbidden {
            required: OrgRole::Editor,
        };
        assert_eq!(sharing_error_to_status_code(&error), 403);
    }

    #[test]
    fn test_validation_maps_to_400() {
        let error = SharingError::Validation("uid is empty".to_string());
        assert_eq!(sharing_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_internal_maps_to_500() {
        let error = SharingError::Internal("connection reset".to_string());
        assert_eq!(sharing_error_to_status_code(&error), 500);
    }
}
