use serde::{Deserialize, Serialize};

/// Body of `POST /api/dashboards/uid/{uid}/sharing`.
///
/// Unknown fields are ignored; `isPublic` is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveSharingConfigRequest {
    pub is_public: bool,
}
