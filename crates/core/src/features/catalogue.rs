use serde::Serialize;

/// Exposes `POST /api/dashboards/uid/{uid}/sharing`.
pub const FLAG_PUBLIC_DASHBOARDS: &str = "publicDashboards";

/// Maturity of a feature behind a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureStage {
    Alpha,
    Beta,
    GeneralAvailability,
}

/// Static description of a toggle the server knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureDefinition {
    pub name: &'static str,
    pub description: &'static str,
    pub stage: FeatureStage,
}

/// Every toggle the server understands. Names outside this list are still
/// accepted so configuration can be rolled out ahead of a release.
pub const KNOWN_FEATURES: &[FeatureDefinition] = &[
    FeatureDefinition {
        name: FLAG_PUBLIC_DASHBOARDS,
        description: "Allow dashboards to be rendered without authentication",
        stage: FeatureStage::Alpha,
    },
];

/// Looks up a toggle definition by its exact (case-sensitive) name.
pub fn find_feature(name: &str) -> Option<&'static FeatureDefinition> {
    KNOWN_FEATURES.iter().find(|f| f.name == name)
}
