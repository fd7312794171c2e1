//! Runtime feature toggles.
//!
//! Toggles are resolved once at startup into an immutable [`FeatureToggles`]
//! value and shared read-only with every request handler.

mod catalogue;
mod error;
mod toggles;

pub use catalogue::{
    find_feature, FeatureDefinition, FeatureStage, FLAG_PUBLIC_DASHBOARDS, KNOWN_FEATURES,
};
pub use error::FeatureToggleError;
pub use toggles::{FeatureFlag, FeatureToggles};
