use thiserror::Error;

/// Errors raised while building a [`super::FeatureToggles`] from configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeatureToggleError {
    #[error("Invalid feature toggle name: {0:?}")]
    InvalidName(String),
}
