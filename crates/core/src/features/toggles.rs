use std::collections::BTreeSet;

use serde::Serialize;

use super::catalogue::{find_feature, KNOWN_FEATURES};
use super::error::FeatureToggleError;

/// A named toggle together with its resolved state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FeatureFlag {
    pub name: String,
    pub enabled: bool,
}

/// Immutable set of enabled feature toggles.
///
/// Lookups are fail-closed: any name that was not explicitly enabled at
/// construction time reports as disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureToggles {
    enabled: BTreeSet<String>,
}

impl FeatureToggles {
    /// Creates a registry with exactly the given toggles enabled.
    pub fn new<I, S>(enabled: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: enabled.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a registry from explicit `(name, enabled)` pairs.
    ///
    /// Later pairs win over earlier ones, so `[("a", true), ("a", false)]`
    /// leaves `a` disabled.
    pub fn with_features<I, S>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        overrides
            .into_iter()
            .fold(Self::default(), |toggles, (name, enabled)| {
                toggles.with_override(name, enabled)
            })
    }

    /// Returns a copy with one toggle forced on or off.
    pub fn with_override(mut self, name: impl Into<String>, enabled: bool) -> Self {
        let name = name.into();
        if enabled {
            self.enabled.insert(name);
        } else {
            self.enabled.remove(&name);
        }
        self
    }

    /// Parses a comma-separated enable list such as
    /// `"publicDashboards, dashboardPreviews"`.
    ///
    /// Whitespace around names and empty segments are ignored. Names may only
    /// contain ASCII letters, digits, `-` and `_`.
    pub fn parse_enable_list(raw: &str) -> Result<Self, FeatureToggleError> {
        let mut enabled = BTreeSet::new();
        for name in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            if !is_valid_name(name) {
                return Err(FeatureToggleError::InvalidName(name.to_string()));
            }
            enabled.insert(name.to_string());
        }
        Ok(Self { enabled })
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.contains(name)
    }

    /// Enabled toggle names in sorted order.
    pub fn enabled_names(&self) -> Vec<&str> {
        self.enabled.iter().map(String::as_str).collect()
    }

    /// Enabled names that are not part of the known catalogue.
    pub fn unknown_names(&self) -> Vec<&str> {
        self.enabled
            .iter()
            .map(String::as_str)
            .filter(|name| find_feature(name).is_none())
            .collect()
    }

    /// Resolved state of every catalogued toggle.
    pub fn flags(&self) -> Vec<FeatureFlag> {
        KNOWN_FEATURES
            .iter()
            .map(|def| FeatureFlag {
                name: def.name.to_string(),
                enabled: self.is_enabled(def.name),
            })
            .collect()
    }
}

fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
