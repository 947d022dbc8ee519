// File: ./src/config.rs
// Configuration ingestion boundary: loading, defaults, and validation.
//
// The classification pipeline assumes the rule list always contains an
// `others` fallback entry. That invariant is enforced here, at load time,
// so broken configurations are rejected before any event is classified.

use crate::error::ConfigError;
use crate::model::rule::{EntityOverride, MatchRule, PickupKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

fn default_rules() -> Vec<MatchRule> {
    fn entry(kind: PickupKind, pattern: Option<&str>, icon: &str, color: &str) -> MatchRule {
        MatchRule {
            kind,
            pattern: pattern.map(str::to_string),
            label: None,
            icon: Some(icon.to_string()),
            color: Some(color.to_string()),
            picture: None,
        }
    }

    vec![
        entry(PickupKind::Organic, Some("bio"), "mdi:flower", "#5d8c3c"),
        entry(PickupKind::Paper, Some("paper"), "mdi:newspaper", "#3a75c4"),
        entry(PickupKind::Recycle, Some("recycl"), "mdi:recycle", "#e8b12b"),
        entry(PickupKind::Waste, Some("waste"), "mdi:trash-can", "#5b5b5b"),
        // Mandatory fallback; matches nothing itself (no pattern).
        entry(PickupKind::Others, None, "mdi:dump-truck", "#8a8a8a"),
    ]
}

#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct Config {
    #[serde(default = "default_rules")]
    pub rules: Vec<MatchRule>,
    #[serde(default)]
    pub overrides: Vec<EntityOverride>,
    /// Prefer the raw event summary over configured labels.
    #[serde(default)]
    pub use_summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        // Match the serde defaults
        Self {
            rules: default_rules(),
            overrides: Vec::new(),
            use_summary: false,
        }
    }
}

impl Config {
    /// Load and validate a configuration from a TOML file.
    /// Returns a contextualized error if reading, parsing, or validation fails.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let config = Self::from_toml_str(&contents, &path.display().to_string())?;
        Ok(config)
    }

    /// Parse and validate a configuration from a TOML string. `origin` is
    /// only used for error messages.
    pub fn from_toml_str(contents: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents).map_err(|e| ConfigError::Parse {
            path: origin.to_string(),
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the configuration invariants the pipeline relies on:
    /// - at least one rule with type `others` (hard error),
    /// - unique override entities (warning only; first entry wins).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.rules.iter().any(|rule| rule.kind == PickupKind::Others) {
            return Err(ConfigError::MissingFallbackRule);
        }

        let mut seen = HashSet::new();
        for over in &self.overrides {
            if !seen.insert(over.entity.as_str()) {
                log::warn!(
                    "duplicate override for entity '{}'; the first entry wins",
                    over.entity
                );
            }
        }

        Ok(())
    }
}
