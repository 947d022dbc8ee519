// File: ./src/model/rule.rs
// User-authored configuration records: the ordered rule list and the
// per-entity override list. Both are plain data; the classification
// pipeline in src/classify.rs interprets them.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Visual category assigned to a pickup item. `Others` is the mandatory
/// fallback category; `Custom` entries are disambiguated downstream via
/// their rule index or override entity (see `ItemType`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PickupKind {
    Organic,
    Paper,
    Recycle,
    Waste,
    #[default]
    Others,
    Custom,
}

/// One entry of the ordered rule list. `pattern` is the matching criterion
/// consumed by the `RuleMatcher`; the pipeline itself treats it as opaque.
/// List order is significant: the position of a `custom` rule is captured
/// into the resulting item type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRule {
    #[serde(rename = "type")]
    pub kind: PickupKind,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl MatchRule {
    pub fn new(kind: PickupKind) -> Self {
        Self {
            kind,
            pattern: None,
            label: None,
            icon: None,
            color: None,
            picture: None,
        }
    }
}

/// Per-entity settings that unconditionally supersede rule matching for
/// events originating from `entity`. Entities are expected to be unique
/// within the list; on duplicates the first entry wins (the ingestion
/// boundary logs a warning, see `Config::validate`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityOverride {
    pub entity: String,
    #[serde(rename = "type", default)]
    pub kind: Option<PickupKind>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub picture: Option<String>,
}

impl EntityOverride {
    pub fn new(entity: &str) -> Self {
        Self {
            entity: entity.to_string(),
            kind: None,
            label: None,
            icon: None,
            color: None,
            picture: None,
        }
    }
}
