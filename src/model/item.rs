// File: ./src/model/item.rs
use crate::model::event::{EventContent, EventDate};
use crate::model::rule::{EntityOverride, MatchRule, PickupKind};
use serde::{Serialize, Serializer};
use std::fmt;

/// Fully-resolved category tag of a display item.
///
/// The five fixed categories render as their plain name. Custom entries stay
/// distinguishable downstream (per-type styling, grouping) through their
/// source: `custom-<ruleIndex>` for rule matches, `custom-calendar-<entity>`
/// for overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemType {
    Organic,
    Paper,
    Recycle,
    Waste,
    Others,
    CustomRule(usize),
    CustomCalendar(String),
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemType::Organic => write!(f, "organic"),
            ItemType::Paper => write!(f, "paper"),
            ItemType::Recycle => write!(f, "recycle"),
            ItemType::Waste => write!(f, "waste"),
            ItemType::Others => write!(f, "others"),
            ItemType::CustomRule(idx) => write!(f, "custom-{}", idx),
            ItemType::CustomCalendar(entity) => write!(f, "custom-calendar-{}", entity),
        }
    }
}

impl Serialize for ItemType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

/// The display-ready representation of one (event, category) pairing.
/// Carries all event fields plus the resolved presentation metadata;
/// `label` is always present by construction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarItem {
    pub entity: Option<String>,
    pub content: EventContent,
    pub start: Option<EventDate>,
    pub end: Option<EventDate>,
    pub label: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub picture: Option<String>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

/// The settings record feeding one item build: either a rule (with its
/// position in the authored list) or a per-entity override. The two sources
/// are structurally near-identical but differ in `type` defaulting and in
/// how `custom` is disambiguated, so they are kept as an explicit variant
/// rather than duck-typed on field presence.
#[derive(Debug, Clone, Copy)]
pub enum ItemSettings<'a> {
    Rule { rule: &'a MatchRule, idx: usize },
    Override(&'a EntityOverride),
}

impl<'a> ItemSettings<'a> {
    pub fn label(&self) -> Option<&str> {
        match self {
            ItemSettings::Rule { rule, .. } => rule.label.as_deref(),
            ItemSettings::Override(over) => over.label.as_deref(),
        }
    }

    pub fn icon(&self) -> Option<&str> {
        match self {
            ItemSettings::Rule { rule, .. } => rule.icon.as_deref(),
            ItemSettings::Override(over) => over.icon.as_deref(),
        }
    }

    pub fn color(&self) -> Option<&str> {
        match self {
            ItemSettings::Rule { rule, .. } => rule.color.as_deref(),
            ItemSettings::Override(over) => over.color.as_deref(),
        }
    }

    pub fn picture(&self) -> Option<&str> {
        match self {
            ItemSettings::Rule { rule, .. } => rule.picture.as_deref(),
            ItemSettings::Override(over) => over.picture.as_deref(),
        }
    }

    /// Resolves the final item type. Rule-sourced `custom` becomes
    /// `custom-<idx>`; override-sourced `custom` becomes
    /// `custom-calendar-<entity>`; an override without a kind defaults to
    /// `others`.
    pub fn item_type(&self) -> ItemType {
        match self {
            ItemSettings::Rule { rule, idx } => match rule.kind {
                PickupKind::Custom => ItemType::CustomRule(*idx),
                kind => fixed_type(kind),
            },
            ItemSettings::Override(over) => match over.kind.unwrap_or_default() {
                PickupKind::Custom => ItemType::CustomCalendar(over.entity.clone()),
                kind => fixed_type(kind),
            },
        }
    }
}

fn fixed_type(kind: PickupKind) -> ItemType {
    match kind {
        PickupKind::Organic => ItemType::Organic,
        PickupKind::Paper => ItemType::Paper,
        PickupKind::Recycle => ItemType::Recycle,
        PickupKind::Waste => ItemType::Waste,
        PickupKind::Others | PickupKind::Custom => ItemType::Others,
    }
}
