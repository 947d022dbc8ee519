// File: ./src/model/mod.rs
pub mod event;
pub mod item;
pub mod matcher;
pub mod rule;

pub use event::{CalendarEvent, EventContent, EventDate};
pub use item::{CalendarItem, ItemSettings, ItemType};
pub use matcher::{RuleMatcher, SummaryMatcher};
pub use rule::{EntityOverride, MatchRule, PickupKind};
