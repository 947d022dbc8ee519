// Classification pipeline: turns calendar events into display-ready items.
//
// Per event, in strict order: events without a summary are dropped; a
// per-entity override (if any) wins outright and yields exactly one item;
// otherwise every rule is evaluated in list order and each match yields one
// item; with zero matches the mandatory `others` rule supplies a single
// fallback item. `classify_all` folds this over the whole event sequence,
// preserving input order.

use crate::error::ClassifyError;
use crate::model::event::CalendarEvent;
use crate::model::item::{CalendarItem, ItemSettings};
use crate::model::matcher::RuleMatcher;
use crate::model::rule::{EntityOverride, MatchRule, PickupKind};

/// Returns the first override whose entity equals the event's entity.
/// Duplicate entities are not validated here; first match wins.
pub fn find_override<'a>(
    event: &CalendarEvent,
    overrides: &'a [EntityOverride],
) -> Option<&'a EntityOverride> {
    let entity = event.entity.as_deref()?;
    if entity.is_empty() {
        return None;
    }
    overrides.iter().find(|over| over.entity == entity)
}

/// Layered label resolution. The explicit per-call summary preference sits
/// above the configured label, which sits above the raw event summary,
/// which sits above a guaranteed default.
fn resolve_label(event: &CalendarEvent, settings: &ItemSettings, use_summary: bool) -> String {
    if use_summary
        && let Some(summary) = event.content.summary.as_deref()
        && !summary.is_empty()
    {
        return summary.to_string();
    }
    if let Some(label) = settings.label()
        && !label.is_empty()
    {
        return label.to_string();
    }
    if let Some(summary) = event.content.summary.as_deref() {
        return summary.to_string();
    }
    "unknown".to_string()
}

/// Explicit field-by-field merge of event and settings into an item.
/// Settings win for icon/color/picture; label and type are computed. Kept
/// explicit so a future settings field cannot silently shadow event fields.
fn build_item(event: &CalendarEvent, settings: &ItemSettings, use_summary: bool) -> CalendarItem {
    CalendarItem {
        entity: event.entity.clone(),
        content: event.content.clone(),
        start: event.start,
        end: event.end,
        label: resolve_label(event, settings, use_summary),
        icon: settings.icon().map(str::to_string),
        color: settings.color().map(str::to_string),
        picture: settings.picture().map(str::to_string),
        item_type: settings.item_type(),
    }
}

/// Pure, synchronous classifier over borrowed configuration. Safe to use
/// from multiple threads with independent inputs; there is no shared state.
pub struct Classifier<'a> {
    rules: &'a [MatchRule],
    overrides: &'a [EntityOverride],
    use_summary: bool,
    matcher: &'a dyn RuleMatcher,
}

impl<'a> Classifier<'a> {
    pub fn new(
        rules: &'a [MatchRule],
        overrides: &'a [EntityOverride],
        use_summary: bool,
        matcher: &'a dyn RuleMatcher,
    ) -> Self {
        Self {
            rules,
            overrides,
            use_summary,
            matcher,
        }
    }

    /// Classifies one event into zero, one, or N items.
    ///
    /// Zero: the event has no summary. One: an override matched (overrides
    /// are exclusive, rules are never consulted), or the fallback applied.
    /// N: one item per matching rule, in rule-list order.
    pub fn classify(&self, event: &CalendarEvent) -> Result<Vec<CalendarItem>, ClassifyError> {
        if event.content.summary.is_none() {
            return Ok(Vec::new());
        }

        if let Some(over) = find_override(event, self.overrides) {
            let settings = ItemSettings::Override(over);
            return Ok(vec![build_item(event, &settings, self.use_summary)]);
        }

        let mut items = Vec::new();
        for (idx, rule) in self.rules.iter().enumerate() {
            let hit = self
                .matcher
                .matches(rule, event)
                .map_err(|source| ClassifyError::Matcher { index: idx, source })?;
            if hit {
                let settings = ItemSettings::Rule { rule, idx };
                items.push(build_item(event, &settings, self.use_summary));
            }
        }

        if items.is_empty() {
            // Fallback index is fixed at 0 so the item type is always plain
            // "others", never "custom-0", regardless of the rule's position.
            let fallback = self
                .rules
                .iter()
                .find(|rule| rule.kind == PickupKind::Others)
                .ok_or(ClassifyError::MissingFallbackRule)?;
            let settings = ItemSettings::Rule {
                rule: fallback,
                idx: 0,
            };
            items.push(build_item(event, &settings, self.use_summary));
        }

        Ok(items)
    }

    /// Classifies every event in input order and concatenates the per-event
    /// item sequences. Relative order is stable: events do not reorder each
    /// other, and within one event items follow rule-list order.
    pub fn classify_all(
        &self,
        events: &[CalendarEvent],
    ) -> Result<Vec<CalendarItem>, ClassifyError> {
        let mut items = Vec::new();
        for event in events {
            items.extend(self.classify(event)?);
        }
        log::debug!("classified {} events into {} items", events.len(), items.len());
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::event::EventContent;
    use crate::model::rule::PickupKind;

    fn event(summary: Option<&str>) -> CalendarEvent {
        CalendarEvent {
            entity: Some("calendar.waste".to_string()),
            content: EventContent {
                summary: summary.map(str::to_string),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn rule_with_label(label: &str) -> MatchRule {
        let mut rule = MatchRule::new(PickupKind::Paper);
        rule.label = Some(label.to_string());
        rule
    }

    #[test]
    fn test_label_summary_wins_when_requested() {
        let rule = rule_with_label("Blue bin");
        let settings = ItemSettings::Rule { rule: &rule, idx: 0 };
        let ev = event(Some("Paper pickup"));
        assert_eq!(resolve_label(&ev, &settings, true), "Paper pickup");
        assert_eq!(resolve_label(&ev, &settings, false), "Blue bin");
    }

    #[test]
    fn test_label_empty_summary_does_not_win() {
        let rule = rule_with_label("Blue bin");
        let settings = ItemSettings::Rule { rule: &rule, idx: 0 };
        let ev = event(Some(""));
        assert_eq!(resolve_label(&ev, &settings, true), "Blue bin");
    }

    #[test]
    fn test_label_falls_back_to_summary_then_unknown() {
        let rule = MatchRule::new(PickupKind::Paper);
        let settings = ItemSettings::Rule { rule: &rule, idx: 0 };
        assert_eq!(
            resolve_label(&event(Some("Paper pickup")), &settings, false),
            "Paper pickup"
        );
        assert_eq!(resolve_label(&event(None), &settings, false), "unknown");
    }

    #[test]
    fn test_label_empty_configured_label_is_skipped() {
        let rule = rule_with_label("");
        let settings = ItemSettings::Rule { rule: &rule, idx: 0 };
        assert_eq!(
            resolve_label(&event(Some("Paper pickup")), &settings, false),
            "Paper pickup"
        );
    }

    #[test]
    fn test_find_override_requires_entity() {
        let overrides = vec![EntityOverride::new("calendar.waste")];

        let mut ev = event(Some("Pickup"));
        assert!(find_override(&ev, &overrides).is_some());

        ev.entity = None;
        assert!(find_override(&ev, &overrides).is_none());

        ev.entity = Some(String::new());
        assert!(find_override(&ev, &overrides).is_none());

        let ev = event(Some("Pickup"));
        assert!(find_override(&ev, &[]).is_none());
    }

    #[test]
    fn test_find_override_first_match_wins() {
        let mut first = EntityOverride::new("calendar.waste");
        first.label = Some("first".to_string());
        let mut second = EntityOverride::new("calendar.waste");
        second.label = Some("second".to_string());

        let overrides = vec![first, second];
        let found = find_override(&event(Some("Pickup")), &overrides).unwrap();
        assert_eq!(found.label.as_deref(), Some("first"));
    }

    #[test]
    fn test_merge_contract_settings_fields_carried() {
        let mut rule = MatchRule::new(PickupKind::Recycle);
        rule.icon = Some("mdi:recycle".to_string());
        rule.color = Some("#ffee00".to_string());
        rule.picture = Some("/local/recycle.png".to_string());
        let settings = ItemSettings::Rule { rule: &rule, idx: 1 };

        let ev = event(Some("Recycling"));
        let item = build_item(&ev, &settings, false);

        assert_eq!(item.entity, ev.entity);
        assert_eq!(item.content, ev.content);
        assert_eq!(item.icon.as_deref(), Some("mdi:recycle"));
        assert_eq!(item.color.as_deref(), Some("#ffee00"));
        assert_eq!(item.picture.as_deref(), Some("/local/recycle.png"));
        assert_eq!(item.label, "Recycling");
    }
}
