// Logic for deciding whether a single rule applies to a single event.
//
// The pipeline consumes matching through the `RuleMatcher` trait so the
// hosting application can plug in its own predicate (regex engines,
// keyword lists, ...). `SummaryMatcher` is the built-in implementation:
// case-insensitive substring search of the rule's pattern over the event's
// summary, description, and location.

use crate::model::event::CalendarEvent;
use crate::model::rule::MatchRule;
use anyhow::Result;

/// Pure predicate deciding whether `rule` applies to `event`.
///
/// Implementations must be side-effect free. An `Err` is treated as fatal
/// for the whole classification call; it is propagated, never interpreted
/// as "no match".
pub trait RuleMatcher {
    fn matches(&self, rule: &MatchRule, event: &CalendarEvent) -> Result<bool>;
}

/// Plain closures work as matchers, which keeps test doubles cheap.
impl<F> RuleMatcher for F
where
    F: Fn(&MatchRule, &CalendarEvent) -> Result<bool>,
{
    fn matches(&self, rule: &MatchRule, event: &CalendarEvent) -> Result<bool> {
        self(rule, event)
    }
}

/// Default matcher: the rule's `pattern` is searched case-insensitively in
/// summary, description, and location. Rules without a pattern (typically
/// the `others` fallback) never match here.
pub struct SummaryMatcher;

impl RuleMatcher for SummaryMatcher {
    fn matches(&self, rule: &MatchRule, event: &CalendarEvent) -> Result<bool> {
        let Some(pattern) = rule.pattern.as_deref() else {
            return Ok(false);
        };
        if pattern.trim().is_empty() {
            return Ok(false);
        }

        let needle = pattern.to_lowercase();
        let content = &event.content;

        let summary_match = content
            .summary
            .as_deref()
            .is_some_and(|s| s.to_lowercase().contains(&needle));
        let desc_match = content
            .description
            .as_deref()
            .is_some_and(|d| d.to_lowercase().contains(&needle));
        let loc_match = content
            .location
            .as_deref()
            .is_some_and(|l| l.to_lowercase().contains(&needle));

        Ok(summary_match || desc_match || loc_match)
    }
}
