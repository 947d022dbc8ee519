// File: ./src/model/event.rs
use anyhow::Result;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use icalendar::{Calendar, CalendarComponent, Component};
use serde::{Deserialize, Serialize};
use std::fmt;

// --- DATE TYPES ---

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum EventDate {
    AllDay(NaiveDate),
    Specific(DateTime<Utc>),
}

impl EventDate {
    pub fn to_date_naive(&self) -> NaiveDate {
        match self {
            EventDate::AllDay(d) => *d,
            EventDate::Specific(dt) => dt.date_naive(),
        }
    }

    pub fn is_all_day(&self) -> bool {
        matches!(self, EventDate::AllDay(_))
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventDate::AllDay(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            EventDate::Specific(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M")),
        }
    }
}

// --- EVENTS ---

/// Free-text payload of a calendar event. A missing `summary` marks the
/// event as not displayable (e.g. a placeholder record); classification
/// drops such events silently.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct EventContent {
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

/// One calendar occurrence as handed over by the hosting calendar layer.
/// The temporal fields are carried through untouched; classification only
/// looks at `entity` and `content`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    #[serde(default)]
    pub entity: Option<String>,
    pub content: EventContent,
    #[serde(default)]
    pub start: Option<EventDate>,
    #[serde(default)]
    pub end: Option<EventDate>,
}

impl CalendarEvent {
    /// Parses all VEVENT components of a raw ICS document into events,
    /// attaching `entity` as the originating calendar id of each one.
    pub fn events_from_ics(raw_ics: &str, entity: &str) -> Result<Vec<CalendarEvent>> {
        let calendar: Calendar = raw_ics
            .parse()
            .map_err(|e| anyhow::anyhow!("Failed to parse ICS: {}", e))?;

        let mut events = Vec::new();
        for component in &calendar.components {
            let CalendarComponent::Event(vevent) = component else {
                continue;
            };

            let summary = vevent.get_summary().map(str::to_string);
            let description = vevent.get_description().map(str::to_string);
            let location = vevent
                .properties()
                .get("LOCATION")
                .map(|p| p.value().to_string());

            let start = vevent
                .properties()
                .get("DTSTART")
                .and_then(|p| parse_ics_date(p.value()));
            let end = vevent
                .properties()
                .get("DTEND")
                .and_then(|p| parse_ics_date(p.value()));

            events.push(CalendarEvent {
                entity: Some(entity.to_string()),
                content: EventContent {
                    summary,
                    description,
                    location,
                },
                start,
                end,
            });
        }

        Ok(events)
    }
}

/// ICS DATE values are 8 characters (all-day); DATE-TIME values carry a
/// trailing 'Z' when UTC, otherwise they are treated as naive UTC.
fn parse_ics_date(val: &str) -> Option<EventDate> {
    if val.len() == 8 {
        NaiveDate::parse_from_str(val, "%Y%m%d")
            .ok()
            .map(EventDate::AllDay)
    } else if val.ends_with('Z') {
        NaiveDateTime::parse_from_str(val, "%Y%m%dT%H%M%SZ")
            .ok()
            .map(|d| EventDate::Specific(Utc.from_utc_datetime(&d)))
    } else {
        NaiveDateTime::parse_from_str(val, "%Y%m%dT%H%M%S")
            .ok()
            .map(|d| EventDate::Specific(Utc.from_utc_datetime(&d)))
    }
}
