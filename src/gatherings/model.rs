//! Core data types: [`Event`], [`EventType`], and [`EventInput`].
//!
//! An [`Event`] is immutable once created. Events enter the system in exactly
//! two ways: the seed catalog ([`crate::seed`]) or a validated submission
//! through [`crate::store::EventStore::submit`]. Nothing updates or deletes
//! them afterwards.
//!
//! The `date` field is kept as the ISO `YYYY-MM-DD` string the user entered;
//! [`Event::calendar_date`] gives the parsed form for range comparisons. The
//! `time` field is a free-text display string ("9:00 AM (48 hours)") and is
//! never parsed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The kind of gathering. A closed set: every event is exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventType {
    Hackathon,
    TechTalk,
    Workshop,
}

impl EventType {
    pub const ALL: [EventType; 3] = [EventType::Hackathon, EventType::TechTalk, EventType::Workshop];

    /// The wire/CLI spelling ("tech-talk").
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Hackathon => "hackathon",
            EventType::TechTalk => "tech-talk",
            EventType::Workshop => "workshop",
        }
    }

    /// Human-readable name ("Tech Talk").
    pub fn label(&self) -> &'static str {
        match self {
            EventType::Hackathon => "Hackathon",
            EventType::TechTalk => "Tech Talk",
            EventType::Workshop => "Workshop",
        }
    }
}

impl Default for EventType {
    fn default() -> Self {
        // The submission form's default selection.
        EventType::Workshop
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hackathon" => Ok(EventType::Hackathon),
            "tech-talk" => Ok(EventType::TechTalk),
            "workshop" => Ok(EventType::Workshop),
            other => Err(format!(
                "unknown event type '{}' (expected hackathon, tech-talk, or workshop)",
                other
            )),
        }
    }
}

/// A single tech gathering: hackathon, tech talk, or workshop.
///
/// Serialized field names (`type`, `imageUrl`) match the directory's JSON
/// shape, so `--json` output round-trips with external consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub college: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Event {
    /// Build an event from a validated submission and a freshly minted id.
    pub fn from_input(id: String, input: EventInput) -> Self {
        Self {
            id,
            name: input.name,
            description: input.description,
            date: input.date,
            time: input.time,
            location: input.location,
            college: input.college,
            event_type: input.event_type,
            link: input.link,
            // An empty string from a cleared form field counts as absent.
            image_url: input.image_url.filter(|url| !url.is_empty()),
        }
    }

    /// Best-effort parse of the `date` field for calendar comparisons.
    /// Returns `None` for anything that is not `YYYY-MM-DD`.
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }
}

/// A submission candidate. Becomes an [`Event`] only after passing
/// [`crate::validate::validate_event_input`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventInput {
    pub name: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub college: String,
    pub event_type: EventType,
    pub link: String,
    pub image_url: Option<String>,
}
