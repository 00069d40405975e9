//! The tab partitioner: five named views derived from one filter pass.
//!
//! The directory is browsed through a fixed tab set — all events, one tab
//! per event type, and a search tab. Type slicing is deliberately excluded
//! from the shared base filter (the tabs *are* the type filter); the search
//! tab alone applies the full criteria, type included.
//!
//! The tab set is a closed enum rather than a string map so that a missing
//! arm is a compile error, not an empty screen.

use crate::filter::{filter_events, FilterCriteria};
use crate::model::{Event, EventType};
use std::fmt;
use std::str::FromStr;

/// A named view over the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    All,
    Hackathon,
    TechTalk,
    Workshop,
    Search,
}

impl Tab {
    /// Every tab, in display order.
    pub const ALL: [Tab; 5] = [
        Tab::All,
        Tab::Hackathon,
        Tab::TechTalk,
        Tab::Workshop,
        Tab::Search,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::Hackathon => "hackathon",
            Tab::TechTalk => "tech-talk",
            Tab::Workshop => "workshop",
            Tab::Search => "search",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::All => "All Events",
            Tab::Hackathon => "Hackathons",
            Tab::TechTalk => "Tech Talks",
            Tab::Workshop => "Workshops",
            Tab::Search => "Search",
        }
    }
}

impl Default for Tab {
    fn default() -> Self {
        Tab::All
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Tab::All),
            "hackathon" => Ok(Tab::Hackathon),
            "tech-talk" => Ok(Tab::TechTalk),
            "workshop" => Ok(Tab::Workshop),
            "search" => Ok(Tab::Search),
            other => Err(format!(
                "unknown tab '{}' (expected all, hackathon, tech-talk, workshop, or search)",
                other
            )),
        }
    }
}

/// The five derived views for one (events, criteria) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabViews {
    pub all: Vec<Event>,
    pub hackathon: Vec<Event>,
    pub tech_talk: Vec<Event>,
    pub workshop: Vec<Event>,
    pub search: Vec<Event>,
}

impl TabViews {
    /// Derive all five views from the full event sequence.
    ///
    /// `all` and the per-type tabs share one base pass with the type
    /// constraint cleared, so they still honor search, college, and date
    /// criteria. `search` runs the criteria unmodified, and only when a
    /// query is present — with no query it is empty, never a copy of `all`.
    pub fn build(events: &[Event], criteria: &FilterCriteria) -> Self {
        let search = if criteria.has_query() {
            filter_events(events, criteria)
        } else {
            Vec::new()
        };

        let all = filter_events(events, &criteria.without_type());
        let slice = |ty: EventType| -> Vec<Event> {
            all.iter()
                .filter(|event| event.event_type == ty)
                .cloned()
                .collect()
        };
        let hackathon = slice(EventType::Hackathon);
        let tech_talk = slice(EventType::TechTalk);
        let workshop = slice(EventType::Workshop);

        Self {
            all,
            hackathon,
            tech_talk,
            workshop,
            search,
        }
    }

    pub fn view(&self, tab: Tab) -> &[Event] {
        match tab {
            Tab::All => &self.all,
            Tab::Hackathon => &self.hackathon,
            Tab::TechTalk => &self.tech_talk,
            Tab::Workshop => &self.workshop,
            Tab::Search => &self.search,
        }
    }

    pub fn count(&self, tab: Tab) -> usize {
        self.view(tab).len()
    }
}

/// Which tab should be active after a criteria change.
///
/// Typing a query pulls the user onto the search tab; clearing it while
/// there drops back to `All`. Any other change leaves the current tab
/// alone, even if its view just became empty.
pub fn resolve_active_tab(current: Tab, criteria: &FilterCriteria) -> Tab {
    if criteria.has_query() {
        Tab::Search
    } else if current == Tab::Search {
        Tab::All
    } else {
        current
    }
}
