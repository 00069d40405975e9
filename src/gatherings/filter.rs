//! The filter engine: pure predicates over the event sequence.
//!
//! [`filter_events`] is the single source of truth for which events match a
//! set of criteria. It is referentially transparent and order-preserving:
//! the result is always a subsequence of the input, never reordered and
//! never duplicated. Everything downstream (the tab partitioner, the CLI
//! listing) is derived from it.
//!
//! All active criteria combine with AND. A criterion left as `None` matches
//! everything, so `FilterCriteria::default()` is the identity filter.

use crate::model::{Event, EventType};
use chrono::NaiveDate;

/// User-selected constraints, rebuilt on every interaction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name, description,
    /// location, and college.
    pub search_query: Option<String>,
    pub event_type: Option<EventType>,
    /// Exact college match.
    pub college: Option<String>,
    /// Inclusive lower bound on the event date.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the event date.
    pub end_date: Option<NaiveDate>,
}

impl FilterCriteria {
    /// The search query, if it has any non-whitespace content. A query of
    /// `""` (a cleared search box) is treated as no query at all.
    pub fn active_query(&self) -> Option<&str> {
        self.search_query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
    }

    pub fn has_query(&self) -> bool {
        self.active_query().is_some()
    }

    /// A copy with the type constraint cleared. The tab partitioner uses
    /// this: type slicing happens per tab, not in the shared base filter.
    pub fn without_type(&self) -> Self {
        Self {
            event_type: None,
            ..self.clone()
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.has_query()
            && self.event_type.is_none()
            && self.college.is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }
}

/// Does a single event satisfy every active criterion?
pub fn event_matches(event: &Event, criteria: &FilterCriteria) -> bool {
    if let Some(query) = criteria.active_query() {
        let query = query.to_lowercase();
        let hit = [
            &event.name,
            &event.description,
            &event.location,
            &event.college,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&query));
        if !hit {
            return false;
        }
    }

    if let Some(event_type) = criteria.event_type {
        if event.event_type != event_type {
            return false;
        }
    }

    if let Some(college) = criteria.college.as_deref() {
        if event.college != college {
            return false;
        }
    }

    if criteria.start_date.is_some() || criteria.end_date.is_some() {
        // An unparseable stored date never matches an active date bound;
        // silently comparing garbage would be worse than hiding the event.
        let Some(date) = event.calendar_date() else {
            return false;
        };
        if let Some(start) = criteria.start_date {
            if date < start {
                return false;
            }
        }
        if let Some(end) = criteria.end_date {
            if date > end {
                return false;
            }
        }
    }

    true
}

/// The ordered subsequence of `events` satisfying all active criteria.
pub fn filter_events(events: &[Event], criteria: &FilterCriteria) -> Vec<Event> {
    events
        .iter()
        .filter(|event| event_matches(event, criteria))
        .cloned()
        .collect()
}

/// Distinct college names across `events`, sorted ascending. Deterministic,
/// so selection controls and snapshots render identically run to run.
pub fn unique_colleges(events: &[Event]) -> Vec<String> {
    let mut colleges: Vec<String> = events.iter().map(|event| event.college.clone()).collect();
    colleges.sort();
    colleges.dedup();
    colleges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventInput;

    fn event(id: &str, name: &str, college: &str, date: &str, event_type: EventType) -> Event {
        Event::from_input(
            id.to_string(),
            EventInput {
                name: name.to_string(),
                description: format!("{} description", name),
                date: date.to_string(),
                time: "10:00 AM".into(),
                location: "Main Hall".into(),
                college: college.to_string(),
                event_type,
                link: "https://example.edu/event".into(),
                image_url: None,
            },
        )
    }

    fn sample() -> Vec<Event> {
        vec![
            event("1", "Blockchain Hackathon", "MIT", "2025-06-15", EventType::Hackathon),
            event("2", "AI Workshop", "Stanford", "2025-07-20", EventType::Workshop),
            event("3", "Quantum Computing Talk", "Caltech", "2025-06-05", EventType::TechTalk),
        ]
    }

    #[test]
    fn empty_criteria_returns_everything_unchanged() {
        let events = sample();
        assert_eq!(filter_events(&events, &FilterCriteria::default()), events);
    }

    #[test]
    fn result_is_an_ordered_subsequence() {
        let events = sample();
        let criteria = FilterCriteria {
            start_date: NaiveDate::from_ymd_opt(2025, 6, 10),
            ..FilterCriteria::default()
        };
        let filtered = filter_events(&events, &criteria);
        let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn search_is_case_insensitive_substring_match() {
        let events = sample();

        // "AI" case-folds and matches anywhere in a field: both
        // "AI Workshop" and "Blockchain Hackathon" ("blockchAIn") hit.
        let criteria = FilterCriteria {
            search_query: Some("AI".into()),
            ..FilterCriteria::default()
        };
        let filtered = filter_events(&events, &criteria);
        let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);

        // A query that only one event contains narrows to that event.
        let criteria = FilterCriteria {
            search_query: Some("QUANTUM".into()),
            ..FilterCriteria::default()
        };
        let filtered = filter_events(&events, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "3");
    }

    #[test]
    fn search_reaches_location_and_college() {
        let events = sample();
        let criteria = FilterCriteria {
            search_query: Some("caltech".into()),
            ..FilterCriteria::default()
        };
        assert_eq!(filter_events(&events, &criteria)[0].id, "3");

        let criteria = FilterCriteria {
            search_query: Some("main hall".into()),
            ..FilterCriteria::default()
        };
        assert_eq!(filter_events(&events, &criteria).len(), 3);
    }

    #[test]
    fn blank_query_matches_everything() {
        let events = sample();
        let criteria = FilterCriteria {
            search_query: Some("   ".into()),
            ..FilterCriteria::default()
        };
        assert_eq!(filter_events(&events, &criteria).len(), 3);
        assert!(!criteria.has_query());
    }

    #[test]
    fn default_criteria_read_as_empty() {
        assert!(FilterCriteria::default().is_empty());

        // A cleared search box is still the identity filter.
        let blank_query = FilterCriteria {
            search_query: Some("  ".into()),
            ..FilterCriteria::default()
        };
        assert!(blank_query.is_empty());

        let with_college = FilterCriteria {
            college: Some("MIT".into()),
            ..FilterCriteria::default()
        };
        assert!(!with_college.is_empty());
    }

    #[test]
    fn type_filter_matches_exactly() {
        let events = sample();
        let criteria = FilterCriteria {
            event_type: Some(EventType::Hackathon),
            ..FilterCriteria::default()
        };
        let filtered = filter_events(&events, &criteria);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, "1");
    }

    #[test]
    fn college_filter_is_exact() {
        let events = sample();
        let criteria = FilterCriteria {
            college: Some("MIT".into()),
            ..FilterCriteria::default()
        };
        assert_eq!(filter_events(&events, &criteria).len(), 1);

        // Exact means exact: no case folding for the college dropdown.
        let criteria = FilterCriteria {
            college: Some("mit".into()),
            ..FilterCriteria::default()
        };
        assert!(filter_events(&events, &criteria).is_empty());
    }

    #[test]
    fn start_date_bound_is_inclusive_and_excludes_earlier() {
        let events = vec![event("1", "Early", "MIT", "2025-06-15", EventType::Workshop)];
        let on_the_day = FilterCriteria {
            start_date: NaiveDate::from_ymd_opt(2025, 6, 15),
            ..FilterCriteria::default()
        };
        assert_eq!(filter_events(&events, &on_the_day).len(), 1);

        let after = FilterCriteria {
            start_date: NaiveDate::from_ymd_opt(2025, 7, 1),
            ..FilterCriteria::default()
        };
        assert!(filter_events(&events, &after).is_empty());
    }

    #[test]
    fn end_date_bound_is_inclusive() {
        let events = sample();
        let criteria = FilterCriteria {
            end_date: NaiveDate::from_ymd_opt(2025, 6, 15),
            ..FilterCriteria::default()
        };
        let filtered = filter_events(&events, &criteria);
        let ids: Vec<&str> = filtered.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn unparseable_date_fails_active_date_bounds() {
        let events = vec![event("1", "TBD Event", "MIT", "date tbd", EventType::Workshop)];
        let criteria = FilterCriteria {
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1),
            ..FilterCriteria::default()
        };
        assert!(filter_events(&events, &criteria).is_empty());
    }

    #[test]
    fn unparseable_date_is_harmless_without_date_bounds() {
        let events = vec![event("1", "TBD Event", "MIT", "date tbd", EventType::Workshop)];
        let criteria = FilterCriteria {
            search_query: Some("tbd".into()),
            ..FilterCriteria::default()
        };
        assert_eq!(filter_events(&events, &criteria).len(), 1);
    }

    #[test]
    fn filters_on_disjoint_fields_compose() {
        let events = sample();
        let by_type = FilterCriteria {
            event_type: Some(EventType::Workshop),
            ..FilterCriteria::default()
        };
        let by_college = FilterCriteria {
            college: Some("Stanford".into()),
            ..FilterCriteria::default()
        };
        let combined = FilterCriteria {
            event_type: Some(EventType::Workshop),
            college: Some("Stanford".into()),
            ..FilterCriteria::default()
        };

        let sequential = filter_events(&filter_events(&events, &by_type), &by_college);
        assert_eq!(sequential, filter_events(&events, &combined));
    }

    #[test]
    fn unique_colleges_sorted_without_duplicates() {
        let mut events = sample();
        events.push(event("4", "Another MIT Event", "MIT", "2025-08-01", EventType::Workshop));
        assert_eq!(unique_colleges(&events), vec!["Caltech", "MIT", "Stanford"]);
    }

    #[test]
    fn unique_colleges_of_nothing_is_empty() {
        assert!(unique_colleges(&[]).is_empty());
    }
}
