//! # Directory Facade
//!
//! [`EventDirectory`] is the single entry point for every operation a UI
//! needs: submit an event, change the filter criteria, pick a tab, read the
//! derived views. It owns the store, the current criteria, and the active
//! tab; clients hold no directory state of their own.
//!
//! ## What the facade does NOT do
//!
//! - **I/O**: no stdout, stderr, or terminal assumptions — callers render.
//! - **Business logic**: filtering, partitioning, and validation live in
//!   [`crate::filter`], [`crate::tabs`], and [`crate::validate`]; the facade
//!   only sequences them.
//!
//! ## Reactivity
//!
//! Every mutation (`submit_event`, `set_criteria`, `set_active_tab`) rederives
//! the five tab views and hands them to each registered observer before
//! returning. Everything is synchronous and run-to-completion: there is one
//! logical thread, the store mutates only through this facade, and a caller
//! never observes a half-applied interaction.

use crate::error::{DirectoryError, Result};
use crate::filter::{unique_colleges, FilterCriteria};
use crate::model::{Event, EventInput};
use crate::store::EventStore;
use crate::tabs::{resolve_active_tab, Tab, TabViews};

/// Callback invoked with freshly derived views after every mutation.
pub type ViewObserver = Box<dyn FnMut(&TabViews)>;

/// The directory core: store + criteria + active tab + observers.
pub struct EventDirectory {
    store: EventStore,
    criteria: FilterCriteria,
    active_tab: Tab,
    observers: Vec<ViewObserver>,
}

impl EventDirectory {
    /// An empty directory.
    pub fn new() -> Self {
        Self::with_store(EventStore::new())
    }

    /// A directory pre-populated with the seed catalog.
    pub fn with_seed() -> Self {
        Self::with_store(EventStore::seeded())
    }

    pub fn with_store(store: EventStore) -> Self {
        Self {
            store,
            criteria: FilterCriteria::default(),
            active_tab: Tab::All,
            observers: Vec::new(),
        }
    }

    /// Validate and add a new event. On success the event lands at the top
    /// of the `all` view and observers see the updated views.
    pub fn submit_event(&mut self, input: EventInput) -> Result<Event> {
        let event = self.store.submit(input)?;
        self.notify();
        Ok(event)
    }

    /// Replace the filter criteria, re-resolving the active tab: a fresh
    /// query jumps to the search tab, a cleared one falls back to `All`,
    /// anything else leaves the tab where the user put it.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.active_tab = resolve_active_tab(self.active_tab, &self.criteria);
        self.notify();
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Manually select a tab.
    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.notify();
    }

    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    /// All five derived views under the current criteria.
    pub fn views(&self) -> TabViews {
        TabViews::build(self.store.events(), &self.criteria)
    }

    /// The events of the active tab, in store order.
    pub fn active_view(&self) -> Vec<Event> {
        self.views().view(self.active_tab).to_vec()
    }

    /// Distinct college names across the whole store, sorted.
    pub fn colleges(&self) -> Vec<String> {
        unique_colleges(self.store.events())
    }

    pub fn get_event(&self, id: &str) -> Result<&Event> {
        self.store
            .get(id)
            .ok_or_else(|| DirectoryError::EventNotFound(id.to_string()))
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    /// Register an observer; it fires after every subsequent mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&TabViews) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let views = TabViews::build(self.store.events(), &self.criteria);
        for observer in &mut self.observers {
            observer(&views);
        }
    }
}

impl Default for EventDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::EventType;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn input(name: &str) -> EventInput {
        EventInput {
            name: name.to_string(),
            description: "A long enough description for the rules.".into(),
            date: "2025-09-01".into(),
            time: "10:00 AM".into(),
            location: "Main Hall".into(),
            college: "MIT".into(),
            event_type: EventType::Workshop,
            link: "https://example.edu/event".into(),
            image_url: None,
        }
    }

    #[test]
    fn submitted_event_tops_the_all_view() {
        let mut directory = EventDirectory::with_seed();
        let before = directory.active_view().len();

        let event = directory.submit_event(input("Rust Systems Workshop")).unwrap();

        let view = directory.active_view();
        assert_eq!(view.len(), before + 1);
        assert_eq!(view[0], event);
    }

    #[test]
    fn rejected_submission_surfaces_the_validation_error() {
        let mut directory = EventDirectory::new();
        let bad = EventInput {
            link: "not-a-url".into(),
            ..input("Broken")
        };
        match directory.submit_event(bad) {
            Err(DirectoryError::Validation(err)) => assert!(err.mentions("link")),
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(directory.store().is_empty());
    }

    #[test]
    fn query_pulls_the_active_tab_to_search() {
        let mut directory = EventDirectory::with_seed();
        directory.set_active_tab(Tab::Workshop);

        directory.set_criteria(FilterCriteria {
            search_query: Some("quantum".into()),
            ..FilterCriteria::default()
        });

        assert_eq!(directory.active_tab(), Tab::Search);
        let view = directory.active_view();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].name, "Future of Quantum Computing");
    }

    #[test]
    fn cleared_query_falls_back_to_all() {
        let mut directory = EventDirectory::with_seed();
        directory.set_criteria(FilterCriteria {
            search_query: Some("quantum".into()),
            ..FilterCriteria::default()
        });
        assert_eq!(directory.active_tab(), Tab::Search);
        assert!(directory.criteria().has_query());

        directory.set_criteria(FilterCriteria::default());
        assert_eq!(directory.active_tab(), Tab::All);
        assert!(directory.criteria().is_empty());
    }

    #[test]
    fn non_search_tab_survives_a_criteria_change() {
        let mut directory = EventDirectory::with_seed();
        directory.set_active_tab(Tab::Hackathon);

        directory.set_criteria(FilterCriteria {
            college: Some("MIT".into()),
            ..FilterCriteria::default()
        });

        // MIT has no seeded hackathons, but the tab stays put.
        assert_eq!(directory.active_tab(), Tab::Hackathon);
        assert!(directory.active_view().is_empty());
    }

    #[test]
    fn observers_fire_on_every_mutation() {
        let mut directory = EventDirectory::with_seed();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        directory.subscribe(move |views| sink.borrow_mut().push(views.all.len()));

        directory.submit_event(input("Observed Workshop")).unwrap();
        directory.set_criteria(FilterCriteria {
            event_type: Some(EventType::Workshop),
            ..FilterCriteria::default()
        });

        // Submit grows `all` to 9; the type criterion does not shrink it.
        assert_eq!(*seen.borrow(), vec![9, 9]);
    }

    #[test]
    fn get_event_reports_unknown_ids() {
        let directory = EventDirectory::with_seed();
        assert!(directory.get_event("3").is_ok());
        assert!(matches!(
            directory.get_event("missing"),
            Err(DirectoryError::EventNotFound(_))
        ));
    }

    #[test]
    fn colleges_come_back_sorted() {
        let directory = EventDirectory::with_seed();
        let colleges = directory.colleges();
        let mut sorted = colleges.clone();
        sorted.sort();
        assert_eq!(colleges, sorted);
        assert_eq!(colleges.len(), 8);
    }
}
