//! In-memory event store.
//!
//! The store is the single source of truth for what the grid displays. The
//! shell never edits it directly; it goes through [`CalendarApi`].

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::event::{CalendarEvent, EventId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("an event with id '{0}' is already displayed")]
    DuplicateId(EventId),
    #[error("invalid event: {0}")]
    InvalidEvent(String),
}

/// Calls the shell makes back into the calendar
#[cfg_attr(test, mockall::automock)]
pub trait CalendarApi {
    fn add_event(&mut self, event: CalendarEvent) -> Result<(), StoreError>;
    fn remove_event(&mut self, id: &EventId) -> Option<CalendarEvent>;
}

#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<CalendarEvent>,
    revision: u64,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `events`, skipping invalid or
    /// duplicate entries.
    pub fn with_initial_events(events: impl IntoIterator<Item = CalendarEvent>) -> Self {
        let mut store = Self::new();
        for event in events {
            if let Err(err) = store.add_event(event) {
                log::warn!("Skipping initial event: {}", err);
            }
        }
        store
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn get(&self, id: &EventId) -> Option<&CalendarEvent> {
        self.events.iter().find(|event| &event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Bumped on every mutation; used to detect event-set changes
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Events drawn on `date`, all-day events first, then by start time
    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        let mut day_events: Vec<&CalendarEvent> = self
            .events
            .iter()
            .filter(|event| event.covers_date(date))
            .collect();
        day_events.sort_by(|a, b| b.all_day.cmp(&a.all_day).then(a.start.cmp(&b.start)));
        day_events
    }
}

impl CalendarApi for EventStore {
    fn add_event(&mut self, event: CalendarEvent) -> Result<(), StoreError> {
        event.validate().map_err(StoreError::InvalidEvent)?;

        if self.get(&event.id).is_some() {
            return Err(StoreError::DuplicateId(event.id));
        }

        log::info!("Added event '{}' ({})", event.title, event.id);
        self.events.push(event);
        self.revision += 1;
        Ok(())
    }

    fn remove_event(&mut self, id: &EventId) -> Option<CalendarEvent> {
        let index = self.events.iter().position(|event| &event.id == id)?;
        let removed = self.events.remove(index);
        self.revision += 1;
        log::info!("Removed event '{}' ({})", removed.title, removed.id);
        Some(removed)
    }
}
