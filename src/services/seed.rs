//! Sample events shown on first launch.

use chrono::{NaiveDate, NaiveTime};

use super::event_ids::EventIdGenerator;
use crate::models::event::CalendarEvent;

/// An all-day event and a noon event, both on `today`
pub fn initial_events(today: NaiveDate, ids: &mut EventIdGenerator) -> Vec<CalendarEvent> {
    let noon = NaiveTime::from_hms_opt(12, 0, 0).unwrap_or(NaiveTime::MIN);

    vec![
        CalendarEvent::new(
            ids.next_id(),
            "All-day event",
            today.and_time(NaiveTime::MIN),
            None,
            true,
        ),
        CalendarEvent::new(ids.next_id(), "Timed event", today.and_time(noon), None, false),
    ]
}
