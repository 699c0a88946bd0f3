// Event module
// Calendar event model, selection drafts and delete targets

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

use crate::models::settings::TimeFormat;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Identifier of an event, unique among the events currently displayed
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A calendar event as held by the event store.
///
/// Events are created once and never edited in place; the only lifecycle
/// transitions are "added" and "removed".
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    pub id: EventId,
    pub title: String,
    pub start: NaiveDateTime,
    /// Absent for point events
    pub end: Option<NaiveDateTime>,
    pub all_day: bool,
}

impl CalendarEvent {
    /// Create a new event
    ///
    /// # Examples
    /// ```
    /// use rust_calendar_lite::models::event::{CalendarEvent, EventId};
    /// use chrono::NaiveDate;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
    /// let event = CalendarEvent::new(
    ///     EventId::new("evt-1"),
    ///     "Team Sync",
    ///     day.and_hms_opt(0, 0, 0).unwrap(),
    ///     None,
    ///     true,
    /// );
    /// assert!(event.covers_date(day));
    /// ```
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
        all_day: bool,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            start,
            end,
            all_day,
        }
    }

    /// Check that the event carries the minimum it needs to be displayed
    pub fn validate(&self) -> Result<(), String> {
        if self.id.as_str().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }
        if self.title.is_empty() {
            return Err("Event title cannot be empty".to_string());
        }
        Ok(())
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Last calendar date this event is drawn on (inclusive)
    pub fn last_date(&self) -> NaiveDate {
        let start_date = self.start.date();
        let Some(end) = self.end else {
            return start_date;
        };

        // Ends are exclusive: an all-day end date or a midnight end time
        // does not occupy that day.
        let last = if self.all_day || end.time() == NaiveTime::MIN {
            end.date() - Duration::days(1)
        } else {
            end.date()
        };
        last.max(start_date)
    }

    /// Whether this event should be drawn on `date`
    pub fn covers_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.last_date()
    }

    /// Time prefix shown before the title in grid cells
    pub fn time_text(&self, format: TimeFormat) -> String {
        if self.all_day {
            return String::new();
        }
        format.format_time(self.start.time())
    }

    pub fn start_str(&self) -> String {
        format_boundary(self.start, self.all_day)
    }

    pub fn end_str(&self) -> Option<String> {
        self.end.map(|end| format_boundary(end, self.all_day))
    }
}

/// A date range picked on the grid, waiting for a title before it
/// becomes an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateSelection {
    pub start: NaiveDateTime,
    /// Exclusive end
    pub end: NaiveDateTime,
    pub all_day: bool,
}

impl DateSelection {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, all_day: bool) -> Self {
        Self {
            start,
            end,
            all_day,
        }
    }

    /// All-day selection covering `first..=last`
    pub fn all_day_span(first: NaiveDate, last: NaiveDate) -> Self {
        let (first, last) = if last < first {
            (last, first)
        } else {
            (first, last)
        };
        Self {
            start: first.and_time(NaiveTime::MIN),
            end: (last + Duration::days(1)).and_time(NaiveTime::MIN),
            all_day: true,
        }
    }

    pub fn start_str(&self) -> String {
        format_boundary(self.start, self.all_day)
    }

    pub fn end_str(&self) -> String {
        format_boundary(self.end, self.all_day)
    }

    /// Human readable summary used by the creation dialog
    pub fn describe(&self, format: TimeFormat) -> String {
        if self.all_day {
            let last = (self.end - Duration::days(1)).date().max(self.start.date());
            if last == self.start.date() {
                format!("{} (all day)", self.start.format("%a %b %-d, %Y"))
            } else {
                format!(
                    "{} – {} (all day)",
                    self.start.format("%a %b %-d"),
                    last.format("%a %b %-d, %Y")
                )
            }
        } else if self.start.date() == self.end.date() {
            format!(
                "{}, {} – {}",
                self.start.format("%a %b %-d, %Y"),
                format.format_time(self.start.time()),
                format.format_time(self.end.time())
            )
        } else {
            format!(
                "{} {} – {} {}",
                self.start.format("%a %b %-d"),
                format.format_time(self.start.time()),
                self.end.format("%a %b %-d, %Y"),
                format.format_time(self.end.time())
            )
        }
    }
}

/// Reference to a clicked event, held until the delete dialog resolves
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTarget {
    pub id: EventId,
    pub title: String,
}

impl DeleteTarget {
    pub fn from_event(event: &CalendarEvent) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
        }
    }
}

fn format_boundary(value: NaiveDateTime, all_day: bool) -> String {
    if all_day {
        value.format(DATE_FORMAT).to_string()
    } else {
        value.format(DATE_TIME_FORMAT).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_all_day_end_is_exclusive() {
        let event = CalendarEvent::new(
            EventId::new("a"),
            "Offsite",
            at(2024, 1, 10, 0, 0),
            Some(at(2024, 1, 12, 0, 0)),
            true,
        );

        assert!(!event.covers_date(date(2024, 1, 9)));
        assert!(event.covers_date(date(2024, 1, 10)));
        assert!(event.covers_date(date(2024, 1, 11)));
        assert!(!event.covers_date(date(2024, 1, 12)));
    }

    #[test]
    fn test_point_event_covers_only_start_date() {
        let event = CalendarEvent::new(
            EventId::new("b"),
            "Lunch",
            at(2024, 3, 5, 12, 0),
            None,
            false,
        );

        assert_eq!(event.last_date(), date(2024, 3, 5));
        assert!(!event.covers_date(date(2024, 3, 6)));
    }

    #[test]
    fn test_timed_event_ending_at_midnight_stays_on_one_day() {
        let event = CalendarEvent::new(
            EventId::new("c"),
            "Late shift",
            at(2024, 3, 5, 20, 0),
            Some(at(2024, 3, 6, 0, 0)),
            false,
        );
        assert_eq!(event.last_date(), date(2024, 3, 5));
    }

    #[test]
    fn test_timed_event_crossing_midnight_spans_two_days() {
        let event = CalendarEvent::new(
            EventId::new("d"),
            "Night hike",
            at(2024, 3, 5, 22, 0),
            Some(at(2024, 3, 6, 2, 0)),
            false,
        );
        assert!(event.covers_date(date(2024, 3, 6)));
    }

    #[test]
    fn test_boundary_strings() {
        let all_day = DateSelection::all_day_span(date(2024, 1, 10), date(2024, 1, 10));
        assert_eq!(all_day.start_str(), "2024-01-10");
        assert_eq!(all_day.end_str(), "2024-01-11");

        let timed = DateSelection::new(at(2024, 1, 10, 9, 30), at(2024, 1, 10, 10, 0), false);
        assert_eq!(timed.start_str(), "2024-01-10T09:30:00");
        assert_eq!(timed.end_str(), "2024-01-10T10:00:00");
    }

    #[test]
    fn test_all_day_span_normalises_reversed_drag() {
        let selection = DateSelection::all_day_span(date(2024, 1, 12), date(2024, 1, 10));
        assert_eq!(selection.start, at(2024, 1, 10, 0, 0));
        assert_eq!(selection.end, at(2024, 1, 13, 0, 0));
    }

    #[test]
    fn test_validate_rejects_empty_title() {
        let event = CalendarEvent::new(EventId::new("e"), "", at(2024, 1, 1, 0, 0), None, true);
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_whitespace_title() {
        let event = CalendarEvent::new(EventId::new("e"), "   ", at(2024, 1, 1, 0, 0), None, true);
        assert!(event.validate().is_ok());
    }

    #[test]
    fn test_time_text_empty_for_all_day() {
        let event = CalendarEvent::new(EventId::new("f"), "Holiday", at(2024, 1, 1, 0, 0), None, true);
        assert_eq!(event.time_text(TimeFormat::TwelveHour), "");
    }

    #[test]
    fn test_describe_single_all_day() {
        let selection = DateSelection::all_day_span(date(2024, 1, 10), date(2024, 1, 10));
        assert_eq!(
            selection.describe(TimeFormat::TwentyFourHour),
            "Wed Jan 10, 2024 (all day)"
        );
    }
}
