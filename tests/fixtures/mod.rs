// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use rust_calendar_lite::models::event::{DateSelection, DeleteTarget};
use rust_calendar_lite::services::event_store::EventStore;

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).expect("valid test time")
    }
}

/// Sample selections for testing
pub mod selections {
    use super::dates::{at, date};
    use super::*;

    /// 2024-01-10, all day
    pub fn team_sync_day() -> DateSelection {
        DateSelection::all_day_span(date(2024, 1, 10), date(2024, 1, 10))
    }

    /// 2024-01-10 09:00 .. 10:30
    pub fn morning_block() -> DateSelection {
        DateSelection::new(at(2024, 1, 10, 9, 0), at(2024, 1, 10, 10, 30), false)
    }
}

/// Target for the first event in the store
pub fn first_target(store: &EventStore) -> DeleteTarget {
    DeleteTarget::from_event(&store.events()[0])
}
