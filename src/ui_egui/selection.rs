//! Drag-to-select on the calendar grid.
//!
//! A press on a day cell or time slot starts a selection, moving over other
//! cells of the same surface extends it, and releasing the pointer turns it
//! into a [`DateSelection`]. The in-flight drag lives in egui memory so the
//! views stay stateless between frames.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use egui::{Context, Id};

use crate::models::event::DateSelection;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionKind {
    /// Whole days: month cells and the all-day strip
    AllDay,
    /// Time slots of the week/day grid
    Timed { slot_minutes: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionDrag {
    pub kind: SelectionKind,
    anchor: NaiveDateTime,
    current: NaiveDateTime,
}

impl SelectionDrag {
    pub fn days(anchor: NaiveDate) -> Self {
        let anchor = anchor.and_time(NaiveTime::MIN);
        Self {
            kind: SelectionKind::AllDay,
            anchor,
            current: anchor,
        }
    }

    pub fn slots(anchor: NaiveDateTime, slot_minutes: u32) -> Self {
        Self {
            kind: SelectionKind::Timed { slot_minutes },
            anchor,
            current: anchor,
        }
    }

    /// Earliest and latest cell touched, regardless of drag direction
    fn bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        if self.current < self.anchor {
            (self.current, self.anchor)
        } else {
            (self.anchor, self.current)
        }
    }

    pub fn extend_to_day(&mut self, date: NaiveDate) {
        if self.kind == SelectionKind::AllDay {
            self.current = date.and_time(NaiveTime::MIN);
        }
    }

    pub fn extend_to_slot(&mut self, slot_start: NaiveDateTime) {
        if matches!(self.kind, SelectionKind::Timed { .. }) {
            self.current = slot_start;
        }
    }

    pub fn covers_day(&self, date: NaiveDate) -> bool {
        if self.kind != SelectionKind::AllDay {
            return false;
        }
        let (first, last) = self.bounds();
        date >= first.date() && date <= last.date()
    }

    pub fn covers_slot(&self, slot_start: NaiveDateTime) -> bool {
        if self.kind == SelectionKind::AllDay {
            return false;
        }
        let (first, last) = self.bounds();
        slot_start >= first && slot_start <= last
    }

    pub fn to_selection(&self) -> DateSelection {
        let (first, last) = self.bounds();
        match self.kind {
            SelectionKind::AllDay => DateSelection::all_day_span(first.date(), last.date()),
            SelectionKind::Timed { slot_minutes } => DateSelection::new(
                first,
                last + Duration::minutes(slot_minutes as i64),
                false,
            ),
        }
    }
}

pub struct SelectionManager;

impl SelectionManager {
    fn storage_id() -> Id {
        Id::new("calendar_range_selection")
    }

    pub fn begin(ctx: &Context, drag: SelectionDrag) {
        ctx.memory_mut(|mem| mem.data.insert_temp(Self::storage_id(), drag));
    }

    pub fn active(ctx: &Context) -> Option<SelectionDrag> {
        ctx.memory(|mem| mem.data.get_temp::<SelectionDrag>(Self::storage_id()))
    }

    pub fn update(ctx: &Context, update: impl FnOnce(&mut SelectionDrag)) {
        if let Some(mut drag) = Self::active(ctx) {
            update(&mut drag);
            Self::begin(ctx, drag);
        }
    }

    pub fn cancel(ctx: &Context) {
        ctx.memory_mut(|mem| mem.data.remove::<SelectionDrag>(Self::storage_id()));
    }

    /// Finish the drag once the primary button is released
    pub fn finish_on_release(ctx: &Context) -> Option<DateSelection> {
        let released = ctx.input(|i| i.pointer.primary_released());
        if !released {
            return None;
        }
        let drag = Self::active(ctx)?;
        Self::cancel(ctx);
        Some(drag.to_selection())
    }
}
