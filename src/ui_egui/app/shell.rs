//! UI state behind the calendar grid and its two dialogs.
//!
//! The grid reports selections, clicks and event-set changes here; the
//! dialogs report confirm/cancel. Every state change goes through one of the
//! methods below, and the only outward effect is a call on [`CalendarApi`].
//!
//! The creation and deletion flows are independent open/closed state
//! machines. Nothing here prevents both from being open at once; the modal
//! overlay keeps the grid from producing a second trigger while one is open.

use crate::models::event::{CalendarEvent, DateSelection, DeleteTarget, EventId};
use crate::services::event_ids::EventIdGenerator;
use crate::services::event_store::CalendarApi;

#[derive(Debug)]
pub struct CalendarShell {
    weekends_visible: bool,
    current_events: Vec<CalendarEvent>,
    delete_target: Option<DeleteTarget>,
    delete_dialog_open: bool,
    creation_draft: Option<DateSelection>,
    new_event_title: String,
    creation_dialog_open: bool,
    ids: EventIdGenerator,
}

impl Default for CalendarShell {
    fn default() -> Self {
        Self::new(true)
    }
}

impl CalendarShell {
    pub fn new(weekends_visible: bool) -> Self {
        Self::with_id_generator(weekends_visible, EventIdGenerator::new())
    }

    /// Continue numbering from a generator that already issued ids
    /// (for example to seed events).
    pub fn with_id_generator(weekends_visible: bool, ids: EventIdGenerator) -> Self {
        Self {
            weekends_visible,
            current_events: Vec::new(),
            delete_target: None,
            delete_dialog_open: false,
            creation_draft: None,
            new_event_title: String::new(),
            creation_dialog_open: false,
            ids,
        }
    }

    // --- notifications from the grid -------------------------------------

    pub fn on_range_selected(&mut self, selection: DateSelection) {
        log::debug!(
            "Range selected: {} .. {} (all_day={})",
            selection.start_str(),
            selection.end_str(),
            selection.all_day
        );
        self.creation_draft = Some(selection);
        self.creation_dialog_open = true;
    }

    pub fn on_event_clicked(&mut self, target: DeleteTarget) {
        log::debug!("Event clicked: '{}' ({})", target.title, target.id);
        self.delete_target = Some(target);
        self.delete_dialog_open = true;
    }

    /// Replace the display copy of the event list
    pub fn on_events_set(&mut self, events: Vec<CalendarEvent>) {
        self.current_events = events;
    }

    // --- deletion dialog -------------------------------------------------

    pub fn confirm_delete(&mut self, api: &mut impl CalendarApi) -> Option<CalendarEvent> {
        let removed = self
            .delete_target
            .take()
            .and_then(|target| match api.remove_event(&target.id) {
                Some(event) => Some(event),
                None => {
                    log::warn!("Event '{}' ({}) was already gone", target.title, target.id);
                    None
                }
            });
        self.delete_dialog_open = false;
        removed
    }

    pub fn cancel_delete(&mut self) {
        self.delete_target = None;
        self.delete_dialog_open = false;
    }

    // --- creation dialog -------------------------------------------------

    pub fn set_new_event_title(&mut self, title: impl Into<String>) {
        self.new_event_title = title.into();
    }

    /// Mutable access for the dialog's text field
    pub fn new_event_title_mut(&mut self) -> &mut String {
        &mut self.new_event_title
    }

    /// Add the drafted event when both a range and a title are present.
    /// The draft is cleared and the dialog closed either way.
    pub fn save_new_event(&mut self, api: &mut impl CalendarApi) -> Option<EventId> {
        let draft = self.creation_draft.take();
        let title = std::mem::take(&mut self.new_event_title);
        self.creation_dialog_open = false;

        let draft = draft?;
        if title.is_empty() {
            log::debug!("Discarding new event with an empty title");
            return None;
        }

        let id = self.ids.next_id();
        let event = CalendarEvent::new(
            id.clone(),
            title,
            draft.start,
            Some(draft.end),
            draft.all_day,
        );

        match api.add_event(event) {
            Ok(()) => Some(id),
            Err(err) => {
                log::warn!("Failed to add event: {}", err);
                None
            }
        }
    }

    pub fn cancel_creation(&mut self) {
        self.creation_draft = None;
        self.new_event_title.clear();
        self.creation_dialog_open = false;
    }

    // --- weekends ----------------------------------------------------------

    pub fn toggle_weekends(&mut self) {
        self.weekends_visible = !self.weekends_visible;
    }

    pub fn set_weekends_visible(&mut self, visible: bool) {
        self.weekends_visible = visible;
    }

    // --- read-only accessors -------------------------------------------

    pub fn weekends_visible(&self) -> bool {
        self.weekends_visible
    }

    pub fn current_events(&self) -> &[CalendarEvent] {
        &self.current_events
    }

    pub fn delete_target(&self) -> Option<&DeleteTarget> {
        self.delete_target.as_ref()
    }

    pub fn is_delete_dialog_open(&self) -> bool {
        self.delete_dialog_open
    }

    pub fn creation_draft(&self) -> Option<&DateSelection> {
        self.creation_draft.as_ref()
    }

    pub fn new_event_title(&self) -> &str {
        &self.new_event_title
    }

    pub fn is_creation_dialog_open(&self) -> bool {
        self.creation_dialog_open
    }

    pub fn is_any_dialog_open(&self) -> bool {
        self.delete_dialog_open || self.creation_dialog_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::event_store::{EventStore, MockCalendarApi, StoreError};
    use chrono::{NaiveDate, NaiveDateTime};
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn at(d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn team_sync_range() -> DateSelection {
        DateSelection::new(at(10, 0), at(11, 0), true)
    }

    #[test]
    fn test_dialogs_start_closed() {
        let shell = CalendarShell::default();
        assert!(!shell.is_delete_dialog_open());
        assert!(!shell.is_creation_dialog_open());
        assert!(shell.weekends_visible());
    }

    #[test]
    fn test_select_then_save_adds_event() {
        let mut shell = CalendarShell::default();
        let mut store = EventStore::new();

        shell.on_range_selected(team_sync_range());
        assert!(shell.is_creation_dialog_open());

        shell.set_new_event_title("Team Sync");
        let id = shell.save_new_event(&mut store).unwrap();

        assert_eq!(store.len(), 1);
        let event = store.get(&id).unwrap();
        assert_eq!(event.title, "Team Sync");
        assert_eq!(event.start_str(), "2024-01-10");
        assert_eq!(event.end_str().as_deref(), Some("2024-01-11"));
        assert!(event.all_day);
        assert!(!shell.is_creation_dialog_open());
        assert!(shell.creation_draft().is_none());
        assert_eq!(shell.new_event_title(), "");
    }

    #[test]
    fn test_save_without_title_never_calls_api() {
        let mut shell = CalendarShell::default();
        let mut api = MockCalendarApi::new();
        api.expect_add_event().never();

        shell.on_range_selected(team_sync_range());
        assert!(shell.save_new_event(&mut api).is_none());
        assert!(shell.creation_draft().is_none());
        assert!(!shell.is_creation_dialog_open());
    }

    #[test]
    fn test_whitespace_title_is_saved() {
        let mut shell = CalendarShell::default();
        let mut store = EventStore::new();

        shell.on_range_selected(team_sync_range());
        shell.set_new_event_title(" ");
        let id = shell.save_new_event(&mut store).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&id).unwrap().title, " ");
    }

    #[test]
    fn test_save_without_draft_never_calls_api() {
        let mut shell = CalendarShell::default();
        let mut api = MockCalendarApi::new();
        api.expect_add_event().never();

        shell.set_new_event_title("Orphan");
        assert!(shell.save_new_event(&mut api).is_none());
        assert_eq!(shell.new_event_title(), "");
    }

    #[test]
    fn test_cancel_creation_clears_draft() {
        let mut shell = CalendarShell::default();
        let mut api = MockCalendarApi::new();
        api.expect_add_event().never();

        shell.on_range_selected(team_sync_range());
        shell.set_new_event_title("Abandoned");
        shell.cancel_creation();

        assert!(!shell.is_creation_dialog_open());
        assert!(shell.creation_draft().is_none());

        // A later save without a new selection must not add anything
        shell.set_new_event_title("Still nothing");
        assert!(shell.save_new_event(&mut api).is_none());
    }

    #[test]
    fn test_confirm_delete_removes_target() {
        let mut shell = CalendarShell::default();
        let mut api = MockCalendarApi::new();
        let target = DeleteTarget {
            id: EventId::new("evt-7"),
            title: "Retro".to_string(),
        };
        let removed = CalendarEvent::new(target.id.clone(), "Retro", at(12, 9), None, false);

        api.expect_remove_event()
            .with(eq(EventId::new("evt-7")))
            .times(1)
            .return_const(Some(removed.clone()));

        shell.on_event_clicked(target);
        assert!(shell.is_delete_dialog_open());

        assert_eq!(shell.confirm_delete(&mut api), Some(removed));
        assert!(!shell.is_delete_dialog_open());
        assert!(shell.delete_target().is_none());
    }

    #[test]
    fn test_confirm_delete_without_target_only_closes() {
        let mut shell = CalendarShell::default();
        let mut api = MockCalendarApi::new();
        api.expect_remove_event().never();

        assert!(shell.confirm_delete(&mut api).is_none());
        assert!(!shell.is_delete_dialog_open());
    }

    #[test]
    fn test_cancel_delete_leaves_store_alone() {
        let mut shell = CalendarShell::default();
        let mut api = MockCalendarApi::new();
        api.expect_remove_event().never();

        shell.on_event_clicked(DeleteTarget {
            id: EventId::new("evt-1"),
            title: "Keep me".to_string(),
        });
        shell.cancel_delete();

        assert!(!shell.is_delete_dialog_open());
        assert!(shell.delete_target().is_none());
        assert!(shell.confirm_delete(&mut api).is_none());
    }

    #[test]
    fn test_add_failure_still_clears_draft() {
        let mut shell = CalendarShell::default();
        let mut api = MockCalendarApi::new();
        api.expect_add_event()
            .times(1)
            .returning(|event| Err(StoreError::DuplicateId(event.id)));

        shell.on_range_selected(team_sync_range());
        shell.set_new_event_title("Clash");

        assert!(shell.save_new_event(&mut api).is_none());
        assert!(shell.creation_draft().is_none());
    }

    #[test]
    fn test_ids_continue_from_seed_generator() {
        let mut ids = EventIdGenerator::new();
        ids.next_id();
        ids.next_id();
        let mut shell = CalendarShell::with_id_generator(true, ids);
        let mut store = EventStore::new();

        shell.on_range_selected(team_sync_range());
        shell.set_new_event_title("Third");

        assert_eq!(shell.save_new_event(&mut store), Some(EventId::new("evt-3")));
    }

    #[test]
    fn test_events_set_replaces_cache() {
        let mut shell = CalendarShell::default();
        let event = CalendarEvent::new(EventId::new("x"), "X", at(1, 0), None, true);

        shell.on_events_set(vec![event.clone(), event.clone()]);
        assert_eq!(shell.current_events().len(), 2);

        shell.on_events_set(vec![event]);
        assert_eq!(shell.current_events().len(), 1);
    }

    #[test]
    fn test_toggle_weekends() {
        let mut shell = CalendarShell::new(true);
        shell.toggle_weekends();
        assert!(!shell.weekends_visible());
        shell.set_weekends_visible(true);
        assert!(shell.weekends_visible());
    }

    #[test]
    fn test_flows_are_independent() {
        let mut shell = CalendarShell::default();
        shell.on_range_selected(team_sync_range());
        shell.on_event_clicked(DeleteTarget {
            id: EventId::new("evt-1"),
            title: "Other".to_string(),
        });

        assert!(shell.is_creation_dialog_open());
        assert!(shell.is_delete_dialog_open());

        shell.cancel_delete();
        assert!(shell.is_creation_dialog_open());
        assert!(shell.creation_draft().is_some());
    }
}
