// Property-based tests for the create/delete flows
// Random selections, titles and action sequences

mod fixtures;

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use rust_calendar_lite::models::event::{DateSelection, DeleteTarget};
use rust_calendar_lite::services::event_store::EventStore;
use rust_calendar_lite::ui_egui::CalendarShell;

#[test]
fn test_space_title_then_timed_save_adds_event() {
    let mut shell = CalendarShell::default();
    let mut store = EventStore::new();
    let start = NaiveDate::from_ymd_opt(2020, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("valid start");

    shell.set_new_event_title(" ");
    shell.on_range_selected(DateSelection::new(start, start + Duration::minutes(30), false));
    shell.save_new_event(&mut store);

    assert_eq!(store.len(), 1);
}

fn arb_selection() -> impl Strategy<Value = DateSelection> {
    (0i64..3650, 1i64..14, any::<bool>(), 0u32..48).prop_map(|(offset, days, all_day, slot)| {
        let base = NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid base") + Duration::days(offset);
        if all_day {
            DateSelection::all_day_span(base, base + Duration::days(days - 1))
        } else {
            let start = base.and_hms_opt(slot / 2, (slot % 2) * 30, 0).expect("valid slot");
            DateSelection::new(start, start + Duration::minutes(30 * days), false)
        }
    })
}

#[derive(Debug, Clone)]
enum Action {
    Select(DateSelection),
    Title(String),
    Save,
    CancelCreate,
    ClickFirst,
    ConfirmDelete,
    CancelDelete,
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        arb_selection().prop_map(Action::Select),
        "[a-zA-Z ]{0,12}".prop_map(Action::Title),
        Just(Action::Save),
        Just(Action::CancelCreate),
        Just(Action::ClickFirst),
        Just(Action::ConfirmDelete),
        Just(Action::CancelDelete),
    ]
}

proptest! {
    /// Property: saving a non-empty title adds exactly one matching event
    #[test]
    fn prop_save_adds_matching_event(selection in arb_selection(), title in "[a-zA-Z][a-zA-Z ]{0,20}") {
        let mut shell = CalendarShell::default();
        let mut store = EventStore::new();

        shell.on_range_selected(selection);
        shell.set_new_event_title(title.clone());
        let id = shell.save_new_event(&mut store);

        prop_assert!(id.is_some());
        prop_assert_eq!(store.len(), 1);
        let event = &store.events()[0];
        prop_assert_eq!(&event.title, &title);
        prop_assert_eq!(event.start, selection.start);
        prop_assert_eq!(event.end, Some(selection.end));
        prop_assert_eq!(event.all_day, selection.all_day);
        prop_assert!(!shell.is_creation_dialog_open());
    }

    /// Property: titles of only spaces are still titles
    #[test]
    fn prop_blank_title_adds(selection in arb_selection(), title in " {1,8}") {
        let mut shell = CalendarShell::default();
        let mut store = EventStore::new();

        shell.on_range_selected(selection);
        shell.set_new_event_title(title);
        prop_assert!(shell.save_new_event(&mut store).is_some());
        prop_assert_eq!(store.len(), 1);
    }

    /// Property: an empty title never adds an event
    #[test]
    fn prop_empty_title_never_adds(selection in arb_selection()) {
        let mut shell = CalendarShell::default();
        let mut store = EventStore::new();

        shell.on_range_selected(selection);
        shell.set_new_event_title("");
        prop_assert!(shell.save_new_event(&mut store).is_none());
        prop_assert!(store.is_empty());
        prop_assert!(shell.creation_draft().is_none());
    }

    /// Property: event count changes by at most one per confirmed action,
    /// and ids in the store stay unique
    #[test]
    fn prop_action_sequences_keep_store_consistent(actions in prop::collection::vec(arb_action(), 0..40)) {
        let mut shell = CalendarShell::default();
        let mut store = EventStore::new();

        for action in actions {
            let before = store.len();
            match action {
                Action::Select(selection) => shell.on_range_selected(selection),
                Action::Title(title) => shell.set_new_event_title(title),
                Action::Save => {
                    let expect_add = shell.creation_draft().is_some() && !shell.new_event_title().is_empty();
                    shell.save_new_event(&mut store);
                    prop_assert_eq!(store.len(), before + usize::from(expect_add));
                    prop_assert!(!shell.is_creation_dialog_open());
                }
                Action::CancelCreate => {
                    shell.cancel_creation();
                    prop_assert_eq!(store.len(), before);
                }
                Action::ClickFirst => {
                    if let Some(event) = store.events().first() {
                        shell.on_event_clicked(DeleteTarget::from_event(event));
                    }
                }
                Action::ConfirmDelete => {
                    let target = shell.delete_target().cloned();
                    shell.confirm_delete(&mut store);
                    if let Some(target) = target {
                        prop_assert!(store.get(&target.id).is_none());
                        prop_assert!(store.len() + 1 >= before);
                    } else {
                        prop_assert_eq!(store.len(), before);
                    }
                    prop_assert!(!shell.is_delete_dialog_open());
                }
                Action::CancelDelete => {
                    shell.cancel_delete();
                    prop_assert_eq!(store.len(), before);
                }
            }

            let mut ids: Vec<&str> = store.events().iter().map(|e| e.id.as_str()).collect();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), store.len());
        }
    }
}
