use super::state::ViewType;
use super::CalendarApp;
use egui::{Context, Key};

impl CalendarApp {
    /// Arrow keys step through time, T jumps to today, M/W/D switch views.
    /// Ignored while a dialog is open or a text field has focus.
    pub(super) fn handle_keyboard_shortcuts(&mut self, ctx: &Context) {
        if self.shell.is_any_dialog_open() || ctx.wants_keyboard_input() {
            return;
        }

        let (prev, next, today, month, week, day) = ctx.input(|i| {
            (
                i.key_pressed(Key::ArrowLeft),
                i.key_pressed(Key::ArrowRight),
                i.key_pressed(Key::T),
                i.key_pressed(Key::M),
                i.key_pressed(Key::W),
                i.key_pressed(Key::D),
            )
        });

        if prev {
            self.navigate_previous();
        }
        if next {
            self.navigate_next();
        }
        if today {
            self.jump_to_today();
        }
        if month {
            self.switch_view(ViewType::Month);
        }
        if week {
            self.switch_view(ViewType::Week);
        }
        if day {
            self.switch_view(ViewType::Day);
        }
    }
}
