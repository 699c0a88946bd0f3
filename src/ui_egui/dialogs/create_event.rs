//! "Create New Event" dialog shown after a range is selected.

use egui::{Context, Id};

use super::modal::Modal;
use crate::models::event::DateSelection;
use crate::models::settings::TimeFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateDialogResult {
    Save,
    Cancelled,
    /// Dialog is still open
    Pending,
}

/// Set once the title field has held focus during the current opening
fn title_focus_flag() -> Id {
    Id::new("create_event_title_focused")
}

pub fn render_create_dialog(
    ctx: &Context,
    open: bool,
    draft: Option<&DateSelection>,
    title: &mut String,
    time_format: TimeFormat,
    modal: Modal,
) -> CreateDialogResult {
    let mut result = CreateDialogResult::Pending;
    if !open {
        ctx.data_mut(|d| d.remove::<bool>(title_focus_flag()));
    }

    let response = modal.show(ctx, open, |ui| {
        ui.add_space(6.0);
        ui.heading("Create New Event");
        if let Some(draft) = draft {
            ui.label(egui::RichText::new(draft.describe(time_format)).weak());
        }
        ui.add_space(8.0);

        let field = ui.add(
            egui::TextEdit::singleline(title)
                .hint_text("Event Title")
                .desired_width(f32::INFINITY),
        );
        let focused_once = ui
            .ctx()
            .data(|d| d.get_temp::<bool>(title_focus_flag()).unwrap_or(false));
        if !focused_once {
            if field.has_focus() {
                ui.ctx().data_mut(|d| d.insert_temp(title_focus_flag(), true));
            } else {
                field.request_focus();
            }
        }
        if field.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            result = CreateDialogResult::Save;
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("Save Event").clicked() {
                result = CreateDialogResult::Save;
            }
            if ui.button("Cancel").clicked() {
                result = CreateDialogResult::Cancelled;
            }
        });
    });

    if response.dismissed && result == CreateDialogResult::Pending {
        result = CreateDialogResult::Cancelled;
    }
    result
}
