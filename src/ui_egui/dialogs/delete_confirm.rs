//! "Are you sure?" dialog shown after an event is clicked.

use egui::{Context, RichText};

use super::modal::Modal;
use crate::models::event::DeleteTarget;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteDialogResult {
    Confirmed,
    Cancelled,
    /// Dialog is still open
    Pending,
}

pub fn delete_message(target: Option<&DeleteTarget>) -> String {
    let title = target.map(|t| t.title.as_str()).unwrap_or_default();
    format!("Do you want to delete the event '{}'?", title)
}

pub fn render_delete_dialog(
    ctx: &Context,
    open: bool,
    target: Option<&DeleteTarget>,
    modal: Modal,
) -> DeleteDialogResult {
    let mut result = DeleteDialogResult::Pending;

    let response = modal.show(ctx, open, |ui| {
        ui.add_space(6.0);
        ui.heading("Are you sure?");
        ui.add_space(6.0);
        ui.label(delete_message(target));
        ui.add_space(12.0);
        ui.separator();
        ui.add_space(6.0);

        ui.horizontal(|ui| {
            let confirm = egui::Button::new(
                RichText::new("Yes, delete it!").color(egui::Color32::WHITE),
            )
            .fill(egui::Color32::from_rgb(180, 60, 60));

            if ui.add(confirm).clicked() {
                result = DeleteDialogResult::Confirmed;
            }
            if ui.button("Cancel").clicked() {
                result = DeleteDialogResult::Cancelled;
            }
        });
    });

    if response.dismissed && result == DeleteDialogResult::Pending {
        result = DeleteDialogResult::Cancelled;
    }
    result
}
