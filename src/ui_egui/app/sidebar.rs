//! Sidebar with usage notes, the weekend toggle and the event list.

use super::CalendarApp;
use egui::RichText;

const SIDEBAR_MIN_WIDTH: f32 = 180.0;
const SIDEBAR_DEFAULT_WIDTH: f32 = 220.0;
const SIDEBAR_MAX_WIDTH: f32 = 320.0;

impl CalendarApp {
    pub(super) fn render_sidebar(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("sidebar")
            .default_width(SIDEBAR_DEFAULT_WIDTH)
            .min_width(SIDEBAR_MIN_WIDTH)
            .max_width(SIDEBAR_MAX_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!self.shell.is_any_dialog_open(), |ui| {
                    self.render_sidebar_content(ui);
                });
            });
    }

    fn render_sidebar_content(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading("Instructions");
        ui.label("• Select dates and you will be prompted to create a new event");
        ui.label("• Click an event to delete it");

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        let mut weekends = self.shell.weekends_visible();
        if ui.checkbox(&mut weekends, "toggle weekends").changed() {
            self.toggle_weekends();
        }

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        let events = self.shell.current_events();
        ui.heading(format!("All Events ({})", events.len()));
        ui.add_space(4.0);

        egui::ScrollArea::vertical()
            .id_source("sidebar_events")
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for event in events {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new(event.start.format("%b %-d, %Y").to_string()).strong());
                        ui.label(RichText::new(&event.title).italics());
                    });
                }
            });
    }
}
