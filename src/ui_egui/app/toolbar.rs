//! Header toolbar: navigation on the left, title in the middle, view
//! switching on the right.

use super::navigation::view_title;
use super::state::ViewType;
use super::CalendarApp;
use egui::{Context, RichText};
use egui_extras::DatePickerButton;

impl CalendarApp {
    pub(super) fn render_toolbar(&mut self, ctx: &Context) {
        let enabled = !self.shell.is_any_dialog_open();

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    if ui.button("◀").on_hover_text("Previous").clicked() {
                        self.navigate_previous();
                    }
                    if ui.button("▶").on_hover_text("Next").clicked() {
                        self.navigate_next();
                    }
                    if ui.button("Today").clicked() {
                        self.jump_to_today();
                    }

                    let mut picked = self.current_date;
                    ui.add(
                        DatePickerButton::new(&mut picked)
                            .id_source("toolbar_date_picker")
                            .calendar_week(false),
                    );
                    if picked != self.current_date {
                        self.go_to_date(picked);
                    }

                    if ui
                        .selectable_label(self.shell.weekends_visible(), "Weekends")
                        .on_hover_text("toggle weekends")
                        .clicked()
                    {
                        self.toggle_weekends();
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        for view in ViewType::ALL.iter().rev() {
                            if ui
                                .selectable_label(self.current_view == *view, view.label())
                                .clicked()
                            {
                                self.switch_view(*view);
                            }
                        }

                        ui.separator();

                        ui.with_layout(
                            egui::Layout::centered_and_justified(egui::Direction::LeftToRight),
                            |ui| {
                                let title = view_title(
                                    self.current_view,
                                    self.current_date,
                                    self.settings.first_day_of_week,
                                    self.shell.weekends_visible(),
                                );
                                ui.label(RichText::new(title).size(20.0).strong());
                            },
                        );
                    });
                });
                ui.add_space(4.0);
            });
        });
    }
}
