mod lifecycle;
mod navigation;
pub mod shell;
mod shortcuts;
mod sidebar;
pub mod state;
mod toolbar;

use self::shell::CalendarShell;
use self::state::ViewType;
use crate::models::settings::Settings;
use crate::services::event_store::EventStore;
use crate::services::settings::SettingsService;
use crate::ui_egui::dialogs::create_event::{render_create_dialog, CreateDialogResult};
use crate::ui_egui::dialogs::delete_confirm::{render_delete_dialog, DeleteDialogResult};
use crate::ui_egui::dialogs::modal::Modal;
use crate::ui_egui::selection::SelectionManager;
use crate::ui_egui::theme::CalendarTheme;
use crate::ui_egui::views::month_view::MonthView;
use crate::ui_egui::views::time_grid::TimeGridView;
use crate::ui_egui::views::{ViewInteraction, ViewOptions};
use chrono::NaiveDate;

pub use self::navigation::{view_dates, view_title};

pub struct CalendarApp {
    /// Core application settings
    settings: Settings,
    settings_service: SettingsService,
    current_view: ViewType,
    current_date: NaiveDate,
    /// Currently applied theme colors
    active_theme: CalendarTheme,
    /// Authoritative event set for the grid
    store: EventStore,
    /// Dialog and selection state
    shell: CalendarShell,
    /// Store revision last passed to `shell.on_events_set`
    forwarded_revision: Option<u64>,
}

impl eframe::App for CalendarApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.handle_update(ctx, frame);
    }

    fn on_exit(&mut self, gl: Option<&eframe::glow::Context>) {
        self.handle_exit(gl);
    }
}

impl CalendarApp {
    fn view_options(&self) -> ViewOptions {
        ViewOptions {
            weekends_visible: self.shell.weekends_visible(),
            first_day_of_week: self.settings.first_day_of_week,
            time_format: self.settings.time_format,
            slot_minutes: self.settings.slot_minutes,
            day_max_events: self.settings.day_max_events,
            interactive: !self.shell.is_any_dialog_open(),
        }
    }

    /// Forward the store's event list to the shell whenever it changed
    fn sync_event_set(&mut self) {
        let revision = self.store.revision();
        if self.forwarded_revision != Some(revision) {
            self.shell.on_events_set(self.store.events().to_vec());
            self.forwarded_revision = Some(revision);
        }
    }

    fn render_main_panel(&mut self, ctx: &egui::Context) -> ViewInteraction {
        let options = self.view_options();
        let dates = view_dates(
            self.current_view,
            self.current_date,
            self.settings.first_day_of_week,
            options.weekends_visible,
        );

        egui::CentralPanel::default()
            .show(ctx, |ui| match self.current_view {
                ViewType::Month => MonthView::show(
                    ui,
                    self.current_date,
                    &self.store,
                    &options,
                    &self.active_theme,
                ),
                ViewType::Week | ViewType::Day => {
                    TimeGridView::show(ui, &dates, &self.store, &options, &self.active_theme)
                }
            })
            .inner
    }

    fn handle_view_interaction(&mut self, ctx: &egui::Context, interaction: ViewInteraction) {
        if self.shell.is_any_dialog_open() {
            SelectionManager::cancel(ctx);
            return;
        }

        // A press on a chip also starts a one-cell drag; the click wins
        if let Some(target) = interaction.clicked_event {
            SelectionManager::cancel(ctx);
            self.shell.on_event_clicked(target);
            return;
        }

        if let Some(date) = interaction.show_day {
            SelectionManager::cancel(ctx);
            self.switch_view(ViewType::Day);
            self.current_date = date;
            self.normalize_current_date(1);
            return;
        }

        if let Some(selection) = SelectionManager::finish_on_release(ctx) {
            self.shell.on_range_selected(selection);
        }
    }

    fn modal(&self, id: &str, title: &str) -> Modal {
        Modal::new(id, title)
            .close_on_overlay_click(self.settings.overlay_click_dismisses)
            .overlay_color(self.active_theme.overlay)
    }

    fn handle_dialogs(&mut self, ctx: &egui::Context) {
        let target = self.shell.delete_target().cloned();
        let modal = self.modal("delete_event_modal", "Confirm Delete");
        match render_delete_dialog(
            ctx,
            self.shell.is_delete_dialog_open(),
            target.as_ref(),
            modal,
        ) {
            DeleteDialogResult::Confirmed => {
                self.shell.confirm_delete(&mut self.store);
            }
            DeleteDialogResult::Cancelled => self.shell.cancel_delete(),
            DeleteDialogResult::Pending => {}
        }

        let draft = self.shell.creation_draft().copied();
        let modal = self.modal("create_event_modal", "Create Event");
        let time_format = self.settings.time_format;
        match render_create_dialog(
            ctx,
            self.shell.is_creation_dialog_open(),
            draft.as_ref(),
            self.shell.new_event_title_mut(),
            time_format,
            modal,
        ) {
            CreateDialogResult::Save => {
                self.shell.save_new_event(&mut self.store);
            }
            CreateDialogResult::Cancelled => self.shell.cancel_creation(),
            CreateDialogResult::Pending => {}
        }
    }
}
