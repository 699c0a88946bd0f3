use super::shell::CalendarShell;
use super::state::ViewType;
use super::CalendarApp;
use crate::models::settings::Settings;
use crate::services::event_ids::EventIdGenerator;
use crate::services::event_store::EventStore;
use crate::services::seed::initial_events;
use crate::services::settings::SettingsService;
use crate::ui_egui::theme::CalendarTheme;
use chrono::{Local, NaiveDate};

impl CalendarApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = SettingsService::with_default_location();
        let settings = settings_service.load_or_default();
        log::info!(
            "Loaded settings from {}: view={}, weekends_visible={}, theme={}",
            settings_service.path().display(),
            settings.initial_view,
            settings.weekends_visible,
            settings.theme
        );

        let app = Self::with_settings(settings, settings_service, Local::now().date_naive());
        app.active_theme.apply_to_context(&cc.egui_ctx);
        app
    }

    /// Build the app state without touching egui
    pub fn with_settings(
        settings: Settings,
        settings_service: SettingsService,
        today: NaiveDate,
    ) -> Self {
        let mut ids = EventIdGenerator::new();
        let store = if settings.seed_initial_events {
            EventStore::with_initial_events(initial_events(today, &mut ids))
        } else {
            EventStore::new()
        };

        let shell = CalendarShell::with_id_generator(settings.weekends_visible, ids);
        let current_view = ViewType::parse(&settings.initial_view);
        let active_theme = CalendarTheme::from_name(&settings.theme);

        let mut app = Self {
            settings,
            settings_service,
            current_view,
            current_date: today,
            active_theme,
            store,
            shell,
            forwarded_revision: None,
        };
        app.normalize_current_date(1);
        app
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_event_set();

        self.handle_keyboard_shortcuts(ctx);

        self.render_toolbar(ctx);
        self.render_sidebar(ctx);

        let interaction = self.render_main_panel(ctx);
        self.handle_view_interaction(ctx, interaction);

        self.handle_dialogs(ctx);
        self.sync_event_set();
    }

    pub(super) fn handle_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.initial_view = self.current_view.as_str().to_string();
        self.settings.weekends_visible = self.shell.weekends_visible();

        if let Err(e) = self.settings_service.save(&self.settings) {
            log::warn!("Failed to save settings on exit: {:#}", e);
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn shell(&self) -> &CalendarShell {
        &self.shell
    }
}
