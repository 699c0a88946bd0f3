use crate::ui_egui::theme::CalendarTheme;
use egui::Color32;

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct CalendarCellPalette {
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    /// Days outside the displayed month
    pub outside_bg: Color32,
    pub border: Color32,
    pub text: Color32,
    pub muted_text: Color32,
    pub header_bg: Color32,
    pub header_text: Color32,
    pub selection: Color32,
    pub event_bg: Color32,
    pub event_text: Color32,
}

impl CalendarCellPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            regular_bg: theme.day_background,
            weekend_bg: theme.weekend_background,
            today_bg: theme.today_background,
            outside_bg: blend(theme.calendar_background, theme.app_background, 0.6),
            border: theme.day_border,
            text: theme.text_primary,
            muted_text: theme.text_secondary,
            header_bg: blend(theme.app_background, theme.calendar_background, 0.5),
            header_text: theme.text_primary,
            selection: with_alpha(theme.today_border, if theme.is_dark { 90 } else { 60 }),
            event_bg: theme.event_background,
            event_text: theme.event_text,
        }
    }
}

#[derive(Clone, Copy)]
pub(crate) struct TimeGridPalette {
    pub hour_bg: Color32,
    pub regular_bg: Color32,
    pub weekend_bg: Color32,
    pub today_bg: Color32,
    pub hour_line: Color32,
    pub slot_line: Color32,
    pub label_text: Color32,
    pub header_text: Color32,
    pub selection: Color32,
    pub event_bg: Color32,
    pub event_border: Color32,
    pub event_text: Color32,
}

impl TimeGridPalette {
    pub fn from_theme(theme: &CalendarTheme) -> Self {
        Self {
            hour_bg: blend(theme.calendar_background, theme.day_background, 0.4),
            regular_bg: theme.day_background,
            weekend_bg: theme.weekend_background,
            today_bg: theme.today_background,
            hour_line: theme.day_border,
            slot_line: with_alpha(theme.day_border, 170),
            label_text: theme.text_secondary,
            header_text: theme.text_primary,
            selection: with_alpha(theme.today_border, if theme.is_dark { 90 } else { 60 }),
            event_bg: theme.event_background,
            event_border: blend(theme.event_background, Color32::BLACK, 0.2),
            event_text: theme.event_text,
        }
    }
}
