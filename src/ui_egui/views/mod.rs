use chrono::NaiveDate;
use egui::text::{LayoutJob, TextFormat, TextWrapping};
use egui::{Color32, FontId, Pos2, Rect, Rounding, Sense, Vec2};

use crate::models::event::{CalendarEvent, DeleteTarget};
use crate::models::settings::TimeFormat;
use crate::utils::date::is_weekend;

pub mod month_view;
mod palette;
pub mod time_grid;

/// What the grid reported during one frame
#[derive(Debug, Default)]
pub struct ViewInteraction {
    /// An event was clicked
    pub clicked_event: Option<DeleteTarget>,
    /// "+N more" was clicked on a month cell
    pub show_day: Option<NaiveDate>,
}

impl ViewInteraction {
    pub fn merge(&mut self, other: ViewInteraction) {
        if other.clicked_event.is_some() {
            self.clicked_event = other.clicked_event;
        }
        if other.show_day.is_some() {
            self.show_day = other.show_day;
        }
    }
}

/// Per-frame inputs shared by every view
pub struct ViewOptions {
    pub weekends_visible: bool,
    pub first_day_of_week: u8,
    pub time_format: TimeFormat,
    pub slot_minutes: u32,
    pub day_max_events: usize,
    /// False while a dialog is open
    pub interactive: bool,
}

/// Drop Saturday and Sunday unless weekends are shown
pub fn visible_dates(dates: &[NaiveDate], weekends_visible: bool) -> Vec<NaiveDate> {
    dates
        .iter()
        .copied()
        .filter(|date| weekends_visible || !is_weekend(*date))
        .collect()
}

/// Layout for the "bold time, italic title" event content
pub(crate) fn event_label_job(
    time_text: &str,
    title: &str,
    size: f32,
    color: Color32,
    max_width: f32,
    max_rows: usize,
) -> LayoutJob {
    let mut job = LayoutJob::default();
    if !time_text.is_empty() {
        job.append(
            time_text,
            0.0,
            TextFormat {
                font_id: FontId::proportional(size),
                color,
                ..Default::default()
            },
        );
    }
    job.append(
        title,
        if time_text.is_empty() { 0.0 } else { 4.0 },
        TextFormat {
            font_id: FontId::proportional(size),
            color,
            italics: true,
            ..Default::default()
        },
    );
    job.wrap = TextWrapping {
        max_width,
        max_rows,
        break_anywhere: true,
        overflow_character: Some('…'),
    };
    job
}

/// Paint an event chip into `rect` and report whether it was clicked
pub(crate) fn event_chip(
    ui: &mut egui::Ui,
    rect: Rect,
    event: &CalendarEvent,
    time_format: TimeFormat,
    fill: Color32,
    text_color: Color32,
    interactive: bool,
) -> bool {
    let id = ui.id().with(("event_chip", event.id.as_str(), rect.min.x as i32, rect.min.y as i32));
    let sense = if interactive { Sense::click() } else { Sense::hover() };
    let response = ui.interact(rect, id, sense);

    let fill = if response.hovered() && interactive {
        fill.linear_multiply(0.85)
    } else {
        fill
    };
    ui.painter().rect_filled(rect, Rounding::same(3.0), fill);

    let job = event_label_job(
        &event.time_text(time_format),
        &event.title,
        11.5,
        text_color,
        (rect.width() - 6.0).max(1.0),
        ((rect.height() / 14.0).floor() as usize).max(1),
    );
    let galley = ui.fonts(|fonts| fonts.layout_job(job));
    ui.painter().with_clip_rect(rect.intersect(ui.clip_rect())).galley(
        Pos2::new(rect.min.x + 3.0, rect.min.y + 1.0),
        galley,
        text_color,
    );

    let clicked = response.clicked();
    if interactive {
        response
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .on_hover_text(format!("{} (click to delete)", event.title));
    }
    clicked
}

/// Column width for `count` columns sharing `available` with `spacing` gaps
pub(crate) fn column_width(available: f32, count: usize, spacing: f32) -> f32 {
    if count == 0 {
        return available;
    }
    let gaps = spacing * (count.saturating_sub(1)) as f32;
    ((available - gaps) / count as f32).max(20.0)
}

pub(crate) fn cell_rect(origin: Pos2, col: usize, width: f32, height: f32, spacing: f32) -> Rect {
    Rect::from_min_size(
        Pos2::new(origin.x + col as f32 * (width + spacing), origin.y),
        Vec2::new(width, height),
    )
}
