use chrono::{Datelike, Local, NaiveDate};
use egui::{Align2, FontId, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use super::palette::CalendarCellPalette;
use super::{cell_rect, column_width, event_chip, visible_dates, ViewInteraction, ViewOptions};
use crate::models::event::{CalendarEvent, DeleteTarget};
use crate::services::event_store::EventStore;
use crate::ui_egui::selection::{SelectionDrag, SelectionManager};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::{is_weekend, month_weeks};

const HEADER_HEIGHT: f32 = 28.0;
const DAY_NUMBER_HEIGHT: f32 = 20.0;
const CHIP_HEIGHT: f32 = 17.0;
const CHIP_SPACING: f32 = 2.0;
const MIN_ROW_HEIGHT: f32 = 80.0;
const SPACING: f32 = 1.0;

/// How a month cell's events are split between chips and the "+N more" link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellOverflow {
    pub shown: usize,
    pub hidden: usize,
}

/// Fit `total` events into a cell that can hold `fits` chips, capped at
/// `max_events`. When anything is hidden, one chip slot goes to the link.
pub fn cell_overflow(total: usize, max_events: usize, fits: usize) -> CellOverflow {
    let limit = max_events.min(fits).max(1);
    if total <= limit {
        CellOverflow {
            shown: total,
            hidden: 0,
        }
    } else {
        let shown = limit - 1;
        CellOverflow {
            shown,
            hidden: total - shown,
        }
    }
}

pub struct MonthView;

impl MonthView {
    pub fn show(
        ui: &mut egui::Ui,
        current_date: NaiveDate,
        store: &EventStore,
        options: &ViewOptions,
        theme: &CalendarTheme,
    ) -> ViewInteraction {
        let today = Local::now().date_naive();
        let palette = CalendarCellPalette::from_theme(theme);
        let mut result = ViewInteraction::default();

        let weeks: Vec<Vec<NaiveDate>> = month_weeks(current_date, options.first_day_of_week)
            .iter()
            .map(|week| visible_dates(week, options.weekends_visible))
            .collect();
        let columns = weeks.first().map(Vec::len).unwrap_or(7);

        let available = ui.available_size();
        let col_width = column_width(available.x, columns, SPACING);
        let rows = weeks.len().max(1);
        let row_height = ((available.y - HEADER_HEIGHT - SPACING * rows as f32) / rows as f32)
            .max(MIN_ROW_HEIGHT);

        let (grid_rect, grid_response) = ui.allocate_exact_size(
            Vec2::new(
                available.x,
                HEADER_HEIGHT + rows as f32 * (row_height + SPACING),
            ),
            Sense::click_and_drag(),
        );

        // Day name header
        if let Some(first_week) = weeks.first() {
            for (col, date) in first_week.iter().enumerate() {
                let rect = cell_rect(grid_rect.min, col, col_width, HEADER_HEIGHT, SPACING);
                ui.painter().rect_filled(rect, Rounding::same(4.0), palette.header_bg);
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    date.format("%a").to_string(),
                    FontId::proportional(13.0),
                    palette.header_text,
                );
            }
        }

        let mut cells: Vec<(Rect, NaiveDate)> = Vec::with_capacity(rows * columns);
        for (row, week) in weeks.iter().enumerate() {
            let origin = Pos2::new(
                grid_rect.min.x,
                grid_rect.min.y + HEADER_HEIGHT + SPACING + row as f32 * (row_height + SPACING),
            );
            for (col, date) in week.iter().enumerate() {
                cells.push((cell_rect(origin, col, col_width, row_height, SPACING), *date));
            }
        }

        let pointer_cell = ui
            .ctx()
            .pointer_interact_pos()
            .and_then(|pos| cells.iter().find(|(rect, _)| rect.contains(pos)))
            .map(|(_, date)| *date);

        if options.interactive {
            Self::track_selection(ui.ctx(), &grid_response, pointer_cell);
        }
        let active_selection = SelectionManager::active(ui.ctx());

        for (rect, date) in &cells {
            let selected = active_selection.is_some_and(|drag| drag.covers_day(*date));
            let cell_result = Self::render_day_cell(
                ui,
                *rect,
                *date,
                current_date.month(),
                today,
                selected,
                store.events_on(*date),
                options,
                &palette,
            );
            result.merge(cell_result);
        }

        result
    }

    fn track_selection(
        ctx: &egui::Context,
        grid_response: &egui::Response,
        pointer_cell: Option<NaiveDate>,
    ) {
        let Some(date) = pointer_cell else {
            return;
        };

        let pressed = grid_response.is_pointer_button_down_on() || grid_response.clicked();
        match SelectionManager::active(ctx) {
            None if pressed => SelectionManager::begin(ctx, SelectionDrag::days(date)),
            Some(_) if ctx.input(|i| i.pointer.primary_down() || i.pointer.primary_released()) => {
                SelectionManager::update(ctx, |drag| drag.extend_to_day(date));
            }
            _ => {}
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render_day_cell(
        ui: &mut egui::Ui,
        rect: Rect,
        date: NaiveDate,
        displayed_month: u32,
        today: NaiveDate,
        selected: bool,
        day_events: Vec<&CalendarEvent>,
        options: &ViewOptions,
        palette: &CalendarCellPalette,
    ) -> ViewInteraction {
        let mut result = ViewInteraction::default();
        let in_month = date.month() == displayed_month;

        let background = if date == today {
            palette.today_bg
        } else if !in_month {
            palette.outside_bg
        } else if is_weekend(date) {
            palette.weekend_bg
        } else {
            palette.regular_bg
        };

        let painter = ui.painter();
        painter.rect_filled(rect, Rounding::same(2.0), background);
        if selected {
            painter.rect_filled(rect, Rounding::same(2.0), palette.selection);
        }
        painter.rect_stroke(rect, Rounding::same(2.0), Stroke::new(1.0, palette.border));

        painter.text(
            Pos2::new(rect.max.x - 6.0, rect.min.y + 4.0),
            Align2::RIGHT_TOP,
            date.day().to_string(),
            FontId::proportional(13.0),
            if in_month { palette.text } else { palette.muted_text },
        );

        let body_height = rect.height() - DAY_NUMBER_HEIGHT - 4.0;
        let fits = (body_height / (CHIP_HEIGHT + CHIP_SPACING)).floor().max(1.0) as usize;
        let overflow = cell_overflow(day_events.len(), options.day_max_events, fits);

        let chip_width = rect.width() - 6.0;
        let mut y = rect.min.y + DAY_NUMBER_HEIGHT;
        for event in day_events.iter().take(overflow.shown) {
            let chip = Rect::from_min_size(
                Pos2::new(rect.min.x + 3.0, y),
                Vec2::new(chip_width, CHIP_HEIGHT),
            );
            let (fill, text) = if event.all_day {
                (palette.event_bg, palette.event_text)
            } else {
                (background, palette.text)
            };
            if event_chip(ui, chip, event, options.time_format, fill, text, options.interactive) {
                result.clicked_event = Some(DeleteTarget::from_event(event));
            }
            y += CHIP_HEIGHT + CHIP_SPACING;
        }

        if overflow.hidden > 0 {
            let link = Rect::from_min_size(
                Pos2::new(rect.min.x + 3.0, y),
                Vec2::new(chip_width, CHIP_HEIGHT),
            );
            let id = ui.id().with(("more_link", date));
            let sense = if options.interactive { Sense::click() } else { Sense::hover() };
            let response = ui.interact(link, id, sense);
            let color = if response.hovered() {
                palette.text
            } else {
                palette.muted_text
            };
            ui.painter().text(
                link.left_center(),
                Align2::LEFT_CENTER,
                format!("+{} more", overflow.hidden),
                FontId::proportional(11.5),
                color,
            );
            if response.clicked() {
                result.show_day = Some(date);
            }
        }

        result
    }
}
