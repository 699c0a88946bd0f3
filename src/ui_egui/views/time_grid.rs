//! Time grid rendering for the week and day views.
//!
//! Layout, top to bottom: a header row of day names, an all-day strip, and a
//! scrollable grid of 24 hours split into `slot_minutes` slots. Timed events
//! are drawn as blocks over their slots; overlapping events share the
//! column in side-by-side lanes.

use chrono::{Duration, Local, NaiveDate, NaiveTime, Timelike};
use egui::{Align2, Color32, FontId, Id, Pos2, Rect, Rounding, Sense, Stroke, Vec2};

use super::palette::TimeGridPalette;
use super::{cell_rect, column_width, event_chip, ViewInteraction, ViewOptions};
use crate::models::event::{CalendarEvent, DeleteTarget};
use crate::services::event_store::EventStore;
use crate::ui_egui::selection::{SelectionDrag, SelectionManager};
use crate::ui_egui::theme::CalendarTheme;
use crate::utils::date::is_weekend;

pub const TIME_LABEL_WIDTH: f32 = 56.0;
pub const SLOT_HEIGHT: f32 = 22.0;
const HEADER_HEIGHT: f32 = 28.0;
const ALL_DAY_CHIP_HEIGHT: f32 = 18.0;
const COLUMN_SPACING: f32 = 1.0;
const MINUTES_PER_DAY: u32 = 24 * 60;
/// Hour the grid scrolls to when first shown
const SCROLL_TIME_HOUR: f32 = 6.0;
/// Display length of a timed event without an end
const DEFAULT_TIMED_MINUTES: u32 = 60;
/// Shortest block drawn for a timed event
const MIN_BLOCK_MINUTES: u32 = 15;

/// Start of the slot under a point `offset_y` pixels below the grid top
pub fn slot_at(offset_y: f32, slot_height: f32, slot_minutes: u32) -> NaiveTime {
    let slots = (MINUTES_PER_DAY / slot_minutes.max(1)) as i64;
    let index = ((offset_y / slot_height).floor() as i64).clamp(0, slots - 1);
    let minutes = (index * slot_minutes as i64) as u32;
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0).unwrap_or(NaiveTime::MIN)
}

/// Minutes from midnight `[start, end)` that a timed event occupies on `date`.
/// Events without an end are drawn `DEFAULT_TIMED_MINUTES` long, and blocks
/// are never shorter than `MIN_BLOCK_MINUTES`, which can draw a short event
/// past its real end.
pub fn timed_segment(event: &CalendarEvent, date: NaiveDate) -> Option<(u32, u32)> {
    if event.all_day {
        return None;
    }

    let end = event
        .end
        .unwrap_or(event.start + Duration::minutes(DEFAULT_TIMED_MINUTES as i64));
    let day_start = date.and_time(NaiveTime::MIN);
    let day_end = day_start + Duration::days(1);

    let segment_start = event.start.max(day_start);
    let segment_end = end.min(day_end);
    if segment_start >= segment_end && !(event.start == end && event.start.date() == date) {
        return None;
    }

    let start_min = (segment_start - day_start).num_minutes() as u32;
    let end_min = ((segment_end - day_start).num_minutes() as u32).max(start_min + MIN_BLOCK_MINUTES);
    Some((start_min, end_min.min(MINUTES_PER_DAY)))
}

/// Assign each segment a lane so overlapping segments sit side by side.
/// Returns `(lane, lane_count)` per input, in input order.
pub fn assign_lanes(segments: &[(u32, u32)]) -> Vec<(usize, usize)> {
    let mut order: Vec<usize> = (0..segments.len()).collect();
    order.sort_by_key(|&i| (segments[i].0, std::cmp::Reverse(segments[i].1)));

    let mut lanes = vec![0usize; segments.len()];
    let mut counts = vec![1usize; segments.len()];

    // Overlapping events form clusters that share a lane count
    let mut cluster: Vec<usize> = Vec::new();
    let mut lane_ends: Vec<u32> = Vec::new();
    let mut cluster_end = 0u32;

    let mut close_cluster = |cluster: &mut Vec<usize>, lane_ends: &mut Vec<u32>| {
        for &i in cluster.iter() {
            counts[i] = lane_ends.len().max(1);
        }
        cluster.clear();
        lane_ends.clear();
    };

    for &i in &order {
        let (start, end) = segments[i];
        if !cluster.is_empty() && start >= cluster_end {
            close_cluster(&mut cluster, &mut lane_ends);
        }

        let lane = match lane_ends.iter().position(|&lane_end| lane_end <= start) {
            Some(free) => {
                lane_ends[free] = end;
                free
            }
            None => {
                lane_ends.push(end);
                lane_ends.len() - 1
            }
        };
        lanes[i] = lane;
        cluster.push(i);
        cluster_end = if cluster.len() == 1 { end } else { cluster_end.max(end) };
    }
    close_cluster(&mut cluster, &mut lane_ends);

    lanes.into_iter().zip(counts).collect()
}

pub struct TimeGridView;

impl TimeGridView {
    pub fn show(
        ui: &mut egui::Ui,
        dates: &[NaiveDate],
        store: &EventStore,
        options: &ViewOptions,
        theme: &CalendarTheme,
    ) -> ViewInteraction {
        let palette = TimeGridPalette::from_theme(theme);
        let mut result = ViewInteraction::default();
        if dates.is_empty() {
            return result;
        }

        let col_width = column_width(
            ui.available_width() - TIME_LABEL_WIDTH - COLUMN_SPACING,
            dates.len(),
            COLUMN_SPACING,
        );

        Self::render_header(ui, dates, col_width, &palette);
        result.merge(Self::render_all_day_strip(ui, dates, store, col_width, options, &palette));
        ui.add_space(2.0);

        let slot_minutes = options.slot_minutes.max(1);
        let slots_per_hour = (60 / slot_minutes) as f32;
        let scroll_flag = Id::new("time_grid_initial_scroll");
        let needs_initial_scroll = !ui.ctx().data(|d| d.get_temp::<bool>(scroll_flag).unwrap_or(false));

        let mut area = egui::ScrollArea::vertical()
            .id_source("time_grid_scroll")
            .auto_shrink([false, false]);
        if needs_initial_scroll {
            area = area.vertical_scroll_offset(SCROLL_TIME_HOUR * slots_per_hour * SLOT_HEIGHT);
            ui.ctx().data_mut(|d| d.insert_temp(scroll_flag, true));
        }

        area.show(ui, |ui| {
            result.merge(Self::render_slots(ui, dates, store, col_width, options, &palette));
        });

        result
    }

    fn render_header(
        ui: &mut egui::Ui,
        dates: &[NaiveDate],
        col_width: f32,
        palette: &TimeGridPalette,
    ) {
        let today = Local::now().date_naive();
        let (rect, _) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), HEADER_HEIGHT),
            Sense::hover(),
        );
        let origin = Pos2::new(rect.min.x + TIME_LABEL_WIDTH + COLUMN_SPACING, rect.min.y);
        let label_format = if dates.len() == 1 { "%A" } else { "%a %-m/%-d" };

        for (col, date) in dates.iter().enumerate() {
            let cell = cell_rect(origin, col, col_width, HEADER_HEIGHT, COLUMN_SPACING);
            let fill = if *date == today { palette.today_bg } else { palette.hour_bg };
            ui.painter().rect_filled(cell, Rounding::same(4.0), fill);
            ui.painter().text(
                cell.center(),
                Align2::CENTER_CENTER,
                date.format(label_format).to_string(),
                FontId::proportional(13.0),
                palette.header_text,
            );
        }
    }

    fn render_all_day_strip(
        ui: &mut egui::Ui,
        dates: &[NaiveDate],
        store: &EventStore,
        col_width: f32,
        options: &ViewOptions,
        palette: &TimeGridPalette,
    ) -> ViewInteraction {
        let mut result = ViewInteraction::default();
        let per_day: Vec<Vec<&CalendarEvent>> = dates
            .iter()
            .map(|date| {
                store
                    .events_on(*date)
                    .into_iter()
                    .filter(|event| event.all_day)
                    .collect()
            })
            .collect();
        let rows = per_day.iter().map(Vec::len).max().unwrap_or(0).max(1);
        let strip_height = rows as f32 * (ALL_DAY_CHIP_HEIGHT + 2.0) + 6.0;

        let (rect, response) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), strip_height),
            Sense::click_and_drag(),
        );
        ui.painter().text(
            Pos2::new(rect.min.x + TIME_LABEL_WIDTH - 6.0, rect.center().y),
            Align2::RIGHT_CENTER,
            "all-day",
            FontId::proportional(11.0),
            palette.label_text,
        );

        let origin = Pos2::new(rect.min.x + TIME_LABEL_WIDTH + COLUMN_SPACING, rect.min.y);
        let cells: Vec<(Rect, NaiveDate)> = dates
            .iter()
            .enumerate()
            .map(|(col, date)| (cell_rect(origin, col, col_width, strip_height, COLUMN_SPACING), *date))
            .collect();

        if options.interactive {
            let pointer_date = ui
                .ctx()
                .pointer_interact_pos()
                .and_then(|pos| cells.iter().find(|(cell, _)| cell.contains(pos)))
                .map(|(_, date)| *date);
            if let Some(date) = pointer_date {
                track_selection(ui.ctx(), &response, SelectionDrag::days(date), |drag| {
                    drag.extend_to_day(date)
                });
            }
        }
        let active = SelectionManager::active(ui.ctx());

        for ((cell, date), events) in cells.iter().zip(&per_day) {
            let fill = if is_weekend(*date) { palette.weekend_bg } else { palette.regular_bg };
            ui.painter().rect_filled(*cell, Rounding::ZERO, fill);
            if active.is_some_and(|drag| drag.covers_day(*date)) {
                ui.painter().rect_filled(*cell, Rounding::ZERO, palette.selection);
            }
            ui.painter()
                .rect_stroke(*cell, Rounding::ZERO, Stroke::new(1.0, palette.hour_line));

            for (row, event) in events.iter().enumerate() {
                let chip = Rect::from_min_size(
                    Pos2::new(cell.min.x + 2.0, cell.min.y + 3.0 + row as f32 * (ALL_DAY_CHIP_HEIGHT + 2.0)),
                    Vec2::new(cell.width() - 4.0, ALL_DAY_CHIP_HEIGHT),
                );
                if event_chip(
                    ui,
                    chip,
                    event,
                    options.time_format,
                    palette.event_bg,
                    palette.event_text,
                    options.interactive,
                ) {
                    result.clicked_event = Some(DeleteTarget::from_event(event));
                }
            }
        }

        result
    }

    fn render_slots(
        ui: &mut egui::Ui,
        dates: &[NaiveDate],
        store: &EventStore,
        col_width: f32,
        options: &ViewOptions,
        palette: &TimeGridPalette,
    ) -> ViewInteraction {
        let mut result = ViewInteraction::default();
        let slot_minutes = options.slot_minutes.max(1);
        let slot_count = (MINUTES_PER_DAY / slot_minutes) as usize;
        let minute_height = SLOT_HEIGHT / slot_minutes as f32;
        let grid_height = slot_count as f32 * SLOT_HEIGHT;

        let (rect, response) = ui.allocate_exact_size(
            Vec2::new(ui.available_width(), grid_height),
            Sense::click_and_drag(),
        );
        let origin = Pos2::new(rect.min.x + TIME_LABEL_WIDTH + COLUMN_SPACING, rect.min.y);
        let columns: Vec<(Rect, NaiveDate)> = dates
            .iter()
            .enumerate()
            .map(|(col, date)| (cell_rect(origin, col, col_width, grid_height, COLUMN_SPACING), *date))
            .collect();

        if options.interactive {
            let pointer_slot = ui.ctx().pointer_interact_pos().and_then(|pos| {
                columns
                    .iter()
                    .find(|(column, _)| column.x_range().contains(pos.x))
                    .map(|(_, date)| {
                        date.and_time(slot_at(pos.y - rect.min.y, SLOT_HEIGHT, slot_minutes))
                    })
            });
            if let Some(slot_start) = pointer_slot {
                track_selection(
                    ui.ctx(),
                    &response,
                    SelectionDrag::slots(slot_start, slot_minutes),
                    |drag| drag.extend_to_slot(slot_start),
                );
            }
        }
        let active = SelectionManager::active(ui.ctx());

        let today = Local::now().date_naive();
        for (column, date) in &columns {
            let fill = if *date == today {
                palette.today_bg
            } else if is_weekend(*date) {
                palette.weekend_bg
            } else {
                palette.regular_bg
            };
            ui.painter().rect_filled(*column, Rounding::ZERO, fill);
        }

        for slot in 0..slot_count {
            let y = rect.min.y + slot as f32 * SLOT_HEIGHT;
            let minutes = slot as u32 * slot_minutes;
            let is_hour_start = minutes % 60 == 0;

            if is_hour_start {
                ui.painter().text(
                    Pos2::new(rect.min.x + TIME_LABEL_WIDTH - 6.0, y + 2.0),
                    Align2::RIGHT_TOP,
                    options.time_format.format_hour(minutes / 60),
                    FontId::proportional(11.0),
                    palette.label_text,
                );
            }

            let line = if is_hour_start { palette.hour_line } else { palette.slot_line };
            ui.painter().line_segment(
                [Pos2::new(origin.x, y), Pos2::new(rect.max.x, y)],
                Stroke::new(1.0, line),
            );

            if let Some(drag) = active {
                for (column, date) in &columns {
                    let slot_start = date.and_time(
                        NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
                            .unwrap_or(NaiveTime::MIN),
                    );
                    if drag.covers_slot(slot_start) {
                        let slot_rect = Rect::from_min_size(
                            Pos2::new(column.min.x, y),
                            Vec2::new(column.width(), SLOT_HEIGHT),
                        );
                        ui.painter().rect_filled(slot_rect, Rounding::ZERO, palette.selection);
                    }
                }
            }
        }

        for (column, date) in &columns {
            let day_events: Vec<(&CalendarEvent, (u32, u32))> = store
                .events_on(*date)
                .into_iter()
                .filter_map(|event| timed_segment(event, *date).map(|segment| (event, segment)))
                .collect();
            let segments: Vec<(u32, u32)> = day_events.iter().map(|(_, segment)| *segment).collect();

            for ((event, (start, end)), (lane, lanes)) in day_events.iter().zip(assign_lanes(&segments)) {
                let lane_width = (column.width() - 4.0) / lanes as f32;
                let block = Rect::from_min_size(
                    Pos2::new(
                        column.min.x + 2.0 + lane as f32 * lane_width,
                        rect.min.y + *start as f32 * minute_height,
                    ),
                    Vec2::new(lane_width - 1.0, (end - start) as f32 * minute_height - 1.0),
                );
                if event_chip(
                    ui,
                    block,
                    event,
                    options.time_format,
                    palette.event_bg,
                    palette.event_text,
                    options.interactive,
                ) {
                    result.clicked_event = Some(DeleteTarget::from_event(event));
                }
                ui.painter()
                    .rect_stroke(block, Rounding::same(3.0), Stroke::new(1.0, palette.event_border));
            }
        }

        Self::draw_now_indicator(ui, &columns, rect.min.y, minute_height);
        result
    }

    fn draw_now_indicator(
        ui: &mut egui::Ui,
        columns: &[(Rect, NaiveDate)],
        grid_top: f32,
        minute_height: f32,
    ) {
        let now = Local::now().naive_local();
        let Some((column, _)) = columns.iter().find(|(_, date)| *date == now.date()) else {
            return;
        };

        let minutes = now.time().num_seconds_from_midnight() as f32 / 60.0;
        let y = grid_top + minutes * minute_height;
        let line_color = Color32::from_rgb(255, 100, 100);

        ui.painter()
            .circle_filled(Pos2::new(column.min.x - 3.0, y), 3.0, line_color);
        ui.painter().line_segment(
            [Pos2::new(column.min.x, y), Pos2::new(column.max.x, y)],
            Stroke::new(2.0, line_color),
        );
    }
}

/// Start a selection on press, or extend the active one while the
/// primary button is held.
fn track_selection(
    ctx: &egui::Context,
    response: &egui::Response,
    start: SelectionDrag,
    extend: impl FnOnce(&mut SelectionDrag),
) {
    let pressed = response.is_pointer_button_down_on() || response.clicked();
    match SelectionManager::active(ctx) {
        None if pressed => SelectionManager::begin(ctx, start),
        Some(_) if ctx.input(|i| i.pointer.primary_down() || i.pointer.primary_released()) => {
            SelectionManager::update(ctx, extend);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::EventId;
    use chrono::NaiveDateTime;
    use pretty_assertions::assert_eq;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        date(d).and_hms_opt(h, m, 0).unwrap()
    }

    fn timed(start: NaiveDateTime, end: Option<NaiveDateTime>) -> CalendarEvent {
        CalendarEvent::new(EventId::new("t"), "T", start, end, false)
    }

    #[test]
    fn test_slot_at_maps_pixels_to_slots() {
        assert_eq!(slot_at(0.0, 22.0, 30), NaiveTime::from_hms_opt(0, 0, 0).unwrap());
        assert_eq!(slot_at(23.0, 22.0, 30), NaiveTime::from_hms_opt(0, 30, 0).unwrap());
        assert_eq!(slot_at(22.0 * 19.5, 22.0, 30), NaiveTime::from_hms_opt(9, 30, 0).unwrap());
    }

    #[test]
    fn test_slot_at_clamps_to_grid() {
        assert_eq!(slot_at(-50.0, 22.0, 30), NaiveTime::MIN);
        assert_eq!(slot_at(1.0e6, 22.0, 15), NaiveTime::from_hms_opt(23, 45, 0).unwrap());
    }

    #[test]
    fn test_point_event_gets_default_length() {
        let event = timed(at(10, 12, 0), None);
        assert_eq!(timed_segment(&event, date(10)), Some((720, 780)));
        assert_eq!(timed_segment(&event, date(11)), None);
    }

    #[test]
    fn test_short_event_is_stretched_to_minimum_block() {
        let event = timed(at(10, 9, 0), Some(at(10, 9, 5)));
        assert_eq!(timed_segment(&event, date(10)), Some((540, 555)));
    }

    #[test]
    fn test_overnight_event_is_split() {
        let event = timed(at(10, 22, 0), Some(at(11, 2, 0)));
        assert_eq!(timed_segment(&event, date(10)), Some((1320, 1440)));
        assert_eq!(timed_segment(&event, date(11)), Some((0, 120)));
    }

    #[test]
    fn test_all_day_event_has_no_segment() {
        let event = CalendarEvent::new(EventId::new("a"), "A", at(10, 0, 0), None, true);
        assert_eq!(timed_segment(&event, date(10)), None);
    }

    #[test]
    fn test_lanes_for_overlaps() {
        let lanes = assign_lanes(&[(540, 600), (570, 630), (660, 720)]);
        assert_eq!(lanes, vec![(0, 2), (1, 2), (0, 1)]);
    }

    #[test]
    fn test_lanes_reuse_freed_lane() {
        let lanes = assign_lanes(&[(540, 600), (540, 720), (600, 660)]);
        // The 10:00 event reuses the lane freed at 10:00
        assert_eq!(lanes[1], (0, 2));
        assert_eq!(lanes[0], (1, 2));
        assert_eq!(lanes[2], (1, 2));
    }
}
