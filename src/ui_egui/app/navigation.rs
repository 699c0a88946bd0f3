use super::state::ViewType;
use super::CalendarApp;
use crate::ui_egui::views::visible_dates;
use crate::utils::date::{
    is_weekend, shift_month_preserving_day, skip_weekend, week_dates,
};
use chrono::{Datelike, Duration, Local, NaiveDate};

impl CalendarApp {
    pub(super) fn navigate_previous(&mut self) {
        self.step(-1);
    }

    pub(super) fn navigate_next(&mut self) {
        self.step(1);
    }

    pub(super) fn jump_to_today(&mut self) {
        self.current_date = Local::now().date_naive();
        self.normalize_current_date(1);
    }

    pub(super) fn go_to_date(&mut self, date: NaiveDate) {
        self.current_date = date;
        self.normalize_current_date(1);
    }

    pub(super) fn switch_view(&mut self, view: ViewType) {
        if self.current_view != view {
            log::info!("Switching to {} view", view.as_str());
            self.current_view = view;
            self.normalize_current_date(1);
        }
    }

    pub(super) fn toggle_weekends(&mut self) {
        self.shell.toggle_weekends();
        self.normalize_current_date(1);
    }

    fn step(&mut self, direction: i32) {
        self.current_date = match self.current_view {
            ViewType::Day => self.current_date + Duration::days(direction as i64),
            ViewType::Week => self.current_date + Duration::weeks(direction as i64),
            ViewType::Month => shift_month_preserving_day(self.current_date, direction),
        };
        self.normalize_current_date(direction as i64);
    }

    /// The day view never rests on a hidden weekend day
    pub(super) fn normalize_current_date(&mut self, direction: i64) {
        if self.current_view == ViewType::Day
            && !self.shell.weekends_visible()
            && is_weekend(self.current_date)
        {
            self.current_date = skip_weekend(self.current_date, direction);
        }
    }
}

/// Dates shown as columns by the time grid views
pub fn view_dates(
    view: ViewType,
    date: NaiveDate,
    first_day_of_week: u8,
    weekends_visible: bool,
) -> Vec<NaiveDate> {
    match view {
        ViewType::Day => vec![date],
        ViewType::Week => visible_dates(&week_dates(date, first_day_of_week), weekends_visible),
        ViewType::Month => Vec::new(),
    }
}

/// Toolbar title for the visible range
pub fn view_title(
    view: ViewType,
    date: NaiveDate,
    first_day_of_week: u8,
    weekends_visible: bool,
) -> String {
    match view {
        ViewType::Month => date.format("%B %Y").to_string(),
        ViewType::Day => date.format("%B %-d, %Y").to_string(),
        ViewType::Week => {
            let dates = view_dates(view, date, first_day_of_week, weekends_visible);
            let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
                return date.format("%B %Y").to_string();
            };
            if first.year() != last.year() {
                format!("{} – {}", first.format("%b %-d, %Y"), last.format("%b %-d, %Y"))
            } else if first.month() != last.month() {
                format!("{} – {}", first.format("%b %-d"), last.format("%b %-d, %Y"))
            } else {
                format!("{} – {}", first.format("%b %-d"), last.format("%-d, %Y"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(ViewType::Month, date(2024, 1, 10), true, "January 2024" ; "month")]
    #[test_case(ViewType::Day, date(2024, 1, 10), true, "January 10, 2024" ; "day")]
    #[test_case(ViewType::Week, date(2024, 1, 10), true, "Jan 7 – 13, 2024" ; "week")]
    #[test_case(ViewType::Week, date(2024, 1, 10), false, "Jan 8 – 12, 2024" ; "work week")]
    #[test_case(ViewType::Week, date(2024, 1, 31), true, "Jan 28 – Feb 3, 2024" ; "across months")]
    #[test_case(ViewType::Week, date(2024, 1, 2), true, "Dec 31, 2023 – Jan 6, 2024" ; "across years")]
    fn test_view_title(view: ViewType, date: NaiveDate, weekends: bool, expected: &str) {
        assert_eq!(view_title(view, date, 0, weekends), expected);
    }

    #[test]
    fn test_week_dates_respect_weekends() {
        let all = view_dates(ViewType::Week, date(2024, 1, 10), 1, true);
        assert_eq!(all.len(), 7);
        assert_eq!(all[0], date(2024, 1, 8));

        let weekdays = view_dates(ViewType::Week, date(2024, 1, 10), 1, false);
        assert_eq!(weekdays.len(), 5);
        assert_eq!(weekdays[4], date(2024, 1, 12));
    }
}
