// Date utility functions
// Grid arithmetic shared by the month and time grid views

use chrono::{Datelike, Duration, NaiveDate, Weekday};

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First day of the week containing `date`, where `first_day_of_week`
/// counts from Sunday = 0.
pub fn week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let offset = (date.weekday().num_days_from_sunday() as i64 - first_day_of_week as i64 + 7) % 7;
    date - Duration::days(offset)
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(28)
}

/// Move by whole months, clamping the day to the target month's length
pub fn shift_month_preserving_day(current: NaiveDate, delta_months: i32) -> NaiveDate {
    let total_months = (current.year() * 12) + (current.month() as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = (total_months.rem_euclid(12) + 1) as u32;
    let day = current.day().min(days_in_month(new_year, new_month));
    NaiveDate::from_ymd_opt(new_year, new_month, day).unwrap_or(current)
}

/// Whole weeks covering the month of `date`, each row starting on
/// `first_day_of_week`.
pub fn month_weeks(date: NaiveDate, first_day_of_week: u8) -> Vec<[NaiveDate; 7]> {
    let first_of_month = date.with_day(1).unwrap_or(date);
    let last_of_month = first_of_month
        .with_day(days_in_month(date.year(), date.month()))
        .unwrap_or(first_of_month);

    let mut weeks = Vec::with_capacity(6);
    let mut row_start = week_start(first_of_month, first_day_of_week);
    while row_start <= last_of_month {
        weeks.push(std::array::from_fn(|i| row_start + Duration::days(i as i64)));
        row_start += Duration::days(7);
    }
    weeks
}

/// The seven days of the week containing `date`
pub fn week_dates(date: NaiveDate, first_day_of_week: u8) -> [NaiveDate; 7] {
    let start = week_start(date, first_day_of_week);
    std::array::from_fn(|i| start + Duration::days(i as i64))
}

/// Step `date` by `step_days` until it lands on a weekday
pub fn skip_weekend(mut date: NaiveDate, step_days: i64) -> NaiveDate {
    let step = if step_days < 0 { -1 } else { 1 };
    while is_weekend(date) {
        date += Duration::days(step);
    }
    date
}
