// Settings module
// User preferences persisted as TOML

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Clock format used for event time text and time grid labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    TwelveHour,
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl TimeFormat {
    pub fn format_time(self, time: NaiveTime) -> String {
        match self {
            TimeFormat::TwelveHour => time.format("%-I:%M%P").to_string(),
            TimeFormat::TwentyFourHour => time.format("%H:%M").to_string(),
        }
    }

    /// Label for the first slot of an hour in the time grid
    pub fn format_hour(self, hour: u32) -> String {
        match self {
            TimeFormat::TwelveHour => {
                let suffix = if hour < 12 { "am" } else { "pm" };
                let display = match hour % 12 {
                    0 => 12,
                    h => h,
                };
                format!("{}{}", display, suffix)
            }
            TimeFormat::TwentyFourHour => format!("{:02}:00", hour),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Show Saturday and Sunday columns
    pub weekends_visible: bool,
    /// View shown on startup ("Month", "Week" or "Day")
    pub initial_view: String,
    /// 0 = Sunday .. 6 = Saturday
    pub first_day_of_week: u8,
    pub time_format: TimeFormat,
    /// Length of one time grid slot, must divide an hour evenly
    pub slot_minutes: u32,
    /// Events listed per month cell before collapsing into "+N more"
    pub day_max_events: usize,
    pub theme: String,
    /// Populate the calendar with sample events on startup
    pub seed_initial_events: bool,
    /// Clicking the dimmed area around a dialog dismisses it
    pub overlay_click_dismisses: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            weekends_visible: true,
            initial_view: "Month".to_string(),
            first_day_of_week: 0, // Sunday
            time_format: TimeFormat::TwelveHour,
            slot_minutes: 30,
            day_max_events: 3,
            theme: "light".to_string(),
            seed_initial_events: true,
            overlay_click_dismisses: true,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.first_day_of_week > 6 {
            return Err(format!(
                "first_day_of_week must be between 0 and 6, got {}",
                self.first_day_of_week
            ));
        }

        if self.slot_minutes == 0 || self.slot_minutes > 60 || 60 % self.slot_minutes != 0 {
            return Err(format!(
                "slot_minutes must divide an hour evenly, got {}",
                self.slot_minutes
            ));
        }

        if self.day_max_events == 0 {
            return Err("day_max_events must be at least 1".to_string());
        }

        match self.initial_view.as_str() {
            "Month" | "Week" | "Day" => {}
            other => return Err(format!("Unknown view '{}'", other)),
        }

        match self.theme.to_lowercase().as_str() {
            "light" | "dark" => Ok(()),
            other => Err(format!("Unknown theme '{}'", other)),
        }
    }
}
