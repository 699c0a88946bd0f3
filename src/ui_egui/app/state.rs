#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewType {
    Day,
    Week,
    Month,
}

impl ViewType {
    pub const ALL: [ViewType; 3] = [ViewType::Month, ViewType::Week, ViewType::Day];

    /// Parse a persisted view name, falling back to the month grid
    pub fn parse(view_str: &str) -> Self {
        match view_str {
            "Day" => ViewType::Day,
            "Week" => ViewType::Week,
            "Month" => ViewType::Month,
            other => {
                log::warn!("Unknown view '{}', showing month", other);
                ViewType::Month
            }
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ViewType::Day => "Day",
            ViewType::Week => "Week",
            ViewType::Month => "Month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ViewType::Day => "day",
            ViewType::Week => "week",
            ViewType::Month => "month",
        }
    }
}
