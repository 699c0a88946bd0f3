mod app;
pub mod dialogs;
pub mod selection;
pub mod theme;
pub mod views;

pub use app::shell::CalendarShell;
pub use app::state::ViewType;
pub use app::{view_dates, view_title, CalendarApp};
