pub mod create_event;
pub mod delete_confirm;
pub mod modal;
