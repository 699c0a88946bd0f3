// Service module exports

pub mod event_ids;
pub mod event_store;
pub mod seed;
pub mod settings;
