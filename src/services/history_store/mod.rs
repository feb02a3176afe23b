pub mod history_store;
pub mod types;
