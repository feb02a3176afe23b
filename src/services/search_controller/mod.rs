pub mod search_controller;
pub mod types;
