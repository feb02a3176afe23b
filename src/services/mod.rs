pub mod history_store;
pub mod maps_client;
pub mod search_controller;
