pub mod maps_service;
pub mod places_api;
pub mod types;
