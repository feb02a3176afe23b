pub mod app_config;
pub mod app_state;
pub mod map_region;
pub mod place;
pub mod suggestion;
