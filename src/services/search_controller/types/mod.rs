pub mod camera_command;
pub mod search_history;
pub mod search_snapshot;
pub mod selection;
pub mod zoom_settings;
