use serde::Serialize;

use crate::types::{map_region::MapRegion, place::Place, suggestion::Suggestion};

use super::{camera_command::CameraCommand, selection::Selection};

/// Everything the presentation layer renders.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchSnapshot {
    pub query: String,
    pub suggestions: Vec<Suggestion>,
    pub history: Vec<Place>,
    pub selection: Selection,
    pub region: MapRegion,
    pub camera: Option<CameraCommand>,
}
