use serde::Serialize;

use crate::types::map_region::MapRegion;

/// Last animation the map widget was asked to perform.
///
/// `revision` increases with every command so the widget can tell a repeated
/// move to the same region from a command it already applied.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraCommand {
    pub region: MapRegion,
    pub duration_ms: u64,
    pub revision: u64,
}
