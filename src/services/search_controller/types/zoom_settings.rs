/// Zoom step and the bounds region deltas are clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomSettings {
    pub factor: f64,
    pub min_delta: f64,
    pub max_delta: f64,
}

impl Default for ZoomSettings {
    fn default() -> Self {
        ZoomSettings {
            factor: 0.5,
            min_delta: 0.0001,
            max_delta: 180.0,
        }
    }
}
