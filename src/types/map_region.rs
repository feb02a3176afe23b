use serde::Serialize;

use super::place::LatLng;

#[derive(Debug, PartialEq)]
pub enum RegionError {
    NonFiniteCoordinate,
    InvalidDelta(f64),
}

impl std::fmt::Display for RegionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RegionError::NonFiniteCoordinate => write!(f, "Region center must be finite"),
            RegionError::InvalidDelta(d) => {
                write!(f, "Region delta must be positive and finite, got {}", d)
            }
        }
    }
}

/// Camera viewport: a center point plus angular spans.
///
/// Deltas are always strictly positive and finite; the only way to build a
/// region is through [`MapRegion::new`] or a transformation of an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapRegion {
    latitude: f64,
    longitude: f64,
    latitude_delta: f64,
    longitude_delta: f64,
}

impl MapRegion {
    pub fn new(
        latitude: f64,
        longitude: f64,
        latitude_delta: f64,
        longitude_delta: f64,
    ) -> Result<Self, RegionError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(RegionError::NonFiniteCoordinate);
        }

        for delta in [latitude_delta, longitude_delta] {
            if !(delta.is_finite() && delta > 0.0) {
                return Err(RegionError::InvalidDelta(delta));
            }
        }

        Ok(Self {
            latitude,
            longitude,
            latitude_delta,
            longitude_delta,
        })
    }

    /// Region centred on `location` with the same span on both axes.
    pub fn around(location: LatLng, delta: f64) -> Result<Self, RegionError> {
        Self::new(location.lat, location.lng, delta, delta)
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude_delta(&self) -> f64 {
        self.latitude_delta
    }

    pub fn longitude_delta(&self) -> f64 {
        self.longitude_delta
    }

    /// Same center, both deltas multiplied by `scale` and clamped into `[min, max]`.
    ///
    /// A delta never moves against the zoom direction: a delta already below
    /// `min` is not widened by zooming in, one above `max` is not narrowed by
    /// zooming out.
    pub fn scaled(&self, scale: f64, min: f64, max: f64) -> Self {
        let step = |delta: f64| {
            let next = (delta * scale).clamp(min, max);
            if scale < 1.0 {
                next.min(delta)
            } else {
                next.max(delta)
            }
        };

        Self {
            latitude_delta: step(self.latitude_delta),
            longitude_delta: step(self.longitude_delta),
            ..*self
        }
    }

    /// Same center, both deltas clamped into `[min, max]`.
    pub fn clamped(&self, min: f64, max: f64) -> Self {
        Self {
            latitude_delta: self.latitude_delta.clamp(min, max),
            longitude_delta: self.longitude_delta.clamp(min, max),
            ..*self
        }
    }
}
