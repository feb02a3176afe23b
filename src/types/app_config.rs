use std::{env, path::PathBuf};

use crate::services::{
    maps_client::maps_service::MapsServiceConfig,
    search_controller::types::zoom_settings::ZoomSettings,
};

use super::{
    map_region::MapRegion,
    place::{LatLng, Place},
};

const DEFAULT_GOOGLE_HOST: &str = "https://maps.googleapis.com";
const DEFAULT_HISTORY_DIR: &str = "data";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const INITIAL_DELTA: f64 = 0.02;

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "Missing required variable {}", key),
            ConfigError::Invalid { key, value } => {
                write!(f, "Invalid value for {}: {:?}", key, value)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub maps: MapsServiceConfig,
    pub history_dir: PathBuf,
    pub auth_key: Option<String>,
    pub bind_addr: String,
    pub zoom: ZoomSettings,
    pub initial_region: MapRegion,
    pub home_place: Option<Place>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GOOGLE_PLACES_API_KEY")
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::Missing("GOOGLE_PLACES_API_KEY"))?;

        let defaults = ZoomSettings::default();
        let zoom = ZoomSettings {
            min_delta: parse_f64(&lookup, "ZOOM_MIN_DELTA")?.unwrap_or(defaults.min_delta),
            max_delta: parse_f64(&lookup, "ZOOM_MAX_DELTA")?.unwrap_or(defaults.max_delta),
            ..defaults
        };
        if !(zoom.min_delta > 0.0 && zoom.min_delta <= zoom.max_delta && zoom.max_delta.is_finite())
        {
            return Err(ConfigError::Invalid {
                key: "ZOOM_MIN_DELTA",
                value: format!("{} (max {})", zoom.min_delta, zoom.max_delta),
            });
        }

        let home_place = hyderabad();
        let initial_region =
            MapRegion::around(home_place.location, INITIAL_DELTA).map_err(|e| {
                ConfigError::Invalid {
                    key: "initial_region",
                    value: e.to_string(),
                }
            })?;

        Ok(AppConfig {
            maps: MapsServiceConfig {
                api_key,
                host: lookup("GOOGLE_PLACES_HOST")
                    .unwrap_or_else(|| DEFAULT_GOOGLE_HOST.to_string()),
            },
            history_dir: lookup("HISTORY_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_HISTORY_DIR)),
            auth_key: lookup("AUTH_KEY").filter(|k| !k.is_empty()),
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            zoom,
            initial_region,
            home_place: Some(home_place),
        })
    }
}

fn parse_f64<F>(lookup: &F, key: &'static str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => match value.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(Some(v)),
            _ => Err(ConfigError::Invalid { key, value }),
        },
    }
}

fn hyderabad() -> Place {
    Place {
        place_id: "ChIJx9Lr6tqZyzsRwvu6koO3k64".to_string(),
        name: "Hyderabad".to_string(),
        formatted_address: "Hyderabad, Telangana, India".to_string(),
        location: LatLng {
            lat: 17.406498,
            lng: 78.477244,
        },
    }
}
