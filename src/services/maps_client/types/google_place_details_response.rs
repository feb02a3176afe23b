use serde::{Deserialize, Serialize};

use crate::types::place::{LatLng, Place};

#[derive(Serialize, Deserialize)]
pub struct GoogleLatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleGeometry {
    pub location: GoogleLatLng,
}

#[derive(Serialize, Deserialize)]
pub struct GooglePlaceDetailsResult {
    pub place_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub formatted_address: String,
    pub geometry: GoogleGeometry,
}

#[derive(Serialize, Deserialize)]
pub struct GooglePlaceDetailsResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<GooglePlaceDetailsResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl From<GooglePlaceDetailsResult> for Place {
    fn from(result: GooglePlaceDetailsResult) -> Self {
        Place {
            place_id: result.place_id,
            name: result.name,
            formatted_address: result.formatted_address,
            location: LatLng {
                lat: result.geometry.location.lat,
                lng: result.geometry.location.lng,
            },
        }
    }
}

impl From<&Place> for GooglePlaceDetailsResult {
    fn from(place: &Place) -> Self {
        GooglePlaceDetailsResult {
            place_id: place.place_id.clone(),
            name: place.name.clone(),
            formatted_address: place.formatted_address.clone(),
            geometry: GoogleGeometry {
                location: GoogleLatLng {
                    lat: place.location.lat,
                    lng: place.location.lng,
                },
            },
        }
    }
}
