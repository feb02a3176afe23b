use axum::{extract::State, response::Response};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::Deserialize;
use validator::Validate;

use crate::{
    types::{app_state::AppState, map_region::MapRegion},
    utils::{app_error::AppError, validated_json::ValidatedJson},
};

use super::snapshot_response;

#[derive(Validate, Deserialize)]
pub struct PutMapRegionPayload {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    #[validate(range(exclusive_min = 0.0, max = 180.0))]
    pub latitude_delta: f64,

    #[validate(range(exclusive_min = 0.0, max = 360.0))]
    pub longitude_delta: f64,
}

#[cfg_attr(test, debug_handler)]
pub async fn put_map_region(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PutMapRegionPayload>,
) -> Result<Response, AppError> {
    let region = MapRegion::new(
        payload.latitude,
        payload.longitude,
        payload.latitude_delta,
        payload.longitude_delta,
    )
    .map_err(|e| AppError::bad_request(e.to_string().as_str()))?;

    state.search_controller.on_region_changed(region).await;

    Ok(snapshot_response(&state).await)
}
