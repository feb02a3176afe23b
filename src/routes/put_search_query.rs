use axum::{extract::State, response::Response};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::Deserialize;
use validator::Validate;

use crate::{
    types::app_state::AppState,
    utils::{app_error::AppError, validated_json::ValidatedJson},
};

use super::snapshot_response;

#[derive(Validate, Deserialize)]
pub struct PutSearchQueryPayload {
    #[validate(length(max = 256, message = "Must be at most 256 characters"))]
    pub text: String,
}

#[cfg_attr(test, debug_handler)]
pub async fn put_search_query(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PutSearchQueryPayload>,
) -> Result<Response, AppError> {
    state.search_controller.on_query_changed(payload.text).await;

    Ok(snapshot_response(&state).await)
}
