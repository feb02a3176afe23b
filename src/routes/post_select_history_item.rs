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
pub struct PostSelectHistoryItemPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub place_id: String,
}

#[cfg_attr(test, debug_handler)]
pub async fn post_select_history_item(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PostSelectHistoryItemPayload>,
) -> Result<Response, AppError> {
    let entry = state
        .search_controller
        .history_entry(&payload.place_id)
        .await
        .ok_or_else(|| AppError::not_found("No history entry for that place"))?;

    state.search_controller.on_history_item_selected(entry).await;

    Ok(snapshot_response(&state).await)
}
