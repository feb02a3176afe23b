use axum::{extract::State, response::Response};
#[cfg(test)]
use axum_macros::debug_handler;
use serde::Deserialize;
use validator::Validate;

use crate::{
    types::{app_state::AppState, suggestion::Suggestion},
    utils::{app_error::AppError, validated_json::ValidatedJson},
};

use super::snapshot_response;

#[derive(Validate, Deserialize)]
pub struct PostSelectSuggestionPayload {
    #[validate(length(min = 1, message = "Must be at least 1 character"))]
    pub place_id: String,

    pub description: String,
}

#[cfg_attr(test, debug_handler)]
pub async fn post_select_suggestion(
    State(state): State<AppState>,
    ValidatedJson(PostSelectSuggestionPayload {
        place_id,
        description,
    }): ValidatedJson<PostSelectSuggestionPayload>,
) -> Result<Response, AppError> {
    state
        .search_controller
        .on_suggestion_selected(Suggestion {
            place_id,
            description,
        })
        .await;

    Ok(snapshot_response(&state).await)
}
