use axum::{extract::State, response::Response};

use crate::types::app_state::AppState;

use super::snapshot_response;

pub async fn get_search_state(State(state): State<AppState>) -> Response {
    snapshot_response(&state).await
}
