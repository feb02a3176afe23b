use axum::{extract::State, response::Response};

use crate::types::app_state::AppState;

use super::snapshot_response;

pub async fn post_map_zoom_in(State(state): State<AppState>) -> Response {
    state.search_controller.on_zoom_in().await;
    snapshot_response(&state).await
}

pub async fn post_map_zoom_out(State(state): State<AppState>) -> Response {
    state.search_controller.on_zoom_out().await;
    snapshot_response(&state).await
}
