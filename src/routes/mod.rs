use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};

use crate::types::app_state::AppState;

mod get_search_state;
mod post_map_zoom;
mod post_select_history_item;
mod post_select_suggestion;
mod put_map_region;
mod put_search_query;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/search-state", get(get_search_state::get_search_state))
        .route("/search-query", put(put_search_query::put_search_query))
        .route(
            "/suggestions/select",
            post(post_select_suggestion::post_select_suggestion),
        )
        .route(
            "/history/select",
            post(post_select_history_item::post_select_history_item),
        )
        .route("/map/zoom-in", post(post_map_zoom::post_map_zoom_in))
        .route("/map/zoom-out", post(post_map_zoom::post_map_zoom_out))
        .route("/map/region", put(put_map_region::put_map_region))
}

/// Every state-changing route answers with the snapshot the screen should render next.
async fn snapshot_response(state: &AppState) -> Response {
    (
        StatusCode::OK,
        Json(state.search_controller.snapshot().await),
    )
        .into_response()
}
