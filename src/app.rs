use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::{
    middlewares::auth::auth_middleware,
    routes::apply_routes,
    services::{
        history_store::history_store::{FileHistoryStore, HistoryStore},
        maps_client::maps_service::MapsService,
        search_controller::search_controller::{SearchController, SearchControllerOptions},
    },
    types::{app_config::AppConfig, app_state::AppState},
};

pub async fn gen_state(config: &AppConfig, history_store: Arc<dyn HistoryStore>) -> AppState {
    let search_controller = SearchController::new(
        Arc::new(MapsService::new(config.maps.clone())),
        history_store,
        SearchControllerOptions {
            zoom: config.zoom,
            initial_region: config.initial_region,
            home_place: config.home_place.clone(),
        },
    )
    .await;

    AppState {
        search_controller: Arc::new(search_controller),
        auth_key: config.auth_key.clone(),
    }
}

pub async fn gen_app(config: &AppConfig) -> Router {
    let history_store = Arc::new(FileHistoryStore::new(&config.history_dir));
    info!("Search history stored at {}", history_store.path().display());
    gen_router(gen_state(config, history_store).await)
}

pub fn gen_router(state: AppState) -> Router {
    let cors_middleware = CorsLayer::new();

    apply_routes(Router::new())
        .route("/", get(root))
        .layer(cors_middleware)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ))
        .with_state(state)
}

async fn root() -> &'static str {
    "OK"
}

#[cfg(test)]
pub struct MockApp {
    pub app: Router,
    pub google_server: mockito::ServerGuard,
    pub history_store: Arc<crate::services::history_store::history_store::MemoryHistoryStore>,
}

#[cfg(test)]
pub async fn gen_mock_app() -> MockApp {
    gen_mock_app_with(None, Default::default()).await
}

#[cfg(test)]
pub async fn gen_mock_app_with(
    auth_key: Option<&str>,
    history_store: crate::services::history_store::history_store::MemoryHistoryStore,
) -> MockApp {
    let google_server = mockito::Server::new_async().await;
    let host = google_server.url();

    let config = AppConfig::from_lookup(|key| match key {
        "GOOGLE_PLACES_API_KEY" => Some("key".to_string()),
        "GOOGLE_PLACES_HOST" => Some(host.clone()),
        "AUTH_KEY" => auth_key.map(str::to_string),
        _ => None,
    })
    .unwrap();

    let history_store = Arc::new(history_store);
    let app = gen_router(gen_state(&config, history_store.clone()).await);

    MockApp {
        app,
        google_server,
        history_store,
    }
}

#[cfg(test)]
pub async fn read_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn health_check() {
        let mock_app = gen_mock_app().await;

        let response = mock_app
            .app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn auth_key_is_enforced() {
        let mock_app = gen_mock_app_with(Some("secret"), Default::default()).await;

        let response = mock_app
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/search-state")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(read_json(response).await["message"], "Unauthorized");

        let response = mock_app
            .app
            .oneshot(
                Request::builder()
                    .uri("/search-state")
                    .header("authorization", "secret")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
