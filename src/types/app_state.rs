use std::sync::Arc;

use crate::services::search_controller::search_controller::SearchController;

#[derive(Clone)]
pub struct AppState {
    pub search_controller: Arc<SearchController>,
    pub auth_key: Option<String>,
}
