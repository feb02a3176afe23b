use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::{types::app_state::AppState, utils::app_error::AppError};

fn is_authorized(expected: Option<&str>, headers: &HeaderMap) -> bool {
    match expected {
        None => true,
        Some(key) => headers
            .get("authorization")
            .is_some_and(|header| header == key),
    }
}

pub async fn auth_middleware(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if !is_authorized(state.auth_key.as_deref(), &headers) {
        warn!("Rejected unauthorized request to {}", request.uri().path());
        return Err(AppError::new(StatusCode::UNAUTHORIZED, "Unauthorized"));
    }

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn no_key_configured_allows_everything() {
        assert!(is_authorized(None, &HeaderMap::new()));
    }

    #[test]
    fn configured_key_must_match_header() {
        let mut headers = HeaderMap::new();
        assert!(!is_authorized(Some("secret"), &headers));

        headers.insert("authorization", HeaderValue::from_static("wrong"));
        assert!(!is_authorized(Some("secret"), &headers));

        headers.insert("authorization", HeaderValue::from_static("secret"));
        assert!(is_authorized(Some("secret"), &headers));
    }
}
