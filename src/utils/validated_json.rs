use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use super::app_error::AppError;

/// JSON body extractor that also runs the payload's `validator` rules.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(format!("Invalid body: {}", e.body_text()).as_str()))?;

        data.validate()
            .map_err(|e| AppError::bad_request(format!("Invalid body: {}", e).as_str()))?;

        Ok(ValidatedJson(data))
    }
}
