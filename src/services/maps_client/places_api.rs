use async_trait::async_trait;

use crate::types::{place::Place, suggestion::Suggestion};

use super::types::maps_service_error::MapsServiceError;

/// Remote places lookups used by the search controller.
#[async_trait]
pub trait PlacesApi: Send + Sync {
    async fn autocomplete(&self, input: &str) -> Result<Vec<Suggestion>, MapsServiceError>;

    async fn place_details(&self, place_id: &str) -> Result<Place, MapsServiceError>;
}
