use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::warn;
use urlencoding::encode;

use crate::types::{place::Place, suggestion::Suggestion};

use super::{
    places_api::PlacesApi,
    types::{
        google_autocomplete_response::GoogleAutocompleteResponse,
        google_place_details_response::GooglePlaceDetailsResponse,
        maps_service_error::MapsServiceError,
    },
};

#[derive(Clone, Debug)]
pub struct MapsServiceConfig {
    pub api_key: String,
    pub host: String,
}

#[derive(Clone)]
pub struct MapsService {
    config: MapsServiceConfig,
    client: reqwest::Client,
}

impl MapsService {
    pub fn new(config: MapsServiceConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, MapsServiceError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                // the url carries the API key
                MapsServiceError::Network(format!("Failed to send request: {}", e.without_url()))
            })?;

        resp.json::<T>().await.map_err(|e| {
            MapsServiceError::Malformed(format!(
                "Failed to get response body: {}",
                e.without_url()
            ))
        })
    }
}

// ZERO_RESULTS is a normal answer for a narrow query; anything else besides OK is worth a log line.
fn log_unexpected_status(endpoint: &str, status: Option<&str>, message: Option<&str>) {
    match status {
        None | Some("OK") | Some("ZERO_RESULTS") => {}
        Some(status) => warn!(
            "Places {} returned status {}: {}",
            endpoint,
            status,
            message.unwrap_or("no error message")
        ),
    }
}

#[async_trait]
impl PlacesApi for MapsService {
    async fn autocomplete(&self, input: &str) -> Result<Vec<Suggestion>, MapsServiceError> {
        let url = format!(
            "{}/maps/api/place/autocomplete/json?input={}&key={}",
            self.config.host,
            encode(input),
            self.config.api_key
        );

        let body = self.get_json::<GoogleAutocompleteResponse>(&url).await?;
        log_unexpected_status(
            "autocomplete",
            body.status.as_deref(),
            body.error_message.as_deref(),
        );

        Ok(body
            .predictions
            .into_iter()
            .map(|p| Suggestion {
                place_id: p.place_id,
                description: p.description,
            })
            .collect())
    }

    async fn place_details(&self, place_id: &str) -> Result<Place, MapsServiceError> {
        let url = format!(
            "{}/maps/api/place/details/json?place_id={}&key={}",
            self.config.host,
            encode(place_id),
            self.config.api_key
        );

        let body = self.get_json::<GooglePlaceDetailsResponse>(&url).await?;
        log_unexpected_status(
            "details",
            body.status.as_deref(),
            body.error_message.as_deref(),
        );

        body.result
            .map(Place::from)
            .ok_or(MapsServiceError::EmptyResult)
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;
    use crate::services::maps_client::types::{
        google_autocomplete_response::GoogleAutocompleteResponsePrediction,
        google_place_details_response::{
            GoogleGeometry, GoogleLatLng, GooglePlaceDetailsResult,
        },
    };

    fn service_for(server: &mockito::Server) -> MapsService {
        MapsService::new(MapsServiceConfig {
            api_key: "key".to_string(),
            host: server.url(),
        })
    }

    #[tokio::test]
    async fn autocomplete_maps_predictions() {
        let mut server = mockito::Server::new_async().await;

        let mock_response = GoogleAutocompleteResponse {
            predictions: vec![GoogleAutocompleteResponsePrediction {
                place_id: "p1".to_string(),
                description: "Hyderabad".to_string(),
            }],
            status: Some("OK".to_string()),
            error_message: None,
        };

        let mock = server
            .mock("GET", "/maps/api/place/autocomplete/json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("input".to_string(), "Hyder abad".to_string()),
                Matcher::UrlEncoded("key".to_string(), "key".to_string()),
            ]))
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_response).unwrap())
            .create_async()
            .await;

        let suggestions = service_for(&server)
            .autocomplete("Hyder abad")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(
            suggestions,
            vec![Suggestion {
                place_id: "p1".to_string(),
                description: "Hyderabad".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn autocomplete_without_predictions_is_empty() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/maps/api/place/autocomplete/json")
            .match_query(Matcher::Regex(".*".to_string()))
            .with_body(r#"{"status":"REQUEST_DENIED","error_message":"bad key"}"#)
            .create_async()
            .await;

        let suggestions = service_for(&server).autocomplete("Hyder").await.unwrap();

        assert!(suggestions.is_empty());
    }

    #[tokio::test]
    async fn autocomplete_server_error_is_network_failure() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/maps/api/place/autocomplete/json")
            .match_query(Matcher::Regex(".*".to_string()))
            .with_status(500)
            .create_async()
            .await;

        let result = service_for(&server).autocomplete("Hyder").await;

        assert!(matches!(result, Err(MapsServiceError::Network(_))));
    }

    #[tokio::test]
    async fn errors_do_not_expose_api_key() {
        let mut server = mockito::Server::new_async().await;
        let service = MapsService::new(MapsServiceConfig {
            api_key: "SECRET123".to_string(),
            host: server.url(),
        });

        let _failing = server
            .mock("GET", "/maps/api/place/autocomplete/json")
            .match_query(Matcher::Any)
            .with_status(500)
            .create_async()
            .await;
        let _garbage = server
            .mock("GET", "/maps/api/place/details/json")
            .match_query(Matcher::Any)
            .with_body("<html>nope</html>")
            .create_async()
            .await;

        let network = service.autocomplete("Hyder").await.unwrap_err();
        assert!(matches!(network, MapsServiceError::Network(_)));
        assert!(!network.to_string().contains("SECRET123"));

        let malformed = service.place_details("p1").await.unwrap_err();
        assert!(matches!(malformed, MapsServiceError::Malformed(_)));
        assert!(!malformed.to_string().contains("SECRET123"));
    }

    #[tokio::test]
    async fn autocomplete_garbage_body_is_malformed() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/maps/api/place/autocomplete/json")
            .match_query(Matcher::Regex(".*".to_string()))
            .with_body("<html>nope</html>")
            .create_async()
            .await;

        let result = service_for(&server).autocomplete("Hyder").await;

        assert!(matches!(result, Err(MapsServiceError::Malformed(_))));
    }

    #[tokio::test]
    async fn place_details_builds_place() {
        let mut server = mockito::Server::new_async().await;

        let mock_response = GooglePlaceDetailsResponse {
            result: Some(GooglePlaceDetailsResult {
                place_id: "p1".to_string(),
                name: "Hyderabad".to_string(),
                formatted_address: "Hyderabad, India".to_string(),
                geometry: GoogleGeometry {
                    location: GoogleLatLng {
                        lat: 17.4,
                        lng: 78.5,
                    },
                },
            }),
            status: Some("OK".to_string()),
            error_message: None,
        };

        let mock = server
            .mock("GET", "/maps/api/place/details/json")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("place_id".to_string(), "p1".to_string()),
                Matcher::UrlEncoded("key".to_string(), "key".to_string()),
            ]))
            .with_body(serde_json::to_string(&mock_response).unwrap())
            .create_async()
            .await;

        let place = service_for(&server).place_details("p1").await.unwrap();

        mock.assert_async().await;
        assert_eq!(place.place_id, "p1");
        assert_eq!(place.name, "Hyderabad");
        assert_eq!(place.formatted_address, "Hyderabad, India");
        assert_eq!(place.location.lat, 17.4);
        assert_eq!(place.location.lng, 78.5);
    }

    #[tokio::test]
    async fn place_details_without_result_is_empty_result() {
        let mut server = mockito::Server::new_async().await;

        let _mock = server
            .mock("GET", "/maps/api/place/details/json")
            .match_query(Matcher::Regex(".*".to_string()))
            .with_body(r#"{"status":"NOT_FOUND"}"#)
            .create_async()
            .await;

        let result = service_for(&server).place_details("p1").await;

        assert!(matches!(result, Err(MapsServiceError::EmptyResult)));
    }
}
