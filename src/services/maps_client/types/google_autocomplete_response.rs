use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct GoogleAutocompleteResponsePrediction {
    pub place_id: String,
    pub description: String,
}

#[derive(Serialize, Deserialize)]
pub struct GoogleAutocompleteResponse {
    #[serde(default)]
    pub predictions: Vec<GoogleAutocompleteResponsePrediction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
