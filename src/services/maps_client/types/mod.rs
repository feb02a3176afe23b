pub mod google_autocomplete_response;
pub mod google_place_details_response;
pub mod maps_service_error;
