use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

use crate::{
    services::{history_store::history_store::HistoryStore, maps_client::places_api::PlacesApi},
    types::{
        map_region::MapRegion,
        place::{LatLng, Place},
        suggestion::Suggestion,
    },
};

use super::types::{
    camera_command::CameraCommand, search_history::SearchHistory,
    search_snapshot::SearchSnapshot, selection::Selection, zoom_settings::ZoomSettings,
};

/// Queries of this many characters or fewer never reach the autocomplete API.
/// Counted in Unicode scalar values, so a lone emoji is one character, not two UTF-16 units.
pub const MIN_QUERY_CHARS: usize = 1;
/// Span of the viewport when focusing a single place.
pub const FOCUS_DELTA: f64 = 0.02;
pub const FOCUS_ANIMATION_MS: u64 = 1000;
pub const ZOOM_ANIMATION_MS: u64 = 200;

pub struct SearchControllerOptions {
    pub zoom: ZoomSettings,
    pub initial_region: MapRegion,
    pub home_place: Option<Place>,
}

struct SearchState {
    query: String,
    suggestions: Vec<Suggestion>,
    history: SearchHistory,
    selection: Selection,
    region: MapRegion,
    camera: Option<CameraCommand>,
    camera_revision: u64,
    // Tag of the latest autocomplete request; responses carrying an older tag are dropped.
    query_seq: u64,
    pending_query: Option<CancellationToken>,
    // Tag of the latest suggestion/history selection.
    selection_seq: u64,
}

impl SearchState {
    fn invalidate_pending_query(&mut self) -> u64 {
        self.query_seq += 1;
        if let Some(token) = self.pending_query.take() {
            token.cancel();
        }
        self.query_seq
    }

    fn animate_camera(&mut self, region: MapRegion, duration_ms: u64) {
        self.camera_revision += 1;
        self.camera = Some(CameraCommand {
            region,
            duration_ms,
            revision: self.camera_revision,
        });
    }

    fn focus(&mut self, location: LatLng) {
        match MapRegion::around(location, FOCUS_DELTA) {
            Ok(region) => self.animate_camera(region, FOCUS_ANIMATION_MS),
            Err(e) => error!("Cannot focus camera on {:?}: {}", location, e),
        }
    }
}

/// Owns the search screen state and turns user intents into API calls,
/// history updates and camera commands.
///
/// Every operation is fail-soft: collaborator errors are logged and the state
/// falls back to empty or unchanged, nothing is returned to the caller.
pub struct SearchController {
    places: Arc<dyn PlacesApi>,
    history_store: Arc<dyn HistoryStore>,
    zoom: ZoomSettings,
    state: Mutex<SearchState>,
}

impl SearchController {
    /// Builds the controller and loads the persisted history once.
    pub async fn new(
        places: Arc<dyn PlacesApi>,
        history_store: Arc<dyn HistoryStore>,
        options: SearchControllerOptions,
    ) -> Self {
        let history = match history_store.load().await {
            Ok(entries) => SearchHistory::from_entries(entries),
            Err(e) => {
                error!("Error loading search history: {}", e);
                SearchHistory::default()
            }
        };
        info!("Loaded {} search history entries", history.entries().len());

        SearchController {
            places,
            history_store,
            zoom: options.zoom,
            state: Mutex::new(SearchState {
                query: String::new(),
                suggestions: Vec::new(),
                history,
                selection: Selection::new(options.home_place),
                region: options.initial_region,
                camera: None,
                camera_revision: 0,
                query_seq: 0,
                pending_query: None,
                selection_seq: 0,
            }),
        }
    }

    pub async fn snapshot(&self) -> SearchSnapshot {
        let state = self.state.lock().await;

        SearchSnapshot {
            query: state.query.clone(),
            suggestions: state.suggestions.clone(),
            history: state.history.entries().to_vec(),
            selection: state.selection.clone(),
            region: state.region,
            camera: state.camera,
        }
    }

    pub async fn history_entry(&self, place_id: &str) -> Option<Place> {
        self.state.lock().await.history.find(place_id).cloned()
    }

    pub async fn on_query_changed(&self, text: String) {
        let (seq, token) = {
            let mut state = self.state.lock().await;
            state.query = text.clone();
            let seq = state.invalidate_pending_query();

            if text.chars().count() <= MIN_QUERY_CHARS {
                state.suggestions.clear();
                return;
            }

            let token = CancellationToken::new();
            state.pending_query = Some(token.clone());
            (seq, token)
        };

        let result = tokio::select! {
            _ = token.cancelled() => {
                debug!("Autocomplete for {:?} superseded before completion", text);
                return;
            }
            result = self.places.autocomplete(&text) => result,
        };

        let mut state = self.state.lock().await;
        if state.query_seq != seq {
            debug!("Dropping stale autocomplete response for {:?}", text);
            return;
        }
        state.pending_query = None;

        state.suggestions = match result {
            Ok(suggestions) => suggestions,
            Err(e) => {
                error!("Error fetching search results: {}", e);
                Vec::new()
            }
        };
    }

    pub async fn on_suggestion_selected(&self, suggestion: Suggestion) {
        let seq = {
            let mut state = self.state.lock().await;
            state.query = suggestion.description.clone();
            state.invalidate_pending_query();
            state.suggestions.clear();
            state.selection.clear();
            state.selection_seq += 1;
            state.selection_seq
        };

        let place = match self.places.place_details(&suggestion.place_id).await {
            Ok(place) => place,
            Err(e) => {
                error!(
                    "Error fetching place details for {}: {}",
                    suggestion.place_id, e
                );
                return;
            }
        };

        let mut state = self.state.lock().await;
        if state.selection_seq != seq {
            debug!(
                "Dropping details for {}, a newer selection was made",
                place.place_id
            );
            return;
        }

        state.selection.select(place.clone());
        state.focus(place.location);
        state.history.record(place);

        // Lock stays held so concurrent saves reach the store in mutation order.
        if let Err(e) = self.history_store.save(state.history.entries()).await {
            error!("Error saving search history: {}", e);
        }
    }

    pub async fn on_history_item_selected(&self, entry: Place) {
        let mut state = self.state.lock().await;
        state.selection_seq += 1;
        state.focus(entry.location);
        state.selection.select(entry);
    }

    pub async fn on_zoom_in(&self) {
        self.zoom_by(self.zoom.factor).await;
    }

    pub async fn on_zoom_out(&self) {
        self.zoom_by(1.0 / self.zoom.factor).await;
    }

    async fn zoom_by(&self, scale: f64) {
        let mut state = self.state.lock().await;
        let region = state
            .region
            .scaled(scale, self.zoom.min_delta, self.zoom.max_delta);
        debug!(
            "Zooming to deltas {} x {}",
            region.latitude_delta(),
            region.longitude_delta()
        );
        state.region = region;
        state.animate_camera(region, ZOOM_ANIMATION_MS);
    }

    /// Stores the region reported by the map, with deltas held inside the zoom bounds.
    pub async fn on_region_changed(&self, region: MapRegion) {
        debug!(
            "Map region reported at {},{}",
            region.latitude(),
            region.longitude()
        );
        self.state.lock().await.region =
            region.clamped(self.zoom.min_delta, self.zoom.max_delta);
    }
}
