use crate::types::place::Place;

pub const MAX_HISTORY_ENTRIES: usize = 15;

/// Most-recent-first list of places, unique by `place_id`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchHistory {
    entries: Vec<Place>,
}

impl SearchHistory {
    /// Builds a history from stored entries, dropping later duplicates and
    /// anything past the size limit.
    pub fn from_entries(stored: Vec<Place>) -> Self {
        let mut entries: Vec<Place> = Vec::with_capacity(MAX_HISTORY_ENTRIES);
        for place in stored {
            if entries.len() == MAX_HISTORY_ENTRIES {
                break;
            }
            if !entries.iter().any(|e| e.place_id == place.place_id) {
                entries.push(place);
            }
        }

        SearchHistory { entries }
    }

    /// Puts `place` at the front, removing any older entry with the same id.
    pub fn record(&mut self, place: Place) {
        self.entries.retain(|e| e.place_id != place.place_id);
        self.entries.insert(0, place);
        self.entries.truncate(MAX_HISTORY_ENTRIES);
    }

    pub fn find(&self, place_id: &str) -> Option<&Place> {
        self.entries.iter().find(|e| e.place_id == place_id)
    }

    pub fn entries(&self) -> &[Place] {
        &self.entries
    }
}
