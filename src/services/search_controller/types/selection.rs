use serde::Serialize;

use crate::types::place::Place;

/// The focused place. `place` is `None` exactly when no marker should render.
///
/// Every change bumps `revision`, so selecting the place that is already
/// selected is still observable as a new selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selection {
    pub place: Option<Place>,
    pub revision: u64,
    pub callout_requested: bool,
}

impl Selection {
    pub fn new(place: Option<Place>) -> Self {
        Selection {
            callout_requested: place.is_some(),
            place,
            revision: 0,
        }
    }

    pub fn select(&mut self, place: Place) {
        self.place = Some(place);
        self.callout_requested = true;
        self.revision += 1;
    }

    pub fn clear(&mut self) {
        self.place = None;
        self.callout_requested = false;
        self.revision += 1;
    }
}
