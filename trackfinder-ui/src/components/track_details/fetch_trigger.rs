//! When the details page asks for data

use crate::display_types::{SearchResults, TrackDetails, TrackDetailsSnapshot};

/// Inputs the fetch decision depends on. The decision is re-evaluated only
/// when one of these changes.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchDeps {
    pub track_id: String,
    pub songs_data: Option<SearchResults>,
    pub track_details: Option<TrackDetails>,
    pub fetched_tracks: Option<TrackDetails>,
}

impl FetchDeps {
    pub fn new(track_id: &str, snapshot: &TrackDetailsSnapshot) -> Self {
        Self {
            track_id: track_id.to_string(),
            songs_data: snapshot.songs_data.clone(),
            track_details: snapshot.track_details.clone(),
            fetched_tracks: snapshot.fetched_tracks.clone(),
        }
    }

    fn all_empty(&self) -> bool {
        self.songs_data.as_ref().is_none_or(SearchResults::is_empty)
            && self.track_details.as_ref().is_none_or(TrackDetails::is_empty)
            && self.fetched_tracks.as_ref().is_none_or(TrackDetails::is_empty)
    }
}

/// Per-page fetch state: the last deps seen and the loading flag.
///
/// `loading` only ever goes from false to true. A failed lookup leaves it set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FetchTrigger {
    last: Option<FetchDeps>,
    loading: bool,
}

impl FetchTrigger {
    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Feed the current deps. Returns the track id to request when the deps
    /// changed since the last call and there is no data at all.
    pub fn observe(&mut self, deps: FetchDeps) -> Option<String> {
        if self.last.as_ref() == Some(&deps) {
            return None;
        }
        let request = deps.all_empty().then(|| deps.track_id.clone());
        if request.is_some() {
            self.loading = true;
        }
        self.last = Some(deps);
        request
    }
}
