//! Track details state store

use crate::display_types::{SearchResults, TrackDetails, TrackDetailsSnapshot};
use dioxus::prelude::*;

/// Lookup results for the track details page
#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct TrackDetailsState {
    /// Track id the data below belongs to
    pub track_id: Option<String>,
    /// Last lookup response
    pub songs_data: Option<SearchResults>,
    /// Track picked from a search result list
    pub track_details: Option<TrackDetails>,
    /// First result of the lookup for `track_id`
    pub fetched_tracks: Option<TrackDetails>,
    /// Error message if the lookup failed
    pub songs_error: Option<String>,
}

impl TrackDetailsState {
    /// Snapshot for the page showing `track_id`.
    ///
    /// Data that belongs to another track is left out, so navigating to a new
    /// id starts from an empty page.
    pub fn snapshot_for(&self, track_id: &str) -> TrackDetailsSnapshot {
        if self.track_id.as_deref() != Some(track_id) {
            return TrackDetailsSnapshot::default();
        }
        TrackDetailsSnapshot {
            songs_data: self.songs_data.clone(),
            track_details: self.track_details.clone(),
            fetched_tracks: self.fetched_tracks.clone(),
            songs_error: self.songs_error.clone(),
        }
    }

    /// Forget previous data and remember which id is being looked up
    pub fn begin_lookup(&mut self, track_id: &str) {
        *self = Self {
            track_id: Some(track_id.to_string()),
            ..Default::default()
        };
    }

    /// Store a lookup response for `track_id`
    pub fn lookup_succeeded(&mut self, track_id: &str, data: SearchResults) {
        if self.track_id.as_deref() != Some(track_id) {
            return;
        }
        self.fetched_tracks = data.first().cloned();
        self.songs_data = Some(data);
        self.songs_error = None;
    }

    /// Record a failed lookup for `track_id`
    pub fn lookup_failed(&mut self, track_id: &str, error: String) {
        if self.track_id.as_deref() != Some(track_id) {
            return;
        }
        self.songs_error = Some(error);
    }
}
