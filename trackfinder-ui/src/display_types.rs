//! Display types for UI components
//!
//! These mirror the catalog lookup payload closely enough to deserialize it
//! directly, but every field is optional: the catalog omits fields freely and
//! the views treat a missing value and an empty one the same way.

use serde::{Deserialize, Serialize};

/// A single track as returned by the catalog search/lookup API
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDetails {
    pub track_id: Option<u64>,
    pub artist_name: Option<String>,
    pub track_name: Option<String>,
    pub collection_name: Option<String>,
    pub track_price: Option<f64>,
    pub currency: Option<String>,
    pub primary_genre_name: Option<String>,
    pub short_description: Option<String>,
    #[serde(rename = "artworkUrl100")]
    pub artwork_url: Option<String>,
    pub preview_url: Option<String>,
    pub track_view_url: Option<String>,
    pub release_date: Option<String>,
    pub track_time_millis: Option<u64>,
    pub country: Option<String>,
}

impl TrackDetails {
    /// A record with no fields set at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn artist_name(&self) -> Option<&str> {
        non_blank(&self.artist_name)
    }

    pub fn track_name(&self) -> Option<&str> {
        non_blank(&self.track_name)
    }

    pub fn collection_name(&self) -> Option<&str> {
        non_blank(&self.collection_name)
    }

    pub fn primary_genre_name(&self) -> Option<&str> {
        non_blank(&self.primary_genre_name)
    }

    pub fn short_description(&self) -> Option<&str> {
        non_blank(&self.short_description)
    }

    /// Price followed directly by the currency code, e.g. `1.99USD`.
    ///
    /// Both parts must be set; a zero price counts as unset.
    pub fn price_label(&self) -> Option<String> {
        let price = self.track_price.filter(|p| *p != 0.0 && !p.is_nan())?;
        let currency = non_blank(&self.currency)?;
        Some(format!("{}{}", price, currency))
    }
}

/// Catalog response envelope
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub result_count: Option<u32>,
    #[serde(default)]
    pub results: Vec<TrackDetails>,
}

impl SearchResults {
    /// True only for an envelope with nothing in it. A response that reports
    /// zero results still counts as data.
    pub fn is_empty(&self) -> bool {
        self.result_count.is_none() && self.results.is_empty()
    }

    pub fn first(&self) -> Option<&TrackDetails> {
        self.results.first()
    }
}

/// Read-only view of everything the track details page renders from
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrackDetailsSnapshot {
    /// Last search/lookup response
    pub songs_data: Option<SearchResults>,
    /// Track picked from an earlier search, if any
    pub track_details: Option<TrackDetails>,
    /// Record resolved for the current track id
    pub fetched_tracks: Option<TrackDetails>,
    /// Error text from the last failed lookup
    pub songs_error: Option<String>,
}

impl TrackDetailsSnapshot {
    pub fn has_songs_data(&self) -> bool {
        self.songs_data.as_ref().is_some_and(|d| !d.is_empty())
    }

    pub fn has_track_details(&self) -> bool {
        self.track_details.as_ref().is_some_and(|d| !d.is_empty())
    }

    pub fn has_fetched_tracks(&self) -> bool {
        self.fetched_tracks.as_ref().is_some_and(|d| !d.is_empty())
    }

    /// Nothing to show and nothing in flight: the page has to ask for data
    pub fn needs_fetch(&self) -> bool {
        !self.has_songs_data() && !self.has_track_details() && !self.has_fetched_tracks()
    }

    pub fn songs_error(&self) -> Option<&str> {
        non_blank(&self.songs_error)
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
