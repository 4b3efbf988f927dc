//! Where the track id comes from
//!
//! Hosts route to the details page either with the id in a path segment or in
//! the query string. Each host picks one `TrackIdSource` and hands the page
//! the resolved id.

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackIdError {
    #[error("Malformed query string: {0}")]
    Query(#[from] serde_urlencoded::de::Error),
}

/// Resolves the track id for the current route
pub trait TrackIdSource {
    fn track_id(&self) -> Result<Option<String>, TrackIdError>;
}

/// Track id taken from a path segment (`/tracks/:track_id`)
#[derive(Clone, Debug, PartialEq)]
pub struct PathTrackId(pub String);

impl TrackIdSource for PathTrackId {
    fn track_id(&self) -> Result<Option<String>, TrackIdError> {
        let id = self.0.trim();
        Ok((!id.is_empty()).then(|| id.to_string()))
    }
}

/// Track id taken from a `trackId` query parameter
#[derive(Clone, Debug, PartialEq)]
pub struct QueryTrackId(pub String);

#[derive(Deserialize)]
struct TrackQuery {
    #[serde(rename = "trackId")]
    track_id: Option<String>,
}

impl TrackIdSource for QueryTrackId {
    fn track_id(&self) -> Result<Option<String>, TrackIdError> {
        let query = self.0.trim_start_matches('?');
        let parsed: TrackQuery = serde_urlencoded::from_str(query)?;
        Ok(parsed
            .track_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty()))
    }
}
