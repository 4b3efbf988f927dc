//! Catalog lookup client

use crate::config::WebConfig;
use thiserror::Error;
use tracing::{debug, info};
use trackfinder_ui::display_types::SearchResults;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Catalog returned HTTP {0}")]
    Status(u16),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Track not found: {0}")]
    NotFound(String),
}

/// Look up one track by catalog id
pub async fn lookup_track(config: &WebConfig, track_id: &str) -> Result<SearchResults, ApiError> {
    let url = config.lookup_url(track_id);
    info!("Looking up track {}", track_id);
    debug!("Catalog request: {}", url);

    let resp = reqwest::get(url)
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.status().is_success() {
        return Err(ApiError::Status(resp.status().as_u16()));
    }

    let data: SearchResults = resp
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))?;
    ensure_results(track_id, data)
}

/// A lookup response without results means the id is unknown
pub fn ensure_results(track_id: &str, data: SearchResults) -> Result<SearchResults, ApiError> {
    if data.results.is_empty() {
        return Err(ApiError::NotFound(track_id.to_string()));
    }
    debug!("Lookup for {} returned {} result(s)", track_id, data.results.len());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> SearchResults {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_ensure_results_keeps_response() {
        let data = decode(
            r#"{"resultCount":1,"results":[{"trackId":7,"trackName":"Seven","currency":"USD","trackPrice":1.29}]}"#,
        );
        let data = ensure_results("7", data).unwrap();
        let track = data.first().unwrap();
        assert_eq!(track.track_name(), Some("Seven"));
        assert_eq!(track.price_label().as_deref(), Some("1.29USD"));
    }

    #[test]
    fn test_ensure_results_without_results() {
        let data = decode(r#"{"resultCount":0,"results":[]}"#);
        let err = ensure_results("404", data).unwrap_err();
        assert!(matches!(err, ApiError::NotFound(ref id) if id == "404"));
        assert_eq!(err.to_string(), "Track not found: 404");
    }
}
