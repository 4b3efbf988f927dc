//! Utility functions for UI components

/// Format duration from milliseconds to M:SS
pub fn format_duration(duration_ms: u64) -> String {
    let total_seconds = duration_ms / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{}:{:02}", minutes, seconds)
}

/// Calendar date part of a catalog timestamp (`2000-11-30T12:00:00Z` -> `2000-11-30`)
pub fn format_release_date(release_date: &str) -> &str {
    release_date
        .split_once('T')
        .map(|(date, _)| date)
        .unwrap_or(release_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(320_357), "5:20");
        assert_eq!(format_duration(61_000), "1:01");
    }

    #[test]
    fn test_format_release_date() {
        assert_eq!(format_release_date("2000-11-30T12:00:00Z"), "2000-11-30");
        assert_eq!(format_release_date("2000"), "2000");
    }
}
