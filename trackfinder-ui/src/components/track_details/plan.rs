//! Render decision for the track details page
//!
//! Everything the view shows is decided here from the snapshot and the
//! loading flag, so the rules can be checked without rendering.

use crate::display_types::{TrackDetails, TrackDetailsSnapshot};
use crate::i18n::{keys, Intl};

/// Document title and description meta
#[derive(Clone, Debug, PartialEq)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
}

/// One labeled value in the left column
#[derive(Clone, Debug, PartialEq)]
pub struct DetailField {
    /// Message key for the label
    pub label_key: &'static str,
    pub value: String,
}

/// What the detail block contains when it is shown
#[derive(Clone, Debug, PartialEq)]
pub struct DetailBlock {
    /// Skeleton shimmer over the content
    pub busy: bool,
    /// `Some` whenever a fetched record exists, even without an artist name
    pub artist_heading: Option<String>,
    pub fields: Vec<DetailField>,
    /// Whole record handed to the preview card
    pub card: TrackDetails,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackDetailsPlan {
    /// `None` hides the detail block and its page metadata
    pub detail: Option<DetailBlock>,
    /// Show the "unavailable" message. Independent of `detail`.
    pub show_unavailable: bool,
}

impl TrackDetailsPlan {
    pub fn build(snapshot: &TrackDetailsSnapshot, loading: bool) -> Self {
        let has_fetched = snapshot.has_fetched_tracks();
        let detail = (has_fetched || loading).then(|| {
            let fetched = snapshot.fetched_tracks.as_ref();
            let card = fetched.cloned().unwrap_or_default();
            DetailBlock {
                busy: loading && !has_fetched,
                artist_heading: fetched
                    .map(|t| t.artist_name().unwrap_or_default().to_string()),
                fields: detail_fields(&card),
                card,
            }
        });

        let plan = Self {
            detail,
            show_unavailable: snapshot.songs_error().is_some(),
        };
        tracing::debug!(
            shown = plan.detail.is_some(),
            unavailable = plan.show_unavailable,
            loading,
            "Track details plan"
        );
        plan
    }

    /// Title and description for the document head, present with the block
    pub fn page_meta(&self, intl: &Intl) -> Option<PageMeta> {
        let block = self.detail.as_ref()?;
        let fetched = (!block.card.is_empty()).then_some(&block.card);
        Some(PageMeta {
            title: fetched
                .and_then(TrackDetails::track_name)
                .map(str::to_string)
                .unwrap_or_else(|| intl.format_message(keys::WEBSITE_TAB_TITLE)),
            description: fetched
                .and_then(TrackDetails::short_description)
                .map(str::to_string)
                .unwrap_or_else(|| intl.format_message(keys::WEBSITE_META)),
        })
    }
}

fn detail_fields(track: &TrackDetails) -> Vec<DetailField> {
    let candidates = [
        (keys::TRACK_COLLECTION, track.collection_name().map(str::to_string)),
        (keys::TRACK_NAME, track.track_name().map(str::to_string)),
        (keys::TRACK_PRICE, track.price_label()),
        (keys::TRACK_GENRE, track.primary_genre_name().map(str::to_string)),
    ];
    candidates
        .into_iter()
        .filter_map(|(label_key, value)| value.map(|value| DetailField { label_key, value }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn full_track() -> TrackDetails {
        TrackDetails {
            track_name: Some("X".into()),
            collection_name: Some("Y".into()),
            track_price: Some(1.99),
            currency: Some("USD".into()),
            primary_genre_name: Some("Pop".into()),
            artist_name: Some("Z".into()),
            ..Default::default()
        }
    }

    fn intl() -> Intl {
        Intl::new(
            "en",
            HashMap::from([
                ("website_tab_title".to_string(), "Track Finder".to_string()),
                ("website_meta".to_string(), "Find tracks".to_string()),
            ]),
        )
    }

    #[test]
    fn test_full_record() {
        let snapshot = TrackDetailsSnapshot {
            fetched_tracks: Some(full_track()),
            ..Default::default()
        };
        let plan = TrackDetailsPlan::build(&snapshot, false);
        let block = plan.detail.unwrap();

        assert_eq!(block.artist_heading.as_deref(), Some("Z"));
        let values: Vec<_> = block.fields.iter().map(|f| f.value.as_str()).collect();
        assert_eq!(values, vec!["Y", "X", "1.99USD", "Pop"]);
        let labels: Vec<_> = block.fields.iter().map(|f| f.label_key).collect();
        assert_eq!(
            labels,
            vec!["track_collection", "track_name", "track_price", "track_genre"]
        );
        assert_eq!(block.card, full_track());
        assert!(!block.busy);
        assert!(!plan.show_unavailable);
    }

    #[test]
    fn test_empty_and_idle_hides_block() {
        let snapshot = TrackDetailsSnapshot {
            fetched_tracks: Some(TrackDetails::default()),
            ..Default::default()
        };
        let plan = TrackDetailsPlan::build(&snapshot, false);
        assert_eq!(plan.detail, None);
        assert_eq!(plan.page_meta(&intl()), None);
        assert!(!plan.show_unavailable);
    }

    #[test]
    fn test_loading_shows_busy_block_with_fallback_meta() {
        let plan = TrackDetailsPlan::build(&TrackDetailsSnapshot::default(), true);
        let block = plan.detail.as_ref().unwrap();
        assert!(block.busy);
        assert!(block.fields.is_empty());
        assert_eq!(block.artist_heading, None);

        assert_eq!(
            plan.page_meta(&intl()),
            Some(PageMeta {
                title: "Track Finder".into(),
                description: "Find tracks".into(),
            })
        );
    }

    #[test]
    fn test_meta_from_record() {
        let mut track = full_track();
        track.short_description = Some("A song".into());
        let snapshot = TrackDetailsSnapshot {
            fetched_tracks: Some(track),
            ..Default::default()
        };
        let meta = TrackDetailsPlan::build(&snapshot, false)
            .page_meta(&intl())
            .unwrap();
        assert_eq!(meta.title, "X");
        assert_eq!(meta.description, "A song");
    }

    #[test]
    fn test_fields_gate_individually() {
        let snapshot = TrackDetailsSnapshot {
            fetched_tracks: Some(TrackDetails {
                track_price: Some(0.99),
                primary_genre_name: Some("Jazz".into()),
                collection_name: Some(String::new()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let block = TrackDetailsPlan::build(&snapshot, false).detail.unwrap();
        assert_eq!(
            block.fields,
            vec![DetailField {
                label_key: "track_genre",
                value: "Jazz".into(),
            }]
        );
        assert_eq!(block.artist_heading.as_deref(), Some(""));
    }

    #[test]
    fn test_error_shown_regardless_of_block() {
        let failed = TrackDetailsSnapshot {
            songs_error: Some("Not found".into()),
            ..Default::default()
        };
        let idle = TrackDetailsPlan::build(&failed, false);
        assert!(idle.show_unavailable);
        assert_eq!(idle.detail, None);

        let stuck = TrackDetailsPlan::build(&failed, true);
        assert!(stuck.show_unavailable);
        assert!(stuck.detail.unwrap().busy);

        let both = TrackDetailsSnapshot {
            fetched_tracks: Some(full_track()),
            songs_error: Some("Not found".into()),
            ..Default::default()
        };
        let plan = TrackDetailsPlan::build(&both, false);
        assert!(plan.show_unavailable);
        assert!(plan.detail.is_some());
    }

    #[test]
    fn test_data_arrival_clears_busy() {
        let snapshot = TrackDetailsSnapshot {
            fetched_tracks: Some(full_track()),
            ..Default::default()
        };
        let block = TrackDetailsPlan::build(&snapshot, true).detail.unwrap();
        assert!(!block.busy);
    }
}
