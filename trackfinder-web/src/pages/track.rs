use crate::api;
use crate::config::WebConfig;
use crate::Route;
use dioxus::prelude::*;
use tracing::warn;
use trackfinder_ui::i18n::{keys, Intl};
use trackfinder_ui::stores::TrackDetailsState;
use trackfinder_ui::{
    PageContainer, PathTrackId, QueryTrackId, Text, TrackDetailsPage, TrackIdSource,
};

/// `/tracks/:track_id`
#[component]
pub fn TrackPage(track_id: String) -> Element {
    rsx! {
        TrackScreen { track_id: resolve_track_id(&PathTrackId(track_id)) }
    }
}

/// `/track-details?trackId=...`
#[component]
pub fn TrackQueryPage(query: String) -> Element {
    rsx! {
        TrackScreen { track_id: resolve_track_id(&QueryTrackId(query)) }
    }
}

fn resolve_track_id(source: &impl TrackIdSource) -> Option<String> {
    match source.track_id() {
        Ok(id) => id,
        Err(e) => {
            warn!("Could not read track id from route: {}", e);
            None
        }
    }
}

#[component]
fn TrackScreen(track_id: Option<String>) -> Element {
    let intl: Intl = use_context();

    match track_id {
        Some(track_id) => rsx! {
            TrackController { track_id }
        },
        None => rsx! {
            PageContainer {
                Text { text: intl.format_message(keys::TRACK_NAME_UNAVAILABLE) }
            }
        },
    }
}

/// Connects the details page to the shared store and the lookup client
#[component]
fn TrackController(track_id: String) -> Element {
    let intl: Intl = use_context();
    let config: WebConfig = use_context();
    let mut store: Store<TrackDetailsState> = use_context();

    let snapshot = store.read().snapshot_for(&track_id);

    rsx! {
        TrackDetailsPage {
            track_id,
            snapshot,
            intl,
            on_request_details: move |id: String| {
                store.write().begin_lookup(&id);
                let config = config.clone();
                spawn(async move {
                    match api::lookup_track(&config, &id).await {
                        Ok(data) => store.write().lookup_succeeded(&id, data),
                        Err(e) => {
                            warn!("Lookup for track {} failed: {}", id, e);
                            store.write().lookup_failed(&id, e.to_string());
                        }
                    }
                });
            },
            on_go_home: move |_| {
                navigator().push(Route::Home {});
            },
        }
    }
}
