//! Track details page component - owns the loading flag and the fetch effect

use super::fetch_trigger::{FetchDeps, FetchTrigger};
use super::plan::TrackDetailsPlan;
use super::view::TrackDetailsView;
use crate::display_types::TrackDetailsSnapshot;
use crate::i18n::Intl;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use tracing::info;

/// Details page for one track.
///
/// The host passes the current snapshot of its store and re-renders the page
/// when the store changes. When the track id or the data props change and
/// there is no data at all, `on_request_details` is called with the track id
/// and the page shows its loading state.
#[component]
pub fn TrackDetailsPage(
    track_id: String,
    snapshot: TrackDetailsSnapshot,
    intl: Intl,
    on_request_details: EventHandler<String>,
    on_go_home: EventHandler<()>,
) -> Element {
    // Last deps live outside the signal so re-observing them never re-renders
    let trigger = use_hook(|| Rc::new(RefCell::new(FetchTrigger::default())));
    let mut loading = use_signal(|| false);

    let deps = FetchDeps::new(&track_id, &snapshot);
    use_effect(use_reactive(&deps, move |deps| {
        let (request, now_loading) = {
            let mut trigger = trigger.borrow_mut();
            (trigger.observe(deps), trigger.loading())
        };
        if now_loading && !*loading.peek() {
            loading.set(true);
        }
        if let Some(track_id) = request {
            info!("Requesting details for track {}", track_id);
            on_request_details.call(track_id);
        }
    }));

    let plan = TrackDetailsPlan::build(&snapshot, loading());

    rsx! {
        TrackDetailsView { plan, intl, on_go_home }
    }
}
