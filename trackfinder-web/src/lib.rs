pub mod api;
pub mod config;
pub mod pages;

use dioxus::prelude::*;
use pages::{Home, TrackPage, TrackQueryPage};
use std::collections::HashMap;
use tracing::warn;
use trackfinder_ui::i18n::{Intl, DEFAULT_LOCALE};
use trackfinder_ui::stores::TrackDetailsState;

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/tracks/:track_id")]
    TrackPage { track_id: String },
    #[route("/track-details?:..query")]
    TrackQueryPage { query: String },
}

fn load_messages() -> Intl {
    Intl::load(DEFAULT_LOCALE).unwrap_or_else(|e| {
        warn!("{}; showing message ids instead", e);
        Intl::new(DEFAULT_LOCALE, HashMap::new())
    })
}

/// Root component. Expects a `WebConfig` in context (see `main`).
#[component]
pub fn App() -> Element {
    use_context_provider(load_messages);
    let store = use_store(TrackDetailsState::default);
    use_context_provider(|| store);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
