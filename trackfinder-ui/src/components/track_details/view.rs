//! Track details view component

use super::plan::{PageMeta, TrackDetailsPlan};
use crate::components::helpers::{HomeLink, PageContainer, Skeleton, Text};
use crate::components::music_card::MusicCard;
use crate::i18n::{keys, Intl};
use crate::theme::colors;
use crate::theme::fonts::{size, weights};
use dioxus::prelude::*;

/// Renders a `TrackDetailsPlan`. Holds no state of its own.
#[component]
pub fn TrackDetailsView(
    plan: TrackDetailsPlan,
    intl: Intl,
    on_go_home: EventHandler<()>,
) -> Element {
    let meta = plan.page_meta(&intl);
    let heading_style = size::big() + weights::bolder();
    let accent = colors::PRIMARY;

    rsx! {
        PageContainer {
            if let Some(block) = plan.detail {
                if let Some(meta) = meta {
                    PageHead { meta }
                }
                Skeleton { loading: block.busy,
                    HomeLink {
                        text: intl.format_message(keys::GO_HOME_BUTTON_TEXT),
                        on_click: on_go_home,
                    }
                    if let Some(artist) = block.artist_heading {
                        h1 {
                            class: "my-2",
                            style: "{heading_style} color: {accent};",
                            "data-testid": "artist-heading",
                            "{artist}"
                        }
                    }
                    div { class: "flex flex-row flex-wrap lg:flex-nowrap gap-4",
                        div {
                            class: "flex flex-col justify-center p-4 w-full lg:w-[30%] rounded-[10px] border-[3px] shadow-sm",
                            style: "border-color: {accent};",
                            "data-testid": "track-fields",
                            for field in block.fields {
                                DetailRow {
                                    key: "{field.label_key}",
                                    label: intl.format_message(field.label_key),
                                    value: field.value,
                                }
                            }
                        }
                        div { class: "w-full lg:w-[70%]",
                            MusicCard { track: block.card, intl: intl.clone() }
                        }
                    }
                }
            }
            if plan.show_unavailable {
                div { "data-testid": "track-unavailable",
                    Text { text: intl.format_message(keys::TRACK_NAME_UNAVAILABLE) }
                }
            }
        }
    }
}

/// Bold label followed by its value
#[component]
pub fn DetailRow(label: String, value: String) -> Element {
    rsx! {
        p { class: "mt-3 font-bold font-sans", "{label}:  " }
        " "
        Text { text: value }
    }
}

/// Document title and description meta for the page
#[component]
pub fn PageHead(meta: PageMeta) -> Element {
    rsx! {
        document::Title { "{meta.title}" }
        document::Meta { name: "description", content: "{meta.description}" }
    }
}
