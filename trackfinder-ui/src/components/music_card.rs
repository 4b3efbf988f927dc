//! Music preview card - artwork, title and an audio preview for one track

use crate::components::utils::{format_duration, format_release_date};
use crate::display_types::TrackDetails;
use crate::i18n::{keys, Intl};
use crate::theme::colors;
use crate::theme::fonts::{size, style};
use dioxus::prelude::*;

#[component]
pub fn MusicCard(track: TrackDetails, intl: Intl) -> Element {
    let title_style = style::subheading();
    let meta_style = style::sub_text();
    let caption_style = size::xsmall();
    let accent = colors::PRIMARY;
    let secondary = colors::SECONDARY_TEXT;

    let title = track.track_name().unwrap_or_default().to_string();
    let artist = track.artist_name().unwrap_or_default().to_string();
    let collection = track.collection_name().map(str::to_string);
    let duration = track.track_time_millis.map(format_duration);
    let released = track
        .release_date
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(|d| format_release_date(d).to_string());
    let artwork = track.artwork_url.clone().filter(|u| !u.is_empty());
    let preview = track.preview_url.clone().filter(|u| !u.is_empty());
    let store_url = track.track_view_url.clone().filter(|u| !u.is_empty());

    rsx! {
        div {
            class: "flex gap-4 p-4 rounded-[10px] border-[3px] shadow-sm",
            style: "border-color: {accent};",
            "data-testid": "music-card",
            if let Some(src) = artwork {
                img {
                    class: "w-24 h-24 rounded object-cover flex-shrink-0",
                    src: "{src}",
                    alt: "{title}",
                }
            }
            div { class: "flex flex-col gap-1 min-w-0",
                h2 { class: "m-0 truncate", style: "{title_style}", "{title}" }
                p {
                    class: "m-0",
                    style: "{meta_style} color: {secondary};",
                    "{artist}"
                }
                if let Some(collection) = collection {
                    p { class: "m-0 italic", style: "{meta_style}", "{collection}" }
                }
                div { class: "flex gap-4", style: "{caption_style}",
                    if let Some(duration) = duration {
                        span {
                            {intl.format_message(keys::TRACK_DURATION)}
                            ": {duration}"
                        }
                    }
                    if let Some(released) = released {
                        span {
                            {intl.format_message(keys::TRACK_RELEASE_DATE)}
                            ": {released}"
                        }
                    }
                }
                if let Some(src) = preview {
                    audio {
                        class: "mt-2 w-full",
                        controls: true,
                        preload: "none",
                        src: "{src}",
                    }
                } else {
                    p { class: "mt-2 text-gray-500", style: "{caption_style}",
                        {intl.format_message(keys::TRACK_PREVIEW_UNAVAILABLE)}
                    }
                }
                if let Some(href) = store_url {
                    a {
                        class: "mt-1 underline",
                        href: "{href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        {intl.format_message(keys::TRACK_VIEW_IN_STORE)}
                    }
                }
            }
        }
    }
}
