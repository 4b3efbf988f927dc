use crate::Route;
use dioxus::prelude::*;
use trackfinder_ui::i18n::{keys, Intl};
use trackfinder_ui::theme::fonts::style;
use trackfinder_ui::PageContainer;

#[component]
pub fn Home() -> Element {
    let intl: Intl = use_context();
    let mut track_id = use_signal(String::new);
    let heading_style = style::heading();
    let title = intl.format_message(keys::WEBSITE_TAB_TITLE);

    rsx! {
        document::Title { "{title}" }
        PageContainer {
            h1 { class: "mb-4", style: "{heading_style}", {intl.format_message(keys::HOME_HEADING)} }
            form {
                class: "flex gap-2",
                onsubmit: move |evt| {
                    evt.prevent_default();
                    let id = track_id.read().trim().to_string();
                    if !id.is_empty() {
                        navigator().push(Route::TrackPage { track_id: id });
                    }
                },
                input {
                    class: "flex-1 px-3 py-2 rounded border border-gray-400",
                    r#type: "text",
                    placeholder: intl.format_message(keys::HOME_TRACK_ID_PLACEHOLDER),
                    value: "{track_id}",
                    oninput: move |evt| track_id.set(evt.value()),
                }
                button {
                    class: "px-4 py-2 rounded bg-black text-white",
                    r#type: "submit",
                    {intl.format_message(keys::HOME_SUBMIT)}
                }
            }
        }
    }
}
