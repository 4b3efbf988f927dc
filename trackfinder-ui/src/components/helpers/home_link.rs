//! Home link component

use dioxus::prelude::*;

/// Link back to the landing page. Plain clicks go through `on_click` so the
/// host router can navigate without a reload.
#[component]
pub fn HomeLink(
    /// Text to display
    text: String,
    #[props(default = "/".to_string())] href: String,
    on_click: EventHandler<()>,
) -> Element {
    rsx! {
        a {
            class: "inline-flex items-center text-gray-600 hover:text-black transition-colors",
            "data-testid": "home-link",
            href: "{href}",
            onclick: move |evt| {
                evt.prevent_default();
                on_click.call(());
            },
            svg {
                class: "w-4 h-4 mr-2",
                fill: "none",
                stroke: "currentColor",
                view_box: "0 0 24 24",
                path {
                    stroke_linecap: "round",
                    stroke_linejoin: "round",
                    stroke_width: "2",
                    d: "M15 19l-7-7 7-7",
                }
            }
            "{text}"
        }
    }
}
