//! Loading skeleton

use dioxus::prelude::*;

/// Busy overlay for content that is still loading.
///
/// Children are always rendered; while `loading` is set a shimmer covers
/// them and the wrapper is marked `aria-busy`.
#[component]
pub fn Skeleton(loading: bool, children: Element) -> Element {
    rsx! {
        div {
            class: "relative",
            "data-testid": "skeleton",
            "aria-busy": "{loading}",
            if loading {
                div {
                    class: "absolute inset-0 z-10 flex flex-col gap-3 p-4 bg-white/90 animate-pulse",
                    "data-testid": "skeleton-overlay",
                    div { class: "h-6 w-1/3 rounded bg-gray-200" }
                    div { class: "h-4 w-2/3 rounded bg-gray-200" }
                    div { class: "h-4 w-1/2 rounded bg-gray-200" }
                    div { class: "h-4 w-3/5 rounded bg-gray-200" }
                }
            }
            {children}
        }
    }
}
