//! Body text

use crate::theme::colors;
use crate::theme::fonts::style;
use dioxus::prelude::*;

#[component]
pub fn Text(text: String, #[props(default)] class: Option<String>) -> Element {
    let extra = class.as_deref().unwrap_or("");
    let font = style::standard();
    let color = colors::TEXT;

    rsx! {
        p { class: "m-0 {extra}", style: "{font} color: {color};", "{text}" }
    }
}
