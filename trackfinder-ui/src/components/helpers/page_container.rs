//! Page container component

use crate::theme::colors;
use dioxus::prelude::*;

/// Bordered, centered card every track page sits in
#[component]
pub fn PageContainer(children: Element) -> Element {
    let background = colors::PRIMARY_BACKGROUND;

    rsx! {
        div {
            class: "p-4 my-4 mx-auto rounded-[10px] border border-[#111] shadow max-w-[85%]",
            style: "background-color: {background};",
            {children}
        }
    }
}
