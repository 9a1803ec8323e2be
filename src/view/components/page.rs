use dioxus::prelude::*;

use crate::view::components::header::Header;

#[component]
pub fn Page(title: String, children: Element) -> Element {
    rsx! {
        Header {}
        section {
            class: "page-body",
            h1 {
                class: "page-title",
                "{title}"
            }
            { children }
        }
    }
}
