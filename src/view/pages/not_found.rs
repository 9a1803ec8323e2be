use dioxus::prelude::*;

use crate::view::components::page::Page as GenericPage;

#[component]
pub fn Page() -> Element {
    rsx! {
        GenericPage {
            title: "Page Not Found".to_owned(),
            p {
                "That page has gone to the scrap pile. Use the menu above to find \
                 your way back."
            }
        }
    }
}
