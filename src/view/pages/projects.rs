use dioxus::prelude::*;

use crate::view::components::page::Page as GenericPage;

#[component]
pub fn Page() -> Element {
    rsx! {
        GenericPage {
            title: "Projects".to_owned(),
            p {
                "A sampling of recent work: warehouse racking repairs, a custom \
                 steel staircase, and on-site equipment rebuilds."
            }
        }
    }
}
