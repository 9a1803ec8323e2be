use dioxus::prelude::*;

use crate::view::components::page::Page as GenericPage;

#[component]
pub fn Page() -> Element {
    rsx! {
        GenericPage {
            title: "Blog".to_owned(),
            p {
                "Notes from the field: process picks, prep that saves rework, and \
                 what to expect when the rig shows up."
            }
        }
    }
}
