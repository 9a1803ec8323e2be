use dioxus::prelude::*;

use crate::view::components::page::Page as GenericPage;

#[component]
pub fn Page() -> Element {
    rsx! {
        GenericPage {
            title: "FAQs".to_owned(),
            p {
                "How far do you travel? Do you weld aluminum? Are you insured? \
                 The short answers: far, yes, and fully."
            }
            p {
                "Anything else, send it along with your quote request and we will \
                 answer before we book the job."
            }
        }
    }
}
