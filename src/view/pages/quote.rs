use dioxus::prelude::*;

use crate::view::components::page::Page as GenericPage;

#[component]
pub fn Page() -> Element {
    rsx! {
        GenericPage {
            title: "Get a Quote".to_owned(),
            p {
                "Tell us what needs welding, where it is, and when you need it \
                 done. We reply with a firm quote within one business day."
            }
            p {
                "Call us or email quotes@canadianmobilewelding.ca with photos if \
                 you have them."
            }
        }
    }
}
