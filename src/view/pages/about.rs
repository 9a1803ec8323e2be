use dioxus::prelude::*;

use crate::view::components::page::Page as GenericPage;

#[component]
pub fn Page() -> Element {
    rsx! {
        GenericPage {
            title: "About Us".to_owned(),
            p {
                "We are a family-run mobile welding outfit with two decades of \
                 field experience and CWB-certified crews."
            }
            p {
                "Every job gets the same treatment: a clear quote up front, clean \
                 work on site, and a weld we are happy to put our name on."
            }
        }
    }
}
