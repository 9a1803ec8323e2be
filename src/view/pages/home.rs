use dioxus::prelude::*;

use crate::view::components::page::Page as GenericPage;

#[component]
pub fn Page() -> Element {
    rsx! {
        GenericPage {
            title: "Mobile Welding, Wherever the Work Is".to_owned(),
            p {
                "Certified welders and a fully equipped mobile rig, on call for \
                 industrial, commercial, and residential jobs across the region."
            }
            p {
                "From structural steel to a gate hinge at home, we bring the shop \
                 to the site."
            }
        }
    }
}
