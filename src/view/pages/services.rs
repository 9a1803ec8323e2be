use dioxus::prelude::*;

use crate::view::components::page::Page as GenericPage;

#[component]
pub fn IndustrialPage() -> Element {
    rsx! {
        GenericPage {
            title: "Industrial Welding".to_owned(),
            p {
                "Structural steel, heavy equipment repair, and pressure-rated \
                 fabrication, with crews certified for plant and site work."
            }
        }
    }
}

#[component]
pub fn CommercialPage() -> Element {
    rsx! {
        GenericPage {
            title: "Commercial Welding".to_owned(),
            p {
                "Storefronts, railings, mezzanines, and tenant improvements, \
                 scheduled around your hours of business."
            }
        }
    }
}

#[component]
pub fn ResidentialPage() -> Element {
    rsx! {
        GenericPage {
            title: "Residential Welding".to_owned(),
            p {
                "Gates, fences, stair rails, and one-off repairs, done at your \
                 home from our mobile rig."
            }
        }
    }
}
