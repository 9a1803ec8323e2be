use dioxus::prelude::*;

use crate::view::pages::{
    about::Page as AboutPage, blog::Page as BlogPage, faqs::Page as FaqsPage,
    home::Page as HomePage, not_found::Page as NotFound, projects::Page as ProjectsPage,
    quote::Page as QuotePage,
    services::{CommercialPage, IndustrialPage, ResidentialPage},
};

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: "/assets/main.css" }
        Router::<Routes> {}
    }
}

#[derive(Clone, PartialEq, Routable)]
pub enum Routes {
    #[route("/")]
    HomePage,

    #[route("/about")]
    AboutPage,

    #[route("/services/industrial")]
    IndustrialPage,

    #[route("/services/commercial")]
    CommercialPage,

    #[route("/services/residential")]
    ResidentialPage,

    #[route("/projects")]
    ProjectsPage,

    #[route("/blog")]
    BlogPage,

    #[route("/faqs")]
    FaqsPage,

    #[route("/quote")]
    QuotePage,

    #[route("/404")]
    NotFound,
}
