use dioxus::prelude::*;

use crate::{
    menu::MENU_ITEMS,
    view::{
        app::Routes,
        components::menu::{toggle_glyph, DesktopMenu, MobileMenu},
    },
};

#[component]
pub fn Header() -> Element {
    let nav = use_navigator();
    let mut mobile_menu_open = use_signal(|| false);

    rsx! {
        header {
            class: "site-header",
            div {
                class: "header-inner",
                a {
                    class: "logo-link",
                    onclick: move |e| {
                        e.prevent_default();
                        nav.push(Routes::HomePage);
                    },
                    img {
                        class: "logo-image",
                        src: "/images/logo_name.png",
                        alt: "Canadian mobile welding",
                    }
                }
                DesktopMenu {
                    items: MENU_ITEMS.to_vec(),
                }
                div {
                    class: "header-actions",
                    a {
                        class: "quote-button desktop-only",
                        onclick: move |e| {
                            e.prevent_default();
                            nav.push(Routes::QuotePage);
                        },
                        "Get a Quote"
                    }
                    button {
                        class: "menu-toggle mobile-only",
                        aria_label: "Toggle menu",
                        onclick: move |_| {
                            let open = !(&*mobile_menu_open.read());
                            mobile_menu_open.set(open);
                        },
                        { toggle_glyph(*mobile_menu_open.read()) }
                    }
                }
            }
            MobileMenu {
                items: MENU_ITEMS.to_vec(),
                is_open: *mobile_menu_open.read(),
                onclose: move |_| mobile_menu_open.set(false),
            }
        }
    }
}
