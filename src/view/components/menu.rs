use dioxus::prelude::*;

use crate::{menu::MenuItem, view::app::Routes};

pub fn toggle_glyph(open: bool) -> &'static str {
    if open {
        "✕"
    } else {
        "☰"
    }
}

fn expand_glyph(expanded: bool) -> &'static str {
    if expanded {
        "▲"
    } else {
        "▼"
    }
}

fn dropdown_corner_class(index: usize, len: usize) -> &'static str {
    let first = index == 0;
    let last = index + 1 == len;
    match (first, last) {
        (true, true) => "is-rounded-top is-rounded-bottom",
        (true, false) => "is-rounded-top",
        (false, true) => "is-rounded-bottom",
        (false, false) => "",
    }
}

#[component]
pub fn DesktopMenu(items: Vec<MenuItem>) -> Element {
    let nav = use_navigator();

    rsx! {
        nav {
            class: "desktop-menu desktop-only",
            { items.iter().map(|item| {
                let entry = match item.children {
                    Some(children) => rsx! {
                        button {
                            class: "desktop-menu-trigger",
                            "{item.label}"
                        }
                        div {
                            class: "desktop-dropdown",
                            { children.iter().enumerate().map(|(index, child)| {
                                let corners = dropdown_corner_class(index, children.len());
                                let target = child.target.clone();
                                rsx! {
                                    a {
                                        key: "{child.label}",
                                        class: "desktop-dropdown-link {corners}",
                                        onclick: move |e| {
                                            e.prevent_default();
                                            if let Some(target) = target.as_ref() {
                                                nav.push(target.clone());
                                            }
                                        },
                                        "{child.label}"
                                    }
                                }
                            }) }
                        }
                    },
                    None => {
                        let target = item.target.clone();
                        rsx! {
                            a {
                                class: "desktop-menu-link",
                                onclick: move |e| {
                                    e.prevent_default();
                                    if let Some(target) = target.as_ref() {
                                        nav.push(target.clone());
                                    }
                                },
                                "{item.label}"
                            }
                        }
                    }
                };

                rsx! {
                    div {
                        key: "{item.label}",
                        class: "desktop-menu-entry",
                        { entry }
                    }
                }
            }) }
        }
    }
}

#[component]
pub fn MobileMenuItem(item: MenuItem, onclose: EventHandler<()>, level: usize) -> Element {
    let nav = use_navigator();
    let mut expanded = use_signal(|| false);

    if let Some(children) = item.children {
        let submenu = if *expanded.read() {
            rsx! {
                div {
                    class: "mobile-submenu",
                    { children.iter().map(|child| rsx! {
                        MobileMenuItem {
                            key: "{child.label}",
                            item: child.clone(),
                            onclose: move |_| onclose.call(()),
                            level: level + 1,
                        }
                    }) }
                }
            }
        } else {
            rsx! {}
        };

        return rsx! {
            div {
                button {
                    class: "mobile-menu-toggle",
                    style: "padding-left: {level}rem",
                    onclick: move |_| {
                        let now_expanded = !(&*expanded.read());
                        expanded.set(now_expanded);
                    },
                    span {
                        "{item.label}"
                    }
                    span {
                        class: "mobile-menu-glyph",
                        { expand_glyph(*expanded.read()) }
                    }
                }
                { submenu }
            }
        };
    }

    let target = item.target.clone();
    rsx! {
        a {
            class: "mobile-menu-link",
            style: "padding-left: {level}rem",
            onclick: move |e| {
                e.prevent_default();
                onclose.call(());
                if let Some(target) = target.as_ref() {
                    nav.push(target.clone());
                }
            },
            "{item.label}"
        }
    }
}

#[component]
pub fn MobileMenu(items: Vec<MenuItem>, is_open: bool, onclose: EventHandler<()>) -> Element {
    let nav = use_navigator();

    if !is_open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "mobile-menu mobile-only",
            nav {
                class: "mobile-menu-body",
                { items.iter().map(|item| rsx! {
                    MobileMenuItem {
                        key: "{item.label}",
                        item: item.clone(),
                        onclose: move |_| onclose.call(()),
                        level: 0,
                    }
                }) }
                a {
                    class: "quote-button mobile-quote",
                    onclick: move |e| {
                        e.prevent_default();
                        onclose.call(());
                        nav.push(Routes::QuotePage);
                    },
                    "Get a Quote"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{dropdown_corner_class, expand_glyph, toggle_glyph};
    use test_case::test_case;

    #[test_case(0, 3 => "is-rounded-top"; "first of three")]
    #[test_case(1, 3 => ""; "interior child")]
    #[test_case(2, 3 => "is-rounded-bottom"; "last of three")]
    #[test_case(0, 2 => "is-rounded-top"; "first of two")]
    #[test_case(1, 2 => "is-rounded-bottom"; "last of two")]
    #[test_case(0, 1 => "is-rounded-top is-rounded-bottom"; "sole child takes both corners")]
    fn corner_classes(index: usize, len: usize) -> &'static str {
        dropdown_corner_class(index, len)
    }

    #[test_case(true => "▲"; "expanded points up")]
    #[test_case(false => "▼"; "collapsed points down")]
    fn expand_glyphs(expanded: bool) -> &'static str {
        expand_glyph(expanded)
    }

    #[test_case(true => "✕"; "open shows the close glyph")]
    #[test_case(false => "☰"; "closed shows the hamburger")]
    fn toggle_glyphs(open: bool) -> &'static str {
        toggle_glyph(open)
    }
}
