use content::{ProfileRecord, ToolbarIcon, ToolbarItem};
use dioxus::prelude::*;

use crate::icons::{FaBars, FaBriefcase, FaEnvelope, FaFileLines, FaXmark};
use crate::{site_path, Icon};

/// Top toolbar plus collapsible side navigation.
///
/// The platform crate owns routing: it passes the current path in and
/// receives the target path of a clicked entry through `on_navigate`.
#[component]
pub fn Navbar(
    profile: ProfileRecord,
    items: Vec<ToolbarItem>,
    /// Path of the current route, used to highlight the active entry.
    active_path: String,
    on_navigate: EventHandler<String>,
    children: Element,
) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        header {
            class: "toolbar",
            button {
                class: "toolbar-toggle",
                title: "Menu",
                onclick: move |_| open.set(!open()),
                if open() {
                    Icon { icon: FaXmark, width: 18, height: 18 }
                } else {
                    Icon { icon: FaBars, width: 18, height: 18 }
                }
            }
            span { class: "toolbar-title", "{profile.name}" }
        }

        nav {
            class: if open() { "sidenav sidenav--open" } else { "sidenav" },
            ProfileHeader { profile: profile.clone() }

            ul {
                class: "sidenav-links",
                for item in items {
                    li {
                        key: "{item.path}",
                        a {
                            class: if item.is_active(&active_path) { "sidenav-link active" } else { "sidenav-link" },
                            href: "{item.path}",
                            onclick: {
                                let path = item.path.clone();
                                move |evt: MouseEvent| {
                                    evt.prevent_default();
                                    open.set(false);
                                    on_navigate.call(path.clone());
                                }
                            },
                            {toolbar_icon(item.icon)}
                            span { "{item.label}" }
                        }
                    }
                }
            }
        }

        if open() {
            div {
                class: "sidenav-overlay",
                onclick: move |_| open.set(false),
            }
        }

        main {
            class: "page",
            {children}
        }
    }
}

fn toolbar_icon(icon: ToolbarIcon) -> Element {
    match icon {
        ToolbarIcon::Resume => rsx! { Icon { icon: FaFileLines, width: 16, height: 16 } },
        ToolbarIcon::Experiences => rsx! { Icon { icon: FaBriefcase, width: 16, height: 16 } },
    }
}

/// Avatar, name and email shown at the top of the side navigation.
#[component]
pub fn ProfileHeader(profile: ProfileRecord) -> Element {
    let avatar = site_path(&profile.src);
    let mailto = profile.mailto();

    rsx! {
        div {
            class: "sidenav-profile",
            img {
                class: "sidenav-avatar",
                src: "{avatar}",
                alt: "{profile.name}",
            }
            span { class: "sidenav-name", "{profile.name}" }
            a {
                class: "sidenav-email",
                href: "{mailto}",
                Icon { icon: FaEnvelope, width: 14, height: 14 }
                span { "{profile.email}" }
            }
        }
    }
}
