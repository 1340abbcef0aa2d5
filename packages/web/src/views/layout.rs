use content::{NavbarService, ToolbarService};
use dioxus::prelude::*;
use ui::Navbar;

use crate::Route;

/// Shared chrome around every route: side navigation plus the routed view.
#[component]
pub fn AppLayout() -> Element {
    let profile = use_hook(|| NavbarService::new().get_side_nav_data());
    let items = use_hook(|| ToolbarService::new().get_toolbar_data());
    let nav = use_navigator();

    // Highlight the entry of the view actually shown, not the raw URL
    let route = use_route::<Route>();
    let active_path = route.canonical().to_string();

    let on_navigate = move |path: String| match path.parse::<Route>() {
        Ok(route) => {
            nav.push(route);
        }
        Err(e) => tracing::warn!("cannot route to {path}: {e}"),
    };

    rsx! {
        Navbar {
            profile: profile,
            items: items,
            active_path: active_path,
            on_navigate: on_navigate,
            Outlet::<Route> {}
        }
    }
}
