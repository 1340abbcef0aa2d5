use dioxus::prelude::*;

use super::Resume;
use crate::Route;

/// Catch-all for unknown paths: shows the résumé and rewrites the URL to `/`.
#[component]
pub fn Fallback(segments: Vec<String>) -> Element {
    let nav = use_navigator();
    tracing::debug!("no route for /{}, showing resume", segments.join("/"));
    nav.replace(Route::Resume {});

    rsx! {
        Resume {}
    }
}
