use dioxus::prelude::*;

/// Placeholder shown when a view has nothing to display.
#[component]
pub fn EmptyState(title: String, message: String) -> Element {
    rsx! {
        div {
            class: "empty-state",
            h2 { class: "empty-state-title", "{title}" }
            p { class: "empty-state-message", "{message}" }
        }
    }
}
