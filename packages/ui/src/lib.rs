//! This crate contains all shared UI for the workspace.
//!
//! Components here are purely presentational: they receive content records
//! as props and report navigation through callbacks, leaving routing to the
//! platform crate.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;
pub use views::{AboutView, ExperienceCard, ResumeView};

pub const THEME_CSS: Asset = asset!("/assets/styling/theme.css");
pub const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
pub const VIEWS_CSS: Asset = asset!("/assets/styling/views.css");

mod navbar;
pub use navbar::{Navbar, ProfileHeader};

mod analytics;
pub use analytics::{gtag_init_script, gtag_loader_src, Analytics};

pub mod rich_text;
pub use rich_text::{markdown_to_html, RichTextBlock};

/// Absolute URL path for an asset path stored relative to the site root
/// (`assets/images/x.svg` → `/assets/images/x.svg`).
pub fn site_path(src: &str) -> String {
    if src.starts_with('/') || src.contains("://") {
        src.to_string()
    } else {
        format!("/{src}")
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_path() {
        assert_eq!(site_path("assets/images/a.svg"), "/assets/images/a.svg");
        assert_eq!(site_path("/assets/images/a.svg"), "/assets/images/a.svg");
        assert_eq!(site_path("https://cdn.example.com/a.svg"), "https://cdn.example.com/a.svg");
    }
}
