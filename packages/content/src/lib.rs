//! # Content crate — static data behind the portfolio
//!
//! Every view of the site renders data built here. Providers are plain
//! unit structs: the composition root constructs them and hands their
//! output to components as props.
//!
//! | Provider | Operation | Feeds |
//! |----------|-----------|-------|
//! | [`ExperienceService`] | `get_experiences` | experiences view |
//! | [`NavbarService`] | `get_side_nav_data` | side navigation header |
//! | [`ToolbarService`] | `get_toolbar_data` | side navigation links |
//! | [`ResumeService`] | `get_resume` | résumé view |
//!
//! [`SiteConfig`] carries the non-content settings from `site.toml`.

pub mod config;
pub mod error;
pub mod models;

mod experience;
pub use experience::ExperienceService;

mod navbar;
pub use navbar::NavbarService;

mod resume;
pub use resume::ResumeService;

pub mod toolbar;
pub use toolbar::ToolbarService;

pub use config::SiteConfig;
pub use error::{Error, Result};
pub use models::{
    ExperienceRecord, ImageRef, ProfileRecord, ResumeRecord, RichText, SkillGroup, ToolbarIcon,
    ToolbarItem,
};
