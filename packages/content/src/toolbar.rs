//! Navigation entries of the side navigation.

use crate::models::{ToolbarIcon, ToolbarItem};

/// Path of the résumé view, also the fallback for unknown paths.
pub const RESUME_PATH: &str = "/";
/// Path of the experiences view.
pub const EXPERIENCES_PATH: &str = "/experiences";

/// Provides the navigation entries, in display order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ToolbarService;

impl ToolbarService {
    pub fn new() -> Self {
        Self
    }

    pub fn get_toolbar_data(&self) -> Vec<ToolbarItem> {
        vec![
            ToolbarItem {
                label: "CV".to_string(),
                path: RESUME_PATH.to_string(),
                icon: ToolbarIcon::Resume,
            },
            ToolbarItem {
                label: "Expériences".to_string(),
                path: EXPERIENCES_PATH.to_string(),
                icon: ToolbarIcon::Experiences,
            },
        ]
    }
}
