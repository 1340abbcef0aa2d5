//! # Content records
//!
//! Plain data shown by the portfolio views. Every record is rebuilt from
//! literals on each provider call; nothing here is persisted or mutated.
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`ExperienceRecord`] | One work-history entry of the experiences view. |
//! | [`ImageRef`] | Logo shown next to an experience (`alt` text + asset path). |
//! | [`ProfileRecord`] | Name, email and avatar displayed at the top of the side navigation. |
//! | [`ToolbarItem`] | One navigation entry of the side navigation. |
//! | [`ResumeRecord`] | Headline, summary and skill groups of the résumé view. |
//! | [`RichText`] | Markdown source rendered to HTML by the UI. |

use serde::{Deserialize, Serialize};

/// A work-history entry.
///
/// `year` and `month` are independent optional counters copied as-is from
/// the source content. Most entries carry `year`, one carries `month`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExperienceRecord {
    /// Company or client: "ZeeMono"
    pub title: String,
    /// Primary role held
    pub job1: String,
    /// Secondary role, if any
    pub job2: Option<String>,
    pub year: Option<u32>,
    pub month: Option<u32>,
    /// One-paragraph plain text summary
    pub description: String,
    /// Detailed task list
    pub description2: Option<RichText>,
    pub img: ImageRef,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageRef {
    pub alt: String,
    /// Path relative to the site root: "assets/images/angular.svg"
    pub src: String,
}

/// Profile shown in the side navigation header.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub name: String,
    pub email: String,
    /// Avatar path relative to the site root
    pub src: String,
}

impl ProfileRecord {
    /// `mailto:` link for the profile email.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

/// Icon drawn next to a toolbar label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToolbarIcon {
    Resume,
    Experiences,
}

/// A navigation entry of the side navigation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToolbarItem {
    pub label: String,
    /// In-app route path: "/experiences"
    pub path: String,
    pub icon: ToolbarIcon,
}

impl ToolbarItem {
    /// Whether this item points at `current_path`.
    ///
    /// Trailing slashes are ignored so that `/experiences/` still
    /// highlights the experiences entry.
    pub fn is_active(&self, current_path: &str) -> bool {
        let trim = |p: &str| -> String {
            let t = p.trim_end_matches('/');
            if t.is_empty() { "/".to_string() } else { t.to_string() }
        };
        trim(&self.path) == trim(current_path)
    }
}

/// A named group of skills: "Back-end" → ["Symfony", ...]
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

/// Content of the default résumé view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub headline: String,
    pub summary: String,
    pub skills: Vec<SkillGroup>,
}

/// Markdown source for formatted descriptions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(String);

impl RichText {
    pub fn new(markdown: impl Into<String>) -> Self {
        Self(markdown.into())
    }

    pub fn as_markdown(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}
