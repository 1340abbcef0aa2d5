//! # Site configuration — `site.toml`
//!
//! Settings that shape the rendered site but not its content. The file is
//! bundled into the binary with `include_str!`, so the same values reach
//! both the server-rendered page and the WASM client.
//!
//! ## Structure
//!
//! ```toml
//! [site]
//! title = "Romain Marecat"   # document <title>
//! lang = "fr"                # <html lang>
//!
//! [analytics]
//! tracking_id = "G-XXXX"     # omit to disable analytics
//! ```
//!
//! All sections derive `Default`, so a missing or empty file is the default
//! configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

const BUNDLED_SITE_TOML: &str = include_str!("../site.toml");

/// Top-level configuration stored in `site.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub analytics: AnalyticsConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteSection {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_lang")]
    pub lang: String,
}

fn default_title() -> String {
    "Portfolio".to_string()
}

fn default_lang() -> String {
    "fr".to_string()
}

impl SiteSection {
    /// The `<html lang>` value; anything that is not a plain language tag
    /// falls back to the default.
    pub fn lang_tag(&self) -> String {
        let lang = self.lang.trim();
        if is_tag(lang) {
            lang.to_string()
        } else {
            tracing::warn!(lang = %self.lang, "invalid site language, using default");
            default_lang()
        }
    }
}

/// Non-empty and made of ASCII letters, digits and `-` only.
fn is_tag(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            lang: default_lang(),
        }
    }
}

/// Analytics snippet settings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Google Analytics measurement id. `None`, blank, or anything other than
    /// ASCII letters, digits and `-` disables the snippet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking_id: Option<String>,
}

impl AnalyticsConfig {
    /// The tracking id, if one is configured and well formed.
    pub fn enabled_id(&self) -> Option<&str> {
        self.tracking_id
            .as_deref()
            .map(str::trim)
            .filter(|id| is_tag(id))
    }
}

impl SiteConfig {
    /// Create a config with the given document title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            site: SiteSection {
                title: title.into(),
                ..SiteSection::default()
            },
            analytics: AnalyticsConfig::default(),
        }
    }

    /// Builder method to set the analytics tracking id.
    pub fn with_tracking_id(mut self, id: impl Into<String>) -> Self {
        self.analytics.tracking_id = Some(id.into());
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "site.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// The configuration compiled into this build.
    ///
    /// A malformed bundled file is logged and replaced by the defaults.
    pub fn bundled() -> Self {
        match Self::from_toml(BUNDLED_SITE_TOML) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!("{}: {e}", Self::filename());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_default() {
        let config = SiteConfig::from_toml("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.site.title, "Portfolio");
        assert_eq!(config.site.lang, "fr");
        assert!(config.analytics.enabled_id().is_none());
    }

    #[test]
    fn test_tracking_id() {
        let config = SiteConfig::from_toml(
            r#"
            [analytics]
            tracking_id = "G-TEST123"
            "#,
        )
        .unwrap();
        assert_eq!(config.analytics.enabled_id(), Some("G-TEST123"));
        assert_eq!(config.site, SiteSection::default());
    }

    #[test]
    fn test_blank_tracking_id_is_disabled() {
        let config = SiteConfig::new("Me").with_tracking_id("   ");
        assert!(config.analytics.enabled_id().is_none());
    }

    #[test]
    fn test_tracking_id_must_be_plain() {
        let config = SiteConfig::new("Me").with_tracking_id(" G-ABC-1 ");
        assert_eq!(config.analytics.enabled_id(), Some("G-ABC-1"));

        for id in ["G-1');alert('x", "G 1", "<G-1>"] {
            let config = SiteConfig::new("Me").with_tracking_id(id);
            assert!(config.analytics.enabled_id().is_none(), "{id}");
        }
    }

    #[test]
    fn test_lang_tag() {
        let config = SiteConfig::from_toml("[site]\nlang = \"en-GB\"").unwrap();
        assert_eq!(config.site.lang_tag(), "en-GB");

        for lang in ["", "  ", "fr';alert(1);'", "fr\"", "en GB"] {
            let section = SiteSection {
                lang: lang.to_string(),
                ..SiteSection::default()
            };
            assert_eq!(section.lang_tag(), "fr", "{lang:?}");
        }
    }

    #[test]
    fn test_malformed() {
        let err = SiteConfig::from_toml("[site\ntitle = 1").unwrap_err();
        assert!(err.to_string().starts_with("invalid site configuration"));
    }

    #[test]
    fn test_to_toml_roundtrip() {
        let config = SiteConfig::new("Romain").with_tracking_id("G-1");
        let loaded = SiteConfig::from_toml(&config.to_toml().unwrap()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_bundled() {
        let config = SiteConfig::bundled();
        assert_eq!(config.site.title, "Romain Marecat");
        assert!(config.analytics.enabled_id().is_none());
    }
}
