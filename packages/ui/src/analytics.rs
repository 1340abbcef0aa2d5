//! Google Analytics (gtag.js) snippet.

use content::config::AnalyticsConfig;
use dioxus::prelude::*;

/// URL of the gtag.js loader for a measurement id.
pub fn gtag_loader_src(tracking_id: &str) -> String {
    format!("https://www.googletagmanager.com/gtag/js?id={tracking_id}")
}

/// Inline script that initialises gtag for a measurement id.
pub fn gtag_init_script(tracking_id: &str) -> String {
    format!(
        "window.dataLayer = window.dataLayer || [];\
         function gtag(){{dataLayer.push(arguments);}}\
         gtag('js', new Date());\
         gtag('config', '{tracking_id}');"
    )
}

/// Loader and init scripts for gtag.js.
///
/// Plain `script` elements so the server-rendered page already carries them.
/// Renders nothing when no usable tracking id is configured.
#[component]
pub fn Analytics(config: AnalyticsConfig) -> Element {
    let Some(tracking_id) = config.enabled_id() else {
        return rsx! {};
    };
    tracing::debug!(tracking_id, "analytics enabled");
    let src = gtag_loader_src(tracking_id);
    let init = gtag_init_script(tracking_id);

    rsx! {
        script { src: "{src}", r#async: true }
        script { dangerous_inner_html: "{init}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::render;

    fn configured_app() -> Element {
        rsx! {
            Analytics {
                config: AnalyticsConfig { tracking_id: Some("G-X1".to_string()) },
            }
        }
    }

    fn unconfigured_app() -> Element {
        rsx! { Analytics { config: AnalyticsConfig::default() } }
    }

    fn blank_app() -> Element {
        rsx! {
            Analytics {
                config: AnalyticsConfig { tracking_id: Some("  ".to_string()) },
            }
        }
    }

    fn unsafe_id_app() -> Element {
        rsx! {
            Analytics {
                config: AnalyticsConfig { tracking_id: Some("G-1');alert('x".to_string()) },
            }
        }
    }

    #[test]
    fn test_gtag_snippets() {
        assert_eq!(
            gtag_loader_src("G-ABC"),
            "https://www.googletagmanager.com/gtag/js?id=G-ABC"
        );
        let init = gtag_init_script("G-ABC");
        assert!(init.starts_with("window.dataLayer = window.dataLayer || [];function gtag()"));
        assert!(init.ends_with("gtag('config', 'G-ABC');"));
    }

    #[test]
    fn test_analytics_renders_scripts_when_configured() {
        let html = render(configured_app);
        assert_eq!(html.matches("<script").count(), 2);
        assert!(html.contains("src=\"https://www.googletagmanager.com/gtag/js?id=G-X1\""));
        assert!(html.contains("gtag('config', 'G-X1');"));
    }

    #[test]
    fn test_analytics_renders_nothing_without_id() {
        for app in [unconfigured_app, blank_app, unsafe_id_app] {
            let html = render(app);
            assert!(!html.contains("<script"), "{html}");
            assert!(!html.contains("googletagmanager"), "{html}");
        }
    }
}
