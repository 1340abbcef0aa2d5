use content::SiteConfig;
use dioxus::prelude::*;

use views::{AppLayout, Experiences, Fallback, Resume};

mod views;

#[cfg(feature = "server")]
mod server;
#[cfg(feature = "server")]
mod settings;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Resume {},
        #[route("/experiences")]
        Experiences {},
        #[route("/:..segments")]
        Fallback { segments: Vec<String> },
}

impl Route {
    /// The route whose view is actually displayed; unknown paths show the résumé.
    fn canonical(&self) -> Route {
        match self {
            Route::Fallback { .. } => Route::Resume {},
            other => other.clone(),
        }
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");

#[cfg(feature = "server")]
fn main() -> anyhow::Result<()> {
    tokio::runtime::Runtime::new()?.block_on(server::launch())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let site = use_hook(SiteConfig::bundled);

    // Only a validated tag reaches the script.
    let lang = site.site.lang_tag();
    use_effect(move || {
        document::eval(&format!("document.documentElement.lang = '{lang}';"));
    });

    rsx! {
        // Global app resources
        document::Title { "{site.site.title}" }
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: ui::NAVBAR_CSS }
        document::Link { rel: "stylesheet", href: ui::VIEWS_CSS }

        ui::Analytics { config: site.analytics.clone() }

        Router::<Route> {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content::toolbar::{EXPERIENCES_PATH, RESUME_PATH};
    use content::ToolbarService;
    use dioxus_history::{provide_history_context, MemoryHistory};
    use std::rc::Rc;

    #[component]
    fn RoutedApp(path: String) -> Element {
        use_hook(|| {
            provide_history_context(Rc::new(MemoryHistory::with_initial_path(path.clone())))
        });
        rsx! { Router::<Route> {} }
    }

    fn render_at(path: &str) -> String {
        let mut dom = VirtualDom::new_with_props(
            RoutedApp,
            RoutedAppProps {
                path: path.to_string(),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    /// `href` of the highlighted navigation entry.
    fn active_href(html: &str) -> Option<&str> {
        let link = &html[html.find("sidenav-link active")?..];
        let href = &link[link.find("href=\"")? + 6..];
        Some(&href[..href.find('"')?])
    }

    fn card_count(html: &str) -> usize {
        html.matches("class=\"experience-card\"").count()
    }

    #[test]
    fn test_known_paths() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Resume {});
        assert_eq!("/experiences".parse::<Route>().unwrap(), Route::Experiences {});
    }

    #[test]
    fn test_unknown_paths_fall_back_to_resume() {
        for path in ["/nope", "/experiences/old", "/a/b/c"] {
            let route = path.parse::<Route>().unwrap();
            assert!(matches!(route, Route::Fallback { .. }), "{path}");
            assert_eq!(route.canonical(), Route::Resume {});
        }

        let route = "/a/b".parse::<Route>().unwrap();
        assert_eq!(
            route,
            Route::Fallback {
                segments: vec!["a".to_string(), "b".to_string()]
            }
        );
    }

    #[test]
    fn test_canonical_keeps_known_routes() {
        assert_eq!(Route::Experiences {}.canonical(), Route::Experiences {});
        assert_eq!(Route::Resume {}.canonical(), Route::Resume {});
    }

    #[test]
    fn test_toolbar_paths_match_routes() {
        assert_eq!(Route::Resume {}.to_string(), RESUME_PATH);
        assert_eq!(Route::Experiences {}.to_string(), EXPERIENCES_PATH);

        for item in ToolbarService::new().get_toolbar_data() {
            let route = item.path.parse::<Route>().unwrap();
            assert!(!matches!(route, Route::Fallback { .. }), "{}", item.path);
        }
    }

    #[test]
    fn test_root_renders_resume() {
        let html = render_at("/");
        assert!(html.contains("class=\"resume\""));
        assert!(html.contains("class=\"sidenav-profile\""));
        assert_eq!(card_count(&html), 0);
        assert_eq!(active_href(&html), Some("/"));
    }

    #[test]
    fn test_experiences_renders_about_view() {
        for path in ["/experiences", "/experiences/"] {
            let html = render_at(path);
            assert_eq!(card_count(&html), 4, "{path}");
            assert!(!html.contains("class=\"resume\""), "{path}");
            assert_eq!(active_href(&html), Some("/experiences"), "{path}");
        }
    }

    #[test]
    fn test_unknown_path_renders_resume() {
        for path in ["/nope", "/a/b/c"] {
            let html = render_at(path);
            assert!(html.contains("class=\"resume\""), "{path}");
            assert_eq!(card_count(&html), 0, "{path}");
            assert_eq!(active_href(&html), Some("/"), "{path}");
        }
    }

    #[test]
    fn test_layout_shows_avatar() {
        let html = render_at("/");
        assert!(html.contains("src=\"/assets/images/sidenav-profile.jpg\""));
        let avatar = concat!(env!("CARGO_MANIFEST_DIR"), "/public/assets/images/sidenav-profile.jpg");
        assert!(std::path::Path::new(avatar).is_file());
    }
}
