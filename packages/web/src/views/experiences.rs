use content::ExperienceService;
use dioxus::prelude::*;
use ui::AboutView;

#[component]
pub fn Experiences() -> Element {
    let experiences = use_hook(|| ExperienceService::new().get_experiences());

    rsx! {
        AboutView { experiences: experiences }
    }
}
