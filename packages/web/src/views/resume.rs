use content::ResumeService;
use dioxus::prelude::*;
use ui::ResumeView;

#[component]
pub fn Resume() -> Element {
    let resume = use_hook(|| {
        let resume = ResumeService::new().get_resume();
        tracing::debug!(skill_groups = resume.skills.len(), "loaded resume");
        resume
    });

    rsx! {
        ResumeView { resume: resume }
    }
}
