use content::ResumeRecord;
use dioxus::prelude::*;

use super::EmptyState;

/// Default view: headline, summary and skill groups.
#[component]
pub fn ResumeView(resume: ResumeRecord) -> Element {
    rsx! {
        section {
            class: "resume",
            h1 { class: "resume-headline", "{resume.headline}" }
            p { class: "resume-summary", "{resume.summary}" }

            if resume.skills.is_empty() {
                EmptyState {
                    title: "Compétences",
                    message: "Aucune compétence renseignée.",
                }
            } else {
                div {
                    class: "skill-groups",
                    for group in resume.skills.iter() {
                        div {
                            key: "{group.name}",
                            class: "skill-group",
                            h2 { class: "skill-group-name", "{group.name}" }
                            ul {
                                class: "skill-list",
                                for skill in group.items.iter() {
                                    li { class: "skill-chip", "{skill}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
