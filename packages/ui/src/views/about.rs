use content::ExperienceRecord;
use dioxus::prelude::*;

use super::EmptyState;
use crate::{site_path, RichTextBlock};

/// Human label for the `year` / `month` counters of an experience.
///
/// The two counters are shown side by side when both are set; neither is
/// derived from the other.
pub fn duration_label(year: Option<u32>, month: Option<u32>) -> Option<String> {
    let years = year.map(|n| if n > 1 { format!("{n} ans") } else { format!("{n} an") });
    let months = month.map(|n| format!("{n} mois"));
    match (years, months) {
        (Some(y), Some(m)) => Some(format!("{y} {m}")),
        (y, m) => y.or(m),
    }
}

/// Experiences view: one card per work-history entry, in the given order.
#[component]
pub fn AboutView(experiences: Vec<ExperienceRecord>) -> Element {
    if experiences.is_empty() {
        return rsx! {
            EmptyState {
                title: "Expériences",
                message: "Aucune expérience à afficher.",
            }
        };
    }

    rsx! {
        section {
            class: "experiences",
            h1 { class: "experiences-title", "Expériences" }
            for (index, experience) in experiences.into_iter().enumerate() {
                ExperienceCard { key: "{index}", experience: experience }
            }
        }
    }
}

#[component]
pub fn ExperienceCard(experience: ExperienceRecord) -> Element {
    let logo = site_path(&experience.img.src);
    let duration = duration_label(experience.year, experience.month);

    rsx! {
        article {
            class: "experience-card",
            img {
                class: "experience-logo",
                src: "{logo}",
                alt: "{experience.img.alt}",
            }
            div {
                class: "experience-body",
                header {
                    class: "experience-header",
                    h2 { class: "experience-title", "{experience.title}" }
                    if let Some(ref duration) = duration {
                        span { class: "experience-duration", "{duration}" }
                    }
                }
                p { class: "experience-job", "{experience.job1}" }
                if let Some(ref job2) = experience.job2 {
                    p { class: "experience-job", "{job2}" }
                }
                p { class: "experience-description", "{experience.description}" }
                if let Some(ref details) = experience.description2 {
                    RichTextBlock { text: details.clone() }
                }
            }
        }
    }
}
