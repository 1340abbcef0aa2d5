//! Content of the default résumé view.

use crate::models::{ResumeRecord, SkillGroup};

/// Provides the résumé headline, summary and skill groups.
///
/// Skills are the technologies named in the experience entries.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResumeService;

fn group(name: &str, items: &[&str]) -> SkillGroup {
    SkillGroup {
        name: name.to_string(),
        items: items.iter().map(|s| s.to_string()).collect(),
    }
}

impl ResumeService {
    pub fn new() -> Self {
        Self
    }

    pub fn get_resume(&self) -> ResumeRecord {
        ResumeRecord {
            headline: "Développeur Web Full-Stack".to_string(),
            summary: "Développeur web spécialisé dans les frameworks Angular et Symfony, du \
                      back-office métier à la place de marché e-commerce."
                .to_string(),
            skills: vec![
                group("Front-end", &["Angular 2", "AngularJs", "Redux"]),
                group("Back-end", &["Symfony 2 et 3", "Express Js", "MeteorJs", "API REST"]),
                group("Données", &["MongoDB", "Redis", "ElasticSearch", "Solr", "RabbitMQ"]),
                group("Outils", &["Logstash", "Kibana", "Auth0", "Cloudinary"]),
            ],
        }
    }
}
