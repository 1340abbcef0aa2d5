//! Work-history data for the experiences view.

use crate::models::{ExperienceRecord, ImageRef, RichText};

/// Provides the work-history entries, most recent first.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExperienceService;

impl ExperienceService {
    pub fn new() -> Self {
        Self
    }

    /// All experience entries in display order.
    pub fn get_experiences(&self) -> Vec<ExperienceRecord> {
        let experiences = vec![zeemono(), square_connexion(), voreppe(), isere()];
        tracing::debug!(count = experiences.len(), "built experience records");
        experiences
    }
}

/// Join items into a Markdown bullet list.
fn bullet_list(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("- {item}\n"))
        .collect()
}

fn image(alt: &str, src: &str) -> ImageRef {
    ImageRef {
        alt: alt.to_string(),
        src: src.to_string(),
    }
}

fn symfony_logo() -> ImageRef {
    image("Symfony 2", "assets/images/symfony.svg")
}

fn zeemono() -> ExperienceRecord {
    let front = bullet_list(&[
        "Ajout d'une application pour les moniteurs (Angular)",
        "Ajout d'une application pour les administrateurs (Angular)",
        "Formulaires (Data-binding)",
        "Connexion utilisateur avec Auth0",
        "Datatables",
        "Manipulation d'images avec Cloudinary",
        "Internationalisation",
        "Mobile Responsive",
        "Redux",
        "Refonte de l'api en Middleware (Express Js + MongoDB)",
    ]);
    let back = bullet_list(&[
        "Scrapping (Symfony 3)",
        "Refonte du site (Symfony 2.8)",
        "Moteur de recherche via Doctrine et Google Maps Api",
        "Back office moniteur et client",
        "Back office administrateur",
        "Communication avec MeteorJs et MongoDB",
        "Connexion utilisateur",
        "Intégration des pages (Accueil, recherche, profil, back-office)",
        "Amélioration de l'expérience utilisateur (Symfony 2.8)",
        "Connexion social (Facebook, Twitter, Google, Instagram)",
        "Système de paiement MangoPay",
        "Bon d'achat, remise et bon cadeau",
        "Cache Redis",
        "Planning moniteur",
        "Page de réservation",
        "Connexion utilisateur",
    ]);

    ExperienceRecord {
        title: "ZeeMono".to_string(),
        job1: "Développeur Web Angular 2".to_string(),
        job2: Some("Développeur Web Symfony 2 et 3".to_string()),
        year: Some(1),
        month: None,
        description: "Développement d'une application mobile et plus rapide qui traite la \
                      réservation et la gestion des agendas de moniteurs de ski basée sur le \
                      Framework Angular (2)."
            .to_string(),
        description2: Some(RichText::new(format!(
            "{front}\nDéveloppement Back-end d'une API REST pour le site web et l'agenda ZeeMono.\n\n{back}"
        ))),
        img: image("Angular 2", "assets/images/angular.svg"),
    }
}

fn square_connexion() -> ExperienceRecord {
    let rest = bullet_list(&[
        "Intégrer un moteur de recherche Solr, ElasticSearch, Sphinx.",
        "Connexion social (Facebook, twitter, google)",
        "Connexion utilisateur",
        "Système de paiement (Paybox direct plus)",
        "Bons d’achat",
        "Import de masse d’images, produits (RabbitMQ)",
        "Back Office des produits, marchands, magasins",
        "Utilisation de technologies No-SQL tel que Redis.",
        "Mise en place de tests unitaires et fonctionnels.",
        "Outils de monitoring pour gérer les logs (Logstash, Kibana, ElasticSearch).",
        "Montée en compétence en UX Design pour le e-commerce.",
    ]);

    ExperienceRecord {
        title: "Square Connexion".to_string(),
        job1: "Développeur Web Symfony 2 et AngularJs".to_string(),
        job2: None,
        year: Some(2),
        month: None,
        description: "Tootici.fr est un projet lancé par le Crédit Agricole en 2011. Le site est \
                      devenu à mon arrivé une place de marché e-commerce spécialisé dans les \
                      produits régionaux de petits commerçants. Le développement du site est basé \
                      sous le Framework Symfony 2.7."
            .to_string(),
        description2: Some(RichText::new(format!(
            "Refonte du site en API Rest :\n\n{rest}\nDéveloppement de la page d'accueil et du menu de navigation avec le framework AngularJs\n"
        ))),
        img: symfony_logo(),
    }
}

fn voreppe() -> ExperienceRecord {
    let apps = bullet_list(&[
        "Réaliser une application de données fiscales",
        "Réaliser une application de gestion et d’envoi d’informations",
        "Application de gestion d’élèves de l’ecole de Musique de Voreppe",
        "Maintenir les applications Etat Civil et de la Population en Symfony 1.4.",
    ]);

    ExperienceRecord {
        title: "Mairie de Voreppe".to_string(),
        job1: "Développeur Web Symfony 2".to_string(),
        job2: None,
        year: Some(1),
        month: None,
        description: "Développement de plusieurs applications métiers au sein du service \
                      informatique."
            .to_string(),
        description2: Some(RichText::new(format!(
            "Développement de plusieurs applications métiers au sein de la DSI.\n\n\
             Réalisation d'applications métiers avec Symfony 2.3 :\n\n{apps}"
        ))),
        img: symfony_logo(),
    }
}

fn isere() -> ExperienceRecord {
    ExperienceRecord {
        title: "Conseil général de l'Isère".to_string(),
        job1: "Développeur PHP Symfony 2 en Stage".to_string(),
        job2: None,
        year: None,
        month: Some(4),
        description: "Développement avec le Framework Symfony 2.1 d’un référentiel \
                      d’applications : export de données, CRUD des données"
            .to_string(),
        description2: None,
        img: symfony_logo(),
    }
}
