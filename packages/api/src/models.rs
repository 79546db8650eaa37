//! Wire types, named after the backend's French field names so serde maps
//! them without rename attributes.

use serde::{Deserialize, Serialize};
use session::UserRole;

/// An account as `/api/profile/` and the admin user list return it. The
/// freelancer-only fields are absent for clients and admins, hence the
/// defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub nom_complet: String,
    pub email: String,
    #[serde(default)]
    pub numero_telephone: String,
    #[serde(default)]
    pub photo_profil: Option<String>,
    pub type_utilisateur: UserRole,
    #[serde(default)]
    pub specialisation: Option<String>,
    #[serde(default)]
    pub intitule_poste: Option<String>,
    #[serde(default)]
    pub competences: Vec<String>,
    #[serde(default)]
    pub cv: Option<String>,
    #[serde(default)]
    pub moyenne_notes: Option<f64>,
    #[serde(default)]
    pub is_superuser: Option<bool>,
}

/// Decimal and date fields are strings on the wire (DRF `DecimalField` /
/// `DateField`); they stay strings here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub titre: String,
    pub description: String,
    pub budget_min: String,
    pub budget_max: String,
    pub deadline: String,
    #[serde(default)]
    pub competences_requises: Vec<String>,
    #[serde(default)]
    pub date_creation: String,
    #[serde(default)]
    pub postulations: Vec<Postulation>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PostulationStatus {
    EnAttente,
    Accepte,
    Refuse,
}

impl PostulationStatus {
    pub fn label(self) -> &'static str {
        match self {
            PostulationStatus::EnAttente => "En attente",
            PostulationStatus::Accepte => "Acceptée",
            PostulationStatus::Refuse => "Refusée",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Postulation {
    pub id: i64,
    pub message: String,
    pub statut: PostulationStatus,
    pub freelancer: User,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: i64,
    pub message: String,
    #[serde(default)]
    pub date_creation: String,
}

/// Admin dashboard counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlatformStats {
    #[serde(default)]
    pub clients: u64,
    #[serde(default)]
    pub freelancers: u64,
    #[serde(default)]
    pub admins: u64,
    #[serde(default)]
    pub projects: u64,
}

/// Body of a successful `/api/token/` response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access: String,
    pub refresh: String,
    #[serde(default)]
    pub user_type: Option<UserRole>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_minimal_client_profile() {
        let json = r#"{
            "id": 3,
            "nom_complet": "Aicha Ba",
            "email": "aicha@example.com",
            "numero_telephone": "44076356",
            "type_utilisateur": "client"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.type_utilisateur, UserRole::Client);
        assert!(user.competences.is_empty());
        assert!(user.cv.is_none());
        assert!(user.moyenne_notes.is_none());
    }

    #[test]
    fn test_user_freelancer_profile() {
        let json = r#"{
            "id": 7,
            "nom_complet": "Moussa Diop",
            "email": "moussa@example.com",
            "numero_telephone": "+22244076356",
            "photo_profil": "/media/photos/moussa.jpg",
            "type_utilisateur": "freelancer",
            "specialisation": "Développement Web",
            "intitule_poste": "Développeur Fullstack",
            "competences": ["SEO", "Développement Web"],
            "cv": "/media/cv/moussa.pdf",
            "moyenne_notes": 4.5
        }"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.competences.len(), 2);
        assert_eq!(user.moyenne_notes, Some(4.5));
    }

    #[test]
    fn test_project_decimal_and_date_stay_strings() {
        let json = r#"{
            "id": 12,
            "titre": "Site vitrine",
            "description": "Un site vitrine pour une boutique.",
            "budget_min": "1500.00",
            "budget_max": "3000.00",
            "deadline": "2026-10-01",
            "competences_requises": ["Développement Web"],
            "date_creation": "2026-08-20T10:30:00Z"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.budget_min, "1500.00");
        assert_eq!(project.deadline, "2026-10-01");
        assert!(project.postulations.is_empty());
    }

    #[test]
    fn test_postulation_status_wire_values() {
        for (wire, status) in [
            ("\"en_attente\"", PostulationStatus::EnAttente),
            ("\"accepte\"", PostulationStatus::Accepte),
            ("\"refuse\"", PostulationStatus::Refuse),
        ] {
            let parsed: PostulationStatus = serde_json::from_str(wire).unwrap();
            assert_eq!(parsed, status);
            assert_eq!(serde_json::to_string(&status).unwrap(), wire);
        }
    }

    #[test]
    fn test_token_response_without_user_type() {
        let json = r#"{"access": "A", "refresh": "R"}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.user_type, None);
    }

    #[test]
    fn test_platform_stats_defaults_missing_counters() {
        let stats: PlatformStats = serde_json::from_str(r#"{"clients": 4}"#).unwrap();
        assert_eq!(stats.clients, 4);
        assert_eq!(stats.projects, 0);
    }
}
