//! In-place list updates the dashboards apply after a mutation succeeds.

use api::{Notification, PostulationStatus, Project};

/// Drop the deleted notification; every other entry stays.
pub(crate) fn remove_notification(list: &mut Vec<Notification>, id: i64) {
    list.retain(|n| n.id != id);
}

/// Rewrite the decided postulation's statut. Sibling postulations, on the
/// same project or any other, keep theirs.
pub(crate) fn apply_decision(
    projects: &mut [Project],
    postulation_id: i64,
    statut: PostulationStatus,
) {
    for project in projects.iter_mut() {
        for postulation in project.postulations.iter_mut() {
            if postulation.id == postulation_id {
                postulation.statut = statut;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{Postulation, User, UserRole};

    fn notification(id: i64) -> Notification {
        Notification {
            id,
            message: format!("notification {id}"),
            date_creation: "2026-08-20T10:30:00Z".to_string(),
        }
    }

    fn freelancer(id: i64) -> User {
        User {
            id,
            nom_complet: format!("Freelancer {id}"),
            email: format!("f{id}@example.com"),
            numero_telephone: String::new(),
            photo_profil: None,
            type_utilisateur: UserRole::Freelancer,
            specialisation: None,
            intitule_poste: None,
            competences: Vec::new(),
            cv: None,
            moyenne_notes: None,
            is_superuser: None,
        }
    }

    fn postulation(id: i64) -> Postulation {
        Postulation {
            id,
            message: format!("candidature {id}"),
            statut: PostulationStatus::EnAttente,
            freelancer: freelancer(id * 10),
        }
    }

    fn project(id: i64, postulations: Vec<Postulation>) -> Project {
        Project {
            id,
            titre: format!("Projet {id}"),
            description: String::new(),
            budget_min: "1000.00".to_string(),
            budget_max: "2000.00".to_string(),
            deadline: "2026-10-01".to_string(),
            competences_requises: Vec::new(),
            date_creation: String::new(),
            postulations,
        }
    }

    #[test]
    fn test_remove_notification_drops_only_that_id() {
        let mut list = vec![notification(1), notification(2), notification(3)];
        remove_notification(&mut list, 2);
        assert_eq!(
            list.iter().map(|n| n.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn test_remove_notification_unknown_id_leaves_list_alone() {
        let mut list = vec![notification(1), notification(2)];
        remove_notification(&mut list, 99);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_apply_decision_touches_only_the_decided_postulation() {
        let mut projects = vec![
            project(1, vec![postulation(10), postulation(11)]),
            project(2, vec![postulation(20)]),
        ];
        apply_decision(&mut projects, 10, PostulationStatus::Accepte);
        assert_eq!(projects[0].postulations[0].statut, PostulationStatus::Accepte);
        assert_eq!(
            projects[0].postulations[1].statut,
            PostulationStatus::EnAttente
        );
        assert_eq!(
            projects[1].postulations[0].statut,
            PostulationStatus::EnAttente
        );
    }

    #[test]
    fn test_apply_decision_refusal() {
        let mut projects = vec![project(1, vec![postulation(10), postulation(11)])];
        apply_decision(&mut projects, 11, PostulationStatus::Refuse);
        assert_eq!(
            projects[0].postulations[0].statut,
            PostulationStatus::EnAttente
        );
        assert_eq!(projects[0].postulations[1].statut, PostulationStatus::Refuse);
    }
}
