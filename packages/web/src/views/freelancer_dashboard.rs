use api::{ApiClient, ApiError, Notification, Project, User};
use dioxus::prelude::*;
use session::UserRole;
use ui::{
    redirect, use_role_guard, use_session, AlertBanner, AlertSeverity, Guard, NavDrawer,
    NotificationMenu, Snackbar, Spinner, SKILLS,
};

use crate::views::remove_notification;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FreelancerPanel {
    Dashboard,
    BrowseProjects,
    VoirNotifications,
}

const PANELS: [(FreelancerPanel, &str); 3] = [
    (FreelancerPanel::Dashboard, "Tableau de bord"),
    (FreelancerPanel::BrowseProjects, "Consulter les projets"),
    (FreelancerPanel::VoirNotifications, "Voir les notifications"),
];

#[component]
pub fn FreelancerDashboard() -> Element {
    let guard = use_role_guard(UserRole::Freelancer);
    let mut session = use_session();
    let mut panel = use_signal(|| FreelancerPanel::Dashboard);
    let mut projects = use_signal(Vec::<Project>::new);
    let mut notifications = use_signal(Vec::<Notification>::new);
    let mut snackbar = use_signal(|| None::<(String, AlertSeverity)>);
    let mut error = use_signal(|| None::<String>);

    let load_notifications = move || {
        spawn(async move {
            let token = session.access_token().unwrap_or_default();
            match ApiClient::new().notifications(&token).await {
                Ok(list) => notifications.set(list),
                Err(err) => tracing::warn!(%err, "notification fetch failed"),
            }
        });
    };

    // Fetches wait for the role check; see the client dashboard.
    use_effect(move || {
        if !guard().is_authorized() {
            return;
        }
        spawn(async move {
            let token = session.access_token().unwrap_or_default();
            match ApiClient::new().open_projects(&token).await {
                Ok(list) => projects.set(list),
                Err(ApiError::Unauthorized) => {
                    session.clear();
                    redirect("/login");
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            load_notifications();
        });
    });

    let mut fail = move |err: ApiError| {
        if err.is_unauthorized() {
            session.clear();
            redirect("/login");
        } else {
            snackbar.set(Some((err.to_string(), AlertSeverity::Error)));
        }
    };

    let delete_notification = move |id: i64| {
        spawn(async move {
            let token = session.access_token().unwrap_or_default();
            match ApiClient::new().delete_notification(&token, id).await {
                Ok(()) => notifications.with_mut(|list| remove_notification(list, id)),
                Err(err) => fail(err),
            }
        });
    };

    let user = match guard() {
        Guard::Authorized(user) => user,
        _ => return rsx! { Spinner {} },
    };

    rsx! {
        NavDrawer {
            title: "Espace freelancer",
            user_name: user.nom_complet.clone(),
            items: PANELS.iter().map(|(_, label)| label.to_string()).collect::<Vec<_>>(),
            selected: PANELS.iter().position(|(p, _)| *p == panel()).unwrap_or(0),
            on_select: move |index: usize| panel.set(PANELS[index].0),
            on_profile: move |_| redirect("/freelancer/profile"),
            on_logout: move |_| {
                session.clear();
                redirect("/login");
            },
        }
        main { class: "dashboard-main",
            div { class: "dashboard-topbar",
                NotificationMenu {
                    notifications: notifications(),
                    on_delete: move |id| delete_notification(id),
                    on_view_all: move |_| panel.set(FreelancerPanel::VoirNotifications),
                }
            }
            if let Some(message) = error() {
                AlertBanner { severity: AlertSeverity::Error, message }
            }
            match panel() {
                FreelancerPanel::Dashboard => rsx! {
                    FreelancerOverview { user: user.clone(), open_count: projects().len() }
                },
                FreelancerPanel::BrowseProjects => rsx! {
                    BrowseProjects {
                        projects: projects(),
                        on_applied: move |project_id: i64| {
                            // The backend hides applied-to projects on the next
                            // fetch; drop it locally right away.
                            projects.with_mut(|list| list.retain(|p| p.id != project_id));
                            snackbar.set(Some((
                                "Candidature envoyée avec succès !".to_string(),
                                AlertSeverity::Success,
                            )));
                            load_notifications();
                        },
                        on_error: fail,
                    }
                },
                FreelancerPanel::VoirNotifications => rsx! {
                    div { class: "card",
                        h2 { "Notifications" }
                        if notifications().is_empty() {
                            p { class: "empty-state", "Aucune notification" }
                        }
                        for notification in notifications() {
                            div { key: "{notification.id}", class: "notif-entry",
                                div { class: "notif-body",
                                    p { "{notification.message}" }
                                    span { class: "notif-date", "{notification.date_creation}" }
                                }
                                button {
                                    class: "notif-delete",
                                    onclick: {
                                        let id = notification.id;
                                        move |_| delete_notification(id)
                                    },
                                    "×"
                                }
                            }
                        }
                    }
                },
            }
        }
        if let Some((message, severity)) = snackbar() {
            Snackbar { message, severity, onclose: move |_| snackbar.set(None) }
        }
    }
}

#[component]
fn FreelancerOverview(user: User, open_count: usize) -> Element {
    rsx! {
        h1 { "Bienvenue, {user.nom_complet}" }
        div { class: "stats-grid",
            div { class: "stat-card",
                p { class: "stat-value", "{open_count}" }
                p { class: "stat-label", "Projets disponibles" }
            }
            if let Some(rating) = user.moyenne_notes {
                div { class: "stat-card",
                    p { class: "stat-value", "{rating:.1}" }
                    p { class: "stat-label", "Note moyenne" }
                }
            }
        }
        if let Some(spec) = user.specialisation.as_deref() {
            p { "Spécialisation : {spec}" }
        }
    }
}

fn matches_search(project: &Project, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    project.titre.to_lowercase().contains(&needle)
        || project.description.to_lowercase().contains(&needle)
}

fn matches_skills(project: &Project, selected: &[String]) -> bool {
    selected
        .iter()
        .all(|skill| project.competences_requises.contains(skill))
}

#[component]
fn BrowseProjects(
    projects: Vec<Project>,
    on_applied: EventHandler<i64>,
    on_error: EventHandler<ApiError>,
) -> Element {
    let session = use_session();
    let mut search = use_signal(String::new);
    let mut selected_skills = use_signal(Vec::<String>::new);
    // Project whose apply form is open, with the draft message.
    let mut applying_to = use_signal(|| None::<i64>);
    let mut message = use_signal(String::new);
    let mut busy = use_signal(|| false);

    let apply = move |project_id: i64| {
        spawn(async move {
            busy.set(true);
            let token = session.access_token().unwrap_or_default();
            match ApiClient::new()
                .apply_to_project(&token, project_id, message().trim())
                .await
            {
                Ok(()) => {
                    applying_to.set(None);
                    message.set(String::new());
                    on_applied.call(project_id);
                }
                Err(err) => on_error.call(err),
            }
            busy.set(false);
        });
    };

    let visible: Vec<Project> = projects
        .iter()
        .filter(|p| matches_search(p, &search()) && matches_skills(p, &selected_skills()))
        .cloned()
        .collect();

    rsx! {
        div { class: "card",
            h2 { "Projets disponibles" }
            div { class: "form-field",
                input {
                    placeholder: "Rechercher par titre ou description...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
            }
            div { class: "chips",
                for skill in SKILLS {
                    button {
                        key: "{skill}",
                        r#type: "button",
                        class: if selected_skills().iter().any(|s| s == skill) {
                            "chip chip-selected"
                        } else {
                            "chip"
                        },
                        onclick: move |_| {
                            selected_skills.with_mut(|list| {
                                if let Some(pos) = list.iter().position(|s| s == skill) {
                                    list.remove(pos);
                                } else {
                                    list.push(skill.to_string());
                                }
                            });
                        },
                        "{skill}"
                    }
                }
            }
        }
        if visible.is_empty() {
            p { class: "empty-state", "Aucun projet ne correspond à vos critères de recherche." }
        }
        div { class: "project-grid",
            for project in visible {
                div { key: "{project.id}", class: "card",
                    h3 { "{project.titre}" }
                    p { "{project.description}" }
                    p { class: "helper-text",
                        "Budget : {project.budget_min} - {project.budget_max} MRU"
                    }
                    p { class: "helper-text", "Date limite : {project.deadline}" }
                    div { class: "chips",
                        for skill in project.competences_requises.iter() {
                            span { key: "{skill}", class: "chip", "{skill}" }
                        }
                    }
                    if applying_to() == Some(project.id) {
                        div { class: "form-field",
                            label { "Message de candidature" }
                            textarea {
                                rows: 3,
                                value: "{message}",
                                oninput: move |evt| message.set(evt.value()),
                            }
                        }
                        button {
                            class: "btn btn-primary",
                            disabled: message().trim().is_empty() || busy(),
                            onclick: {
                                let id = project.id;
                                move |_| apply(id)
                            },
                            "Envoyer la candidature"
                        }
                        " "
                        button {
                            class: "btn",
                            onclick: move |_| applying_to.set(None),
                            "Annuler"
                        }
                    } else {
                        button {
                            class: "btn btn-primary",
                            onclick: {
                                let id = project.id;
                                move |_| {
                                    message.set(String::new());
                                    applying_to.set(Some(id));
                                }
                            },
                            "Postuler"
                        }
                    }
                }
            }
        }
    }
}
