use api::{ApiClient, ApiError, NewProject, Notification, PostulationStatus, Project, User};
use dioxus::prelude::*;
use session::UserRole;
use ui::{
    redirect, use_role_guard, use_session, AlertBanner, AlertSeverity, Guard, NavDrawer,
    NotificationMenu, Snackbar, Spinner, StarRating, SKILLS,
};

use crate::views::{apply_decision, remove_notification};

/// Panels of the client dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ClientPanel {
    Dashboard,
    PublierProjet,
    ConsulterProjets,
    GererFreelancers,
    VoirNotifications,
}

const PANELS: [(ClientPanel, &str); 5] = [
    (ClientPanel::Dashboard, "Tableau de bord"),
    (ClientPanel::PublierProjet, "Publier un projet"),
    (ClientPanel::ConsulterProjets, "Consulter mes projets"),
    (ClientPanel::GererFreelancers, "Gérer les freelancers"),
    (ClientPanel::VoirNotifications, "Voir les notifications"),
];

#[component]
pub fn ClientDashboard() -> Element {
    let guard = use_role_guard(UserRole::Client);
    let mut session = use_session();
    let mut panel = use_signal(|| ClientPanel::Dashboard);
    let mut projects = use_signal(Vec::<Project>::new);
    let mut notifications = use_signal(Vec::<Notification>::new);
    let mut snackbar = use_signal(|| None::<(String, AlertSeverity)>);
    let mut error = use_signal(|| None::<String>);

    let load_notifications = move || {
        spawn(async move {
            let token = session.access_token().unwrap_or_default();
            // Notifications are decoration here: a failure must not take the
            // dashboard down with it.
            match ApiClient::new().notifications(&token).await {
                Ok(list) => notifications.set(list),
                Err(err) => tracing::warn!(%err, "notification fetch failed"),
            }
        });
    };

    // Profile check first. The project and notification fetches wait for
    // the guard to settle; nothing goes out signed-out or mid-redirect.
    use_effect(move || {
        if !guard().is_authorized() {
            return;
        }
        spawn(async move {
            let token = session.access_token().unwrap_or_default();
            match ApiClient::new().my_projects(&token).await {
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

    let on_published = move |project: Project| {
        snackbar.set(Some((
            format!("Projet \"{}\" créé avec succès !", project.titre),
            AlertSeverity::Success,
        )));
        projects.with_mut(|list| list.push(project));
        load_notifications();
        panel.set(ClientPanel::ConsulterProjets);
    };

    rsx! {
        NavDrawer {
            title: "Espace client",
            user_name: user.nom_complet.clone(),
            items: PANELS.iter().map(|(_, label)| label.to_string()).collect::<Vec<_>>(),
            selected: PANELS.iter().position(|(p, _)| *p == panel()).unwrap_or(0),
            on_select: move |index: usize| panel.set(PANELS[index].0),
            on_profile: move |_| redirect("/client/profile"),
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
                    on_view_all: move |_| panel.set(ClientPanel::VoirNotifications),
                }
            }
            if let Some(message) = error() {
                AlertBanner { severity: AlertSeverity::Error, message }
            }
            match panel() {
                ClientPanel::Dashboard => rsx! {
                    ClientOverview { user: user.clone(), projects: projects() }
                },
                ClientPanel::PublierProjet => rsx! {
                    PublishProject { on_published, on_error: fail }
                },
                ClientPanel::ConsulterProjets => rsx! {
                    MyProjects {
                        projects: projects(),
                        on_removed: move |(id, message): (i64, String)| {
                            projects.with_mut(|list| list.retain(|p| p.id != id));
                            snackbar.set(Some((message, AlertSeverity::Success)));
                        },
                        on_error: fail,
                    }
                },
                ClientPanel::GererFreelancers => rsx! {
                    ManageApplicants {
                        client_id: user.id,
                        on_decided: move |status: PostulationStatus| {
                            let message = match status {
                                PostulationStatus::Accepte => "Postulation acceptée avec succès",
                                _ => "Postulation refusée avec succès",
                            };
                            snackbar.set(Some((message.to_string(), AlertSeverity::Success)));
                        },
                        on_error: fail,
                    }
                },
                ClientPanel::VoirNotifications => rsx! {
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
fn ClientOverview(user: User, projects: Vec<Project>) -> Element {
    let open = projects.len();
    let pending: usize = projects
        .iter()
        .map(|p| {
            p.postulations
                .iter()
                .filter(|a| a.statut == PostulationStatus::EnAttente)
                .count()
        })
        .sum();

    rsx! {
        h1 { "Bienvenue, {user.nom_complet}" }
        div { class: "stats-grid",
            div { class: "stat-card",
                p { class: "stat-value", "{open}" }
                p { class: "stat-label", "Projets en cours" }
            }
            div { class: "stat-card",
                p { class: "stat-value", "{pending}" }
                p { class: "stat-label", "Candidatures en attente" }
            }
        }
    }
}

/// Today's date, `YYYY-MM-DD`, for the deadline input's lower bound.
fn today() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let iso: String = js_sys::Date::new_0().to_iso_string().into();
        iso.chars().take(10).collect()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

#[component]
fn PublishProject(
    on_published: EventHandler<Project>,
    on_error: EventHandler<ApiError>,
) -> Element {
    let session = use_session();
    let mut titre = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut budget_min = use_signal(String::new);
    let mut budget_max = use_signal(String::new);
    let mut deadline = use_signal(String::new);
    let mut skills = use_signal(Vec::<String>::new);
    let mut busy = use_signal(|| false);
    let mut form_error = use_signal(|| None::<String>);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            form_error.set(None);
            if titre().trim().is_empty() || description().trim().is_empty() {
                form_error.set(Some("Le titre et la description sont requis".to_string()));
                return;
            }
            busy.set(true);
            let payload = NewProject {
                titre: titre().trim().to_string(),
                description: description().trim().to_string(),
                budget_min: budget_min(),
                budget_max: budget_max(),
                deadline: deadline(),
                competences_requises: skills(),
            };
            let token = session.access_token().unwrap_or_default();
            match ApiClient::new().create_project(&token, &payload).await {
                Ok(project) => on_published.call(project),
                Err(ApiError::Fields(fields)) => form_error.set(Some(fields.to_string())),
                Err(err) => on_error.call(err),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "card",
            h2 { "Publier un projet" }
            if let Some(message) = form_error() {
                AlertBanner { severity: AlertSeverity::Error, message }
            }
            form { onsubmit: submit,
                div { class: "form-field",
                    label { "Titre" }
                    input { value: "{titre}", oninput: move |evt| titre.set(evt.value()) }
                }
                div { class: "form-field",
                    label { "Description" }
                    textarea {
                        rows: 5,
                        value: "{description}",
                        oninput: move |evt| description.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { "Budget minimum (MRU)" }
                    input {
                        r#type: "number",
                        min: "0",
                        value: "{budget_min}",
                        oninput: move |evt| budget_min.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { "Budget maximum (MRU)" }
                    input {
                        r#type: "number",
                        // The maximum can never undercut the minimum.
                        min: "{budget_min}",
                        value: "{budget_max}",
                        oninput: move |evt| budget_max.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { "Date limite" }
                    input {
                        r#type: "date",
                        min: today(),
                        value: "{deadline}",
                        oninput: move |evt| deadline.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { "Compétences requises" }
                    div { class: "chips",
                        for skill in SKILLS {
                            button {
                                key: "{skill}",
                                r#type: "button",
                                class: if skills().iter().any(|s| s == skill) {
                                    "chip chip-selected"
                                } else {
                                    "chip"
                                },
                                onclick: move |_| {
                                    skills.with_mut(|list| {
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
                if busy() {
                    Spinner {}
                } else {
                    button { class: "btn btn-primary", r#type: "submit", "Publier" }
                }
            }
        }
    }
}

#[component]
fn MyProjects(
    projects: Vec<Project>,
    on_removed: EventHandler<(i64, String)>,
    on_error: EventHandler<ApiError>,
) -> Element {
    let session = use_session();
    // Project being closed: its id plus the freelancer to rate.
    let mut rating_target = use_signal(|| None::<(i64, User)>);
    let mut note = use_signal(|| 0u8);
    let mut rating_error = use_signal(|| None::<String>);

    let cancel = move |project_id: i64| {
        spawn(async move {
            let token = session.access_token().unwrap_or_default();
            match ApiClient::new().cancel_project(&token, project_id).await {
                Ok(()) => on_removed.call((project_id, "Projet annulé avec succès".to_string())),
                Err(err) => on_error.call(err),
            }
        });
    };

    let finish = move |project_id: i64| {
        spawn(async move {
            let token = session.access_token().unwrap_or_default();
            match ApiClient::new().accepted_freelancer(&token, project_id).await {
                Ok(freelancer) => {
                    note.set(0);
                    rating_error.set(None);
                    rating_target.set(Some((project_id, freelancer)));
                }
                Err(err) => on_error.call(err),
            }
        });
    };

    let submit_rating = move |_| {
        spawn(async move {
            let Some((project_id, freelancer)) = rating_target() else {
                return;
            };
            if !(1..=5).contains(&note()) {
                rating_error.set(Some(
                    "Veuillez donner une note entre 1 et 5 étoiles".to_string(),
                ));
                return;
            }
            let token = session.access_token().unwrap_or_default();
            let client = ApiClient::new();
            match client.rate_freelancer(&token, freelancer.id, note()).await {
                Ok(()) => match client.delete_project(&token, project_id).await {
                    Ok(()) => {
                        rating_target.set(None);
                        on_removed.call((
                            project_id,
                            "Évaluation effectuée avec succès et projet terminé".to_string(),
                        ));
                    }
                    Err(err) => on_error.call(err),
                },
                Err(err) => on_error.call(err),
            }
        });
    };

    rsx! {
        div { class: "card",
            h2 { "Mes projets" }
            if projects.is_empty() {
                p { class: "empty-state", "Vous n'avez publié aucun projet." }
            } else {
                table { class: "table",
                    thead {
                        tr {
                            th { "Titre" }
                            th { "Budget" }
                            th { "Date limite" }
                            th { "Candidatures" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for project in projects.iter() {
                            tr { key: "{project.id}",
                                td { "{project.titre}" }
                                td { "{project.budget_min} - {project.budget_max} MRU" }
                                td { "{project.deadline}" }
                                td { "{project.postulations.len()}" }
                                td {
                                    button {
                                        class: "btn btn-danger",
                                        onclick: {
                                            let id = project.id;
                                            move |_| cancel(id)
                                        },
                                        "Annuler"
                                    }
                                    " "
                                    button {
                                        class: "btn btn-success",
                                        onclick: {
                                            let id = project.id;
                                            move |_| finish(id)
                                        },
                                        "Terminer"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        if let Some((_, freelancer)) = rating_target() {
            div { class: "card",
                h3 { "Évaluer {freelancer.nom_complet}" }
                if let Some(message) = rating_error() {
                    AlertBanner { severity: AlertSeverity::Error, message }
                }
                StarRating { value: note(), onchange: move |value| note.set(value) }
                div { class: "wizard-nav",
                    button { class: "btn", onclick: move |_| rating_target.set(None), "Annuler" }
                    button { class: "btn btn-primary", onclick: submit_rating,
                        "Valider et terminer le projet"
                    }
                }
            }
        }
    }
}

#[component]
fn ManageApplicants(
    client_id: i64,
    on_decided: EventHandler<PostulationStatus>,
    on_error: EventHandler<ApiError>,
) -> Element {
    let session = use_session();
    // This panel re-fetches on its own: unlike the projects table it needs
    // the postulations expanded.
    let mut projects = use_signal(Vec::<Project>::new);
    let mut loading = use_signal(|| true);

    use_future(move || async move {
        let token = session.access_token().unwrap_or_default();
        match ApiClient::new().user_projects(&token, client_id).await {
            Ok(list) => projects.set(list),
            Err(err) => on_error.call(err),
        }
        loading.set(false);
    });

    let decide = move |(postulation_id, accept): (i64, bool)| {
        spawn(async move {
            let token = session.access_token().unwrap_or_default();
            let client = ApiClient::new();
            let result = if accept {
                client.accept_postulation(&token, postulation_id).await
            } else {
                client.reject_postulation(&token, postulation_id).await
            };
            match result {
                Ok(()) => {
                    let status = if accept {
                        PostulationStatus::Accepte
                    } else {
                        PostulationStatus::Refuse
                    };
                    projects.with_mut(|list| apply_decision(list, postulation_id, status));
                    on_decided.call(status);
                }
                Err(err) => on_error.call(err),
            }
        });
    };

    if loading() {
        return rsx! { Spinner {} };
    }

    let projects = projects();
    let has_applicants = projects.iter().any(|p| !p.postulations.is_empty());

    rsx! {
        div { class: "card",
            h2 { "Candidatures reçues" }
            if !has_applicants {
                p { class: "empty-state", "Aucune candidature pour le moment." }
            }
            for project in projects.iter().filter(|p| !p.postulations.is_empty()) {
                div { key: "{project.id}",
                    h3 { "{project.titre}" }
                    for postulation in project.postulations.iter() {
                        div { key: "{postulation.id}", class: "card",
                            p {
                                strong { "{postulation.freelancer.nom_complet}" }
                                if let Some(specialisation) = postulation.freelancer.specialisation.as_deref() {
                                    span { " - {specialisation}" }
                                }
                            }
                            if let Some(rating) = postulation.freelancer.moyenne_notes {
                                p { class: "helper-text", "Note moyenne : {rating:.1} / 5" }
                            }
                            p { "{postulation.message}" }
                            p { class: "helper-text", "Statut : {postulation.statut.label()}" }
                            div {
                                button {
                                    class: "btn btn-success",
                                    disabled: postulation.statut != PostulationStatus::EnAttente,
                                    onclick: {
                                        let id = postulation.id;
                                        move |_| decide((id, true))
                                    },
                                    "Accepter"
                                }
                                " "
                                button {
                                    class: "btn btn-danger",
                                    disabled: postulation.statut != PostulationStatus::EnAttente,
                                    onclick: {
                                        let id = postulation.id;
                                        move |_| decide((id, false))
                                    },
                                    "Refuser"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
