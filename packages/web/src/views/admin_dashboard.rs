use api::{ApiClient, ApiError, PlatformStats, User};
use dioxus::prelude::*;
use session::UserRole;
use ui::{
    redirect, use_role_guard, use_session, AlertBanner, AlertSeverity, Guard, NavDrawer, Snackbar,
    Spinner,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum AdminPanel {
    Dashboard,
    Utilisateurs,
}

const PANELS: [(AdminPanel, &str); 2] = [
    (AdminPanel::Dashboard, "Tableau de bord"),
    (AdminPanel::Utilisateurs, "Gestion des utilisateurs"),
];

#[component]
pub fn AdminDashboard() -> Element {
    let guard = use_role_guard(UserRole::Administrateur);
    let mut session = use_session();
    let mut panel = use_signal(|| AdminPanel::Dashboard);
    let mut stats = use_signal(PlatformStats::default);

    // The counters are informative only; the dashboard still renders if
    // they cannot be fetched. Like the other dashboards, the fetch waits
    // for the role check to settle.
    use_effect(move || {
        if !guard().is_authorized() {
            return;
        }
        spawn(async move {
            let token = session.access_token().unwrap_or_default();
            match ApiClient::new().admin_stats(&token).await {
                Ok(counters) => stats.set(counters),
                Err(err) => tracing::warn!(%err, "stats fetch failed"),
            }
        });
    });

    let user = match guard() {
        Guard::Authorized(user) => user,
        _ => return rsx! { Spinner {} },
    };

    rsx! {
        NavDrawer {
            title: "Administration",
            user_name: user.nom_complet.clone(),
            items: PANELS.iter().map(|(_, label)| label.to_string()).collect::<Vec<_>>(),
            selected: PANELS.iter().position(|(p, _)| *p == panel()).unwrap_or(0),
            on_select: move |index: usize| panel.set(PANELS[index].0),
            on_profile: move |_| redirect("/administrateur/profile"),
            on_logout: move |_| {
                session.clear();
                redirect("/login");
            },
        }
        main { class: "dashboard-main",
            match panel() {
                AdminPanel::Dashboard => rsx! {
                    h1 { "Vue d'ensemble de la plateforme" }
                    div { class: "stats-grid",
                        div { class: "stat-card",
                            p { class: "stat-value", "{stats().clients}" }
                            p { class: "stat-label", "Clients" }
                        }
                        div { class: "stat-card",
                            p { class: "stat-value", "{stats().freelancers}" }
                            p { class: "stat-label", "Freelancers" }
                        }
                        div { class: "stat-card",
                            p { class: "stat-value", "{stats().admins}" }
                            p { class: "stat-label", "Administrateurs" }
                        }
                        div { class: "stat-card",
                            p { class: "stat-value", "{stats().projects}" }
                            p { class: "stat-label", "Projets" }
                        }
                    }
                },
                AdminPanel::Utilisateurs => rsx! {
                    UsersManagement { current_admin_id: user.id }
                },
            }
        }
    }
}

#[component]
fn UsersManagement(current_admin_id: i64) -> Element {
    let mut session = use_session();
    let mut users = use_signal(Vec::<User>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut filter = use_signal(String::new);
    let mut snackbar = use_signal(|| None::<(String, AlertSeverity)>);

    let load = move || {
        spawn(async move {
            loading.set(true);
            error.set(None);
            let token = session.access_token().unwrap_or_default();
            match ApiClient::new().list_users(&token).await {
                Ok(list) => users.set(list),
                Err(ApiError::Unauthorized) => {
                    session.clear();
                    redirect("/login");
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    };

    use_future(move || async move {
        load();
    });

    let delete = move |user_id: i64| {
        spawn(async move {
            let token = session.access_token().unwrap_or_default();
            match ApiClient::new().delete_user(&token, user_id).await {
                Ok(()) => {
                    users.with_mut(|list| list.retain(|u| u.id != user_id));
                    snackbar.set(Some((
                        "Utilisateur supprimé avec succès".to_string(),
                        AlertSeverity::Success,
                    )));
                }
                Err(ApiError::Unauthorized) => {
                    session.clear();
                    redirect("/login");
                }
                Err(err) => snackbar.set(Some((err.to_string(), AlertSeverity::Error))),
            }
        });
    };

    let visible: Vec<User> = {
        let needle = filter().to_lowercase();
        users()
            .into_iter()
            .filter(|u| {
                needle.is_empty()
                    || u.nom_complet.to_lowercase().contains(&needle)
                    || u.email.to_lowercase().contains(&needle)
            })
            .collect()
    };

    rsx! {
        div { class: "card",
            h2 { "Gestion des utilisateurs" }
            if let Some(message) = error() {
                AlertBanner { severity: AlertSeverity::Error, message }
                button { class: "btn", onclick: move |_| load(), "Réessayer" }
            } else if loading() {
                Spinner {}
            } else {
                div { class: "form-field",
                    input {
                        placeholder: "Filtrer par nom ou email...",
                        value: "{filter}",
                        oninput: move |evt| filter.set(evt.value()),
                    }
                }
                table { class: "table",
                    thead {
                        tr {
                            th { "Nom" }
                            th { "Email" }
                            th { "Type" }
                            th { "Actions" }
                        }
                    }
                    tbody {
                        for user in visible {
                            tr { key: "{user.id}",
                                td { "{user.nom_complet}" }
                                td { "{user.email}" }
                                td { "{user.type_utilisateur.label()}" }
                                td {
                                    button {
                                        class: "btn btn-danger",
                                        // An admin cannot remove their own account.
                                        disabled: user.id == current_admin_id,
                                        onclick: {
                                            let id = user.id;
                                            move |_| delete(id)
                                        },
                                        "Supprimer"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        if let Some((message, severity)) = snackbar() {
            Snackbar { message, severity, onclose: move |_| snackbar.set(None) }
        }
    }
}
