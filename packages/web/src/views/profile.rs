use api::{backend_url, User};
use dioxus::prelude::*;
use session::UserRole;
use ui::{redirect, use_role_guard, Guard, Spinner};

/// Media fields come back as backend-relative paths.
pub(crate) fn media_url(path: &str) -> String {
    if path.starts_with("http") {
        path.to_string()
    } else {
        format!("{}{}", backend_url(), path)
    }
}

#[component]
pub fn ClientProfile() -> Element {
    rsx! {
        ProfileView { role: UserRole::Client }
    }
}

#[component]
pub fn FreelancerProfile() -> Element {
    rsx! {
        ProfileView { role: UserRole::Freelancer }
    }
}

#[component]
pub fn AdminProfile() -> Element {
    rsx! {
        ProfileView { role: UserRole::Administrateur }
    }
}

/// Read-only profile page, shared by the three roles. The freelancer block
/// renders only when the profile carries freelancer fields.
#[component]
fn ProfileView(role: UserRole) -> Element {
    let guard = use_role_guard(role);

    let user = match guard() {
        Guard::Authorized(user) => user,
        _ => return rsx! { Spinner {} },
    };

    rsx! {
        div { class: "page",
            div { class: "card",
                h1 { "Mon profil" }
                if let Some(photo) = user.photo_profil.as_deref() {
                    img { class: "profile-photo", src: media_url(photo) }
                }
                table { class: "table",
                    tbody {
                        tr { td { "Nom complet" } td { "{user.nom_complet}" } }
                        tr { td { "Email" } td { "{user.email}" } }
                        tr { td { "Téléphone" } td { "{user.numero_telephone}" } }
                        tr { td { "Type de compte" } td { "{user.type_utilisateur.label()}" } }
                        if let Some(spec) = user.specialisation.as_deref() {
                            tr { td { "Spécialisation" } td { "{spec}" } }
                        }
                        if let Some(poste) = user.intitule_poste.as_deref() {
                            tr { td { "Intitulé de poste" } td { "{poste}" } }
                        }
                        if let Some(rating) = user.moyenne_notes {
                            tr { td { "Note moyenne" } td { "{rating:.1} / 5" } }
                        }
                    }
                }
                if !user.competences.is_empty() {
                    h3 { "Compétences" }
                    div { class: "chips",
                        for skill in user.competences.iter() {
                            span { key: "{skill}", class: "chip", "{skill}" }
                        }
                    }
                }
                if let Some(cv) = user.cv.as_deref() {
                    p {
                        a { href: media_url(cv), target: "_blank", "Voir mon CV" }
                    }
                }
                div { class: "wizard-nav",
                    button {
                        class: "btn",
                        onclick: move |_| redirect(&role.dashboard_path()),
                        "Retour au tableau de bord"
                    }
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| redirect(role.edit_profile_path()),
                        "Modifier mon profil"
                    }
                }
            }
        }
    }
}
