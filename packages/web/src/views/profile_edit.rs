use api::{ApiClient, ApiError, FileUpload, ProfileUpdate};
use dioxus::prelude::*;
use session::UserRole;
use ui::{
    redirect, use_role_guard, use_session, validation, AlertBanner, AlertSeverity, Guard, Snackbar,
    Spinner, SKILLS,
};

use crate::views::picked_file;

#[component]
pub fn EditClientProfile() -> Element {
    rsx! {
        ProfileEditor { role: UserRole::Client }
    }
}

#[component]
pub fn EditFreelancerProfile() -> Element {
    rsx! {
        ProfileEditor { role: UserRole::Freelancer }
    }
}

#[component]
pub fn EditAdminProfile() -> Element {
    rsx! {
        ProfileEditor { role: UserRole::Administrateur }
    }
}

/// Profile edit form. A successful update signs the user out so the next
/// login picks up the fresh profile end to end.
#[component]
fn ProfileEditor(role: UserRole) -> Element {
    let guard = use_role_guard(role);
    let mut session = use_session();

    let mut nom_complet = use_signal(String::new);
    let mut numero_telephone = use_signal(String::new);
    let mut specialisation = use_signal(String::new);
    let mut intitule_poste = use_signal(String::new);
    let mut competences = use_signal(Vec::<String>::new);
    let mut photo = use_signal(|| None::<FileUpload>);
    let mut cv = use_signal(|| None::<FileUpload>);
    let mut seeded = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut snackbar = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    // Seed the form once from the fetched profile.
    use_effect(move || {
        if let Guard::Authorized(user) = guard() {
            if !seeded() {
                nom_complet.set(user.nom_complet.clone());
                numero_telephone.set(user.numero_telephone.clone());
                specialisation.set(user.specialisation.unwrap_or_default());
                intitule_poste.set(user.intitule_poste.unwrap_or_default());
                competences.set(user.competences);
                seeded.set(true);
            }
        }
    });

    if !matches!(guard(), Guard::Authorized(_)) {
        return rsx! { Spinner {} };
    }

    let is_freelancer = role == UserRole::Freelancer;

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);

            if nom_complet().trim().is_empty() {
                error.set(Some("Le nom complet est requis".to_string()));
                return;
            }
            if let Err(message) = validation::validate_phone(numero_telephone().trim()) {
                error.set(Some(message.to_string()));
                return;
            }
            if let Some(file) = photo() {
                if let Err(message) =
                    validation::validate_photo(Some((&file.mime, file.bytes.len() as u64)))
                {
                    error.set(Some(message.to_string()));
                    return;
                }
            }
            if let Some(file) = cv() {
                if let Err(message) =
                    validation::validate_cv(Some((&file.mime, file.bytes.len() as u64)), false)
                {
                    error.set(Some(message.to_string()));
                    return;
                }
            }

            busy.set(true);
            let update = ProfileUpdate {
                nom_complet: Some(nom_complet().trim().to_string()),
                numero_telephone: Some(numero_telephone().trim().to_string()),
                specialisation: is_freelancer.then(|| specialisation().trim().to_string()),
                intitule_poste: is_freelancer.then(|| intitule_poste().trim().to_string()),
                competences: is_freelancer.then(|| competences()),
                photo_profil: photo(),
                cv: cv(),
            };
            let token = session.access_token().unwrap_or_default();
            match ApiClient::new().update_profile(&token, update).await {
                Ok(_) => {
                    snackbar.set(Some(
                        "Profil mis à jour avec succès ! Déconnexion en cours...".to_string(),
                    ));
                    session.clear();
                    redirect("/login");
                }
                Err(ApiError::Unauthorized) => {
                    session.clear();
                    redirect("/login");
                }
                Err(ApiError::Fields(fields)) => error.set(Some(fields.to_string())),
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "page",
            div { class: "card",
                h1 { "Modifier mon profil" }
                if let Some(message) = error() {
                    AlertBanner { severity: AlertSeverity::Error, message }
                }
                form { onsubmit: submit,
                    div { class: "form-field",
                        label { "Nom complet" }
                        input {
                            value: "{nom_complet}",
                            oninput: move |evt| nom_complet.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Numéro de téléphone" }
                        input {
                            value: "{numero_telephone}",
                            oninput: move |evt| numero_telephone.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Photo de profil" }
                        input {
                            r#type: "file",
                            accept: "image/jpeg,image/png,image/gif",
                            onchange: move |evt| async move {
                                photo.set(picked_file(&evt).await);
                            },
                        }
                        if let Some(name) = photo().map(|f| f.file_name) {
                            span { class: "helper-text", "Fichier choisi : {name}" }
                        }
                    }
                    if is_freelancer {
                        div { class: "form-field",
                            label { "Spécialisation" }
                            input {
                                value: "{specialisation}",
                                oninput: move |evt| specialisation.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            label { "Intitulé de poste" }
                            input {
                                value: "{intitule_poste}",
                                oninput: move |evt| intitule_poste.set(evt.value()),
                            }
                        }
                        div { class: "form-field",
                            label { "Compétences" }
                            div { class: "chips",
                                for skill in SKILLS {
                                    button {
                                        key: "{skill}",
                                        r#type: "button",
                                        class: if competences().iter().any(|s| s == skill) {
                                            "chip chip-selected"
                                        } else {
                                            "chip"
                                        },
                                        onclick: move |_| {
                                            competences.with_mut(|list| {
                                                if let Some(pos) =
                                                    list.iter().position(|s| s == skill)
                                                {
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
                        div { class: "form-field",
                            label { "Remplacer le CV (PDF ou DOC, max 5MB)" }
                            input {
                                r#type: "file",
                                accept: ".pdf,.doc,.docx",
                                onchange: move |evt| async move {
                                    cv.set(picked_file(&evt).await);
                                },
                            }
                            if let Some(name) = cv().map(|f| f.file_name) {
                                span { class: "helper-text", "Fichier choisi : {name}" }
                            }
                        }
                    }
                    div { class: "wizard-nav",
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| redirect(&role.profile_path()),
                            "Annuler"
                        }
                        if busy() {
                            Spinner {}
                        } else {
                            button { class: "btn btn-primary", r#type: "submit", "Enregistrer" }
                        }
                    }
                }
            }
        }
        if let Some(message) = snackbar() {
            Snackbar {
                message,
                severity: AlertSeverity::Success,
                onclose: move |_| snackbar.set(None),
            }
        }
    }
}
