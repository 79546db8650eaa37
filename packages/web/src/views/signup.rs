use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use session::UserRole;
use ui::{
    AlertBanner, AlertSeverity, Field, PasswordStrengthBar, SignupForm, Spinner,
    SKILLS, WIZARD_STEPS,
};

use crate::views::picked_file;
use crate::Route;

/// Three-step signup wizard. Step 0 collects the shared fields, step 1 the
/// freelancer extras, step 2 recaps and submits. Fields validate as they are
/// edited; submission re-validates every step and snaps back to the first
/// one that fails.
#[component]
pub fn Signup() -> Element {
    let mut form = use_signal(SignupForm::default);
    let mut step = use_signal(|| 0usize);
    let mut live_errors = use_signal(Vec::<ui::FieldError>::new);
    let mut banner = use_signal(|| None::<String>);
    let mut server_errors = use_signal(Vec::<(String, String)>::new);
    let mut busy = use_signal(|| false);
    let mut registered = use_signal(|| false);
    let mut resend_info = use_signal(|| None::<String>);
    let mut show_password = use_signal(|| false);

    let field_error = move |field: Field| -> Option<&'static str> {
        live_errors()
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    };

    // Re-run the current step's rules for one field after it changed.
    let mut revalidate = move |field: Field| {
        let current = form().step_errors(step());
        let mut errors = live_errors();
        errors.retain(|e| e.field != field);
        errors.extend(current.into_iter().filter(|e| e.field == field));
        live_errors.set(errors);
    };

    let mut next_step = move || {
        let errors = form().step_errors(step());
        if errors.is_empty() {
            banner.set(None);
            server_errors.set(Vec::new());
            live_errors.set(Vec::new());
            step.set(step() + 1);
        } else {
            live_errors.set(errors);
            banner.set(Some(
                "Veuillez corriger les erreurs avant de continuer".to_string(),
            ));
        }
    };

    let submit = move |_| {
        spawn(async move {
            // Final gate: walk every step and snap back to the first failure.
            if let Some(invalid) = form().first_invalid_step() {
                let errors = form().step_errors(invalid);
                step.set(invalid);
                live_errors.set(errors);
                server_errors.set(Vec::new());
                banner.set(Some(
                    "Veuillez corriger les erreurs avant de continuer".to_string(),
                ));
                return;
            }

            busy.set(true);
            banner.set(None);
            server_errors.set(Vec::new());
            match ApiClient::new().register(form().into_registration()).await {
                Ok(()) => registered.set(true),
                Err(ApiError::Fields(fields)) => {
                    banner.set(Some(
                        "Veuillez corriger les erreurs suivantes :".to_string(),
                    ));
                    server_errors.set(fields.entries().to_vec());
                }
                Err(err) => banner.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    let resend = move |_| {
        spawn(async move {
            let email = form().email.trim().to_lowercase();
            match ApiClient::new().resend_verification(&email).await {
                Ok(detail) => resend_info.set(Some(detail)),
                Err(err) => resend_info.set(Some(err.to_string())),
            }
        });
    };

    if registered() {
        return rsx! {
            div { class: "card auth-card",
                h1 { "Inscription réussie !" }
                AlertBanner {
                    severity: AlertSeverity::Success,
                    message: "Un email de vérification a été envoyé à votre adresse. Cliquez sur le lien qu'il contient pour activer votre compte.",
                }
                if let Some(info) = resend_info() {
                    AlertBanner { severity: AlertSeverity::Info, message: info }
                }
                button { class: "btn", onclick: resend, "Renvoyer l'email de vérification" }
                p {
                    Link { to: Route::Login {}, "Aller à la page de connexion" }
                }
            }
        };
    }

    rsx! {
        div { class: "card wizard-card",
            h1 { "Créer un compte" }
            div { class: "stepper",
                for (index, title) in WIZARD_STEPS.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: if index == step() { "step step-active" } else { "step" },
                        "{title}"
                    }
                }
            }
            if let Some(message) = banner() {
                AlertBanner { severity: AlertSeverity::Error, message }
            }
            if !server_errors().is_empty() {
                ul { class: "error-list",
                    for (index, (field, message)) in server_errors().into_iter().enumerate() {
                        li { key: "{index}", "{field} : {message}" }
                    }
                }
            }

            match step() {
                0 => rsx! {
                    div { class: "form-field",
                        label { "Type de compte" }
                        select {
                            value: form().role.map(|r| r.as_str()).unwrap_or("client"),
                            onchange: move |evt| {
                                form.with_mut(|f| f.role = UserRole::parse(&evt.value()));
                            },
                            option { value: "client", "Client" }
                            option { value: "freelancer", "Freelancer" }
                        }
                    }
                    div { class: "form-field",
                        label { "Nom complet" }
                        input {
                            value: "{form().nom_complet}",
                            oninput: move |evt| {
                                form.with_mut(|f| f.nom_complet = evt.value());
                                revalidate(Field::NomComplet);
                            },
                        }
                        if let Some(message) = field_error(Field::NomComplet) {
                            span { class: "field-error", "{message}" }
                        }
                    }
                    div { class: "form-field",
                        label { "Email" }
                        input {
                            r#type: "email",
                            value: "{form().email}",
                            oninput: move |evt| {
                                form.with_mut(|f| f.email = evt.value());
                                revalidate(Field::Email);
                            },
                        }
                        if let Some(message) = field_error(Field::Email) {
                            span { class: "field-error", "{message}" }
                        }
                    }
                    div { class: "form-field",
                        label { "Mot de passe" }
                        input {
                            r#type: if show_password() { "text" } else { "password" },
                            value: "{form().password}",
                            oninput: move |evt| {
                                form.with_mut(|f| f.password = evt.value());
                                revalidate(Field::Password);
                            },
                        }
                        label {
                            input {
                                r#type: "checkbox",
                                checked: show_password(),
                                onchange: move |_| show_password.toggle(),
                            }
                            " Afficher le mot de passe"
                        }
                        if let Some(message) = field_error(Field::Password) {
                            span { class: "field-error", "{message}" }
                        } else {
                            span { class: "helper-text",
                                "Doit contenir 8+ caractères, majuscule, minuscule, chiffre et caractère spécial"
                            }
                        }
                        PasswordStrengthBar { password: form().password }
                    }
                    div { class: "form-field",
                        label { "Numéro de téléphone" }
                        input {
                            value: "{form().numero_telephone}",
                            oninput: move |evt| {
                                form.with_mut(|f| f.numero_telephone = evt.value());
                                revalidate(Field::Telephone);
                            },
                        }
                        if let Some(message) = field_error(Field::Telephone) {
                            span { class: "field-error", "{message}" }
                        }
                    }
                    div { class: "form-field",
                        label { "Photo de profil (optionnelle)" }
                        input {
                            r#type: "file",
                            accept: "image/jpeg,image/png,image/gif",
                            onchange: move |evt| async move {
                                let file = picked_file(&evt).await;
                                form.with_mut(|f| f.photo_profil = file);
                                revalidate(Field::Photo);
                            },
                        }
                        if let Some(message) = field_error(Field::Photo) {
                            span { class: "field-error", "{message}" }
                        }
                    }
                },
                1 => rsx! {
                    if form().is_freelancer() {
                        div { class: "form-field",
                            label { "CV (PDF ou DOC, max 5MB)" }
                            input {
                                r#type: "file",
                                accept: ".pdf,.doc,.docx",
                                onchange: move |evt| async move {
                                    let file = picked_file(&evt).await;
                                    form.with_mut(|f| f.cv = file);
                                    revalidate(Field::Cv);
                                },
                            }
                            if let Some(name) = form().cv.map(|f| f.file_name) {
                                span { class: "helper-text", "Fichier choisi : {name}" }
                            }
                            if let Some(message) = field_error(Field::Cv) {
                                span { class: "field-error", "{message}" }
                            }
                        }
                        div { class: "form-field",
                            label { "Spécialisation" }
                            input {
                                value: "{form().specialisation}",
                                oninput: move |evt| {
                                    form.with_mut(|f| f.specialisation = evt.value());
                                    revalidate(Field::Specialisation);
                                },
                            }
                            if let Some(message) = field_error(Field::Specialisation) {
                                span { class: "field-error", "{message}" }
                            }
                        }
                        div { class: "form-field",
                            label { "Intitulé de poste" }
                            input {
                                value: "{form().intitule_poste}",
                                oninput: move |evt| {
                                    form.with_mut(|f| f.intitule_poste = evt.value());
                                    revalidate(Field::IntitulePoste);
                                },
                            }
                            if let Some(message) = field_error(Field::IntitulePoste) {
                                span { class: "field-error", "{message}" }
                            }
                        }
                        div { class: "form-field",
                            label { "Compétences" }
                            div { class: "chips",
                                for skill in SKILLS {
                                    button {
                                        key: "{skill}",
                                        r#type: "button",
                                        class: if form().competences.iter().any(|s| s == skill) {
                                            "chip chip-selected"
                                        } else {
                                            "chip"
                                        },
                                        onclick: move |_| {
                                            form.with_mut(|f| {
                                                if let Some(pos) =
                                                    f.competences.iter().position(|s| s == skill)
                                                {
                                                    f.competences.remove(pos);
                                                } else {
                                                    f.competences.push(skill.to_string());
                                                }
                                            });
                                        },
                                        "{skill}"
                                    }
                                }
                            }
                        }
                    } else {
                        p { class: "empty-state",
                            "Aucune information supplémentaire requise pour les clients."
                        }
                    }
                },
                _ => rsx! {
                    h3 { "Récapitulatif" }
                    table { class: "table",
                        tbody {
                            tr { td { "Type de compte" } td { {form().role.unwrap_or(UserRole::Client).label()} } }
                            tr { td { "Nom complet" } td { "{form().nom_complet}" } }
                            tr { td { "Email" } td { "{form().email}" } }
                            tr { td { "Téléphone" } td { "{form().numero_telephone}" } }
                            if form().is_freelancer() {
                                tr { td { "Spécialisation" } td { "{form().specialisation}" } }
                                tr { td { "Intitulé de poste" } td { "{form().intitule_poste}" } }
                                tr { td { "Compétences" } td { {form().competences.join(", ")} } }
                            }
                        }
                    }
                },
            }

            div { class: "wizard-nav",
                button {
                    class: "btn",
                    disabled: step() == 0 || busy(),
                    onclick: move |_| {
                        banner.set(None);
                        server_errors.set(Vec::new());
                        live_errors.set(Vec::new());
                        step.set(step().saturating_sub(1));
                    },
                    "Précédent"
                }
                if step() + 1 < WIZARD_STEPS.len() {
                    button { class: "btn btn-primary", onclick: move |_| next_step(), "Suivant" }
                } else if busy() {
                    Spinner {}
                } else {
                    button { class: "btn btn-success", onclick: submit, "S'inscrire" }
                }
            }
            p {
                "Déjà un compte ? "
                Link { to: Route::Login {}, "Connectez-vous" }
            }
        }
    }
}
