use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use ui::{AlertBanner, AlertSeverity, Snackbar, Spinner};

use crate::Route;

/// Second half of the password reset flow, reached from the emailed link.
/// The backend appends `?status=invalid_token` when the token is already
/// dead, in which case only the "request a new link" card is shown.
#[component]
pub fn ResetConfirm(jeton: String, status: String) -> Element {
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut done = use_signal(|| false);
    let mut snackbar = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);
    let mut show_password = use_signal(|| false);

    if status == "invalid_token" {
        return rsx! {
            div { class: "card auth-card",
                h1 { "Lien expiré" }
                AlertBanner {
                    severity: AlertSeverity::Error,
                    message: "Lien invalide ou expiré. Veuillez demander un nouveau lien.",
                }
                Link { class: "btn btn-primary", to: Route::ResetRequest {},
                    "Demander un nouveau lien"
                }
            }
        };
    }

    let submit = {
        let jeton = jeton.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let jeton = jeton.clone();
            spawn(async move {
                error.set(None);
                if password() != confirm() {
                    error.set(Some("Les mots de passe ne correspondent pas".to_string()));
                    return;
                }
                busy.set(true);
                match ApiClient::new().reset_password(&jeton, &password()).await {
                    Ok(_) => {
                        done.set(true);
                        snackbar.set(Some("Mot de passe réinitialisé avec succès !".to_string()));
                    }
                    Err(ApiError::Server { detail, .. }) => {
                        let message = if detail.contains("jeton") {
                            "Lien invalide ou expiré".to_string()
                        } else {
                            detail
                        };
                        error.set(Some(message));
                    }
                    Err(err) => error.set(Some(err.to_string())),
                }
                busy.set(false);
            });
        }
    };

    rsx! {
        div { class: "card auth-card",
            h1 {
                if done() { "Réinitialisation réussie" } else { "Nouveau mot de passe" }
            }
            if let Some(message) = error() {
                AlertBanner { severity: AlertSeverity::Error, message }
            }
            if done() {
                AlertBanner {
                    severity: AlertSeverity::Success,
                    message: "Votre mot de passe a été mis à jour. Vous pouvez maintenant vous connecter.",
                }
                Link { class: "btn btn-primary", to: Route::Login {}, "Se connecter" }
            } else {
                form { onsubmit: submit,
                    div { class: "form-field",
                        label { "Nouveau mot de passe" }
                        input {
                            r#type: if show_password() { "text" } else { "password" },
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    div { class: "form-field",
                        label { "Confirmer le mot de passe" }
                        input {
                            r#type: if show_password() { "text" } else { "password" },
                            value: "{confirm}",
                            oninput: move |evt| confirm.set(evt.value()),
                        }
                    }
                    label {
                        input {
                            r#type: "checkbox",
                            checked: show_password(),
                            onchange: move |_| show_password.toggle(),
                        }
                        " Afficher le mot de passe"
                    }
                    if busy() {
                        Spinner {}
                    } else {
                        button { class: "btn btn-primary", r#type: "submit",
                            "Réinitialiser le mot de passe"
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
