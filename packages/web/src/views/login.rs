use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use session::Session;
use ui::{redirect, use_session, AlertBanner, AlertSeverity, Snackbar, Spinner};

use crate::Route;

/// Login form. On success the token pair and role are persisted and the user
/// lands on their role's dashboard.
#[component]
pub fn Login() -> Element {
    let mut session = use_session();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            busy.set(true);
            error.set(None);

            let email = email().trim().to_lowercase();
            let password = password();

            match ApiClient::new().login(&email, &password).await {
                Ok(token) => match token.user_type {
                    Some(role) => {
                        session.establish(Session::new(token.access, token.refresh, Some(role)));
                        success.set(Some(format!(
                            "Connexion réussie en tant que {} !",
                            role.label()
                        )));
                        redirect(&role.dashboard_path());
                    }
                    None => {
                        session.clear();
                        error.set(Some(
                            "Type de compte inconnu, contactez le support".to_string(),
                        ));
                        busy.set(false);
                    }
                },
                Err(err) => {
                    // A stale session must not survive a failed login.
                    session.clear();
                    let message = match err {
                        ApiError::Server { detail, .. } => detail,
                        ApiError::Unauthorized | ApiError::Fields(_) => {
                            "Email ou mot de passe incorrect".to_string()
                        }
                        other => other.to_string(),
                    };
                    error.set(Some(message));
                    busy.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "card auth-card",
            h1 { "Connexion" }
            if let Some(message) = error() {
                AlertBanner { severity: AlertSeverity::Error, message }
            }
            form { onsubmit: submit,
                div { class: "form-field",
                    label { r#for: "email", "Email" }
                    input {
                        id: "email",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                div { class: "form-field",
                    label { r#for: "password", "Mot de passe" }
                    input {
                        id: "password",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                if busy() {
                    Spinner {}
                } else {
                    button { class: "btn btn-primary", r#type: "submit", "Se connecter" }
                }
            }
            p {
                Link { to: Route::ResetRequest {}, "Mot de passe oublié ?" }
            }
            p {
                "Pas encore de compte ? "
                Link { to: Route::Signup {}, "Inscrivez-vous" }
            }
        }
        if let Some(message) = success() {
            Snackbar {
                message,
                severity: AlertSeverity::Success,
                onclose: move |_| success.set(None),
            }
        }
    }
}
