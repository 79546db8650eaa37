use api::{ApiClient, ApiError};
use dioxus::prelude::*;
use ui::{AlertBanner, AlertSeverity, Snackbar, Spinner};

use crate::Route;

/// First half of the password reset flow: ask for the account email. The
/// confirmation deliberately does not reveal whether the address exists.
#[component]
pub fn ResetRequest() -> Element {
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut sent = use_signal(|| false);
    let mut snackbar = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            busy.set(true);
            error.set(None);
            let address = email().trim().to_lowercase();
            match ApiClient::new().request_password_reset(&address).await {
                Ok(_) => {
                    sent.set(true);
                    snackbar.set(Some(
                        "Si cet email existe, un lien de réinitialisation a été envoyé.".to_string(),
                    ));
                }
                Err(ApiError::Server { detail, .. }) => error.set(Some(detail)),
                Err(err) => error.set(Some(err.to_string())),
            }
            busy.set(false);
        });
    };

    rsx! {
        div { class: "card auth-card",
            h1 {
                if sent() { "Email envoyé" } else { "Réinitialisation du mot de passe" }
            }
            if let Some(message) = error() {
                AlertBanner { severity: AlertSeverity::Error, message }
            }
            if sent() {
                AlertBanner {
                    severity: AlertSeverity::Success,
                    message: format!(
                        "Un email avec les instructions de réinitialisation a été envoyé à l'adresse {}.",
                        email()
                    ),
                }
                p { "Si vous ne recevez pas d'email, vérifiez votre dossier spam ou réessayez." }
                Link { class: "btn btn-primary", to: Route::Login {}, "Retour à la connexion" }
            } else {
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
                    if busy() {
                        Spinner {}
                    } else {
                        button { class: "btn btn-primary", r#type: "submit",
                            "Envoyer le lien de réinitialisation"
                        }
                    }
                }
                p {
                    Link { to: Route::Login {}, "Retour à la connexion" }
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
