use api::ApiClient;
use dioxus::prelude::*;
use ui::{AlertBanner, AlertSeverity};

use crate::Route;

/// Landing page of the verification link sent by email. The backend redirects
/// here with `?status=` describing the outcome; an empty status means the
/// link was corrupt.
#[component]
pub fn VerifyEmail(status: String, email: String) -> Element {
    let mut resent = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let resend = {
        let email = email.clone();
        move |_| {
            let email = email.clone();
            spawn(async move {
                match ApiClient::new().resend_verification(&email).await {
                    Ok(_) => resent.set(true),
                    Err(err) => error.set(Some(err.to_string())),
                }
            });
        }
    };

    let status = if resent() { "resent" } else { status.as_str() };

    rsx! {
        div { class: "card auth-card",
            if let Some(message) = error() {
                AlertBanner { severity: AlertSeverity::Error, message }
            }
            match status {
                "success" => rsx! {
                    h1 { "Félicitations !" }
                    p { "Votre email {email} a été vérifié avec succès." }
                    Link { class: "btn btn-primary", to: Route::Login {}, "Se connecter" }
                },
                "expired" => rsx! {
                    h1 { "Lien expiré" }
                    p { "Le lien de vérification a expiré. Veuillez demander un nouveau lien." }
                    button { class: "btn btn-primary", onclick: resend,
                        "Renvoyer l'email de vérification"
                    }
                },
                "deja_verifie" => rsx! {
                    h1 { "Email déjà vérifié" }
                    p { "Votre compte a déjà été vérifié. Vous pouvez vous connecter." }
                    Link { class: "btn btn-primary", to: Route::Login {}, "Se connecter" }
                },
                "resent" => rsx! {
                    h1 { "Email envoyé !" }
                    p { "Un nouveau lien de vérification a été envoyé à {email}." }
                },
                _ => rsx! {
                    h1 { "Lien invalide" }
                    p { "Le lien de vérification est invalide ou corrompu." }
                },
            }
        }
    }
}
