use dioxus::prelude::*;

use crate::Route;

/// Public landing page.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-hero",
            h1 { "Trouvez le freelance qu'il vous faut" }
            p { "Publiez vos projets, recevez des candidatures et collaborez avec des freelances qualifiés." }
            div { class: "home-actions",
                Link { class: "btn btn-primary", to: Route::Signup {}, "Créer un compte" }
                Link { class: "btn", to: Route::Login {}, "Se connecter" }
            }
        }
        footer { class: "site-footer",
            p { "© 2025 — Plateforme de mise en relation clients & freelances" }
        }
    }
}
