//! Role guard for dashboard and profile views.
//!
//! Every protected view calls [`use_role_guard`] first and renders only on
//! [`Guard::Authorized`]. The guard owns the whole decision: missing session,
//! stale token, and wrong role all resolve to a redirect, so individual views
//! never reimplement that logic.

use api::{ApiClient, User};
use dioxus::prelude::*;
use session::UserRole;

use crate::session_ctx::use_session;

/// Outcome of the access check for a protected view.
#[derive(Clone, Debug, PartialEq)]
pub enum Guard {
    /// Profile fetch still in flight; render a spinner.
    Loading,
    /// Session valid and the role matches; the profile comes along for free.
    Authorized(User),
    /// No session or the token was rejected. A redirect to `/login` has been
    /// issued.
    SignedOut,
    /// Session valid but for another role. A redirect to that role's
    /// dashboard has been issued.
    WrongRole(UserRole),
}

impl Guard {
    /// True only once the profile check settled on the expected role.
    /// Dashboards gate their data fetches on this so nothing goes out while
    /// the check is pending or a redirect is on its way.
    pub fn is_authorized(&self) -> bool {
        matches!(self, Guard::Authorized(_))
    }
}

/// Hard navigation via `window.location`, leaving component state behind.
/// No-op off the web platform.
pub fn redirect(path: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!(path, "redirect skipped off-web");
    }
}

/// Check the session against the role a view requires.
pub fn use_role_guard(expected: UserRole) -> Signal<Guard> {
    let mut session = use_session();
    let mut guard = use_signal(|| Guard::Loading);

    use_future(move || async move {
        let Some(token) = session.access_token() else {
            guard.set(Guard::SignedOut);
            redirect("/login");
            return;
        };

        match ApiClient::new().profile(&token).await {
            Ok(user) => {
                let role = user.type_utilisateur;
                if role == expected {
                    guard.set(Guard::Authorized(user));
                } else {
                    tracing::warn!(%role, "role mismatch, redirecting");
                    guard.set(Guard::WrongRole(role));
                    redirect(&role.dashboard_path());
                }
            }
            Err(err) => {
                tracing::warn!(%err, "profile fetch failed, signing out");
                session.clear();
                guard.set(Guard::SignedOut);
                redirect("/login");
            }
        }
    });

    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: UserRole) -> User {
        User {
            id: 1,
            nom_complet: "Fatou Sy".to_string(),
            email: "fatou@example.com".to_string(),
            numero_telephone: String::new(),
            photo_profil: None,
            type_utilisateur: role,
            specialisation: None,
            intitule_poste: None,
            competences: Vec::new(),
            cv: None,
            moyenne_notes: None,
            is_superuser: None,
        }
    }

    #[test]
    fn test_only_authorized_passes_the_gate() {
        assert!(Guard::Authorized(user(UserRole::Client)).is_authorized());
        assert!(!Guard::Loading.is_authorized());
        assert!(!Guard::SignedOut.is_authorized());
        assert!(!Guard::WrongRole(UserRole::Freelancer).is_authorized());
    }
}
