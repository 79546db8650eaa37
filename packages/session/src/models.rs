use serde::{Deserialize, Serialize};
use std::fmt;

/// Account role as the backend reports it in `type_utilisateur` and in the
/// token response's `user_type` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Client,
    Freelancer,
    Administrateur,
}

impl UserRole {
    /// The wire string, also used in client-side route paths.
    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Client => "client",
            UserRole::Freelancer => "freelancer",
            UserRole::Administrateur => "administrateur",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "client" => Some(UserRole::Client),
            "freelancer" => Some(UserRole::Freelancer),
            "administrateur" => Some(UserRole::Administrateur),
            _ => None,
        }
    }

    /// `/{role}/dashboard`, the landing page after login and the redirect
    /// target on a role mismatch.
    pub fn dashboard_path(self) -> String {
        format!("/{}/dashboard", self.as_str())
    }

    pub fn profile_path(self) -> String {
        format!("/{}/profile", self.as_str())
    }

    /// Edit routes are not uniform: the admin edit page lives under `/admin/`.
    pub fn edit_profile_path(self) -> &'static str {
        match self {
            UserRole::Client => "/client/profil/edit",
            UserRole::Freelancer => "/freelancer/profil/edit",
            UserRole::Administrateur => "/admin/profil/edit",
        }
    }

    /// Display label shown in dashboard chrome.
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Client => "Client",
            UserRole::Freelancer => "Freelancer",
            UserRole::Administrateur => "Administrateur",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
