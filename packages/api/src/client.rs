//! The HTTP client. One method per backend endpoint; every method returns
//! `Result<_, ApiError>` and authenticated ones take the access token.

use reqwest::multipart::{Form, Part};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::config::backend_url;
use crate::error::ApiError;
use crate::models::{Notification, PlatformStats, Project, TokenResponse, User};

/// A file picked in the browser, carried as raw bytes plus the metadata the
/// multipart part needs.
#[derive(Clone, Debug, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    fn into_part(self) -> Result<Part, ApiError> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime)
            .map_err(|_| ApiError::Decode)
    }
}

/// Everything the signup wizard collects, shaped for
/// `POST /api/utilisateur/inscription/`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationPayload {
    pub nom_complet: String,
    pub email: String,
    pub password: String,
    pub numero_telephone: String,
    pub type_utilisateur: String,
    pub photo_profil: Option<FileUpload>,
    // freelancer-only
    pub cv: Option<FileUpload>,
    pub specialisation: String,
    pub intitule_poste: String,
    pub competences: Vec<String>,
}

impl RegistrationPayload {
    /// The text parts of the registration form. Freelancer-only fields are
    /// included only for freelancers; competences go over comma-joined.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("nom_complet", self.nom_complet.clone()),
            ("email", self.email.clone()),
            ("password", self.password.clone()),
            ("numero_telephone", self.numero_telephone.clone()),
            ("type_utilisateur", self.type_utilisateur.clone()),
        ];
        if self.type_utilisateur == "freelancer" {
            fields.push(("specialisation", self.specialisation.clone()));
            fields.push(("intitule_poste", self.intitule_poste.clone()));
            fields.push(("competences", self.competences.join(",")));
        }
        fields
    }

    fn into_form(self) -> Result<Form, ApiError> {
        let is_freelancer = self.type_utilisateur == "freelancer";
        let mut form = Form::new();
        for (name, value) in self.text_fields() {
            form = form.text(name, value);
        }
        if let Some(photo) = self.photo_profil {
            form = form.part("photo_profil", photo.into_part()?);
        }
        if is_freelancer {
            if let Some(cv) = self.cv {
                form = form.part("cv", cv.into_part()?);
            }
        }
        Ok(form)
    }
}

/// Fields of `PUT /api/utilisateur/profil/`. `None` text fields are left out
/// of the form so the backend keeps the current value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileUpdate {
    pub nom_complet: Option<String>,
    pub numero_telephone: Option<String>,
    pub specialisation: Option<String>,
    pub intitule_poste: Option<String>,
    /// Sent JSON-encoded when present, matching the backend's `JSONField`.
    pub competences: Option<Vec<String>>,
    pub photo_profil: Option<FileUpload>,
    pub cv: Option<FileUpload>,
}

impl ProfileUpdate {
    fn into_form(self) -> Result<Form, ApiError> {
        let mut form = Form::new();
        if let Some(v) = self.nom_complet {
            form = form.text("nom_complet", v);
        }
        if let Some(v) = self.numero_telephone {
            form = form.text("numero_telephone", v);
        }
        if let Some(v) = self.specialisation {
            form = form.text("specialisation", v);
        }
        if let Some(v) = self.intitule_poste {
            form = form.text("intitule_poste", v);
        }
        if let Some(skills) = self.competences {
            let encoded = serde_json::to_string(&skills).map_err(|_| ApiError::Decode)?;
            form = form.text("competences", encoded);
        }
        if let Some(photo) = self.photo_profil {
            form = form.part("photo_profil", photo.into_part()?);
        }
        if let Some(cv) = self.cv {
            form = form.part("cv", cv.into_part()?);
        }
        Ok(form)
    }
}

/// Body of `POST /api/projets/`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NewProject {
    pub titre: String,
    pub description: String,
    pub budget_min: String,
    pub budget_max: String,
    pub deadline: String,
    pub competences_requises: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base(backend_url())
    }

    pub fn with_base(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            http: reqwest::Client::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.base, path))
    }

    fn authed(&self, method: Method, path: &str, token: &str) -> RequestBuilder {
        self.request(method, path).bearer_auth(token)
    }

    /// Decode a response, mapping error statuses through
    /// [`ApiError::from_response`].
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::debug!(status = status.as_u16(), "request failed");
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        response.json().await.map_err(|_| ApiError::Decode)
    }

    /// Like [`Self::decode`] but for endpoints whose success body we ignore.
    async fn check(response: Response) -> Result<(), ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::from_response(status.as_u16(), &body));
        }
        Ok(())
    }

    /// Pull the `detail` string out of a success body, for endpoints that
    /// answer with a human-readable confirmation.
    async fn detail(response: Response) -> Result<String, ApiError> {
        let value: serde_json::Value = Self::decode(response).await?;
        value
            .get("detail")
            .and_then(serde_json::Value::as_str)
            .map(str::to_string)
            .ok_or(ApiError::Decode)
    }

    // --- auth ---

    /// `POST /api/token/`. The backend expects form data, not JSON.
    pub async fn login(&self, email: &str, password: &str) -> Result<TokenResponse, ApiError> {
        let form = Form::new()
            .text("email", email.to_string())
            .text("password", password.to_string());
        let response = self
            .request(Method::POST, "/api/token/")
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `POST /api/utilisateur/inscription/`.
    pub async fn register(&self, payload: RegistrationPayload) -> Result<(), ApiError> {
        let form = payload.into_form()?;
        let response = self
            .request(Method::POST, "/api/utilisateur/inscription/")
            .multipart(form)
            .send()
            .await?;
        Self::check(response).await
    }

    /// `POST /api/utilisateur/renvoyer-verification/`. Returns the backend's
    /// confirmation text.
    pub async fn resend_verification(&self, email: &str) -> Result<String, ApiError> {
        let response = self
            .request(Method::POST, "/api/utilisateur/renvoyer-verification/")
            .json(&json!({ "email": email }))
            .send()
            .await?;
        Self::detail(response).await
    }

    /// `POST /api/mot-de-passe/demande-reinitialisation/`.
    pub async fn request_password_reset(&self, email: &str) -> Result<String, ApiError> {
        let response = self
            .request(Method::POST, "/api/mot-de-passe/demande-reinitialisation/")
            .json(&json!({ "email": email }))
            .send()
            .await?;
        Self::detail(response).await
    }

    /// `POST /api/mot-de-passe/reinitialiser/{jeton}/`.
    pub async fn reset_password(&self, jeton: &str, password: &str) -> Result<String, ApiError> {
        let path = format!("/api/mot-de-passe/reinitialiser/{jeton}/");
        let response = self
            .request(Method::POST, &path)
            .json(&json!({ "password": password }))
            .send()
            .await?;
        Self::detail(response).await
    }

    // --- profile ---

    /// `GET /api/utilisateur/profil/`.
    pub async fn profile(&self, token: &str) -> Result<User, ApiError> {
        let response = self
            .authed(Method::GET, "/api/utilisateur/profil/", token)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `PUT /api/utilisateur/profil/`.
    pub async fn update_profile(
        &self,
        token: &str,
        update: ProfileUpdate,
    ) -> Result<User, ApiError> {
        let form = update.into_form()?;
        let response = self
            .authed(Method::PUT, "/api/utilisateur/profil/", token)
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    // --- admin ---

    /// `GET /api/admin/statistiques/`.
    pub async fn admin_stats(&self, token: &str) -> Result<PlatformStats, ApiError> {
        let response = self
            .authed(Method::GET, "/api/admin/statistiques/", token)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `GET /api/users/`.
    pub async fn list_users(&self, token: &str) -> Result<Vec<User>, ApiError> {
        let response = self.authed(Method::GET, "/api/users/", token).send().await?;
        Self::decode(response).await
    }

    /// `DELETE /api/users/{id}/`.
    pub async fn delete_user(&self, token: &str, user_id: i64) -> Result<(), ApiError> {
        let path = format!("/api/users/{user_id}/");
        let response = self.authed(Method::DELETE, &path, token).send().await?;
        Self::check(response).await
    }

    /// `GET /api/utilisateurs/{id}/projets/`.
    pub async fn user_projects(&self, token: &str, user_id: i64) -> Result<Vec<Project>, ApiError> {
        let path = format!("/api/utilisateurs/{user_id}/projets/");
        let response = self.authed(Method::GET, &path, token).send().await?;
        Self::decode(response).await
    }

    // --- projects ---

    /// `POST /api/projets/`.
    pub async fn create_project(
        &self,
        token: &str,
        project: &NewProject,
    ) -> Result<Project, ApiError> {
        let response = self
            .authed(Method::POST, "/api/projets/", token)
            .json(project)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `GET /api/projets/`: projects open to postulation.
    pub async fn open_projects(&self, token: &str) -> Result<Vec<Project>, ApiError> {
        let response = self
            .authed(Method::GET, "/api/projets/", token)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `GET /api/client/mes-projets/`: the signed-in client's own projects,
    /// postulations included.
    pub async fn my_projects(&self, token: &str) -> Result<Vec<Project>, ApiError> {
        let response = self
            .authed(Method::GET, "/api/client/mes-projets/", token)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `DELETE /api/projets/{id}/annuler/`.
    pub async fn cancel_project(&self, token: &str, project_id: i64) -> Result<(), ApiError> {
        let path = format!("/api/projets/{project_id}/annuler/");
        let response = self.authed(Method::DELETE, &path, token).send().await?;
        Self::check(response).await
    }

    /// `DELETE /api/projets/{id}/supprimer/`: closes a completed project.
    pub async fn delete_project(&self, token: &str, project_id: i64) -> Result<(), ApiError> {
        let path = format!("/api/projets/{project_id}/supprimer/");
        let response = self.authed(Method::DELETE, &path, token).send().await?;
        Self::check(response).await
    }

    /// `GET /api/projets/{id}/freelancer-accepte/`.
    pub async fn accepted_freelancer(&self, token: &str, project_id: i64) -> Result<User, ApiError> {
        let path = format!("/api/projets/{project_id}/freelancer-accepte/");
        let response = self.authed(Method::GET, &path, token).send().await?;
        Self::decode(response).await
    }

    // --- postulations ---

    /// `POST /api/projets/{id}/postuler/`.
    pub async fn apply_to_project(
        &self,
        token: &str,
        project_id: i64,
        message: &str,
    ) -> Result<(), ApiError> {
        let path = format!("/api/projets/{project_id}/postuler/");
        let response = self
            .authed(Method::POST, &path, token)
            .json(&json!({ "message": message }))
            .send()
            .await?;
        Self::check(response).await
    }

    /// `PATCH /api/postulations/{id}/accepter/`.
    pub async fn accept_postulation(&self, token: &str, postulation_id: i64) -> Result<(), ApiError> {
        let path = format!("/api/postulations/{postulation_id}/accepter/");
        let response = self.authed(Method::PATCH, &path, token).send().await?;
        Self::check(response).await
    }

    /// `PATCH /api/postulations/{id}/refuser/`.
    pub async fn reject_postulation(&self, token: &str, postulation_id: i64) -> Result<(), ApiError> {
        let path = format!("/api/postulations/{postulation_id}/refuser/");
        let response = self.authed(Method::PATCH, &path, token).send().await?;
        Self::check(response).await
    }

    /// `POST /api/freelancers/{id}/evaluations/`.
    pub async fn rate_freelancer(
        &self,
        token: &str,
        freelancer_id: i64,
        note: u8,
    ) -> Result<(), ApiError> {
        let path = format!("/api/freelancers/{freelancer_id}/evaluations/");
        let response = self
            .authed(Method::POST, &path, token)
            .json(&json!({ "note": note }))
            .send()
            .await?;
        Self::check(response).await
    }

    // --- notifications ---

    /// `GET /api/notifications/`.
    pub async fn notifications(&self, token: &str) -> Result<Vec<Notification>, ApiError> {
        let response = self
            .authed(Method::GET, "/api/notifications/", token)
            .send()
            .await?;
        Self::decode(response).await
    }

    /// `DELETE /api/notifications/{id}/`.
    pub async fn delete_notification(
        &self,
        token: &str,
        notification_id: i64,
    ) -> Result<(), ApiError> {
        let path = format!("/api/notifications/{notification_id}/");
        let response = self.authed(Method::DELETE, &path, token).send().await?;
        Self::check(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_payload(role: &str) -> RegistrationPayload {
        RegistrationPayload {
            nom_complet: "Fatou Sy".to_string(),
            email: "fatou@example.com".to_string(),
            password: "Secret123!".to_string(),
            numero_telephone: "44076356".to_string(),
            type_utilisateur: role.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_client_registration_omits_freelancer_fields() {
        let fields = base_payload("client").text_fields();
        let names: Vec<&str> = fields.iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            [
                "nom_complet",
                "email",
                "password",
                "numero_telephone",
                "type_utilisateur"
            ]
        );
    }

    #[test]
    fn test_freelancer_registration_joins_competences() {
        let mut payload = base_payload("freelancer");
        payload.specialisation = "Développement Web".to_string();
        payload.intitule_poste = "Développeur".to_string();
        payload.competences = vec!["SEO".to_string(), "Rédaction".to_string()];

        let fields = payload.text_fields();
        let competences = fields
            .iter()
            .find(|(n, _)| *n == "competences")
            .map(|(_, v)| v.as_str());
        assert_eq!(competences, Some("SEO,Rédaction"));
    }

    #[test]
    fn test_with_base_keeps_given_url() {
        let client = ApiClient::with_base("http://backend.test");
        assert_eq!(client.base, "http://backend.test");
    }

    #[test]
    fn test_registration_form_builds() {
        let mut payload = base_payload("freelancer");
        payload.cv = Some(FileUpload {
            file_name: "cv.pdf".to_string(),
            mime: "application/pdf".to_string(),
            bytes: vec![0x25, 0x50, 0x44, 0x46],
        });
        payload.specialisation = "SEO".to_string();
        payload.intitule_poste = "Consultant".to_string();
        assert!(payload.into_form().is_ok());
    }

    #[test]
    fn test_profile_update_form_encodes_competences_as_json() {
        let update = ProfileUpdate {
            competences: Some(vec!["SEO".to_string()]),
            ..Default::default()
        };
        // The JSON encoding itself is what matters; the form hides it, so
        // check the encoder directly alongside the build.
        assert_eq!(
            serde_json::to_string(&vec!["SEO".to_string()]).unwrap(),
            r#"["SEO"]"#
        );
        assert!(update.into_form().is_ok());
    }

    #[test]
    fn test_bad_mime_is_rejected() {
        let upload = FileUpload {
            file_name: "cv.pdf".to_string(),
            mime: "not a mime".to_string(),
            bytes: vec![],
        };
        assert!(upload.into_part().is_err());
    }
}
