use serde_json::Value;
use std::fmt;
use thiserror::Error;

/// Per-field validation errors as DRF serializers report them:
/// `{"email": ["..."], "password": ["..."]}`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors(pub Vec<(String, String)>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The `(field, message)` pairs, for views that render them one item
    /// per line instead of the joined display form.
    pub fn entries(&self) -> &[(String, String)] {
        &self.0
    }

    /// Parse a DRF error body. Values may be a list of messages or a single
    /// string; nested shapes are flattened to their display form.
    pub fn from_value(value: &Value) -> Self {
        let mut errors = Vec::new();
        if let Value::Object(map) = value {
            for (field, messages) in map {
                match messages {
                    Value::Array(items) => {
                        for item in items {
                            errors.push((field.clone(), display_value(item)));
                        }
                    }
                    other => errors.push((field.clone(), display_value(other))),
                }
            }
        }
        Self(errors)
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Every way a backend call can fail, collapsed to what the UI needs to
/// decide between "show this text" and "clear the session".
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401 from any endpoint. Callers clear the session and redirect.
    #[error("Session expirée - Veuillez vous reconnecter")]
    Unauthorized,

    /// Non-401 error status with a `detail` message (or no parsable body).
    #[error("{detail}")]
    Server { status: u16, detail: String },

    /// 400 with per-field serializer errors.
    #[error("{0}")]
    Fields(FieldErrors),

    #[error("Erreur de connexion au serveur")]
    Network(#[from] reqwest::Error),

    #[error("Réponse inattendue du serveur")]
    Decode,
}

impl ApiError {
    /// Map an error status + body to the right variant. 401 wins regardless
    /// of the body; a `detail` key beats field errors; anything else falls
    /// back to a generic message carrying the status.
    pub fn from_response(status: u16, body: &str) -> Self {
        if status == 401 {
            return ApiError::Unauthorized;
        }
        if let Ok(value) = serde_json::from_str::<Value>(body) {
            if let Some(detail) = value.get("detail").and_then(Value::as_str) {
                return ApiError::Server {
                    status,
                    detail: detail.to_string(),
                };
            }
            if let Some(error) = value.get("error").and_then(Value::as_str) {
                return ApiError::Server {
                    status,
                    detail: error.to_string(),
                };
            }
            let fields = FieldErrors::from_value(&value);
            if !fields.is_empty() {
                return ApiError::Fields(fields);
            }
        }
        ApiError::Server {
            status,
            detail: format!("Erreur serveur ({status})"),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_maps_to_unauthorized() {
        let err = ApiError::from_response(401, r#"{"detail": "Token invalide"}"#);
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_detail_body() {
        let err = ApiError::from_response(403, r#"{"detail": "Accès refusé"}"#);
        match err {
            ApiError::Server { status, detail } => {
                assert_eq!(status, 403);
                assert_eq!(detail, "Accès refusé");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_field_errors_body() {
        let err = ApiError::from_response(
            400,
            r#"{"email": ["Cet email est déjà utilisé."], "password": ["Trop court."]}"#,
        );
        match err {
            ApiError::Fields(fields) => {
                assert_eq!(fields.0.len(), 2);
                let text = fields.to_string();
                assert!(text.contains("email: Cet email est déjà utilisé."));
                assert!(text.contains("password: Trop court."));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_unparsable_body_falls_back_to_status() {
        let err = ApiError::from_response(500, "<html>Server Error</html>");
        match err {
            ApiError::Server { status, detail } => {
                assert_eq!(status, 500);
                assert!(detail.contains("500"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_field_errors_entries_keep_pairs_separate() {
        let err = ApiError::from_response(
            400,
            r#"{"email": ["Cet email est déjà utilisé."], "numero_telephone": ["Numéro invalide."]}"#,
        );
        let ApiError::Fields(fields) = err else {
            panic!("expected field errors");
        };
        let entries = fields.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries
            .iter()
            .any(|(f, m)| f == "email" && m == "Cet email est déjà utilisé."));
        assert!(entries
            .iter()
            .any(|(f, m)| f == "numero_telephone" && m == "Numéro invalide."));
    }

    #[test]
    fn test_field_errors_display_joined_with_newlines() {
        let fields = FieldErrors(vec![
            ("email".to_string(), "requis".to_string()),
            ("password".to_string(), "trop court".to_string()),
        ]);
        assert_eq!(fields.to_string(), "email: requis\npassword: trop court");
    }
}
