//! State and validation for the three-step signup wizard.
//!
//! The rendering lives in the web crate; this module owns the form data and
//! the per-step rules so they can be tested without a DOM.

use api::{FileUpload, RegistrationPayload};
use session::UserRole;

use crate::validation;

/// Step titles, shown in the stepper header.
pub const WIZARD_STEPS: [&str; 3] = [
    "Informations de base",
    "Informations complémentaires",
    "Confirmation",
];

/// A field of the signup form, used to key error messages to inputs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    NomComplet,
    Email,
    Password,
    Telephone,
    Photo,
    Cv,
    Specialisation,
    IntitulePoste,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::NomComplet => "Nom complet",
            Field::Email => "Email",
            Field::Password => "Mot de passe",
            Field::Telephone => "Numéro de téléphone",
            Field::Photo => "Photo de profil",
            Field::Cv => "CV",
            Field::Specialisation => "Spécialisation",
            Field::IntitulePoste => "Intitulé de poste",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Everything the wizard collects. Files are held as [`FileUpload`] from the
/// moment they are picked.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub nom_complet: String,
    pub email: String,
    pub password: String,
    pub numero_telephone: String,
    pub role: Option<UserRole>,
    pub photo_profil: Option<FileUpload>,
    pub cv: Option<FileUpload>,
    pub specialisation: String,
    pub intitule_poste: String,
    pub competences: Vec<String>,
}

impl SignupForm {
    pub fn is_freelancer(&self) -> bool {
        self.role == Some(UserRole::Freelancer)
    }

    /// Validate one step. Step 2 (confirmation) has no fields of its own.
    pub fn step_errors(&self, step: usize) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let mut push = |field, result: Result<(), &'static str>| {
            if let Err(message) = result {
                errors.push(FieldError { field, message });
            }
        };

        match step {
            0 => {
                if self.nom_complet.trim().is_empty() {
                    push(Field::NomComplet, Err("Le nom complet est requis"));
                }
                push(Field::Email, validation::validate_email(&self.email));
                push(Field::Password, validation::validate_password(&self.password));
                push(
                    Field::Telephone,
                    validation::validate_phone(&self.numero_telephone),
                );
                push(
                    Field::Photo,
                    validation::validate_photo(file_meta(&self.photo_profil)),
                );
            }
            1 if self.is_freelancer() => {
                push(
                    Field::Cv,
                    validation::validate_cv(file_meta(&self.cv), true),
                );
                if self.specialisation.trim().is_empty() {
                    push(Field::Specialisation, Err("La spécialisation est requise"));
                }
                if self.intitule_poste.trim().is_empty() {
                    push(Field::IntitulePoste, Err("L'intitulé de poste est requis"));
                }
            }
            _ => {}
        }
        errors
    }

    /// The first step that fails validation, if any. Submission snaps the
    /// wizard back to it.
    pub fn first_invalid_step(&self) -> Option<usize> {
        (0..WIZARD_STEPS.len()).find(|&step| !self.step_errors(step).is_empty())
    }

    pub fn into_registration(self) -> RegistrationPayload {
        let role = self.role.unwrap_or(UserRole::Client);
        RegistrationPayload {
            nom_complet: self.nom_complet.trim().to_string(),
            email: self.email.trim().to_lowercase(),
            password: self.password,
            numero_telephone: self.numero_telephone.trim().to_string(),
            type_utilisateur: role.as_str().to_string(),
            photo_profil: self.photo_profil,
            cv: self.cv,
            specialisation: self.specialisation.trim().to_string(),
            intitule_poste: self.intitule_poste.trim().to_string(),
            competences: self.competences,
        }
    }
}

fn file_meta(file: &Option<FileUpload>) -> Option<(&str, u64)> {
    file.as_ref()
        .map(|f| (f.mime.as_str(), f.bytes.len() as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_base(role: UserRole) -> SignupForm {
        SignupForm {
            nom_complet: "Aicha Ba".to_string(),
            email: "aicha@example.com".to_string(),
            password: "Abcdefg1!".to_string(),
            numero_telephone: "44076356".to_string(),
            role: Some(role),
            ..Default::default()
        }
    }

    fn pdf() -> FileUpload {
        FileUpload {
            file_name: "cv.pdf".to_string(),
            mime: "application/pdf".to_string(),
            bytes: vec![0; 128],
        }
    }

    #[test]
    fn test_step0_collects_all_errors() {
        let form = SignupForm::default();
        let errors = form.step_errors(0);
        let fields: Vec<Field> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            [Field::NomComplet, Field::Email, Field::Password, Field::Telephone]
        );
    }

    #[test]
    fn test_client_skips_step1_entirely() {
        let form = valid_base(UserRole::Client);
        assert!(form.step_errors(1).is_empty());
        assert_eq!(form.first_invalid_step(), None);
    }

    #[test]
    fn test_freelancer_step1_requirements() {
        let form = valid_base(UserRole::Freelancer);
        let fields: Vec<Field> = form.step_errors(1).iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            [Field::Cv, Field::Specialisation, Field::IntitulePoste]
        );

        let mut form = form;
        form.cv = Some(pdf());
        form.specialisation = "Développement Web".to_string();
        form.intitule_poste = "Développeur".to_string();
        assert!(form.step_errors(1).is_empty());
    }

    #[test]
    fn test_first_invalid_step_snaps_to_earliest() {
        let mut form = valid_base(UserRole::Freelancer);
        form.email = "pas-un-email".to_string();
        assert_eq!(form.first_invalid_step(), Some(0));

        form.email = "aicha@example.com".to_string();
        assert_eq!(form.first_invalid_step(), Some(1));

        form.cv = Some(pdf());
        form.specialisation = "SEO".to_string();
        form.intitule_poste = "Consultant".to_string();
        assert_eq!(form.first_invalid_step(), None);
    }

    #[test]
    fn test_into_registration_normalizes_text() {
        let mut form = valid_base(UserRole::Client);
        form.nom_complet = "  Aicha Ba ".to_string();
        form.email = " Aicha@Example.COM ".to_string();
        let payload = form.into_registration();
        assert_eq!(payload.nom_complet, "Aicha Ba");
        assert_eq!(payload.email, "aicha@example.com");
        assert_eq!(payload.type_utilisateur, "client");
    }
}
