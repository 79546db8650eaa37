//! Client-side form validation.
//!
//! All messages are the exact strings shown under the form fields; callers
//! display `Err` values verbatim. Checks mirror what the backend enforces so
//! a form that passes here rarely bounces off the serializer.

/// Longest accepted CV upload, 5MB.
pub const MAX_CV_BYTES: u64 = 5 * 1024 * 1024;
/// Longest accepted profile photo, 2MB.
pub const MAX_PHOTO_BYTES: u64 = 2 * 1024 * 1024;

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>";

/// Password rules, checked in order so the user fixes one thing at a time.
pub fn validate_password(password: &str) -> Result<(), &'static str> {
    if password.is_empty() {
        return Err("Le mot de passe est requis");
    }
    if password.chars().count() < 8 {
        return Err("Doit contenir au moins 8 caractères");
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err("Doit contenir au moins une majuscule");
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err("Doit contenir au moins une minuscule");
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err("Doit contenir au moins un chiffre");
    }
    if !password.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Err("Doit contenir au moins un caractère spécial");
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.is_empty() {
        return Err("L'email est requis");
    }
    if !email_format_ok(email) {
        return Err("Veuillez entrer une adresse email valide");
    }
    Ok(())
}

fn email_format_ok(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    // The domain needs a dot with something on both sides.
    match domain.find('.') {
        Some(i) => i > 0 && domain.rfind('.') != Some(domain.len() - 1),
        None => false,
    }
}

/// Accepted shapes: bare digits (`44076356`), a parenthesised country code
/// (`+(222)44076356`), or a plain international number (`+22244076356`).
pub fn validate_phone(numero: &str) -> Result<(), &'static str> {
    if numero.is_empty() {
        return Err("Le numéro de téléphone est requis");
    }
    if !phone_format_ok(numero) {
        return Err("Format invalide. Ex: 44076356, +(222)44076356, +22244076356");
    }
    Ok(())
}

fn phone_format_ok(numero: &str) -> bool {
    let rest = numero.strip_prefix('+').unwrap_or(numero);
    let has_plus = rest.len() != numero.len();

    if let Some(rest) = rest.strip_prefix('(') {
        // (country code) then subscriber digits
        let rest = rest.strip_prefix('+').unwrap_or(rest);
        let Some(close) = rest.find(')') else {
            return false;
        };
        let code = &rest[..close];
        let tail = &rest[close + 1..];
        (1..=3).contains(&code.len())
            && all_digits(code)
            && (7..=14).contains(&tail.len())
            && all_digits(tail)
    } else {
        // With a leading '+' the country code may extend the usual length.
        let max = if has_plus { 17 } else { 15 };
        all_digits(rest) && (8..=max).contains(&rest.len())
    }
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

const CV_MIMES: [&str; 3] = [
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// The CV is required for freelancers only; clients and admins never upload
/// one.
pub fn validate_cv(
    file: Option<(&str, u64)>,
    is_freelancer: bool,
) -> Result<(), &'static str> {
    let Some((mime, size)) = file else {
        if is_freelancer {
            return Err("Un CV est requis");
        }
        return Ok(());
    };
    if !CV_MIMES.contains(&mime) {
        return Err("Le fichier doit être un PDF ou DOC/DOCX");
    }
    if size > MAX_CV_BYTES {
        return Err("Le fichier ne doit pas dépasser 5MB");
    }
    Ok(())
}

const PHOTO_MIMES: [&str; 3] = ["image/jpeg", "image/png", "image/gif"];

/// The photo is optional for everyone; only its type and size are checked.
pub fn validate_photo(file: Option<(&str, u64)>) -> Result<(), &'static str> {
    let Some((mime, size)) = file else {
        return Ok(());
    };
    if !PHOTO_MIMES.contains(&mime) {
        return Err("L'image doit être au format JPEG, PNG ou GIF");
    }
    if size > MAX_PHOTO_BYTES {
        return Err("L'image ne doit pas dépasser 2MB");
    }
    Ok(())
}

/// Guess the MIME type from the file name, for platforms where the picker
/// only reports a name.
pub fn mime_from_name(name: &str) -> &'static str {
    let ext = name.rsplit('.').next().unwrap_or_default().to_lowercase();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        _ => "application/octet-stream",
    }
}

/// Password strength score, 0 to 5. Independent from [`validate_password`]:
/// this drives the meter, not acceptance.
pub fn password_strength(password: &str) -> u8 {
    if password.is_empty() {
        return 0;
    }
    let mut score = 0u8;
    if password.chars().count() > 8 {
        score += 1;
    }
    if password.chars().count() > 12 {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score.min(5)
}

pub fn strength_label(score: u8) -> &'static str {
    match score {
        0 | 1 => "Très faible",
        2 => "Faible",
        3 => "Moyen",
        4 => "Fort",
        _ => "Très fort",
    }
}

const STRENGTH_COLORS: [&str; 6] = [
    "#ff0000", "#ff4000", "#ff8000", "#ffbf00", "#80ff00", "#00ff00",
];

pub fn strength_color(score: u8) -> &'static str {
    STRENGTH_COLORS[usize::from(score.min(5))]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_rules_in_order() {
        assert_eq!(validate_password(""), Err("Le mot de passe est requis"));
        assert_eq!(
            validate_password("Ab1!"),
            Err("Doit contenir au moins 8 caractères")
        );
        assert_eq!(
            validate_password("abcdef1!"),
            Err("Doit contenir au moins une majuscule")
        );
        assert_eq!(
            validate_password("ABCDEF1!"),
            Err("Doit contenir au moins une minuscule")
        );
        assert_eq!(
            validate_password("Abcdefg!"),
            Err("Doit contenir au moins un chiffre")
        );
        assert_eq!(
            validate_password("Abcdefg1"),
            Err("Doit contenir au moins un caractère spécial")
        );
        assert_eq!(validate_password("Abcdefg1!"), Ok(()));
    }

    #[test]
    fn test_email() {
        assert_eq!(validate_email(""), Err("L'email est requis"));
        for bad in ["abc", "a@b", "a b@c.com", "@c.com", "a@.com", "a@b.", "a@b@c.com"] {
            assert!(validate_email(bad).is_err(), "{bad} should be rejected");
        }
        for good in ["a@b.com", "aicha.ba@example.co.uk", "x@y.z"] {
            assert_eq!(validate_email(good), Ok(()), "{good} should pass");
        }
    }

    #[test]
    fn test_phone_accepted_formats() {
        for good in ["44076356", "+(222)44076356", "+22244076356", "(222)4407635"] {
            assert_eq!(validate_phone(good), Ok(()), "{good} should pass");
        }
    }

    #[test]
    fn test_phone_rejected_formats() {
        assert_eq!(validate_phone(""), Err("Le numéro de téléphone est requis"));
        for bad in [
            "abc",
            "1234567",
            "1234567890123456",
            "+(2222)44076356",
            "(222)123456",
            "44 07 63 56",
            "+(222",
        ] {
            assert!(validate_phone(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_cv_required_for_freelancers_only() {
        assert_eq!(validate_cv(None, true), Err("Un CV est requis"));
        assert_eq!(validate_cv(None, false), Ok(()));
        assert_eq!(validate_cv(Some(("application/pdf", 1024)), true), Ok(()));
        assert_eq!(
            validate_cv(Some(("image/png", 1024)), true),
            Err("Le fichier doit être un PDF ou DOC/DOCX")
        );
        assert_eq!(
            validate_cv(Some(("application/pdf", MAX_CV_BYTES + 1)), true),
            Err("Le fichier ne doit pas dépasser 5MB")
        );
    }

    #[test]
    fn test_photo_optional_but_checked() {
        assert_eq!(validate_photo(None), Ok(()));
        assert_eq!(validate_photo(Some(("image/jpeg", 1024))), Ok(()));
        assert_eq!(
            validate_photo(Some(("application/pdf", 1024))),
            Err("L'image doit être au format JPEG, PNG ou GIF")
        );
        assert_eq!(
            validate_photo(Some(("image/png", MAX_PHOTO_BYTES + 1))),
            Err("L'image ne doit pas dépasser 2MB")
        );
    }

    #[test]
    fn test_mime_from_name() {
        assert_eq!(mime_from_name("cv.pdf"), "application/pdf");
        assert_eq!(mime_from_name("CV.DOCX"), "application/vnd.openxmlformats-officedocument.wordprocessingml.document");
        assert_eq!(mime_from_name("photo.JPG"), "image/jpeg");
        assert_eq!(mime_from_name("mystery"), "application/octet-stream");
    }

    #[test]
    fn test_strength_scores() {
        assert_eq!(password_strength(""), 0);
        assert_eq!(password_strength("abc"), 1); // lowercase only
        assert_eq!(password_strength("Abcdefg1!"), 5);
        assert_eq!(password_strength("Abcdefghijklm1!"), 5); // capped
        assert_eq!(strength_label(0), "Très faible");
        assert_eq!(strength_label(2), "Faible");
        assert_eq!(strength_label(5), "Très fort");
        assert_eq!(strength_color(0), "#ff0000");
        assert_eq!(strength_color(5), "#00ff00");
    }
}
