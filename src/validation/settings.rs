use crate::errors::internal::{FieldErrors, ValidationError};
use crate::types::dto::settings::CredentialsForm;
use crate::validation::below_min;

/// A credentials form that passed the field-level checks
///
/// Matching the submitted current credentials against the stored record is
/// the settings service's job; it happens before any mutation is applied.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedCredentials {
    pub current_username: String,
    pub current_password: String,
    pub username: String,
    /// `None` keeps the stored password
    pub password: Option<String>,
}

pub fn validate_credentials(
    form: &CredentialsForm,
) -> Result<ValidatedCredentials, ValidationError> {
    let mut errors = FieldErrors::new();

    if form.current_username.trim().is_empty() {
        errors.push("current_username", "Username saat ini harus diisi.");
    }
    if form.current_password.is_empty() {
        errors.push("current_password", "Password saat ini harus diisi.");
    }
    if below_min(&form.username, 3) {
        errors.push("username", "Username minimal 3 karakter.");
    }

    let password = form.password.as_deref().filter(|p| !p.is_empty());
    if let Some(p) = password {
        if p.chars().count() < 6 {
            errors.push("password", "Password minimal 6 karakter.");
        }
        let confirm = form.confirm_password.as_deref().unwrap_or("");
        if p != confirm {
            errors.push(
                "confirm_password",
                "Password tidak cocok. Silakan periksa kembali.",
            );
        }
    }

    errors.finish(ValidatedCredentials {
        current_username: form.current_username.trim().to_string(),
        current_password: form.current_password.clone(),
        username: form.username.trim().to_string(),
        password: password.map(str::to_string),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> CredentialsForm {
        CredentialsForm {
            current_username: "admin".to_string(),
            current_password: "admin".to_string(),
            username: "admin".to_string(),
            password: Some("rahasia1".to_string()),
            confirm_password: Some("rahasia1".to_string()),
        }
    }

    #[test]
    fn accepts_matching_confirmation() {
        let validated = validate_credentials(&form()).unwrap();
        assert_eq!(validated.password.as_deref(), Some("rahasia1"));
    }

    #[test]
    fn mismatched_confirmation_is_rejected() {
        let mut f = form();
        f.confirm_password = Some("lain".to_string());
        let err = validate_credentials(&f).unwrap_err();
        assert_eq!(err.fields[0].field, "confirm_password");
    }

    #[test]
    fn blank_password_keeps_stored_one() {
        let mut f = form();
        f.password = Some("".to_string());
        f.confirm_password = None;
        let validated = validate_credentials(&f).unwrap();
        assert_eq!(validated.password, None);
    }

    #[test]
    fn current_credentials_are_required() {
        let mut f = form();
        f.current_username = "".to_string();
        f.current_password = "".to_string();
        let err = validate_credentials(&f).unwrap_err();
        assert_eq!(err.fields.len(), 2);
    }
}
