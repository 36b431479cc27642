use crate::errors::internal::{FieldErrors, ValidationError};
use crate::types::domain::Position;
use crate::types::dto::users::UserForm;
use crate::validation::below_min;

/// Whether the form creates a new account or edits an existing one
///
/// A new account requires a password; on edit an empty password means
/// "keep the stored one".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserFormMode {
    Create,
    Edit,
}

/// A user form that passed validation
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedUser {
    pub full_name: String,
    pub username: String,
    /// `None` on edit when the stored password is kept
    pub password: Option<String>,
    pub position: Position,
    pub rt: String,
    pub rw: String,
}

pub fn validate_user(form: &UserForm, mode: UserFormMode) -> Result<ValidatedUser, ValidationError> {
    let mut errors = FieldErrors::new();

    if below_min(&form.full_name, 3) {
        errors.push("full_name", "Nama lengkap harus diisi.");
    }
    if below_min(&form.username, 3) {
        errors.push("username", "Username harus diisi.");
    }

    let password = form
        .password
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty());
    match (mode, password) {
        (UserFormMode::Create, None) => {
            errors.push("password", "Password harus diisi untuk pengguna baru.");
        }
        (_, Some(p)) if p.chars().count() < 3 => {
            errors.push("password", "Password minimal 3 karakter.");
        }
        _ => {}
    }

    if below_min(&form.rt, 1) {
        errors.push("rt", "RT harus diisi.");
    }
    if below_min(&form.rw, 1) {
        errors.push("rw", "RW harus diisi.");
    }

    errors.finish(ValidatedUser {
        full_name: form.full_name.trim().to_string(),
        username: form.username.trim().to_string(),
        password: password.map(str::to_string),
        position: form.position,
        rt: form.rt.trim().to_string(),
        rw: form.rw.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> UserForm {
        UserForm {
            full_name: "Budi Santoso".to_string(),
            username: "budi".to_string(),
            password: Some("rahasia".to_string()),
            position: Position::KetuaRt,
            rt: "01".to_string(),
            rw: "05".to_string(),
        }
    }

    #[test]
    fn accepts_complete_form() {
        let validated = validate_user(&form(), UserFormMode::Create).unwrap();
        assert_eq!(validated.username, "budi");
        assert_eq!(validated.password.as_deref(), Some("rahasia"));
    }

    #[test]
    fn create_requires_password() {
        let mut f = form();
        f.password = None;
        let err = validate_user(&f, UserFormMode::Create).unwrap_err();
        assert_eq!(err.fields.len(), 1);
        assert_eq!(err.fields[0].field, "password");
    }

    #[test]
    fn edit_allows_blank_password() {
        let mut f = form();
        f.password = Some("".to_string());
        let validated = validate_user(&f, UserFormMode::Edit).unwrap();
        assert_eq!(validated.password, None);
    }

    #[test]
    fn short_fields_are_all_reported() {
        let f = UserForm {
            full_name: "ab".to_string(),
            username: "x".to_string(),
            password: Some("ok".to_string()),
            position: Position::Anggota,
            rt: " ".to_string(),
            rw: "".to_string(),
        };
        let err = validate_user(&f, UserFormMode::Create).unwrap_err();
        let fields: Vec<_> = err.fields.iter().map(|f| f.field).collect();
        assert_eq!(fields, vec!["full_name", "username", "password", "rt", "rw"]);
    }
}
