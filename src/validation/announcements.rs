use crate::errors::internal::{FieldErrors, ValidationError};
use crate::types::dto::announcements::AnnouncementForm;
use crate::validation::below_min;

/// An announcement form that passed validation
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedAnnouncement {
    pub title: String,
    pub content: String,
}

pub fn validate_announcement(
    form: &AnnouncementForm,
) -> Result<ValidatedAnnouncement, ValidationError> {
    let mut errors = FieldErrors::new();

    if below_min(&form.title, 5) {
        errors.push("title", "Judul harus diisi (minimal 5 karakter).");
    }
    if below_min(&form.content, 10) {
        errors.push(
            "content",
            "Konten pengumuman harus diisi (minimal 10 karakter).",
        );
    }

    errors.finish(ValidatedAnnouncement {
        title: form.title.trim().to_string(),
        content: form.content.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_complete_form() {
        let form = AnnouncementForm {
            title: "Kerja Bakti Minggu".to_string(),
            content: "Kerja bakti dimulai pukul tujuh pagi.".to_string(),
        };
        assert!(validate_announcement(&form).is_ok());
    }

    #[test]
    fn short_title_and_content_are_rejected() {
        let form = AnnouncementForm {
            title: "Hai".to_string(),
            content: "Pendek".to_string(),
        };
        let err = validate_announcement(&form).unwrap_err();
        assert_eq!(err.fields.len(), 2);
    }
}
