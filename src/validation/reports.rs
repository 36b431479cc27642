use base64::Engine;

use crate::errors::internal::{FieldErrors, ValidationError};
use crate::types::domain::ActivityKind;
use crate::types::dto::reports::ReportForm;
use crate::validation::below_min;

/// Sentinel written into the GPS field when acquisition failed client-side
pub const LOCATION_ERROR_SENTINEL: &str = "Gagal mendapatkan lokasi";

/// Upper bound on the decoded photo payload; the client downscales to
/// 800x600 JPEG before submitting, so anything above this is not a photo
/// that went through the form.
pub const MAX_PHOTO_BYTES: usize = 1024 * 1024;

/// A report form that passed validation
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedReport {
    pub jenis_kegiatan: ActivityKind,
    pub deskripsi_lainnya: Option<String>,
    pub deskripsi_kegiatan: String,
    pub alamat_kegiatan: String,
    pub lokasi_kegiatan: String,
    pub foto_kegiatan: String,
    pub jam_datang: String,
}

pub fn validate_report(form: &ReportForm) -> Result<ValidatedReport, ValidationError> {
    let mut errors = FieldErrors::new();

    let deskripsi_lainnya = form
        .deskripsi_lainnya
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty());
    if form.jenis_kegiatan == ActivityKind::Lainnya && deskripsi_lainnya.is_none() {
        errors.push(
            "deskripsi_lainnya",
            "Deskripsi kegiatan lainnya harus diisi jika memilih 'Lainnya'.",
        );
    }

    if below_min(&form.deskripsi_kegiatan, 20) {
        errors.push(
            "deskripsi_kegiatan",
            "Deskripsi kegiatan harus memiliki setidaknya 20 karakter.",
        );
    }
    if below_min(&form.alamat_kegiatan, 10) {
        errors.push("alamat_kegiatan", "Alamat kegiatan harus diisi.");
    }

    let lokasi = form.lokasi_kegiatan.trim();
    if lokasi.is_empty() {
        errors.push("lokasi_kegiatan", "Lokasi kegiatan harus diaktifkan.");
    } else if !is_coordinate_pair(lokasi) {
        errors.push(
            "lokasi_kegiatan",
            "Lokasi GPS harus berhasil didapatkan.",
        );
    }

    if let Err(message) = check_photo(&form.foto_kegiatan) {
        errors.push("foto_kegiatan", message);
    }

    if below_min(&form.jam_datang, 1) {
        errors.push("jam_datang", "Jam datang harus diisi.");
    }

    errors.finish(ValidatedReport {
        jenis_kegiatan: form.jenis_kegiatan,
        deskripsi_lainnya: deskripsi_lainnya.map(str::to_string),
        deskripsi_kegiatan: form.deskripsi_kegiatan.trim().to_string(),
        alamat_kegiatan: form.alamat_kegiatan.trim().to_string(),
        lokasi_kegiatan: lokasi.to_string(),
        foto_kegiatan: form.foto_kegiatan.clone(),
        jam_datang: form.jam_datang.trim().to_string(),
    })
}

/// A real coordinate is "lat, lng" with both halves parsing as floats;
/// this rejects the error sentinel strings as a side effect.
fn is_coordinate_pair(value: &str) -> bool {
    if value == LOCATION_ERROR_SENTINEL {
        return false;
    }
    let mut parts = value.split(',');
    let (Some(lat), Some(lng), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    lat.trim().parse::<f64>().is_ok() && lng.trim().parse::<f64>().is_ok()
}

/// Photo must be an image data URL whose decoded payload fits the bound
fn check_photo(value: &str) -> Result<(), &'static str> {
    if value.trim().is_empty() {
        return Err("Foto kegiatan harus diunggah.");
    }
    let Some(rest) = value.strip_prefix("data:image/") else {
        return Err("Format foto tidak valid.");
    };
    let Some((_, payload)) = rest.split_once(";base64,") else {
        return Err("Format foto tidak valid.");
    };
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|_| "Format foto tidak valid.")?;
    if decoded.len() > MAX_PHOTO_BYTES {
        return Err("Ukuran foto melebihi batas maksimum.");
    }
    Ok(())
}
