use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::domain::{ActivityKind, Report, ReportStatus};

/// Submitted report form, for both submission and owner re-edit
///
/// Submitter identity is not part of the form; it is denormalized from the
/// session at submission time. `jam_datang` is captured client-side when
/// the form opens; `jam_pulang` and the submission date are stamped by the
/// server.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ReportForm {
    pub jenis_kegiatan: ActivityKind,
    pub deskripsi_lainnya: Option<String>,
    pub deskripsi_kegiatan: String,
    pub alamat_kegiatan: String,
    /// "lat, lng" captured from the device GPS
    pub lokasi_kegiatan: String,
    /// Downscaled JPEG as a base64 data URL
    pub foto_kegiatan: String,
    /// "HH:MM"
    pub jam_datang: String,
}

/// Full report as shown in list and detail views
///
/// `notes` follows the display rule: withheld once the report is approved,
/// even though the stored field keeps its last value.
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct ReportView {
    pub id: String,
    pub user_id: String,
    pub nama_lengkap: String,
    pub jabatan: String,
    pub rt: String,
    pub rw: String,
    pub jenis_kegiatan: ActivityKind,
    pub deskripsi_lainnya: Option<String>,
    pub deskripsi_kegiatan: String,
    pub alamat_kegiatan: String,
    pub lokasi_kegiatan: String,
    pub foto_kegiatan: String,
    pub jam_datang: String,
    pub jam_pulang: String,
    pub submission_date: String,
    pub status: ReportStatus,
    pub notes: Option<String>,
}

impl From<Report> for ReportView {
    fn from(report: Report) -> Self {
        // Notes accompany rejection feedback; once a report is approved
        // they disappear from display while the stored value survives.
        let notes = match report.status {
            ReportStatus::Disetujui => None,
            _ => report.notes,
        };
        Self {
            id: report.id,
            user_id: report.user_id,
            nama_lengkap: report.nama_lengkap,
            jabatan: report.jabatan,
            rt: report.rt,
            rw: report.rw,
            jenis_kegiatan: report.jenis_kegiatan,
            deskripsi_lainnya: report.deskripsi_lainnya,
            deskripsi_kegiatan: report.deskripsi_kegiatan,
            alamat_kegiatan: report.alamat_kegiatan,
            lokasi_kegiatan: report.lokasi_kegiatan,
            foto_kegiatan: report.foto_kegiatan,
            jam_datang: report.jam_datang,
            jam_pulang: report.jam_pulang,
            submission_date: report.submission_date,
            status: report.status,
            notes,
        }
    }
}

/// Response model for report lists
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct ReportListResponse {
    pub reports: Vec<ReportView>,
}

/// Request model for the admin status decision
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: ReportStatus,
}

/// Request model for admin review notes
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct NotesUpdateRequest {
    pub notes: String,
}
