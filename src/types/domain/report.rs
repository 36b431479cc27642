use poem_openapi::Enum;
use serde::{Deserialize, Serialize};

/// Review status of a submitted performance report
///
/// New submissions start at `Tertunda`. Only an admin moves a report to
/// `Disetujui` or `Ditolak`; an owner edit while the report is `Tertunda`
/// or `Ditolak` resets it to `Tertunda`.
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    #[oai(rename = "Tertunda")]
    #[serde(rename = "Tertunda")]
    Tertunda,

    #[oai(rename = "Disetujui")]
    #[serde(rename = "Disetujui")]
    Disetujui,

    #[oai(rename = "Ditolak")]
    #[serde(rename = "Ditolak")]
    Ditolak,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Tertunda => "Tertunda",
            ReportStatus::Disetujui => "Disetujui",
            ReportStatus::Ditolak => "Ditolak",
        }
    }
}

/// Activity categories a report can cover
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityKind {
    #[oai(rename = "kerja bakti")]
    #[serde(rename = "kerja bakti")]
    KerjaBakti,

    #[oai(rename = "posko kontainer")]
    #[serde(rename = "posko kontainer")]
    PoskoKontainer,

    #[oai(rename = "majelis taklim")]
    #[serde(rename = "majelis taklim")]
    MajelisTaklim,

    #[oai(rename = "bank sampah")]
    #[serde(rename = "bank sampah")]
    BankSampah,

    #[oai(rename = "pantau keamanan")]
    #[serde(rename = "pantau keamanan")]
    PantauKeamanan,

    #[oai(rename = "sigap bencana")]
    #[serde(rename = "sigap bencana")]
    SigapBencana,

    #[oai(rename = "retribusi sampah")]
    #[serde(rename = "retribusi sampah")]
    RetribusiSampah,

    #[oai(rename = "PBB")]
    #[serde(rename = "PBB")]
    Pbb,

    /// Free-text activity; requires `deskripsi_lainnya` on the report
    #[oai(rename = "lainnya")]
    #[serde(rename = "lainnya")]
    Lainnya,
}

/// A performance report submitted by an RT/RW official
///
/// Submitter identity is denormalized at submission time (`nama_lengkap`,
/// `jabatan`, `rt`, `rw`) so the report stays readable after the owning
/// user account is deleted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default)]
    pub id: String,
    pub user_id: String,

    pub nama_lengkap: String,
    pub jabatan: String,
    pub rt: String,
    pub rw: String,

    pub jenis_kegiatan: ActivityKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deskripsi_lainnya: Option<String>,
    pub deskripsi_kegiatan: String,
    pub alamat_kegiatan: String,
    /// "lat, lng" pair captured at form-open time
    pub lokasi_kegiatan: String,
    /// Downscaled JPEG as a base64 data URL
    pub foto_kegiatan: String,

    /// "HH:MM", captured when the form was opened
    pub jam_datang: String,
    /// "HH:MM", stamped by the server at submission
    pub jam_pulang: String,
    /// RFC3339, stamped by the server at submission
    pub submission_date: String,

    pub status: ReportStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Report {
    /// Whether the owning user may still edit this report
    pub fn editable_by_owner(&self) -> bool {
        matches!(self.status, ReportStatus::Tertunda | ReportStatus::Ditolak)
    }
}
