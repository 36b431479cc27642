use std::sync::Arc;

use chrono::{Local, Utc};

use crate::errors::internal::{InternalError, ReportError};
use crate::storage::Collection;
use crate::stores::ReportStore;
use crate::types::domain::{Report, ReportStatus, SessionUser};
use crate::validation::ValidatedReport;

/// Report workflow: submission, owner re-edit, and admin review
pub struct ReportService {
    report_store: Arc<ReportStore>,
}

impl ReportService {
    pub fn new(report_store: Arc<ReportStore>) -> Self {
        Self { report_store }
    }

    /// Submit a new report for the logged-in official
    ///
    /// The submitter snapshot is denormalized from the session, the
    /// departure time and submission date are stamped here, and the status
    /// starts at `Tertunda`.
    pub async fn submit(
        &self,
        submitter: &SessionUser,
        validated: ValidatedReport,
    ) -> Result<Report, InternalError> {
        let report = Report {
            id: String::new(),
            user_id: submitter.id.clone(),
            nama_lengkap: submitter.full_name.clone(),
            jabatan: submitter.position.as_str().to_string(),
            rt: submitter.rt.clone(),
            rw: submitter.rw.clone(),
            jenis_kegiatan: validated.jenis_kegiatan,
            deskripsi_lainnya: validated.deskripsi_lainnya,
            deskripsi_kegiatan: validated.deskripsi_kegiatan,
            alamat_kegiatan: validated.alamat_kegiatan,
            lokasi_kegiatan: validated.lokasi_kegiatan,
            foto_kegiatan: validated.foto_kegiatan,
            jam_datang: validated.jam_datang,
            jam_pulang: Local::now().format("%H:%M").to_string(),
            submission_date: Utc::now().to_rfc3339(),
            status: ReportStatus::Tertunda,
            notes: None,
        };
        let created = self.report_store.create(&report).await?;
        tracing::info!(report_id = %created.id, user_id = %created.user_id, "report submitted");
        Ok(created)
    }

    /// Re-edit an own report while it is still pending or rejected
    ///
    /// The arrival/departure times and submission date of the original
    /// submission are kept; the status resets to `Tertunda` so the report
    /// goes through review again. Review notes survive the edit.
    pub async fn edit_own(
        &self,
        owner_id: &str,
        report_id: &str,
        validated: ValidatedReport,
    ) -> Result<Report, InternalError> {
        let existing = self.require(report_id).await?;

        if existing.user_id != owner_id {
            return Err(ReportError::NotOwner(report_id.to_string()).into());
        }
        if !existing.editable_by_owner() {
            return Err(ReportError::NotEditable(report_id.to_string()).into());
        }

        let report = Report {
            jenis_kegiatan: validated.jenis_kegiatan,
            deskripsi_lainnya: validated.deskripsi_lainnya,
            deskripsi_kegiatan: validated.deskripsi_kegiatan,
            alamat_kegiatan: validated.alamat_kegiatan,
            lokasi_kegiatan: validated.lokasi_kegiatan,
            foto_kegiatan: validated.foto_kegiatan,
            status: ReportStatus::Tertunda,
            ..existing
        };
        self.report_store.put(&report).await
    }

    pub async fn list_all(&self) -> Result<Vec<Report>, InternalError> {
        self.report_store.list().await
    }

    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Report>, InternalError> {
        self.report_store.list_for_user(user_id).await
    }

    pub async fn detail(&self, report_id: &str) -> Result<Report, InternalError> {
        self.require(report_id).await
    }

    /// Admin decision; a separate write from the review notes
    pub async fn set_status(
        &self,
        report_id: &str,
        status: ReportStatus,
    ) -> Result<Report, InternalError> {
        let mut report = self.require(report_id).await?;
        report.status = status;
        let updated = self.report_store.put(&report).await?;
        tracing::info!(report_id, status = status.as_str(), "report status updated");
        Ok(updated)
    }

    /// Admin review notes; a separate write from the status decision
    pub async fn set_notes(&self, report_id: &str, notes: String) -> Result<Report, InternalError> {
        let mut report = self.require(report_id).await?;
        report.notes = Some(notes);
        self.report_store.put(&report).await
    }

    pub async fn delete(&self, report_id: &str) -> Result<(), InternalError> {
        self.report_store.delete(report_id).await
    }

    async fn require(&self, report_id: &str) -> Result<Report, InternalError> {
        self.report_store
            .get(report_id)
            .await?
            .ok_or_else(|| InternalError::not_found(Collection::Reports, report_id))
    }
}
