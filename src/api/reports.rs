use std::sync::Arc;

use futures::stream::{BoxStream, StreamExt};
use poem_openapi::{param::Path, payload::EventStream, payload::Json, OpenApi, Tags};

use crate::api::{require_admin, require_session, require_user, SessionAuth};
use crate::errors::{ApiError, InternalError};
use crate::services::{ReportService, TokenService};
use crate::stores::ReportStore;
use crate::types::domain::Role;
use crate::types::dto::common::{ChangeEventDto, MessageResponse};
use crate::types::dto::reports::{
    NotesUpdateRequest, ReportForm, ReportListResponse, ReportView, StatusUpdateRequest,
};
use crate::validation::validate_report;

/// Report API: submission and re-edit for officials, review for the admin
pub struct ReportsApi {
    report_service: Arc<ReportService>,
    report_store: Arc<ReportStore>,
    token_service: Arc<TokenService>,
}

impl ReportsApi {
    pub fn new(
        report_service: Arc<ReportService>,
        report_store: Arc<ReportStore>,
        token_service: Arc<TokenService>,
    ) -> Self {
        Self {
            report_service,
            report_store,
            token_service,
        }
    }
}

#[derive(Tags)]
enum ReportTags {
    /// Performance report endpoints
    Reports,
}

#[OpenApi]
impl ReportsApi {
    /// Submit a performance report
    #[oai(path = "/reports", method = "post", tag = "ReportTags::Reports")]
    async fn submit(
        &self,
        auth: SessionAuth,
        body: Json<ReportForm>,
    ) -> Result<Json<ReportView>, ApiError> {
        let submitter = require_user(&self.token_service, &auth)?;
        let validated = validate_report(&body.0)?;
        let report = self.report_service.submit(&submitter, validated).await?;
        Ok(Json(ReportView::from(report)))
    }

    /// The logged-in official's own reports, most recent first
    #[oai(path = "/reports/mine", method = "get", tag = "ReportTags::Reports")]
    async fn list_mine(&self, auth: SessionAuth) -> Result<Json<ReportListResponse>, ApiError> {
        let submitter = require_user(&self.token_service, &auth)?;
        let reports = self.report_service.list_for_user(&submitter.id).await?;
        Ok(Json(ReportListResponse {
            reports: reports.into_iter().map(ReportView::from).collect(),
        }))
    }

    /// Every report, for the admin review dashboard
    #[oai(path = "/reports", method = "get", tag = "ReportTags::Reports")]
    async fn list_all(&self, auth: SessionAuth) -> Result<Json<ReportListResponse>, ApiError> {
        require_admin(&self.token_service, &auth)?;
        let reports = self.report_service.list_all().await?;
        Ok(Json(ReportListResponse {
            reports: reports.into_iter().map(ReportView::from).collect(),
        }))
    }

    /// Live change feed of the reports collection
    #[oai(path = "/reports/watch", method = "get", tag = "ReportTags::Reports")]
    async fn watch(
        &self,
        auth: SessionAuth,
    ) -> Result<EventStream<BoxStream<'static, ChangeEventDto>>, ApiError> {
        require_session(&self.token_service, &auth)?;
        let subscription = self.report_store.watch();
        let stream = futures::stream::unfold(subscription, |mut sub| async move {
            sub.recv().await.map(|event| (ChangeEventDto::from(event), sub))
        });
        Ok(EventStream::new(stream.boxed()))
    }

    /// One report, for the detail dialog
    ///
    /// Admins see any report; an official only their own. Notes are
    /// withheld once the report is approved.
    #[oai(path = "/reports/:id", method = "get", tag = "ReportTags::Reports")]
    async fn detail(
        &self,
        auth: SessionAuth,
        id: Path<String>,
    ) -> Result<Json<ReportView>, ApiError> {
        let claims = require_session(&self.token_service, &auth)?;
        let report = match self.report_service.detail(&id.0).await {
            Ok(report) => report,
            Err(InternalError::NotFound { .. }) => {
                return Err(ApiError::not_found("Laporan tidak ditemukan."))
            }
            Err(other) => return Err(other.into()),
        };

        if claims.role != Role::Admin {
            let owner = claims.user.as_ref().map(|u| u.id.as_str());
            if owner != Some(report.user_id.as_str()) {
                return Err(ApiError::forbidden());
            }
        }
        Ok(Json(ReportView::from(report)))
    }

    /// Re-submit an own report that is still pending or rejected
    ///
    /// The edit resets the status to `Tertunda` so review starts over.
    #[oai(path = "/reports/:id", method = "put", tag = "ReportTags::Reports")]
    async fn edit(
        &self,
        auth: SessionAuth,
        id: Path<String>,
        body: Json<ReportForm>,
    ) -> Result<Json<ReportView>, ApiError> {
        let submitter = require_user(&self.token_service, &auth)?;
        let validated = validate_report(&body.0)?;
        let report = self
            .report_service
            .edit_own(&submitter.id, &id.0, validated)
            .await?;
        Ok(Json(ReportView::from(report)))
    }

    /// Admin decision on a report
    #[oai(path = "/reports/:id/status", method = "put", tag = "ReportTags::Reports")]
    async fn set_status(
        &self,
        auth: SessionAuth,
        id: Path<String>,
        body: Json<StatusUpdateRequest>,
    ) -> Result<Json<ReportView>, ApiError> {
        require_admin(&self.token_service, &auth)?;
        let report = self.report_service.set_status(&id.0, body.status).await?;
        Ok(Json(ReportView::from(report)))
    }

    /// Admin review notes for a report
    ///
    /// Written independently of the status decision; the two writes are not
    /// atomic with each other.
    #[oai(path = "/reports/:id/notes", method = "put", tag = "ReportTags::Reports")]
    async fn set_notes(
        &self,
        auth: SessionAuth,
        id: Path<String>,
        body: Json<NotesUpdateRequest>,
    ) -> Result<Json<ReportView>, ApiError> {
        require_admin(&self.token_service, &auth)?;
        let report = self
            .report_service
            .set_notes(&id.0, body.notes.clone())
            .await?;
        Ok(Json(ReportView::from(report)))
    }

    /// Delete a report
    #[oai(path = "/reports/:id", method = "delete", tag = "ReportTags::Reports")]
    async fn delete(
        &self,
        auth: SessionAuth,
        id: Path<String>,
    ) -> Result<Json<MessageResponse>, ApiError> {
        require_admin(&self.token_service, &auth)?;
        self.report_service.delete(&id.0).await?;
        Ok(Json(MessageResponse {
            message: "Laporan telah berhasil dihapus.".to_string(),
        }))
    }
}
