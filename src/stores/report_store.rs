use std::sync::Arc;

use crate::errors::internal::InternalError;
use crate::storage::{Collection, Document, StoreAdapter, Subscription};
use crate::types::domain::Report;

/// ReportStore manages submitted performance reports
pub struct ReportStore {
    adapter: Arc<dyn StoreAdapter>,
}

impl ReportStore {
    pub fn new(adapter: Arc<dyn StoreAdapter>) -> Self {
        Self { adapter }
    }

    fn decode(doc: Document) -> Result<Report, InternalError> {
        let id = doc.id;
        let mut report: Report = serde_json::from_value(doc.value)
            .map_err(|e| InternalError::decode(Collection::Reports, e))?;
        if report.id.is_empty() {
            report.id = id;
        }
        Ok(report)
    }

    /// All reports, most recent submission first
    pub async fn list(&self) -> Result<Vec<Report>, InternalError> {
        let docs = self.adapter.get_all(Collection::Reports).await?;
        let mut reports = docs
            .into_iter()
            .map(Self::decode)
            .collect::<Result<Vec<_>, _>>()?;
        reports.sort_by(|a, b| b.submission_date.cmp(&a.submission_date));
        Ok(reports)
    }

    /// Reports submitted by one official, most recent first
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Report>, InternalError> {
        let reports = self.list().await?;
        Ok(reports
            .into_iter()
            .filter(|r| r.user_id == user_id)
            .collect())
    }

    pub async fn get(&self, id: &str) -> Result<Option<Report>, InternalError> {
        let doc = self.adapter.get(Collection::Reports, id).await?;
        doc.map(Self::decode).transpose()
    }

    pub async fn create(&self, report: &Report) -> Result<Report, InternalError> {
        let value = serde_json::to_value(report)
            .map_err(|e| InternalError::decode(Collection::Reports, e))?;
        let doc = self.adapter.create(Collection::Reports, value).await?;
        Self::decode(doc)
    }

    /// Whole-record replace; field-level rules live in the report service
    pub async fn put(&self, report: &Report) -> Result<Report, InternalError> {
        let value = serde_json::to_value(report)
            .map_err(|e| InternalError::decode(Collection::Reports, e))?;
        let doc = self
            .adapter
            .put(Collection::Reports, &report.id, value)
            .await?;
        Self::decode(doc)
    }

    /// Idempotent delete
    pub async fn delete(&self, id: &str) -> Result<(), InternalError> {
        self.adapter.remove(Collection::Reports, id).await?;
        Ok(())
    }

    pub fn watch(&self) -> Subscription {
        self.adapter.subscribe(Collection::Reports)
    }
}
