use std::sync::Arc;

use chrono::Utc;

use crate::errors::internal::InternalError;
use crate::storage::{Collection, Document, StoreAdapter, Subscription};
use crate::types::domain::Announcement;
use crate::validation::ValidatedAnnouncement;

/// AnnouncementStore manages admin-published announcements
pub struct AnnouncementStore {
    adapter: Arc<dyn StoreAdapter>,
}

impl AnnouncementStore {
    pub fn new(adapter: Arc<dyn StoreAdapter>) -> Self {
        Self { adapter }
    }

    fn decode(doc: Document) -> Result<Announcement, InternalError> {
        let id = doc.id;
        let mut ann: Announcement = serde_json::from_value(doc.value)
            .map_err(|e| InternalError::decode(Collection::Announcements, e))?;
        if ann.id.is_empty() {
            ann.id = id;
        }
        Ok(ann)
    }

    /// All announcements, newest first
    pub async fn list(&self) -> Result<Vec<Announcement>, InternalError> {
        let docs = self.adapter.get_all(Collection::Announcements).await?;
        let mut announcements = docs
            .into_iter()
            .map(Self::decode)
            .collect::<Result<Vec<_>, _>>()?;
        announcements.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(announcements)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Announcement>, InternalError> {
        let doc = self.adapter.get(Collection::Announcements, id).await?;
        doc.map(Self::decode).transpose()
    }

    pub async fn create(
        &self,
        validated: ValidatedAnnouncement,
    ) -> Result<Announcement, InternalError> {
        let ann = Announcement {
            id: String::new(),
            title: validated.title,
            content: validated.content,
            created_at: Utc::now().to_rfc3339(),
        };
        let value = serde_json::to_value(&ann)
            .map_err(|e| InternalError::decode(Collection::Announcements, e))?;
        let doc = self.adapter.create(Collection::Announcements, value).await?;
        Self::decode(doc)
    }

    /// Replace title/content; the original publication date is kept
    pub async fn update(
        &self,
        id: &str,
        validated: ValidatedAnnouncement,
    ) -> Result<Announcement, InternalError> {
        let existing = self
            .get(id)
            .await?
            .ok_or_else(|| InternalError::not_found(Collection::Announcements, id))?;

        let ann = Announcement {
            id: existing.id.clone(),
            title: validated.title,
            content: validated.content,
            created_at: existing.created_at,
        };
        let value = serde_json::to_value(&ann)
            .map_err(|e| InternalError::decode(Collection::Announcements, e))?;
        let doc = self.adapter.put(Collection::Announcements, id, value).await?;
        Self::decode(doc)
    }

    /// Idempotent delete
    pub async fn delete(&self, id: &str) -> Result<(), InternalError> {
        self.adapter.remove(Collection::Announcements, id).await?;
        Ok(())
    }

    pub fn watch(&self) -> Subscription {
        self.adapter.subscribe(Collection::Announcements)
    }
}
