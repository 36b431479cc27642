use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use crate::types::domain::Announcement;

/// Submitted announcement form
#[derive(Object, Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementForm {
    pub title: String,
    pub content: String,
}

/// Announcement as shown to every role
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AnnouncementView {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

impl From<Announcement> for AnnouncementView {
    fn from(ann: Announcement) -> Self {
        Self {
            id: ann.id,
            title: ann.title,
            content: ann.content,
            created_at: ann.created_at,
        }
    }
}

/// Response model for the announcement list
#[derive(Object, Debug, Serialize, Deserialize)]
pub struct AnnouncementListResponse {
    pub announcements: Vec<AnnouncementView>,
}
