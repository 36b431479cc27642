use serde::{Deserialize, Serialize};

/// A community announcement, written by an admin and visible to everyone
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Announcement {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub content: String,
    /// RFC3339, stamped at publication
    pub created_at: String,
}
